use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::AppConfig;
use crate::core::dataset::SplitRatios;
use crate::core::operations::{write_text_file, FileOpError, FileOpResult};

/// User settings stored as JSON. Every field is optional; anything left out
/// keeps the built-in default from [`AppConfig`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub images_folder: Option<PathBuf>,
    pub labels_folder: Option<PathBuf>,
    pub output_folder: Option<PathBuf>,
    pub split_output_folder: Option<PathBuf>,
    pub image_extensions: Option<Vec<String>>,
    pub label_extensions: Option<Vec<String>>,
    pub split_ratios: Option<SplitRatios>,
    pub box_thickness: Option<i32>,
}

impl Settings {
    /// `settings.json` inside the platform config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "yolo-dataset-utils")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    /// or is corrupted.
    pub fn load_from(config_path: &Path) -> Self {
        info!("Loading settings from: {:?}", config_path);

        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
                Ok(settings) => {
                    info!("Successfully loaded settings");
                    return settings;
                }
                Err(e) => {
                    warn!("Failed to parse settings file: {}. Using defaults.", e);
                }
            },
            Err(e) => {
                // A missing file is the normal first-run case
                if e.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read settings file: {}. Using defaults.", e);
                } else {
                    info!("No settings file found. Using defaults.");
                }
            }
        }

        Self::default()
    }

    /// Load from an explicit path, or from [`Settings::default_path`].
    pub fn load(explicit_path: Option<&Path>) -> Self {
        match explicit_path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("Could not determine config directory. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON
    pub fn save_to(&self, config_path: &Path) -> FileOpResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            warn!("Failed to serialize settings: {}", e);
            FileOpError::WriteFailed(format!("serialize settings: {}", e))
        })?;

        write_text_file(config_path, &json)?;
        info!("Settings saved to: {:?}", config_path);
        Ok(())
    }

    /// Snapshot of a full configuration, with every field filled in
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            images_folder: Some(config.images_folder.clone()),
            labels_folder: Some(config.labels_folder.clone()),
            output_folder: Some(config.output_folder.clone()),
            split_output_folder: Some(config.split_output_folder.clone()),
            image_extensions: Some(config.image_extensions.clone()),
            label_extensions: Some(config.label_extensions.clone()),
            split_ratios: Some(config.split_ratios),
            box_thickness: Some(config.box_thickness),
        }
    }

    /// Overlay the fields that are set onto `AppConfig::default()`.
    pub fn to_config(&self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            images_folder: self.images_folder.clone().unwrap_or(defaults.images_folder),
            labels_folder: self.labels_folder.clone().unwrap_or(defaults.labels_folder),
            output_folder: self.output_folder.clone().unwrap_or(defaults.output_folder),
            split_output_folder: self
                .split_output_folder
                .clone()
                .unwrap_or(defaults.split_output_folder),
            image_extensions: self
                .image_extensions
                .clone()
                .unwrap_or(defaults.image_extensions),
            label_extensions: self
                .label_extensions
                .clone()
                .unwrap_or(defaults.label_extensions),
            split_ratios: self.split_ratios.unwrap_or(defaults.split_ratios),
            box_thickness: self.box_thickness.unwrap_or(defaults.box_thickness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_maps_to_default_config() {
        assert_eq!(Settings::default().to_config(), AppConfig::default());
    }

    #[test]
    fn test_partial_settings_keep_other_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "labels_folder": "data/labels", "box_thickness": 4 }"#)
                .unwrap();
        let config = settings.to_config();

        assert_eq!(config.labels_folder, PathBuf::from("data/labels"));
        assert_eq!(config.box_thickness, 4);
        assert_eq!(config.images_folder, AppConfig::default().images_folder);
        assert_eq!(config.split_ratios, SplitRatios::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("settings.json");
        let mut config = AppConfig::default();
        config.image_extensions = vec!["png".to_string(), "jpg".to_string()];
        config.split_ratios = SplitRatios {
            train: 0.8,
            val: 0.1,
        };

        Settings::from_config(&config).save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);

        assert_eq!(loaded.to_config(), config);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Settings::load(Some(&dir.path().join("absent.json"))),
            Settings::default()
        );
    }
}
