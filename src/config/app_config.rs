use std::path::PathBuf;

use crate::core::dataset::SplitRatios;
use crate::core::image::BOX_THICKNESS;

/// Tool configuration containing all default values
///
/// Paths are relative to the working directory unless overridden by a
/// settings file or command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub images_folder: PathBuf,
    pub labels_folder: PathBuf,
    pub output_folder: PathBuf,
    pub split_output_folder: PathBuf,
    pub image_extensions: Vec<String>,
    pub label_extensions: Vec<String>,
    pub split_ratios: SplitRatios,
    pub box_thickness: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            images_folder: PathBuf::from("datasets/train/images"),
            labels_folder: PathBuf::from("datasets/train/labels"),
            output_folder: PathBuf::from("datasets/train/output"),
            split_output_folder: PathBuf::from("datasets/split"),
            image_extensions: vec!["jpg".to_string()],
            label_extensions: vec!["txt".to_string()],
            split_ratios: SplitRatios::default(),
            box_thickness: BOX_THICKNESS,
        }
    }
}

/// Split a comma-separated extension list such as `"jpg, .PNG"`.
/// Empty entries are dropped; case and leading dots are kept since matching
/// ignores both.
pub fn parse_extension_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}
