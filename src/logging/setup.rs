use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;

const DEFAULT_FILTER: &str = "info";

/// Name of the log file for a run started now
pub fn log_file_name() -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("yolo_dataset_utils_{}.log", timestamp)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber: a short bracketed console layer, plus a
/// detailed file layer when `log_dir` is given.
///
/// Returns the path of the log file, or `None` when logging to the console
/// only (including when the log file could not be created).
pub fn setup_logging(log_dir: Option<&Path>) -> Option<PathBuf> {
    let stdout_layer = fmt::layer()
        .event_format(BracketedFormatter::default().with_location(false))
        .with_writer(std::io::stdout);

    let mut file_error = None;
    let file_target = log_dir.and_then(|dir| match open_log_file(dir) {
        Ok(target) => Some(target),
        Err(e) => {
            file_error = Some(e);
            None
        }
    });

    let log_path = file_target.as_ref().map(|(path, _)| path.clone());
    let file_layer = file_target.map(|(_, file)| {
        fmt::layer()
            .event_format(BracketedFormatter::default())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!("Failed to create log file, logging to console only: {}", e);
    }
    if let Some(path) = &log_path {
        info!("Log file created at: {:?}", path);
    }

    log_path
}

fn open_log_file(log_dir: &Path) -> std::io::Result<(PathBuf, fs::File)> {
    fs::create_dir_all(log_dir)?;
    let log_path = log_dir.join(log_file_name());

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    Ok((log_path, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name_shape() {
        let name = log_file_name();
        assert!(name.starts_with("yolo_dataset_utils_"));
        assert!(name.ends_with(".log"));
        // yolo_dataset_utils_ + YYYYmmdd_HHMMSS + .log
        assert_eq!(name.len(), "yolo_dataset_utils_".len() + 15 + ".log".len());
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        let (path, _file) = open_log_file(&logs).unwrap();

        assert!(path.starts_with(&logs));
        assert!(path.exists());
    }
}
