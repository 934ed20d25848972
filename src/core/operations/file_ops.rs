use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Result type for file operations
pub type FileOpResult<T> = Result<T, FileOpError>;

/// Error types for file operations
#[derive(Debug)]
pub enum FileOpError {
    CreateDirFailed(String),
    WriteFailed(String),
    ImageError(image::ImageError),
    IoError(std::io::Error),
}

impl std::fmt::Display for FileOpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOpError::CreateDirFailed(msg) => write!(f, "Create directory failed: {}", msg),
            FileOpError::WriteFailed(msg) => write!(f, "Write failed: {}", msg),
            FileOpError::ImageError(e) => write!(f, "Image error: {}", e),
            FileOpError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FileOpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileOpError::ImageError(e) => Some(e),
            FileOpError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FileOpError {
    fn from(error: std::io::Error) -> Self {
        FileOpError::IoError(error)
    }
}

impl From<image::ImageError> for FileOpError {
    fn from(error: image::ImageError) -> Self {
        FileOpError::ImageError(error)
    }
}

/// List the regular files directly inside a folder.
///
/// # Returns
/// * `Some(Vec<PathBuf>)` sorted by path, possibly empty
/// * `None` if `folder_path` is not a directory or cannot be read
pub fn get_files(folder_path: &Path) -> Option<Vec<PathBuf>> {
    if !folder_path.is_dir() {
        warn!("Not a directory: {:?}", folder_path);
        return None;
    }

    let entries = match fs::read_dir(folder_path) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to read directory {:?}: {}", folder_path, e);
            return None;
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    debug!("Found {} files in {:?}", files.len(), folder_path);
    Some(files)
}

/// Check whether the file's extension (the suffix after the last `.`) is in
/// `extensions`. Comparison ignores ASCII case on both sides, and entries may
/// be given with or without a leading dot.
pub fn is_valid_extension<S: AsRef<str>>(file_path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = file_path.extension().and_then(|e| e.to_str()) else {
        return false;
    };

    extensions
        .iter()
        .any(|allowed| allowed.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
}

/// List the files in a folder whose extension is in `extensions`.
///
/// A missing or unreadable folder yields an empty list.
pub fn retrieve_files<S: AsRef<str>>(folder_path: &Path, extensions: &[S]) -> Vec<PathBuf> {
    let Some(files) = get_files(folder_path) else {
        return Vec::new();
    };

    let matched: Vec<PathBuf> = files
        .into_iter()
        .filter(|file| is_valid_extension(file, extensions))
        .collect();

    info!("Retrieved {} matching files from {:?}", matched.len(), folder_path);
    matched
}

/// Create a directory and all of its parents if it does not exist yet.
pub fn ensure_dir(path: &Path) -> FileOpResult<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| {
        error!("Failed to create directory {:?}: {}", path, e);
        FileOpError::CreateDirFailed(format!("{:?}: {}", path, e))
    })?;
    debug!("Created directory {:?}", path);
    Ok(())
}

/// Write `contents` to `path`, creating parent directories first.
pub fn write_text_file(path: &Path, contents: &str) -> FileOpResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    if let Err(e) = fs::write(path, contents) {
        error!("Failed to write {:?}: {}", path, e);
        return Err(FileOpError::WriteFailed(format!("{:?}: {}", path, e)));
    }

    Ok(())
}
