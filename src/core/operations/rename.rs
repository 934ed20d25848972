use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::file_ops::{is_valid_extension, retrieve_files};

/// Outcome of a batch rename
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub failed: usize,
}

/// Build the destination path `{new_name}-{counter}{.ext}` next to `file_path`.
/// The original extension is kept as-is, including its case.
pub fn renamed_path(file_path: &Path, new_name: &str, counter: u64) -> PathBuf {
    let file_name = match file_path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-{}.{}", new_name, counter, ext),
        None => format!("{}-{}", new_name, counter),
    };

    match file_path.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Rename a file to `{new_name}-{counter}{.ext}` in its own directory.
///
/// Returns `false` without touching the filesystem when the extension is not
/// in `extensions` or when the destination already exists. The counter is
/// used as given; a collision is never resolved by picking another one.
pub fn rename_file<S: AsRef<str>>(
    file_path: &Path,
    new_name: &str,
    extensions: &[S],
    counter: u64,
) -> bool {
    if !is_valid_extension(file_path, extensions) {
        return false;
    }

    let new_file_path = renamed_path(file_path, new_name, counter);
    if new_file_path.exists() {
        warn!(
            "Destination {:?} already exists, not renaming {:?}",
            new_file_path, file_path
        );
        return false;
    }

    perform_rename(file_path, &new_file_path)
}

fn perform_rename(source: &Path, destination: &Path) -> bool {
    match fs::rename(source, destination) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to rename {:?} to {:?}: {}", source, destination, e);
            false
        }
    }
}

/// Rename every matching file in `folder_path`.
///
/// Files are visited in sorted order and the k-th one gets counter
/// `start_counter + k`. Failures are logged and counted, never retried.
pub fn rename_files<S: AsRef<str>>(
    folder_path: &Path,
    new_name: &str,
    extensions: &[S],
    start_counter: u64,
) -> RenameSummary {
    let mut summary = RenameSummary::default();

    for (idx, file) in retrieve_files(folder_path, extensions).iter().enumerate() {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if rename_file(file, new_name, extensions, start_counter + idx as u64) {
            info!("{} success to rename!", file_name);
            summary.renamed += 1;
        } else {
            warn!("{} failed to rename!", file_name);
            summary.failed += 1;
        }
    }

    info!(
        "Rename finished. Renamed: {}, Failed: {}",
        summary.renamed, summary.failed
    );
    summary
}
