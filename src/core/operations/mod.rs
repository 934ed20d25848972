mod file_ops;
mod rename;

pub use file_ops::{
    ensure_dir, get_files, is_valid_extension, retrieve_files, write_text_file, FileOpError,
    FileOpResult,
};
pub use rename::{rename_file, rename_files, renamed_path, RenameSummary};
