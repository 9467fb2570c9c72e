use std::path::{Path, PathBuf};

use crate::types::{ARCHIVE_EXTENSION, BUNDLE_EXTENSION};

pub const INFO_FILE_NAME: &str = "info.json";
pub const TEXT_FILE_NAME: &str = "text.markdown";
pub const ASSETS_DIR_NAME: &str = "assets";

/// Older writers used other extensions after this prefix (`text.txt`, `text.md`).
pub const TEXT_FILE_PREFIX: &str = "text.";

pub fn bundle_path_for(destination_dir: &Path, name: &str) -> PathBuf {
    destination_dir.join(format!("{name}.{BUNDLE_EXTENSION}"))
}

pub fn archive_path_for(destination_dir: &Path, name: &str) -> PathBuf {
    destination_dir.join(format!("{name}.{ARCHIVE_EXTENSION}"))
}

pub(crate) fn is_hidden(file_name: &str) -> bool {
    file_name.starts_with('.')
}
