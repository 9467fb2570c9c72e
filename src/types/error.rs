use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("Destination is not an existing directory: {0}")]
    InvalidDirectory(PathBuf),
    #[error("Invalid bundle format: {0}")]
    InvalidFormat(String),
    #[error("No bundle directory found in extracted archive: {0}")]
    ConversionError(PathBuf),
    #[error("Invalid document name: {0:?}")]
    InvalidName(String),
    #[error("Output path already exists: {0}")]
    BundleExists(PathBuf),
    #[error("Duplicate asset file name: {0}")]
    AssetCollision(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl BundleError {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        BundleError::InvalidFormat(reason.into())
    }
}
