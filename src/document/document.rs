use std::path::{Path, PathBuf};

use super::metadata::Metadata;
use crate::types::BundleError;

/// In-memory form of a bundle.
///
/// A `Document` carries no identity beyond its content: reading a written
/// bundle back yields a new value that compares equal on name, text and
/// metadata, while `asset_paths` point at the copies inside the bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub text_content: String,
    pub asset_paths: Vec<PathBuf>,
    pub metadata: Metadata,
}

impl Document {
    pub fn new(name: impl Into<String>, text_content: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            text_content: text_content.into(),
            asset_paths: Vec::new(),
            metadata: Metadata::default(),
        }
    }

    pub fn with_assets<I, P>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.asset_paths.extend(assets.into_iter().map(Into::into));
        self
    }

    pub fn with_asset(mut self, asset: impl Into<PathBuf>) -> Self {
        self.asset_paths.push(asset.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// File names of the assets, in order. Paths without a file name are skipped.
    pub fn asset_file_names(&self) -> Vec<String> {
        self.asset_paths
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect()
    }
}

/// Check that `name` can be used as the base name of a bundle on disk.
pub fn validate_name(name: &str) -> Result<(), BundleError> {
    let is_single_component = !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
        && Path::new(name).file_name().is_some();

    if name.is_empty() || !is_single_component {
        return Err(BundleError::InvalidName(name.to_string()));
    }
    Ok(())
}
