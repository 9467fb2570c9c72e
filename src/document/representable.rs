use std::path::PathBuf;

use super::document::Document;
use super::metadata::Metadata;

/// Anything that can be written as a bundle.
///
/// Implement this for your own document type to pass it straight to
/// [`TextBundle::write`](crate::bundle::TextBundle::write) without first
/// converting to [`Document`].
pub trait DocumentRepresentable {
    fn name(&self) -> &str;
    fn text_content(&self) -> &str;
    fn asset_paths(&self) -> &[PathBuf];
    fn metadata(&self) -> &Metadata;

    fn to_document(&self) -> Document {
        Document {
            name: self.name().to_string(),
            text_content: self.text_content().to_string(),
            asset_paths: self.asset_paths().to_vec(),
            metadata: self.metadata().clone(),
        }
    }
}

impl DocumentRepresentable for Document {
    fn name(&self) -> &str {
        &self.name
    }

    fn text_content(&self) -> &str {
        &self.text_content
    }

    fn asset_paths(&self) -> &[PathBuf] {
        &self.asset_paths
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn to_document(&self) -> Document {
        self.clone()
    }
}
