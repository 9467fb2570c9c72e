use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Compression applied to archive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    Stored,
    #[default]
    Deflated,
}

// Key point:
// Serializable
// Comparable
// Scratch location is always explicit, never looked up from the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// Where archives are extracted before being read.
    /// Contents may be overwritten or reclaimed at any time.
    pub scratch_dir: PathBuf,
    #[serde(default)]
    pub compression: Compression,
}

impl BundleConfig {
    pub fn new(scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            scratch_dir: scratch_dir.into(),
            compression: Compression::default(),
        }
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }
}
