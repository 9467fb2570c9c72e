use std::path::Path;

/// Extension of the uncompressed directory form.
pub const BUNDLE_EXTENSION: &str = "textbundle";

/// Extension of the compressed single-file form.
pub const ARCHIVE_EXTENSION: &str = "textpack";

/// How a path should be handled when read as a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKind {
    Directory,
    Archive,
    Unknown,
}

/// Classify a path purely from its (lowercased) extension.
///
/// Never touches the filesystem.
pub fn classify_bundle_kind(path: impl AsRef<Path>) -> BundleKind {
    let ext = match path.as_ref().extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return BundleKind::Unknown,
    };

    match ext.as_str() {
        BUNDLE_EXTENSION => BundleKind::Directory,
        ARCHIVE_EXTENSION => BundleKind::Archive,
        _ => BundleKind::Unknown,
    }
}

impl BundleKind {
    pub fn of(path: impl AsRef<Path>) -> Self {
        classify_bundle_kind(path)
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            BundleKind::Directory => Some(BUNDLE_EXTENSION),
            BundleKind::Archive => Some(ARCHIVE_EXTENSION),
            BundleKind::Unknown => None,
        }
    }
}
