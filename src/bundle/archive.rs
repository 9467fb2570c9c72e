use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::bundle::layout::{archive_path_for, is_hidden};
use crate::config::Compression;
use crate::types::{classify_bundle_kind, BundleError, BundleKind};

/// Compress/decompress primitive used to turn a bundle directory into a
/// single file and back.
pub trait ArchiveCodec {
    /// Compress the directory tree at `source_dir` into `archive_path`.
    ///
    /// Entry names must start with the file name of `source_dir` so that
    /// extraction recreates the directory itself. `progress`, when given,
    /// receives fractions in `[0, 1]` on the calling thread.
    fn compress(
        &self,
        source_dir: &Path,
        archive_path: &Path,
        progress: Option<&mut dyn FnMut(f64)>,
    ) -> Result<PathBuf, BundleError>;

    /// Expand `archive_path` into the existing `destination_dir`.
    fn decompress(&self, archive_path: &Path, destination_dir: &Path) -> Result<PathBuf, BundleError>;
}

/// Zip-backed codec. A TextPack is a plain zip file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipCodec {
    compression: Compression,
}

impl ZipCodec {
    pub fn new(compression: Compression) -> Self {
        Self { compression }
    }

    fn method(&self) -> CompressionMethod {
        match self.compression {
            Compression::Stored => CompressionMethod::Stored,
            Compression::Deflated => CompressionMethod::Deflated,
        }
    }
}

impl ArchiveCodec for ZipCodec {
    fn compress(
        &self,
        source_dir: &Path,
        archive_path: &Path,
        mut progress: Option<&mut dyn FnMut(f64)>,
    ) -> Result<PathBuf, BundleError> {
        let root_name = source_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                BundleError::invalid_format(format!(
                    "cannot archive a path without a name: {}",
                    source_dir.display()
                ))
            })?;

        // Sorted so archive contents do not depend on directory iteration order.
        let entries = WalkDir::new(source_dir)
            .sort_by_file_name()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .map_err(io::Error::from)?;

        let file_options = SimpleFileOptions::default()
            .compression_method(self.method())
            .unix_permissions(0o644);
        let dir_options = SimpleFileOptions::default()
            .compression_method(self.method())
            .unix_permissions(0o755);
        let mut writer = ZipWriter::new(File::create(archive_path)?);

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let relative = entry
                .path()
                .strip_prefix(source_dir)
                .map_err(|_| BundleError::invalid_format("archive entry escaped its root"))?;
            let entry_name = entry_name(&root_name, relative);

            if entry.file_type().is_dir() {
                writer.add_directory(format!("{entry_name}/"), dir_options)?;
            } else {
                writer.start_file(entry_name, file_options)?;
                let mut source = File::open(entry.path())?;
                io::copy(&mut source, &mut writer)?;
            }

            if let Some(sink) = progress.as_deref_mut() {
                sink((i + 1) as f64 / total as f64);
            }
        }

        writer.finish()?;
        debug!(archive = %archive_path.display(), entries = total, "compressed bundle");
        Ok(archive_path.to_path_buf())
    }

    fn decompress(&self, archive_path: &Path, destination_dir: &Path) -> Result<PathBuf, BundleError> {
        let mut archive = ZipArchive::new(File::open(archive_path)?)?;
        // extract() rejects entries whose names would leave destination_dir.
        archive.extract(destination_dir)?;
        debug!(
            archive = %archive_path.display(),
            destination = %destination_dir.display(),
            entries = archive.len(),
            "extracted archive"
        );
        Ok(destination_dir.to_path_buf())
    }
}

/// Zip entry names always use `/`, whatever the host separator.
fn entry_name(root_name: &str, relative: &Path) -> String {
    let mut name = root_name.to_string();
    for component in relative.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}

/// Compress the bundle at `bundle_path` into a sibling `<name>.textpack`.
///
/// The input directory is left in place.
pub fn archive<C>(
    codec: &C,
    bundle_path: &Path,
    progress: Option<&mut dyn FnMut(f64)>,
) -> Result<PathBuf, BundleError>
where
    C: ArchiveCodec + ?Sized,
{
    let name = bundle_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            BundleError::invalid_format(format!(
                "cannot derive a name from {}",
                bundle_path.display()
            ))
        })?;
    let parent = bundle_path.parent().unwrap_or_else(|| Path::new(""));
    let archive_path = archive_path_for(parent, name);

    if archive_path.exists() {
        return Err(BundleError::BundleExists(archive_path));
    }

    codec.compress(bundle_path, &archive_path, progress)
}

/// Extract `archive_path` under `scratch_dir` and return the bundle
/// directory found at the top level of the extraction.
///
/// Any previous extraction of the same archive is replaced.
pub fn unarchive<C>(codec: &C, archive_path: &Path, scratch_dir: &Path) -> Result<PathBuf, BundleError>
where
    C: ArchiveCodec + ?Sized,
{
    let canonical = fs::canonicalize(archive_path)?;
    let stem = canonical
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let extraction_dir = scratch_dir.join(format!("{stem}-{}", path_fingerprint(&canonical)));
    if extraction_dir.exists() {
        fs::remove_dir_all(&extraction_dir)?;
    }
    fs::create_dir_all(&extraction_dir)?;

    let extracted = codec.decompress(&canonical, &extraction_dir)?;
    find_bundle_directory(&extracted)?
        .ok_or_else(|| BundleError::ConversionError(archive_path.to_path_buf()))
}

/// First 12 hex chars of the SHA-256 of the path.
fn path_fingerprint(path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let hex = hex::encode(hasher.finalize());
    hex[..12].to_string()
}

fn find_bundle_directory(extracted: &Path) -> Result<Option<PathBuf>, BundleError> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(extracted)? {
        let entry = entry?;
        if entry.file_name().to_str().is_some_and(is_hidden) {
            continue;
        }
        let path = entry.path();
        if path.is_dir() && classify_bundle_kind(&path) == BundleKind::Directory {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates.into_iter().next())
}
