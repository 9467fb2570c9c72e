pub mod archive;
pub mod directory;
pub mod layout;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::BundleConfig;
use crate::document::{validate_name, Document, DocumentRepresentable};
use crate::types::{classify_bundle_kind, BundleError, BundleKind};
pub use archive::{archive, unarchive, ArchiveCodec, ZipCodec};
pub use directory::{read_directory, write_directory};
pub use layout::{archive_path_for, bundle_path_for};

/// Entry point for writing and reading bundles.
///
/// Stateless between calls; the same value can be reused for any number of
/// documents. Concurrent calls targeting the same destination must be
/// serialized by the caller.
pub struct TextBundle<A = ZipCodec> {
	config: BundleConfig,
	codec: A,
}

impl TextBundle<ZipCodec> {
	pub fn new(config: BundleConfig) -> Self {
		let codec = ZipCodec::new(config.compression);
		Self { config, codec }
	}
}

impl<A> TextBundle<A>
where
	A: ArchiveCodec,
{
	pub fn with_codec(config: BundleConfig, codec: A) -> Self {
		Self { config, codec }
	}

	pub fn config(&self) -> &BundleConfig {
		&self.config
	}

	/// Write `document` into `destination_dir`.
	///
	/// Returns the `.textbundle` directory, or the `.textpack` file when
	/// `compressed` is set, in which case the intermediate directory is
	/// removed once the archive exists.
	pub fn write<D>(
		&self,
		document: &D,
		destination_dir: &Path,
		compressed: bool,
		progress: Option<&mut dyn FnMut(f64)>,
	) -> Result<PathBuf, BundleError>
	where
		D: DocumentRepresentable + ?Sized,
	{
		let name = document.name();
		validate_name(name)?;

		// An existing archive must fail before any directory is created.
		if compressed && destination_dir.is_dir() {
			let archive_path = archive_path_for(destination_dir, name);
			if archive_path.exists() {
				return Err(BundleError::BundleExists(archive_path));
			}
		}

		let bundle_path = write_directory(document, destination_dir)?;
		if !compressed {
			info!(path = %bundle_path.display(), assets = document.asset_paths().len(), "wrote bundle");
			return Ok(bundle_path);
		}

		let archive_path = archive(&self.codec, &bundle_path, progress)?;
		fs::remove_dir_all(&bundle_path)?;
		info!(path = %archive_path.display(), assets = document.asset_paths().len(), "wrote archive");

		Ok(archive_path)
	}

	/// Read a `.textbundle` directory or `.textpack` archive.
	///
	/// Paths with any other extension are rejected before the filesystem is
	/// touched. Archives are extracted under the configured scratch directory
	/// and the returned asset paths point into that extraction.
	pub fn read(&self, path: impl AsRef<Path>) -> Result<Document, BundleError> {
		let path = path.as_ref();

		let document = match classify_bundle_kind(path) {
			BundleKind::Directory => read_directory(path)?,
			BundleKind::Archive => {
				let extracted = unarchive(&self.codec, path, self.config.scratch_dir())?;
				read_directory(&extracted)?
			}
			BundleKind::Unknown => {
				return Err(BundleError::invalid_format(format!(
					"unrecognized bundle extension: {}",
					path.display()
				)));
			}
		};

		info!(path = %path.display(), name = %document.name, assets = document.asset_paths.len(), "read bundle");
		Ok(document)
	}

	/// Write `document` as a `.textpack` archive.
	pub fn pack<D>(&self, document: &D, destination_dir: &Path) -> Result<PathBuf, BundleError>
	where
		D: DocumentRepresentable + ?Sized,
	{
		self.write(document, destination_dir, true, None)
	}

	/// Read a bundle or archive. Same as [`TextBundle::read`].
	pub fn unpack(&self, path: impl AsRef<Path>) -> Result<Document, BundleError> {
		self.read(path)
	}
}
