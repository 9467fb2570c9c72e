use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bundle::layout::{
    bundle_path_for, is_hidden, ASSETS_DIR_NAME, INFO_FILE_NAME, TEXT_FILE_NAME,
    TEXT_FILE_PREFIX,
};
use crate::document::{validate_name, Document, DocumentRepresentable, Metadata};
use crate::types::BundleError;

/// Write `document` as `<destination_dir>/<name>.textbundle`.
///
/// The bundle directory must not already exist. Nothing is cleaned up if a
/// later step fails; callers that need atomicity should write to a temporary
/// location and rename.
pub fn write_directory<D>(document: &D, destination_dir: &Path) -> Result<PathBuf, BundleError>
where
    D: DocumentRepresentable + ?Sized,
{
    let name = document.name();
    validate_name(name)?;

    if !destination_dir.is_dir() {
        return Err(BundleError::InvalidDirectory(destination_dir.to_path_buf()));
    }

    let asset_names = planned_asset_names(document.asset_paths())?;

    let bundle_path = bundle_path_for(destination_dir, name);
    fs::create_dir(&bundle_path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => BundleError::BundleExists(bundle_path.clone()),
        _ => BundleError::Io(e),
    })?;
    debug!(path = %bundle_path.display(), "created bundle directory");

    fs::write(bundle_path.join(INFO_FILE_NAME), document.metadata().encode()?)?;
    fs::write(bundle_path.join(TEXT_FILE_NAME), document.text_content().as_bytes())?;

    let assets_dir = bundle_path.join(ASSETS_DIR_NAME);
    fs::create_dir(&assets_dir)?;

    for (source, file_name) in document.asset_paths().iter().zip(&asset_names) {
        let target = assets_dir.join(file_name);
        fs::copy(source, &target)?;
        debug!(source = %source.display(), target = %target.display(), "copied asset");
    }

    Ok(bundle_path)
}

/// Target names inside `assets/`, in input order.
///
/// Hidden names are rejected because `read_directory` skips them; the first
/// duplicate name is fatal.
fn planned_asset_names(sources: &[PathBuf]) -> Result<Vec<OsString>, BundleError> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::with_capacity(sources.len());
    for source in sources {
        let file_name = source.file_name().ok_or_else(|| {
            BundleError::invalid_format(format!(
                "asset path has no file name: {}",
                source.display()
            ))
        })?;

        if file_name.to_str().is_some_and(is_hidden) {
            return Err(BundleError::invalid_format(format!(
                "hidden asset would not be read back: {}",
                source.display()
            )));
        }

        if !seen.insert(file_name.to_os_string()) {
            return Err(BundleError::AssetCollision(
                file_name.to_string_lossy().into_owned(),
            ));
        }
        names.push(file_name.to_os_string());
    }
    Ok(names)
}

/// Read an uncompressed bundle directory.
///
/// `info.json` and the text file are mandatory; `assets/` is optional.
pub fn read_directory(bundle_path: &Path) -> Result<Document, BundleError> {
    if !bundle_path.is_dir() {
        return Err(BundleError::invalid_format(format!(
            "not a bundle directory: {}",
            bundle_path.display()
        )));
    }

    let name = bundle_path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            BundleError::invalid_format(format!(
                "cannot derive a name from {}",
                bundle_path.display()
            ))
        })?
        .to_string();

    let info_bytes = fs::read(bundle_path.join(INFO_FILE_NAME))
        .map_err(|e| BundleError::invalid_format(format!("cannot read {INFO_FILE_NAME}: {e}")))?;
    let metadata = Metadata::decode(&info_bytes)?;

    let text_path = locate_text_file(bundle_path)?;
    let raw_text = fs::read(&text_path).map_err(|e| {
        BundleError::invalid_format(format!("cannot read {}: {e}", text_path.display()))
    })?;
    let text_content = String::from_utf8(raw_text).map_err(|_| {
        BundleError::invalid_format(format!("{} is not valid UTF-8", text_path.display()))
    })?;

    let asset_paths = list_assets(&bundle_path.join(ASSETS_DIR_NAME))?;
    debug!(
        path = %bundle_path.display(),
        assets = asset_paths.len(),
        "read bundle directory"
    );

    Ok(Document {
        name,
        text_content,
        asset_paths,
        metadata,
    })
}

/// `text.markdown` if present, otherwise the first `text.*` file by name.
fn locate_text_file(bundle_path: &Path) -> Result<PathBuf, BundleError> {
    let preferred = bundle_path.join(TEXT_FILE_NAME);
    if preferred.is_file() {
        return Ok(preferred);
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(bundle_path)?
        .filter_map(Result::ok)
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.starts_with(TEXT_FILE_PREFIX))
        })
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    candidates.sort();

    candidates.into_iter().next().ok_or_else(|| {
        BundleError::invalid_format(format!(
            "no text file in {}",
            bundle_path.display()
        ))
    })
}

/// Flat listing of visible files in `assets/`, sorted by file name.
fn list_assets(assets_dir: &Path) -> Result<Vec<PathBuf>, BundleError> {
    if !assets_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(assets_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        if file_name.to_str().is_some_and(is_hidden) {
            continue;
        }
        let path = entry.path();
        if path.is_file() {
            assets.push(path);
        }
    }
    assets.sort();
    Ok(assets)
}
