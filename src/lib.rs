//! Read and write TextBundle documents.
//!
//! A TextBundle packages a plain-text document, a small `info.json` metadata
//! record and its binary assets into a `<name>.textbundle` directory. The same
//! tree zipped into a single file is a `<name>.textpack`.
//!
//! ```text
//! Demo.textbundle/
//!   info.json
//!   text.markdown
//!   assets/
//! ```
//!
//! [`bundle::TextBundle`] is the entry point; the directory and archive
//! codecs it routes to are also public for callers that want one step only.

pub mod bundle;
pub mod config;
pub mod document;
pub mod types;

pub use bundle::{ArchiveCodec, TextBundle, ZipCodec};
pub use config::{BundleConfig, Compression};
pub use document::{Document, DocumentRepresentable, Metadata, WellKnownType};
pub use types::{classify_bundle_kind, classify_scheme, BundleError, BundleKind, SchemeClass};
