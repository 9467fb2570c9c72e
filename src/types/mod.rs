pub mod error;
pub mod kind;
pub mod scheme;

pub use error::BundleError;
pub use kind::{classify_bundle_kind, BundleKind, ARCHIVE_EXTENSION, BUNDLE_EXTENSION};
pub use scheme::{classify_scheme, SchemeClass};
