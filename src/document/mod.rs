pub mod metadata;
pub mod document;
pub mod representable;

pub use metadata::{Metadata, WellKnownType, CURRENT_VERSION};
pub use document::{validate_name, Document};
pub use representable::DocumentRepresentable;
