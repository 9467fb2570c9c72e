use std::path::PathBuf;

use textbundle::document::{validate_name, Document, DocumentRepresentable, Metadata, WellKnownType};
use textbundle::BundleError;

#[test]
fn invariant_default_metadata_is_version_two_markdown() {
    let meta = Metadata::default();
    assert_eq!(meta.version, 2);
    assert_eq!(meta.bundle_type, "net.daringfireball.markdown");
    assert!(!meta.transient);
    assert_eq!(meta.creator_identifier, None);
    assert_eq!(meta.creator_url, None);
    assert_eq!(meta.source_url, None);
    assert_eq!(meta.well_known_type(), Some(WellKnownType::Markdown));
}

#[test]
fn invariant_unknown_keys_are_ignored() {
    let json = br#"{
        "version": 2,
        "type": "net.daringfireball.markdown",
        "transient": true,
        "creatorIdentifier": "com.example.editor",
        "com.example.editor": { "cursor": 12 },
        "futureField": [1, 2, 3]
    }"#;

    let meta = Metadata::decode(json).expect("extra keys must not fail decoding");
    assert!(meta.transient);
    assert_eq!(meta.creator_identifier.as_deref(), Some("com.example.editor"));
}

#[test]
fn invariant_missing_fields_take_defaults() {
    let meta = Metadata::decode(b"{}").unwrap();
    assert_eq!(meta, Metadata::default());

    let meta = Metadata::decode(br#"{"version": 2, "type": "public.html", "transient": null}"#).unwrap();
    assert_eq!(meta.well_known_type(), Some(WellKnownType::Html));
    assert!(!meta.transient);
}

#[test]
fn invariant_free_text_type_survives() {
    // Version 3 style record with an unfamiliar type identifier
    let meta = Metadata::decode(br#"{"version": 3, "type": "com.example.notes"}"#).unwrap();
    assert_eq!(meta.version, 3);
    assert_eq!(meta.bundle_type, "com.example.notes");
    assert_eq!(meta.well_known_type(), None);
}

#[test]
fn invariant_malformed_metadata_is_invalid_format() {
    let result = Metadata::decode(b"{ not json");
    assert!(matches!(result, Err(BundleError::InvalidFormat(_))));

    let result = Metadata::decode(br#""just a string""#);
    assert!(matches!(result, Err(BundleError::InvalidFormat(_))));

    let result = Metadata::decode(br#"{"version": "two"}"#);
    assert!(matches!(result, Err(BundleError::InvalidFormat(_))));
}

#[test]
fn invariant_metadata_equality_is_fieldwise() {
    let a = Metadata::new(WellKnownType::PlainText.as_str())
        .with_transient(true)
        .with_source_url("https://example.com/post");
    let b = Metadata::decode(&a.encode().unwrap()).unwrap();
    assert_eq!(a, b);

    let c = b.clone().with_transient(false);
    assert_ne!(a, c);
}

#[test]
fn well_known_type_lookup() {
    for t in [
        WellKnownType::Markdown,
        WellKnownType::Html,
        WellKnownType::PlainText,
        WellKnownType::Package,
    ] {
        assert_eq!(WellKnownType::from_identifier(t.as_str()), Some(t));
    }
    assert_eq!(WellKnownType::from_identifier("markdown"), None);
}

#[test]
fn invariant_name_must_be_a_single_component() {
    assert!(validate_name("Demo").is_ok());
    assert!(validate_name("My Notes (draft)").is_ok());

    for bad in ["", ".", "..", "a/b", "a\\b", "/abs"] {
        assert!(
            matches!(validate_name(bad), Err(BundleError::InvalidName(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn document_builder_collects_assets_in_order() {
    let doc = Document::new("Demo", "# Hi")
        .with_assets(["/tmp/b.png", "/tmp/a.png"])
        .with_asset(PathBuf::from("/tmp/c.png"));

    assert_eq!(doc.asset_file_names(), vec!["b.png", "a.png", "c.png"]);
    assert_eq!(doc.metadata, Metadata::default());
}

struct Note {
    title: String,
    body: String,
    attachments: Vec<PathBuf>,
    meta: Metadata,
}

impl DocumentRepresentable for Note {
    fn name(&self) -> &str {
        &self.title
    }

    fn text_content(&self) -> &str {
        &self.body
    }

    fn asset_paths(&self) -> &[PathBuf] {
        &self.attachments
    }

    fn metadata(&self) -> &Metadata {
        &self.meta
    }
}

#[test]
fn representable_converts_to_document() {
    let note = Note {
        title: "dingus".to_string(),
        body: "# Dingus".to_string(),
        attachments: vec![PathBuf::from("/tmp/dingus.png")],
        meta: Metadata::new("dingus").with_transient(true),
    };

    let doc = note.to_document();
    assert_eq!(doc.name, "dingus");
    assert_eq!(doc.text_content, "# Dingus");
    assert_eq!(doc.asset_paths, vec![PathBuf::from("/tmp/dingus.png")]);
    assert!(doc.metadata.transient);
    assert_eq!(doc.to_document(), doc);
}
