use std::path::Path;

use textbundle::{classify_bundle_kind, classify_scheme, BundleKind, SchemeClass};

#[test]
fn bundle_kind_from_extension() {
    assert_eq!(classify_bundle_kind("Demo.textbundle"), BundleKind::Directory);
    assert_eq!(classify_bundle_kind("/tmp/out/Demo.textpack"), BundleKind::Archive);
    assert_eq!(classify_bundle_kind("Demo.TextBundle"), BundleKind::Directory);
    assert_eq!(classify_bundle_kind("Demo.TEXTPACK"), BundleKind::Archive);
    assert_eq!(classify_bundle_kind("dir/Demo.textbundle/"), BundleKind::Directory);

    assert_eq!(classify_bundle_kind("file.xyz"), BundleKind::Unknown);
    assert_eq!(classify_bundle_kind("Demo"), BundleKind::Unknown);
    assert_eq!(classify_bundle_kind("Demo.textbundle.zip"), BundleKind::Unknown);
    assert_eq!(classify_bundle_kind(""), BundleKind::Unknown);
}

#[test]
fn bundle_kind_extension_round_trip() {
    assert_eq!(BundleKind::Directory.extension(), Some("textbundle"));
    assert_eq!(BundleKind::Archive.extension(), Some("textpack"));
    assert_eq!(BundleKind::Unknown.extension(), None);
    assert_eq!(BundleKind::of(Path::new("x.textpack")), BundleKind::Archive);
}

#[test]
fn scheme_tokens() {
    assert_eq!(classify_scheme(""), SchemeClass::None);
    for token in ["http", "https", "ftp", "sftp"] {
        assert_eq!(classify_scheme(token), SchemeClass::Network, "{token}");
    }
    assert_eq!(classify_scheme("file"), SchemeClass::Filesystem);
    assert_eq!(classify_scheme("mailto"), SchemeClass::Unknown);
    assert_eq!(classify_scheme("data"), SchemeClass::Unknown);
}

#[test]
fn scheme_tokens_are_case_sensitive() {
    for token in ["HTTP", "HTTPS", "Ftp", "SFTP"] {
        assert_eq!(classify_scheme(token), SchemeClass::Unknown, "{token}");
    }
    assert_eq!(classify_scheme("FILE"), SchemeClass::Unknown);
    assert_eq!(SchemeClass::of_location("HTTPS://example.com"), SchemeClass::Unknown);
}

#[test]
fn scheme_of_location() {
    assert_eq!(SchemeClass::of_location("https://example.com"), SchemeClass::Network);
    assert_eq!(SchemeClass::of_location("file:///tmp/white_rabbit.jpg"), SchemeClass::Filesystem);
    assert_eq!(SchemeClass::of_location("git+ssh://host/repo"), SchemeClass::Unknown);

    // No scheme at all
    assert_eq!(SchemeClass::of_location("/var/thing/whatever"), SchemeClass::Unknown);
    assert_eq!(SchemeClass::of_location("assets/white_rabbit.jpg"), SchemeClass::Unknown);

    assert!(SchemeClass::of_location("ftp://mirror").is_network());
    assert!(SchemeClass::of_location("file:/x").is_filesystem());
}

#[test]
fn invariant_classification_is_pure() {
    for path in ["a.textbundle", "a.textpack", "a.xyz", ""] {
        assert_eq!(classify_bundle_kind(path), classify_bundle_kind(path));
    }
    for token in ["", "http", "file", "other"] {
        assert_eq!(classify_scheme(token), classify_scheme(token));
    }

    // Classifying a bundle path never creates or inspects it
    let missing = Path::new("/definitely/not/here/Demo.textbundle");
    assert_eq!(classify_bundle_kind(missing), BundleKind::Directory);
    assert!(!missing.exists());
}
