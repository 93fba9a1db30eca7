use quotesheet::io::manifest_io::{self, ManifestError};
use quotesheet::state::branding::VendorCatalog;

#[test]
fn test_vendor_manifest_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let vendor_dir = dir.path().join("vendor-logo");
    std::fs::create_dir_all(&vendor_dir).unwrap();
    std::fs::write(
        vendor_dir.join("vendors-manifest.json"),
        r#"{"vendors":[{"id":"abb","name":"ABB","filename":"abb-logo.png"}]}"#,
    )
    .unwrap();

    let catalog = manifest_io::load_vendor_catalog(dir.path());
    assert_eq!(catalog.vendors.len(), 1);
    assert_eq!(catalog.vendors[0].name, "ABB");
}

#[test]
fn test_missing_manifest_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        manifest_io::load_vendor_catalog(dir.path()),
        VendorCatalog::fallback()
    );
}

#[test]
fn test_broken_manifest_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vendors-manifest.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = manifest_io::load_vendor_manifest(&path).unwrap_err();
    assert!(matches!(err, ManifestError::Parse(_)));
}

#[test]
fn test_shipped_manifest_parses() {
    let catalog = manifest_io::load_vendor_manifest(std::path::Path::new(
        "assets/vendor-logo/vendors-manifest.json",
    ))
    .unwrap();
    assert!(catalog.get("other").is_some());
}

#[test]
fn test_scan_company_logos_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let logo_dir = dir.path().join("sta-logo");
    std::fs::create_dir_all(logo_dir.join("nested-logo.png")).unwrap();
    for file in ["zeta-logo.png", "sta-logo.png", "readme.md", "alpha-logo.jpg"] {
        std::fs::write(logo_dir.join(file), b"x").unwrap();
    }

    let names = manifest_io::scan_company_logos(dir.path()).unwrap();
    assert_eq!(names, vec!["sta", "zeta"]);
}

#[test]
fn test_scan_without_logo_dir_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        manifest_io::scan_company_logos(dir.path()),
        Err(ManifestError::Io(_))
    ));
}
