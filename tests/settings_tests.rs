use std::num::NonZeroUsize;

use quotesheet::settings::{Settings, SettingsError};

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.rows_per_page, 18);
    assert_eq!(settings.default_gst_rate, 18.0);
    assert_eq!(settings.max_upload_bytes, 2 * 1024 * 1024);
    assert_eq!(settings.language, "en");
    assert_eq!(settings.contact_lines.len(), 3);
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        rows_per_page: 12,
        default_gst_rate: 28.0,
        language: "hi".to_string(),
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();

    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_dotted_keys_and_partial_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"table.rowsPerPage": 25, "ui.language": "hi"}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.rows_per_page, 25);
    assert_eq!(settings.language, "hi");
    assert_eq!(settings.default_gst_rate, 18.0);
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[").unwrap();
    assert!(matches!(
        Settings::load_from(&path),
        Err(SettingsError::Parse(_))
    ));
}

#[test]
fn test_zero_rows_per_page_uses_default() {
    let settings = Settings {
        rows_per_page: 0,
        ..Settings::default()
    };
    assert_eq!(settings.page_size(), NonZeroUsize::new(18).unwrap());
}

#[test]
fn test_save_replaces_existing_file_without_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let settings = Settings {
        language: "hi".to_string(),
        ..Settings::default()
    };
    settings.save_to(&path).unwrap();
    Settings {
        rows_per_page: 9,
        ..settings.clone()
    }
    .save_to(&path)
    .unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.rows_per_page, 9);
    assert_eq!(loaded.language, "hi");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
