use quotesheet::state::i18n::{self, Language};
use std::collections::BTreeSet;

#[test]
fn test_default_language_is_english() {
    assert_eq!(Language::default(), Language::En);
    assert_eq!(i18n::tr(Language::default(), "toolbar.undo"), "Undo");
}

#[test]
fn test_language_switch_changes_ui_text() {
    assert_eq!(i18n::tr(Language::En, "gst.title"), "GST Calculation");
    assert_eq!(i18n::tr(Language::Hi, "gst.title"), "जीएसटी गणना");
}

#[test]
fn test_missing_key_falls_back_to_english() {
    assert_eq!(i18n::tr(Language::Hi, "test.fallback_only"), "English only");
    assert_eq!(i18n::tr(Language::Hi, "no.such.key"), "no.such.key");
}

#[test]
fn test_placeholders_are_substituted() {
    assert_eq!(
        i18n::tr_with(
            Language::En,
            "confirm.clear_images",
            &[("count", "3".to_string())]
        ),
        "Remove all 3 images?"
    );
    assert_eq!(
        i18n::tr_with(
            Language::En,
            "preview.selected",
            &[("count", "2".to_string()), ("total", "5".to_string())]
        ),
        "2 of 5 pages selected"
    );
}

#[test]
fn test_language_code_roundtrip() {
    assert_eq!(Language::from_code("en"), Some(Language::En));
    assert_eq!(Language::from_code(" HI "), Some(Language::Hi));
    assert_eq!(Language::from_code("unknown"), None);
    for language in Language::all() {
        assert_eq!(Language::from_code(language.code()), Some(*language));
    }
}

#[test]
fn test_hi_catalog_matches_english_keys_except_fallback_only() {
    let en: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("../assets/i18n/en.json"))
            .expect("en.json should be valid JSON object");
    let hi: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(include_str!("../assets/i18n/hi.json"))
            .expect("hi.json should be valid JSON object");

    let allowed_missing: BTreeSet<&str> = BTreeSet::from(["test.fallback_only"]);

    let en_keys: BTreeSet<&str> = en.keys().map(String::as_str).collect();
    let hi_keys: BTreeSet<&str> = hi.keys().map(String::as_str).collect();

    let missing: Vec<&str> = en_keys
        .difference(&hi_keys)
        .copied()
        .filter(|key| !allowed_missing.contains(key))
        .collect();

    assert!(
        missing.is_empty(),
        "hi catalog is missing keys: {}",
        missing.join(", ")
    );
}
