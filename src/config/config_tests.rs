use super::*;
use crate::shortcuts::{DuplicatePolicy, Platform, Variant};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.platform, None);
    assert_eq!(config.variant, Variant::Desktop);
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
    assert_eq!(config.log_file, None);
    assert_eq!(config.platform(), Platform::current());
}

#[test]
fn test_platform_descriptor_override() {
    let config = Config {
        platform: Some("darwin".to_string()),
        ..Default::default()
    };
    assert_eq!(config.platform(), Platform::MacOS);
}

#[test]
fn test_camel_case_fields() {
    let json = r#"{
        "platform": "win32",
        "variant": "web",
        "duplicatePolicy": "lastWriteWins",
        "logFilter": "debug"
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.platform(), Platform::Windows);
    assert_eq!(config.variant, Variant::Web);
    assert_eq!(config.duplicate_policy, DuplicatePolicy::LastWriteWins);
    assert_eq!(config.log_filter.as_deref(), Some("debug"));
}

#[test]
fn test_empty_object_uses_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.variant, Variant::Desktop);
    assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = tempdir().unwrap();
    let config = load_config(&dir.path().join("nope.json"));
    assert_eq!(config.platform, None);
}

#[test]
fn test_load_valid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortcuts.json");
    fs::write(&path, r#"{"platform": "MacIntel", "variant": "web"}"#).unwrap();

    let config = load_config(&path);
    assert_eq!(config.platform(), Platform::MacOS);
    assert_eq!(config.variant, Variant::Web);
}

#[test]
fn test_invalid_json_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortcuts.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(read_config(&path).is_err());
    let config = load_config(&path);
    assert_eq!(config.variant, Variant::Desktop);
}

#[test]
fn test_unknown_variant_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shortcuts.json");
    fs::write(&path, r#"{"variant": "mobile"}"#).unwrap();

    let err = read_config(&path).unwrap_err();
    assert!(err.to_string().starts_with("configuration error: cannot parse"));
}

#[test]
fn test_default_path_ends_with_config_file() {
    let path = default_config_path();
    assert!(path.ends_with(".purr-data/shortcuts.json"));
}
