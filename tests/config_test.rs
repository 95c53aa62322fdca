//! Integration tests for Settings loading and file overrides

use std::fs;

use tempfile::TempDir;

use confsplit::config::Settings;

#[test]
fn given_no_config_file_then_defaults_apply() {
    let settings = Settings::default();
    assert_eq!(settings.dialect.comment_marker, '!');
    assert_eq!(settings.dialect.terminator, "end");
    assert_eq!(settings.naming.max_name_len, 63);
    assert!(settings.naming.owner_prefix.is_empty());
    assert!(settings.naming.endpoint.is_empty());
}

#[test]
fn given_config_file_when_loading_then_specified_fields_override() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("confsplit.toml");
    fs::write(
        &path,
        r##"
[dialect]
comment_marker = "#"

[naming]
owner_prefix = "lab-fleet"
max_name_len = 40
"##,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(&path).unwrap();

    // Assert: overridden fields change, the rest keep their defaults
    assert_eq!(settings.dialect.comment_marker, '#');
    assert_eq!(settings.dialect.terminator, "end");
    assert_eq!(settings.naming.owner_prefix, "lab-fleet");
    assert_eq!(settings.naming.max_name_len, 40);
    assert!(settings.naming.endpoint.is_empty());
}

#[test]
fn given_partial_config_file_when_loading_then_other_sections_untouched() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("confsplit.toml");
    fs::write(&path, "[naming]\nendpoint = \"sw1.example.net\"\n").unwrap();

    let settings = Settings::load_from(&path).unwrap();

    assert_eq!(settings.naming.endpoint, "sw1.example.net");
    assert_eq!(settings.dialect.comment_marker, '!');
}

#[test]
fn given_malformed_config_file_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("confsplit.toml");
    fs::write(&path, "not valid toml [ at all").unwrap();

    let result = Settings::load_from(&path);

    assert!(result.is_err());
}

#[test]
fn given_missing_config_file_when_loading_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does-not-exist.toml");

    let result = Settings::load_from(&path);

    assert!(result.is_err());
}
