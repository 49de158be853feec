use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_points_at_config_dir() {
    let path = config_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/ghostpad"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_load_missing_file_returns_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from_path(&dir.path().join("nope.toml"));
    assert_eq!(config.completion.endpoint, None);
}

#[test]
fn test_load_valid_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[completion]\nendpoint = \"http://localhost:9/gen\"\n",
    )
    .unwrap();

    let config = load_config_from_path(&path);
    assert_eq!(
        config.completion.endpoint.as_deref(),
        Some("http://localhost:9/gen")
    );
}

#[test]
fn test_parse_invalid_toml_returns_defaults() {
    let config = parse_config_toml("this is not valid toml { [ }");
    assert_eq!(config.completion.endpoint, None);
    assert_eq!(config.completion.debounce_ms, types::DEFAULT_DEBOUNCE_MS);
}

#[test]
fn test_parse_unknown_sections_ignored() {
    let config = parse_config_toml("[appearance]\ntheme = \"dark\"\n");
    assert_eq!(config.completion.endpoint, None);
}

#[test]
fn test_require_config_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = require_config_from_path(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(crate::error::PadError::Io(_))));
}

#[test]
fn test_require_config_malformed_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not valid toml { [ }").unwrap();

    let result = require_config_from_path(&path);
    assert!(matches!(
        result,
        Err(crate::error::PadError::InvalidConfig(_))
    ));
}
