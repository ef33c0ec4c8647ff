//! Tests for configuration module

use super::*;
use crate::error::{Error, Result};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn create_temp_config_file(content: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn with_env_var<F, T>(key: &str, value: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    std::env::set_var(key, value);
    let result = f();
    std::env::remove_var(key);
    result
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.backend.base_url, "http://localhost:5000/api");
    assert_eq!(config.backend.timeout_ms, 10_000);
    assert_eq!(config.backend.timeout(), Duration::from_secs(10));
    assert_eq!(config.search.default_top_k, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_str_valid() {
    let toml = r#"
        [backend]
        base_url = "http://search.internal:5000/api"
        timeout_ms = 2500

        [search]
        default_top_k = 20
    "#;

    let config = Config::from_toml_str(toml).expect("Failed to parse valid TOML");
    assert_eq!(config.backend.base_url, "http://search.internal:5000/api");
    assert_eq!(config.backend.timeout_ms, 2500);
    assert_eq!(config.search.default_top_k, 20);
}

#[test]
fn test_from_toml_str_minimal() {
    let config = Config::from_toml_str("").expect("Failed to parse empty TOML");
    assert_eq!(config.backend, BackendConfig::default());
    assert_eq!(config.search, SearchConfig::default());

    let config = Config::from_toml_str("[backend]\n").expect("Failed to parse minimal TOML");
    assert_eq!(config.backend.timeout_ms, 10_000);
}

#[test]
fn test_from_toml_str_invalid_syntax() {
    let toml = r#"
        [backend
        base_url = "http://localhost"
    "#;

    let result = Config::from_toml_str(toml);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to parse TOML"));
}

#[test]
fn test_validate_rejects_non_http_base_url() {
    let mut config = Config::default();
    config.backend.base_url = "localhost:5000/api".to_string();

    let result = config.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid backend.base_url"));

    config.backend.base_url = "https://search.example.com/api".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = Config::default();
    config.backend.timeout_ms = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("timeout_ms"));
}

#[test]
fn test_validate_rejects_zero_top_k() {
    let mut config = Config::default();
    config.search.default_top_k = 0;

    let result = config.validate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("default_top_k"));
}

#[test]
fn test_backend_config_builders() {
    let backend = BackendConfig::new("http://127.0.0.1:9000/api").with_timeout_ms(250);
    assert_eq!(backend.base_url, "http://127.0.0.1:9000/api");
    assert_eq!(backend.timeout(), Duration::from_millis(250));
}

#[test]
fn test_save_and_load_roundtrip() -> Result<()> {
    let mut config = Config::default();
    config.backend.base_url = "http://10.0.0.5:5000/api".to_string();
    config.backend.timeout_ms = 3000;

    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("config.toml");
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.backend.base_url, "http://10.0.0.5:5000/api");
    assert_eq!(loaded.backend.timeout_ms, 3000);
    Ok(())
}

#[test]
fn test_save_into_missing_directory_is_io_error() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("absent").join("config.toml");

    let err = Config::default().save(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().starts_with("I/O error:"));
    Ok(())
}

#[test]
fn test_from_file_missing_file_uses_defaults() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.toml");

    let config = Config::from_file(&path).expect("Missing file should fall back to defaults");
    assert_eq!(config.backend.timeout_ms, 10_000);
}

#[test]
fn test_from_file_loads_successfully() {
    let toml = r#"
        [backend]
        base_url = "http://file.example.com/api"
    "#;

    let temp_file = create_temp_config_file(toml).expect("Failed to create temp file");

    let config = Config::from_file(temp_file.path()).expect("Failed to load config from file");
    assert_eq!(config.backend.base_url, "http://file.example.com/api");
    assert_eq!(config.backend.timeout_ms, 10_000);
}

#[test]
fn test_from_file_env_overrides_file() {
    let toml = r#"
        [search]
        default_top_k = 15
    "#;

    let temp_file = create_temp_config_file(toml).expect("Failed to create temp file");

    with_env_var("NOTESEARCH_SEARCH__DEFAULT_TOP_K", "25", || {
        let config =
            Config::from_file(temp_file.path()).expect("Failed to load config from file");
        assert_eq!(config.search.default_top_k, 25);
    });
}
