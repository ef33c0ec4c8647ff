//! Integration tests for CLI configuration loading

use anyhow::Result;
use notesearch::load_config;
use std::io::Write;

fn write_config(content: &str) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

#[test]
fn test_load_config_reads_file() -> Result<()> {
    let file = write_config(
        r#"
        [backend]
        base_url = "http://search.internal:5000/api"
        timeout_ms = 4000
    "#,
    )?;

    let config = load_config(Some(file.path()), None)?;
    assert_eq!(config.backend.base_url, "http://search.internal:5000/api");
    assert_eq!(config.backend.timeout_ms, 4000);
    assert_eq!(config.search.default_top_k, 10);
    Ok(())
}

#[test]
fn test_load_config_base_url_override_wins() -> Result<()> {
    let file = write_config("[backend]\nbase_url = \"http://file.example.com/api\"\n")?;

    let config = load_config(Some(file.path()), Some("http://127.0.0.1:8080/api"))?;
    assert_eq!(config.backend.base_url, "http://127.0.0.1:8080/api");
    Ok(())
}

#[test]
fn test_load_config_rejects_invalid_override() -> Result<()> {
    let file = write_config("")?;

    let err = load_config(Some(file.path()), Some("/api")).unwrap_err();
    assert!(err.to_string().contains("Invalid backend.base_url"));
    Ok(())
}

#[test]
fn test_load_config_rejects_zero_top_k() -> Result<()> {
    let file = write_config("[search]\ndefault_top_k = 0\n")?;

    assert!(load_config(Some(file.path()), None).is_err());
    Ok(())
}
