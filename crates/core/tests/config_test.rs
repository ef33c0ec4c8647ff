use notesearch_core::config::{BackendConfig, Config, SearchConfig};

#[test]
fn test_backend_config_defaults() {
    let config = BackendConfig::default();
    assert_eq!(config.base_url, "http://localhost:5000/api");
    assert_eq!(config.timeout_ms, 10000);
}

#[test]
fn test_search_config_defaults_to_ten_results() {
    assert_eq!(SearchConfig::default().default_top_k, notesearch_core::DEFAULT_TOP_K);
    assert_eq!(notesearch_core::DEFAULT_TOP_K, 10);
}

#[test]
fn test_config_validation_base_url_scheme() {
    let mut config = Config::default();

    // Valid schemes
    config.backend.base_url = "http://localhost:5000/api".to_string();
    assert!(config.validate().is_ok());

    config.backend.base_url = "https://search.example.com/api".to_string();
    assert!(config.validate().is_ok());

    // Relative base paths need a host to be usable outside a browser
    config.backend.base_url = "/api".to_string();
    let result = config.validate();
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Invalid backend.base_url"));
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config::default();
    let serialized = toml::to_string(&config).expect("Failed to serialize");
    let deserialized = Config::from_toml_str(&serialized).expect("Failed to deserialize");

    assert_eq!(config.backend, deserialized.backend);
    assert_eq!(config.search, deserialized.search);
}
