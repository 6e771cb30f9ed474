//! Tests for client configuration.

use std::io::Write;

use dgramlog::{ClientConfig, CodecPreset, ConfigError, DatagramLogClient, ErrorMode};

#[test]
fn test_config_builder() {
    let config = ClientConfig::new("logs.internal", 5140)
        .error_mode(ErrorMode::Throw)
        .codec(CodecPreset::Json)
        .broadcast(true);

    assert_eq!(config.address, "logs.internal");
    assert_eq!(config.port, 5140);
    assert_eq!(config.destination(), "logs.internal:5140");
    assert_eq!(config.error_mode, ErrorMode::Throw);
    assert_eq!(config.codec, CodecPreset::Json);
    assert!(config.broadcast);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = ClientConfig::from_toml_str("port = 5140\n").unwrap();
    assert_eq!(config.address, "127.0.0.1");
    assert_eq!(config.port, 5140);
    assert_eq!(config.error_mode, ErrorMode::Report);
    assert_eq!(config.codec, CodecPreset::Binary);
}

#[test]
fn test_full_toml() {
    let config = ClientConfig::from_toml_str(
        r#"
address = "10.0.0.5"
port = 514
error_mode = "throw"
codec = "json"
broadcast = false
"#,
    )
    .unwrap();

    assert_eq!(config, ClientConfig::new("10.0.0.5", 514).throw_errors().codec(CodecPreset::Json));
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(ClientConfig::from_toml_str("").unwrap(), ClientConfig::default());
}

#[test]
fn test_invalid_toml_values() {
    let err = ClientConfig::from_toml_str("error_mode = \"loud\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = ClientConfig::from_toml_str("port = 70000").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = ClientConfig::from_toml_str("codec = \"yaml\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "address = \"localhost\"").unwrap();
    writeln!(file, "codec = \"json\"").unwrap();

    let config = ClientConfig::from_toml_file(file.path()).unwrap();
    assert_eq!(config.address, "localhost");
    assert_eq!(config.codec, CodecPreset::Json);

    let client = DatagramLogClient::new(config);
    assert_eq!(client.codec(), CodecPreset::Json);
    assert_eq!(client.destination(), "localhost:9999");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = ClientConfig::from_toml_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_config_serializes_back_to_toml() {
    let config = ClientConfig::new("10.0.0.5", 514).throw_errors();
    let text = toml::to_string(&config).unwrap();
    assert_eq!(ClientConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_client_mutation_after_construction() {
    let mut client = DatagramLogClient::new(ClientConfig::default());
    client.set_address("::1");
    client.set_port(6000);
    client.set_error_mode(ErrorMode::Throw);

    assert_eq!(client.destination(), "[::1]:6000");
    assert_eq!(client.config().error_mode, ErrorMode::Throw);
}
