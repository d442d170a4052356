// crates/utcp-generator/src/config/tests.rs
// ============================================================================
// Module: Generator Configuration Unit Tests
// Description: Defaults, TOML loading, and validation failures.
// Dependencies: utcp-generator, tempfile
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::fs;

use utcp_contract::AuthType;
use utcp_contract::ProviderType;

use super::ConfigError;
use super::GeneratorConfig;
use super::MAX_CONFIG_FILE_SIZE;

#[test]
fn defaults_match_plugin_flags() {
    let config = GeneratorConfig::default();
    assert_eq!(config.base_url, "");
    assert_eq!(config.provider_type, ProviderType::Http);
    assert_eq!(config.auth_type, Some(AuthType::Bearer));
}

#[test]
fn toml_overrides_only_present_keys() {
    let config = GeneratorConfig::from_toml_str("provider_type = \"grpc\"\n").unwrap();
    assert_eq!(config.provider_type, ProviderType::Grpc);
    assert_eq!(config.base_url, "");
    assert_eq!(config.auth_type, Some(AuthType::Bearer));
}

#[test]
fn empty_auth_type_disables_auth() {
    let config = GeneratorConfig::from_toml_str("auth_type = \"\"\n").unwrap();
    assert_eq!(config.auth_type, None);
}

#[test]
fn custom_provider_labels_are_kept() {
    let config = GeneratorConfig::from_toml_str(
        "base_url = \"mcp://tools.internal\"\nprovider_type = \"mcp\"\nauth_type = \"oauth2\"\n",
    )
    .unwrap();
    assert_eq!(config.provider_type, ProviderType::Other(String::from("mcp")));
    assert_eq!(config.auth_type, Some(AuthType::OAuth2));
    assert_eq!(config.base_url, "mcp://tools.internal");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = GeneratorConfig::from_toml_str("base_uri = \"https://x\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn base_url_is_kept_verbatim() {
    let config = GeneratorConfig::from_toml_str("base_url = \"https://api example.com\"\n").unwrap();
    assert_eq!(config.base_url, "https://api example.com");
}

#[test]
fn empty_provider_type_selects_generic_provider() {
    let config = GeneratorConfig::from_toml_str("provider_type = \"\"\n").unwrap();
    assert_eq!(config.provider_type, ProviderType::Other(String::new()));
}

#[test]
fn load_reads_toml_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("utcp.toml");
    fs::write(&path, "base_url = \"https://tools.acme.dev/\"\nprovider_type = \"connectrpc\"\n")
        .unwrap();
    let config = GeneratorConfig::load(&path).unwrap();
    assert_eq!(config.base_url, "https://tools.acme.dev/");
    assert_eq!(config.provider_type, ProviderType::ConnectRpc);
}

#[test]
fn load_rejects_oversized_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("big.toml");
    let padding = "#".repeat(MAX_CONFIG_FILE_SIZE + 1);
    fs::write(&path, padding).unwrap();
    let err = GeneratorConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn load_reports_missing_file() {
    let temp = tempfile::tempdir().unwrap();
    let err = GeneratorConfig::load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
