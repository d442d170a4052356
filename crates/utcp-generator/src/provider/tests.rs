// crates/utcp-generator/src/provider/tests.rs
// ============================================================================
// Module: Provider Synthesizer Unit Tests
// Description: URL layout, defaults, headers, and auth per provider type.
// Dependencies: utcp-generator
// ============================================================================

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use utcp_contract::AuthType;
use utcp_contract::ProviderType;

use super::MethodTarget;
use super::auth_config;
use super::effective_base_url;
use super::synthesize_provider;
use crate::config::GeneratorConfig;

const TARGET: MethodTarget<'static> = MethodTarget {
    package: "acme.v1",
    service: "Widgets",
    method: "Create",
};

fn config(base_url: &str, provider_type: &str, auth_type: &str) -> GeneratorConfig {
    let mut config = GeneratorConfig {
        base_url: base_url.to_string(),
        provider_type: ProviderType::from(provider_type),
        auth_type: None,
    };
    config.set_auth_type(auth_type);
    config
}

#[test]
fn http_provider_uses_twirp_layout() {
    let provider = synthesize_provider(&config("https://api.example.com", "http", ""), &TARGET);
    assert_eq!(provider.url, "https://api.example.com/twirp/acme.v1.Widgets/Create");
    assert_eq!(provider.http_method.as_deref(), Some("POST"));
    assert_eq!(provider.headers.get("Content-Type").map(String::as_str), Some("application/json"));
    assert_eq!(provider.headers.len(), 1);
    assert!(provider.auth.is_none());
}

#[test]
fn http_trims_one_trailing_slash() {
    let provider = synthesize_provider(&config("https://tools.acme.dev/", "http", ""), &TARGET);
    assert_eq!(provider.url, "https://tools.acme.dev/twirp/acme.v1.Widgets/Create");
}

#[test]
fn http_empty_base_uses_placeholder() {
    let settings = config("", "http", "");
    let provider = synthesize_provider(&settings, &TARGET);
    assert_eq!(provider.url, "https://api.example.com/twirp/acme.v1.Widgets/Create");
    assert_eq!(settings.base_url, "", "configuration must not be mutated");
}

#[test]
fn grpc_empty_base_uses_grpc_placeholder() {
    let provider = synthesize_provider(&config("", "grpc", ""), &TARGET);
    assert!(provider.url.starts_with("grpc://api.example.com/"));
    assert_eq!(provider.url, "grpc://api.example.com/acme.v1.Widgets/Create");
    assert!(provider.http_method.is_none());
    assert!(provider.headers.is_empty());
}

#[test]
fn connectrpc_shares_grpc_layout() {
    let provider = synthesize_provider(&config("https://rpc.acme.dev/", "connectrpc", ""), &TARGET);
    assert_eq!(provider.provider_type, ProviderType::ConnectRpc);
    assert_eq!(provider.url, "https://rpc.acme.dev/acme.v1.Widgets/Create");
    assert!(provider.http_method.is_none());
}

#[test]
fn custom_provider_uses_base_verbatim() {
    let provider = synthesize_provider(&config("mcp://tools/", "mcp", ""), &TARGET);
    assert_eq!(provider.provider_type, ProviderType::Other(String::from("mcp")));
    assert_eq!(provider.url, "mcp://tools//acme.v1.Widgets/Create");
    assert!(provider.http_method.is_none());
    assert!(provider.headers.is_empty());

    let provider = synthesize_provider(&config("", "mcp", ""), &TARGET);
    assert_eq!(provider.url, "/acme.v1.Widgets/Create");
}

#[test]
fn provider_type_match_is_case_sensitive() {
    let provider = synthesize_provider(&config("", "HTTP", ""), &TARGET);
    assert_eq!(provider.url, "/acme.v1.Widgets/Create");
    assert!(provider.http_method.is_none());
}

#[test]
fn bearer_auth_carries_placeholder_token() {
    let provider = synthesize_provider(&config("", "http", "bearer"), &TARGET);
    let auth = provider.auth.expect("auth block");
    assert_eq!(auth.auth_type, AuthType::Bearer);
    assert_eq!(auth.token.as_deref(), Some("${auth_token}"));
}

#[test]
fn other_auth_types_only_set_the_scheme() {
    for label in ["api_key", "oauth2", "basic"] {
        let auth = auth_config(Some(&AuthType::from(label))).expect("auth block");
        assert_eq!(auth.auth_type.as_str(), label);
        assert!(auth.token.is_none());
        assert!(auth.api_key.is_none());
        assert!(auth.var_name.is_none());
        assert!(auth.client_id.is_none());
        assert!(auth.client_secret.is_none());
        assert!(auth.token_url.is_none());
    }
    assert!(auth_config(None).is_none());
}

#[test]
fn empty_package_keeps_the_separator() {
    let target = MethodTarget {
        package: "",
        service: "Greeter",
        method: "SayHello",
    };
    let provider = synthesize_provider(&config("http://localhost:8080", "http", ""), &target);
    assert_eq!(provider.url, "http://localhost:8080/twirp/.Greeter/SayHello");
    assert_eq!(target.qualified_service(), ".Greeter");
}

#[test]
fn effective_base_prefers_configured_value() {
    assert_eq!(effective_base_url(&config("https://x.dev", "grpc", "")), "https://x.dev");
    assert_eq!(effective_base_url(&config("", "connectrpc", "")), "grpc://api.example.com");
}
