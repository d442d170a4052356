// crates/utcp-generator/src/provider.rs
// ============================================================================
// Module: Provider Synthesizer
// Description: Builds invocation descriptors for generated tools.
// Purpose: Derive endpoint URL, HTTP method, headers, and auth per method.
// Dependencies: utcp-contract, crate::config
// ============================================================================

//! ## Overview
//! URL layout by provider type:
//! - `http`: `{base}/twirp/{package}.{Service}/{Method}` (Twirp), `POST`, JSON
//!   content type header.
//! - `grpc`, `connectrpc`: `{base}/{package}.{Service}/{Method}`.
//! - anything else: `{base}/{package}.{Service}/{Method}` with the base URL
//!   used verbatim.
//!
//! For the known provider types a single trailing `/` is trimmed from the base
//! URL and an empty base URL is replaced by a placeholder. The substitution is
//! computed per call and never written back into the configuration.
//! This is string assembly only; URLs are not validated or contacted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use utcp_contract::AuthConfig;
use utcp_contract::AuthType;
use utcp_contract::ProviderType;
use utcp_contract::ToolProvider;
use utcp_contract::types::BEARER_TOKEN_PLACEHOLDER;

use crate::config::GeneratorConfig;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Placeholder base URL for HTTP providers.
pub const DEFAULT_HTTP_BASE_URL: &str = "https://api.example.com";
/// Placeholder base URL for gRPC and Connect providers.
pub const DEFAULT_GRPC_BASE_URL: &str = "grpc://api.example.com";
/// HTTP verb used for Twirp-style calls.
const HTTP_METHOD_POST: &str = "POST";

// ============================================================================
// SECTION: Method Target
// ============================================================================

/// Fully-qualified identity of the RPC method being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodTarget<'a> {
    /// Package name; may be empty.
    pub package: &'a str,
    /// Service name.
    pub service: &'a str,
    /// Method name.
    pub method: &'a str,
}

impl MethodTarget<'_> {
    /// Returns `{package}.{Service}`; an empty package leaves a leading dot.
    #[must_use]
    pub fn qualified_service(&self) -> String {
        format!("{}.{}", self.package, self.service)
    }
}

// ============================================================================
// SECTION: Synthesis
// ============================================================================

/// Builds the invocation descriptor for one method.
#[must_use]
pub fn synthesize_provider(config: &GeneratorConfig, target: &MethodTarget<'_>) -> ToolProvider {
    let url = provider_url(config, target);
    let (http_method, headers) = match config.provider_type {
        ProviderType::Http => {
            let mut headers = BTreeMap::new();
            headers.insert(String::from("Content-Type"), String::from("application/json"));
            (Some(HTTP_METHOD_POST.to_string()), headers)
        }
        ProviderType::Grpc | ProviderType::ConnectRpc | ProviderType::Other(_) => {
            (None, BTreeMap::new())
        }
    };
    ToolProvider {
        provider_type: config.provider_type.clone(),
        url,
        http_method,
        headers,
        auth: auth_config(config.auth_type.as_ref()),
    }
}

/// Returns the endpoint URL for a method.
#[must_use]
pub fn provider_url(config: &GeneratorConfig, target: &MethodTarget<'_>) -> String {
    let base = effective_base_url(config);
    let service = target.qualified_service();
    match config.provider_type {
        ProviderType::Http => {
            format!("{}/twirp/{service}/{}", trim_trailing_slash(base), target.method)
        }
        ProviderType::Grpc | ProviderType::ConnectRpc => {
            format!("{}/{service}/{}", trim_trailing_slash(base), target.method)
        }
        ProviderType::Other(_) => format!("{base}/{service}/{}", target.method),
    }
}

/// Returns the base URL in effect for the configured provider type.
///
/// Known provider types substitute a placeholder for an empty base URL;
/// custom provider types use the configured value verbatim.
#[must_use]
pub fn effective_base_url(config: &GeneratorConfig) -> &str {
    if !config.base_url.is_empty() {
        return &config.base_url;
    }
    match config.provider_type {
        ProviderType::Http => DEFAULT_HTTP_BASE_URL,
        ProviderType::Grpc | ProviderType::ConnectRpc => DEFAULT_GRPC_BASE_URL,
        ProviderType::Other(_) => &config.base_url,
    }
}

/// Builds the auth block; bearer auth carries the token placeholder.
#[must_use]
pub fn auth_config(auth_type: Option<&AuthType>) -> Option<AuthConfig> {
    let auth_type = auth_type?;
    let token = match auth_type {
        AuthType::Bearer => Some(BEARER_TOKEN_PLACEHOLDER.to_string()),
        AuthType::ApiKey | AuthType::OAuth2 | AuthType::Other(_) => None,
    };
    Some(AuthConfig {
        token,
        ..AuthConfig::new(auth_type.clone())
    })
}

/// Removes at most one trailing slash.
fn trim_trailing_slash(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}

#[cfg(test)]
mod tests;
