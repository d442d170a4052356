// crates/utcp-generator/src/config.rs
// ============================================================================
// Module: Generator Configuration
// Description: Provider settings shared by every tool in a generation pass.
// Purpose: Load and default the base URL, provider, and auth type.
// Dependencies: utcp-contract, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! [`GeneratorConfig`] is read-only during generation; defaults for an unset
//! base URL are computed per call by the provider synthesizer and never
//! written back. Configuration can be loaded from a TOML file with the keys
//! `base_url`, `provider_type`, and `auth_type`; an empty `auth_type`
//! disables the auth block.
//!
//! Values are not checked for well-formedness. An unrecognized or empty
//! `provider_type` selects the generic URL layout and the base URL is used
//! as given.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use utcp_contract::AuthType;
use utcp_contract::ProviderType;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Provider settings applied to every generated tool.
///
/// # Invariants
/// - Never mutated by generation; see [`crate::provider::effective_base_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base URL for endpoints; empty selects a provider-specific placeholder.
    pub base_url: String,
    /// Provider transport.
    pub provider_type: ProviderType,
    /// Auth scheme; `None` omits the auth block.
    pub auth_type: Option<AuthType>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            provider_type: ProviderType::Http,
            auth_type: Some(AuthType::Bearer),
        }
    }
}

impl GeneratorConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds
    /// [`MAX_CONFIG_FILE_SIZE`], is not UTF-8, or fails to parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses configuration from TOML text; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML or
    /// carries unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let mut config = Self::default();
        if let Some(base_url) = file.base_url {
            config.base_url = base_url;
        }
        if let Some(provider_type) = file.provider_type {
            config.provider_type = ProviderType::from(provider_type);
        }
        if let Some(auth_type) = file.auth_type {
            config.set_auth_type(&auth_type);
        }
        Ok(config)
    }

    /// Sets the auth scheme from its label; an empty label disables auth.
    pub fn set_auth_type(&mut self, label: &str) {
        self.auth_type = if label.is_empty() { None } else { Some(AuthType::from(label)) };
    }
}

/// On-disk configuration layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Base URL override.
    base_url: Option<String>,
    /// Provider type label.
    provider_type: Option<String>,
    /// Auth type label; empty disables auth.
    auth_type: Option<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
