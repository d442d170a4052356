// crates/protoc-gen-utcp/src/options.rs
// ============================================================================
// Module: Plugin Options
// Description: Parser for the protoc plugin parameter string.
// Purpose: Turn `--utcp_opt` key/value pairs into generator settings.
// Dependencies: utcp-generator, thiserror
// ============================================================================

//! ## Overview
//! The parameter is a comma-separated list of `key=value` pairs:
//! `base_url`, `provider_type`, `auth_type`, `config`, and `log_events`.
//! A `config` file is loaded first so that explicit keys override it,
//! regardless of their position in the list. Unknown keys fail closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use thiserror::Error;
use utcp_generator::GeneratorConfig;

// ============================================================================
// SECTION: Options
// ============================================================================

/// Settings derived from the plugin parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginOptions {
    /// Generator configuration.
    pub config: GeneratorConfig,
    /// Emit JSON-line generation events on stderr.
    pub log_events: bool,
}

/// Errors raised while parsing the plugin parameter.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// A pair was not of the form `key=value`.
    #[error("malformed plugin option: {0}")]
    Malformed(String),
    /// The key is not recognized.
    #[error("unknown plugin option: {0}")]
    UnknownKey(String),
    /// The value is not acceptable for the key.
    #[error("invalid value for plugin option {key}: {value}")]
    InvalidValue {
        /// Option key.
        key: String,
        /// Rejected value.
        value: String,
    },
    /// The referenced config file could not be loaded.
    #[error("{0}")]
    Config(String),
}

/// Parses the protoc parameter string.
///
/// # Errors
///
/// Returns [`OptionsError`] for malformed pairs, unknown keys, invalid
/// booleans, or a config file that cannot be loaded.
pub fn parse_parameter(parameter: &str) -> Result<PluginOptions, OptionsError> {
    let pairs = split_pairs(parameter)?;

    let mut options = PluginOptions::default();
    if let Some((_, path)) = pairs.iter().rev().find(|(key, _)| *key == "config") {
        options.config = GeneratorConfig::load(Path::new(path))
            .map_err(|err| OptionsError::Config(err.to_string()))?;
    }

    for (key, value) in pairs {
        match key {
            "base_url" => value.clone_into(&mut options.config.base_url),
            "provider_type" => options.config.provider_type = value.into(),
            "auth_type" => options.config.set_auth_type(value),
            "log_events" => options.log_events = parse_bool(key, value)?,
            "config" => {}
            other => return Err(OptionsError::UnknownKey(other.to_string())),
        }
    }
    Ok(options)
}

/// Splits the parameter into trimmed `(key, value)` pairs.
fn split_pairs(parameter: &str) -> Result<Vec<(&str, &str)>, OptionsError> {
    parameter
        .split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.trim(), value.trim()))
                .ok_or_else(|| OptionsError::Malformed(pair.to_string()))
        })
        .collect()
}

/// Parses a boolean option value.
fn parse_bool(key: &str, value: &str) -> Result<bool, OptionsError> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(OptionsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
