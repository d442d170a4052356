// crates/protoc-gen-utcp/src/lib.rs
// ============================================================================
// Module: protoc-gen-utcp Library
// Description: protoc plugin front end for the UTCP generator.
// Purpose: Decode requests, convert descriptors, and frame responses.
// Dependencies: prost, prost-types, utcp-generator, thiserror
// ============================================================================

//! ## Overview
//! protoc runs the plugin with a serialized `CodeGeneratorRequest` on stdin
//! and expects a `CodeGeneratorResponse` on stdout. This crate owns that
//! exchange; schema translation lives in [`utcp_generator`].
//!
//! - [`options`]: plugin parameter parsing.
//! - [`request`]: descriptor lowering into the generator model.
//! - [`events`]: optional JSON-line diagnostics.
//! - [`plugin`]: the request driver and binary framing.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod events;
pub mod options;
pub mod plugin;
pub mod request;

// ============================================================================
// SECTION: Errors
// ============================================================================

use thiserror::Error;

/// Errors raised outside the request itself.
///
/// Problems with the request content are reported in the response `error`
/// field instead.
#[derive(Debug, Error)]
pub enum PluginError {
    /// stdin or stdout failed.
    #[error("plugin io error: {0}")]
    Io(String),
    /// The input is not a valid code generation request.
    #[error("failed to decode code generation request: {0}")]
    Decode(String),
    /// The input exceeds the size limit.
    #[error("code generation request exceeds {0} bytes")]
    InputTooLarge(u64),
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use options::OptionsError;
pub use options::PluginOptions;
pub use plugin::read_request;
pub use plugin::run;
pub use plugin::write_response;
