// crates/utcp-contract/src/lib.rs
// ============================================================================
// Module: UTCP Contract Library
// Description: Canonical UTCP manifest shapes emitted by the generator.
// Purpose: Provide the single typed model for `.utcp.json` documents.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! `utcp-contract` defines the tool manifest model of the Universal Tool
//! Calling Protocol as emitted by `protoc-gen-utcp`: tool collections, input
//! and output schemas, recursive properties, and invocation providers.
//! Serialization omits every optional field that is empty or unset, so the
//! rendered documents never carry `null` placeholders.
//!
//! [`schema::tool_collection_schema`] describes the emitted document as a
//! JSON Schema and is used to validate generator output in tests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod schema;
pub mod types;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use schema::tool_collection_schema;
pub use types::AuthConfig;
pub use types::AuthType;
pub use types::DefaultValue;
pub use types::InputSchema;
pub use types::OutputSchema;
pub use types::Property;
pub use types::ProviderType;
pub use types::SchemaType;
pub use types::Tool;
pub use types::ToolCollection;
pub use types::ToolProvider;
