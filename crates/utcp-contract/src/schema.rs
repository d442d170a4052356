// crates/utcp-contract/src/schema.rs
// ============================================================================
// Module: UTCP Document Schema
// Description: JSON Schema for generated `.utcp.json` documents.
// Purpose: Describe the emitted manifest shape for validation tooling.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The schema mirrors [`crate::types`] exactly, including the omission rules:
//! optional members are absent rather than `null`, and no unknown members are
//! allowed at any level.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Public Schema Entrypoints
// ============================================================================

/// Returns the JSON schema for a `ToolCollection` document.
#[must_use]
pub fn tool_collection_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "utcp://protoc-gen-utcp/schemas/tool-collection.schema.json",
        "title": "UTCP ToolCollection",
        "description": "Tool manifest generated from RPC service definitions.",
        "type": "object",
        "required": ["tools"],
        "properties": {
            "tools": {
                "type": "array",
                "items": { "$ref": "#/$defs/Tool" }
            }
        },
        "additionalProperties": false,
        "$defs": collection_defs()
    })
}

// ============================================================================
// SECTION: Definitions
// ============================================================================

/// Builds the shared schema definitions.
fn collection_defs() -> Map<String, Value> {
    let mut defs = Map::new();
    defs.insert(String::from("Tool"), tool_schema());
    defs.insert(String::from("InputSchema"), object_schema(true));
    defs.insert(String::from("OutputSchema"), object_schema(false));
    defs.insert(String::from("Property"), property_schema());
    defs.insert(String::from("ToolProvider"), provider_schema());
    defs.insert(String::from("AuthConfig"), auth_schema());
    defs
}

/// Schema for a single tool.
fn tool_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name", "description", "inputs"],
        "properties": {
            "name": { "type": "string", "pattern": "^[a-z0-9_]*$" },
            "description": { "type": "string" },
            "inputs": { "$ref": "#/$defs/InputSchema" },
            "outputs": { "$ref": "#/$defs/OutputSchema" },
            "tool_provider": { "$ref": "#/$defs/ToolProvider" }
        },
        "additionalProperties": false
    })
}

/// Schema for input and output schemas; only inputs carry `required`.
fn object_schema(with_required: bool) -> Value {
    let mut properties = Map::new();
    properties.insert(String::from("type"), json!({ "const": "object" }));
    properties.insert(
        String::from("properties"),
        json!({
            "type": "object",
            "additionalProperties": { "$ref": "#/$defs/Property" }
        }),
    );
    if with_required {
        properties.insert(
            String::from("required"),
            json!({
                "type": "array",
                "items": { "type": "string" },
                "uniqueItems": true
            }),
        );
    }
    json!({
        "type": "object",
        "required": ["type"],
        "properties": properties,
        "additionalProperties": false
    })
}

/// Recursive property schema.
fn property_schema() -> Value {
    json!({
        "type": "object",
        "required": ["type"],
        "properties": {
            "type": {
                "enum": ["boolean", "integer", "number", "string", "object", "array"]
            },
            "description": { "type": "string" },
            "enum": { "type": "array", "items": { "type": "string" } },
            "items": { "$ref": "#/$defs/Property" },
            "properties": {
                "type": "object",
                "additionalProperties": { "$ref": "#/$defs/Property" }
            },
            "format": { "type": "string" },
            "pattern": { "type": "string" },
            "minLength": { "type": "integer", "minimum": 0 },
            "maxLength": { "type": "integer", "minimum": 0 },
            "minimum": { "type": "number" },
            "maximum": { "type": "number" },
            "default": { "type": ["boolean", "integer", "number", "string"] }
        },
        "additionalProperties": false
    })
}

/// Schema for the invocation provider block.
fn provider_schema() -> Value {
    json!({
        "type": "object",
        "required": ["provider_type", "url"],
        "properties": {
            "provider_type": { "type": "string" },
            "url": { "type": "string" },
            "http_method": { "type": "string" },
            "headers": {
                "type": "object",
                "additionalProperties": { "type": "string" }
            },
            "auth": { "$ref": "#/$defs/AuthConfig" }
        },
        "additionalProperties": false
    })
}

/// Schema for provider authentication.
fn auth_schema() -> Value {
    json!({
        "type": "object",
        "required": ["auth_type"],
        "properties": {
            "auth_type": { "type": "string" },
            "token": { "type": "string" },
            "api_key": { "type": "string" },
            "var_name": { "type": "string" },
            "client_id": { "type": "string" },
            "client_secret": { "type": "string" },
            "token_url": { "type": "string" }
        },
        "additionalProperties": false
    })
}
