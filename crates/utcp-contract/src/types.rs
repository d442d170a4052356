// crates/utcp-contract/src/types.rs
// ============================================================================
// Module: UTCP Manifest Types
// Description: Data model for UTCP tool collections and providers.
// Purpose: Provide canonical, serializable shapes for generated manifests.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Plain value trees built bottom-up during a single generation pass. Nothing
//! here is mutated after assembly; all maps are ordered so rendered documents
//! are reproducible byte for byte.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Bearer token placeholder resolved by downstream UTCP clients.
pub const BEARER_TOKEN_PLACEHOLDER: &str = "${auth_token}";

// ============================================================================
// SECTION: Tool Collection
// ============================================================================

/// Ordered collection of tools rendered as one `.utcp.json` document.
///
/// # Invariants
/// - Tools follow service declaration order, then method order within a service.
/// - When produced by the generator, tool names are unique within the collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCollection {
    /// Tools in declaration order.
    pub tools: Vec<Tool>,
}

impl ToolCollection {
    /// Returns true when a tool with the given name is already present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name == name)
    }
}

/// One externally invocable operation, derived from one RPC method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Canonical `snake_case` tool name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Input payload schema.
    pub inputs: InputSchema,
    /// Output payload schema, when the method declares a response message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<OutputSchema>,
    /// Invocation descriptor telling callers how to reach the tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_provider: Option<ToolProvider>,
}

// ============================================================================
// SECTION: Schemas
// ============================================================================

/// JSON Schema type tag used by properties and schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// `true` / `false`.
    Boolean,
    /// Any integer width, signed or unsigned.
    Integer,
    /// Floating point values.
    Number,
    /// Text, including base64 encoded byte sequences.
    String,
    /// Structured objects.
    Object,
    /// Ordered lists.
    Array,
}

impl SchemaType {
    /// Returns the JSON Schema label for the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema for tool input parameters.
///
/// # Invariants
/// - `schema_type` is always [`SchemaType::Object`].
/// - `required` keys appear in `properties`, in field declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Always `object`.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Properties keyed by JSON field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
    /// Field names marked as required.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Default for InputSchema {
    fn default() -> Self {
        Self {
            schema_type: SchemaType::Object,
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }
}

/// Schema for tool output payloads.
///
/// # Invariants
/// - `schema_type` is always [`SchemaType::Object`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSchema {
    /// Always `object`.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Properties keyed by JSON field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
}

impl Default for OutputSchema {
    fn default() -> Self {
        Self {
            schema_type: SchemaType::Object,
            properties: BTreeMap::new(),
        }
    }
}

/// Recursive schema node describing one field.
///
/// # Invariants
/// - `items` is set iff `schema_type` is [`SchemaType::Array`].
/// - `properties` is only set for objects built from a nested message.
/// - Constraint fields (`format` through `default`) are schema-legal but not
///   populated by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Schema type tag.
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    /// Field documentation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Enum member names in declaration order.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Item schema for arrays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Self>>,
    /// Nested properties for message-typed objects.
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub properties: Option<BTreeMap<String, Self>>,
    /// Format hint such as `date-time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Regular expression the value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Minimum string length.
    #[serde(rename = "minLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Maximum string length.
    #[serde(rename = "maxLength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Maximum numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Default value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

impl Property {
    /// Creates a property with only a type and description.
    #[must_use]
    pub const fn new(schema_type: SchemaType, description: String) -> Self {
        Self {
            schema_type,
            description,
            enum_values: Vec::new(),
            items: None,
            properties: None,
            format: None,
            pattern: None,
            min_length: None,
            max_length: None,
            minimum: None,
            maximum: None,
            default: None,
        }
    }

    /// Creates an array property whose items share the array's description.
    #[must_use]
    pub fn array(item_type: SchemaType, description: String) -> Self {
        let items = Self::new(item_type, description.clone());
        Self {
            items: Some(Box::new(items)),
            ..Self::new(SchemaType::Array, description)
        }
    }
}

/// Returns true when an optional map is unset or empty.
#[allow(clippy::ref_option, reason = "serde skip_serializing_if passes &Option<T>.")]
fn is_none_or_empty(map: &Option<BTreeMap<String, Property>>) -> bool {
    map.as_ref().is_none_or(BTreeMap::is_empty)
}

/// JSON-representable default value for a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Integer(i64),
    /// Floating point default.
    Number(f64),
    /// String default.
    String(String),
}

// ============================================================================
// SECTION: Providers
// ============================================================================

/// Transport used to invoke a tool.
///
/// # Invariants
/// - Serialized as its lowercase label; unknown labels round-trip through
///   [`ProviderType::Other`] unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderType {
    /// Twirp-style JSON over HTTP.
    #[default]
    Http,
    /// gRPC.
    Grpc,
    /// Connect RPC.
    ConnectRpc,
    /// Any other provider label, used verbatim.
    Other(String),
}

impl ProviderType {
    /// Returns the provider label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Http => "http",
            Self::Grpc => "grpc",
            Self::ConnectRpc => "connectrpc",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for ProviderType {
    fn from(label: &str) -> Self {
        match label {
            "http" => Self::Http,
            "grpc" => Self::Grpc,
            "connectrpc" => Self::ConnectRpc,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ProviderType {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<ProviderType> for String {
    fn from(provider: ProviderType) -> Self {
        match provider {
            ProviderType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invocation descriptor for a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolProvider {
    /// Provider transport.
    pub provider_type: ProviderType,
    /// Endpoint URL.
    pub url: String,
    /// HTTP verb for HTTP providers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,
    /// Additional request headers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Authentication settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

/// Authentication scheme for a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuthType {
    /// Bearer token.
    Bearer,
    /// API key header.
    ApiKey,
    /// OAuth2 client credentials.
    OAuth2,
    /// Any other scheme label, used verbatim.
    Other(String),
}

impl AuthType {
    /// Returns the auth scheme label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Bearer => "bearer",
            Self::ApiKey => "api_key",
            Self::OAuth2 => "oauth2",
            Self::Other(label) => label,
        }
    }
}

impl From<&str> for AuthType {
    fn from(label: &str) -> Self {
        match label {
            "bearer" => Self::Bearer,
            "api_key" => Self::ApiKey,
            "oauth2" => Self::OAuth2,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AuthType {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<AuthType> for String {
    fn from(auth: AuthType) -> Self {
        match auth {
            AuthType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication block attached to a provider.
///
/// # Invariants
/// - Only the fields relevant to `auth_type` are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Authentication scheme.
    pub auth_type: AuthType,
    /// Bearer token or template placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// API key value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Header name carrying the API key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var_name: Option<String>,
    /// OAuth2 client identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// OAuth2 client secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    /// OAuth2 token endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
}

impl AuthConfig {
    /// Creates an auth block with only the scheme populated.
    #[must_use]
    pub const fn new(auth_type: AuthType) -> Self {
        Self {
            auth_type,
            token: None,
            api_key: None,
            var_name: None,
            client_id: None,
            client_secret: None,
            token_url: None,
        }
    }
}
