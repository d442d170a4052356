// crates/utcp-generator/src/descriptor.rs
// ============================================================================
// Module: Descriptor Model
// Description: In-memory RPC descriptor graph consumed by the generator.
// Purpose: Decouple translation from any particular descriptor supplier.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The descriptor graph is supplied wholesale by a collaborator (the protoc
//! plugin, or a JSON document). Messages and enums live in a
//! [`DescriptorPool`] keyed by fully-qualified name and are referenced by
//! name from fields and methods, so self-referential and mutually recursive
//! message graphs are representable without shared ownership.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Pool
// ============================================================================

/// Registry of message and enum definitions visible to a generation pass.
///
/// # Invariants
/// - Keys are fully-qualified names without a leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorPool {
    /// Messages keyed by fully-qualified name.
    #[serde(default)]
    messages: BTreeMap<String, MessageDescriptor>,
    /// Enums keyed by fully-qualified name.
    #[serde(default)]
    enums: BTreeMap<String, EnumDescriptor>,
}

impl DescriptorPool {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a message, replacing any previous definition with the same name.
    pub fn insert_message(&mut self, message: MessageDescriptor) {
        let key = trim_leading_dot(&message.full_name).to_string();
        self.messages.insert(key, message);
    }

    /// Registers an enum, replacing any previous definition with the same name.
    pub fn insert_enum(&mut self, descriptor: EnumDescriptor) {
        let key = trim_leading_dot(&descriptor.full_name).to_string();
        self.enums.insert(key, descriptor);
    }

    /// Looks up a message by name; a leading dot is accepted.
    #[must_use]
    pub fn message(&self, name: &str) -> Option<&MessageDescriptor> {
        self.messages.get(trim_leading_dot(name))
    }

    /// Looks up an enum by name; a leading dot is accepted.
    #[must_use]
    pub fn enum_type(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.get(trim_leading_dot(name))
    }

    /// Returns the number of registered messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// Strips the protobuf leading-dot marker from a type reference.
fn trim_leading_dot(name: &str) -> &str {
    name.strip_prefix('.').unwrap_or(name)
}

// ============================================================================
// SECTION: Files and Services
// ============================================================================

/// One input file and the services it declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    /// Source path, e.g. `acme/v1/widgets.proto`.
    pub name: String,
    /// Package name, e.g. `acme.v1`.
    #[serde(default)]
    pub package: String,
    /// Services in declaration order.
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
}

/// RPC service definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service name as declared.
    pub name: String,
    /// Leading documentation text.
    #[serde(default)]
    pub comments: String,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

/// RPC method definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name as declared.
    pub name: String,
    /// Leading documentation text.
    #[serde(default)]
    pub comments: String,
    /// Request message reference.
    #[serde(default)]
    pub input_type: Option<String>,
    /// Response message reference.
    #[serde(default)]
    pub output_type: Option<String>,
}

// ============================================================================
// SECTION: Messages and Fields
// ============================================================================

/// Message definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    /// Fully-qualified name, e.g. `acme.v1.Widget`.
    pub full_name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// True for synthesized map entry messages.
    #[serde(default)]
    pub is_map_entry: bool,
}

/// Enum definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// Fully-qualified name.
    pub full_name: String,
    /// Member names in declaration order.
    #[serde(default)]
    pub values: Vec<String>,
}

/// Field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared.
    pub name: String,
    /// JSON-style name used as the property key.
    pub json_name: String,
    /// Scalar or composite kind.
    pub kind: FieldKind,
    /// Field cardinality.
    #[serde(default)]
    pub cardinality: Cardinality,
    /// True when the field is a map.
    #[serde(default)]
    pub is_map: bool,
    /// Leading documentation text.
    #[serde(default)]
    pub comments: String,
}

impl FieldDescriptor {
    /// Creates a singular field with no documentation.
    #[must_use]
    pub fn new(name: impl Into<String>, json_name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            json_name: json_name.into(),
            kind,
            cardinality: Cardinality::Optional,
            is_map: false,
            comments: String::new(),
        }
    }

    /// Returns true for list-valued fields (repeated and not a map).
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.cardinality == Cardinality::Repeated && !self.is_map
    }
}

/// Field kind tag; composite kinds carry the referenced type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type_name", rename_all = "snake_case")]
pub enum FieldKind {
    /// `bool`.
    Bool,
    /// `int32`.
    Int32,
    /// `sint32`.
    Sint32,
    /// `uint32`.
    Uint32,
    /// `int64`.
    Int64,
    /// `sint64`.
    Sint64,
    /// `uint64`.
    Uint64,
    /// `sfixed32`.
    Sfixed32,
    /// `fixed32`.
    Fixed32,
    /// `sfixed64`.
    Sfixed64,
    /// `fixed64`.
    Fixed64,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// `string`.
    String,
    /// `bytes`.
    Bytes,
    /// Enumeration referencing an [`EnumDescriptor`] by name.
    Enum(String),
    /// Message referencing a [`MessageDescriptor`] by name.
    Message(String),
    /// Groups and any kind the supplier could not classify.
    Unknown,
}

/// Field cardinality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Singular field, possibly with explicit presence.
    #[default]
    Optional,
    /// Explicitly required field.
    Required,
    /// Repeated field (lists and maps).
    Repeated,
}
