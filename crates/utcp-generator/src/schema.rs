// crates/utcp-generator/src/schema.rs
// ============================================================================
// Module: Schema Converter
// Description: Recursive conversion of message fields into property trees.
// Purpose: Build tool input and output schemas from RPC messages.
// Dependencies: utcp-contract, crate::comments, crate::descriptor, crate::type_map
// ============================================================================

//! ## Overview
//! Conversion rules, applied per field in declaration order:
//! - List fields become `array` with shallow items typed by [`json_type`].
//! - Map fields become an untyped `object`; keys and values are not inspected.
//! - Enum fields are `string` with member names in declaration order.
//! - Message fields are `object` with properties built by recursing into the
//!   nested message.
//!
//! Recursion tracks the messages on the current path. A message that is
//! already being expanded is emitted as a bare `object`, which bounds the
//! traversal of self-referential and mutually recursive message graphs.
//! Unresolvable references degrade to a bare `object` or a plain `string`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use utcp_contract::InputSchema;
use utcp_contract::OutputSchema;
use utcp_contract::Property;
use utcp_contract::SchemaType;

use crate::comments::extract_comment;
use crate::descriptor::Cardinality;
use crate::descriptor::DescriptorPool;
use crate::descriptor::FieldDescriptor;
use crate::descriptor::FieldKind;
use crate::descriptor::MessageDescriptor;
use crate::type_map::json_type;

// ============================================================================
// SECTION: Public Entrypoints
// ============================================================================

/// Builds the input schema for a request message.
///
/// A missing message yields an empty `object` schema rather than no schema.
#[must_use]
pub fn input_schema(pool: &DescriptorPool, message: Option<&MessageDescriptor>) -> InputSchema {
    let Some(message) = message else {
        return InputSchema::default();
    };
    let mut converter = SchemaConverter::new(pool);
    let properties = converter.message_properties(message);
    let mut required: Vec<String> = Vec::new();
    for field in &message.fields {
        if field.cardinality == Cardinality::Required && !required.contains(&field.json_name) {
            required.push(field.json_name.clone());
        }
    }
    InputSchema {
        schema_type: SchemaType::Object,
        properties,
        required,
    }
}

/// Builds the output schema for a response message.
#[must_use]
pub fn output_schema(pool: &DescriptorPool, message: &MessageDescriptor) -> OutputSchema {
    let mut converter = SchemaConverter::new(pool);
    OutputSchema {
        schema_type: SchemaType::Object,
        properties: converter.message_properties(message),
    }
}

/// Converts a single field into a property.
#[must_use]
pub fn field_property(pool: &DescriptorPool, field: &FieldDescriptor) -> Property {
    SchemaConverter::new(pool).field_property(field)
}

// ============================================================================
// SECTION: Converter
// ============================================================================

/// Recursive converter state for one schema.
struct SchemaConverter<'a> {
    /// Definitions used to resolve enum and message references.
    pool: &'a DescriptorPool,
    /// Fully-qualified names of the messages currently being expanded.
    path: Vec<&'a str>,
}

impl<'a> SchemaConverter<'a> {
    /// Creates a converter with an empty recursion path.
    const fn new(pool: &'a DescriptorPool) -> Self {
        Self {
            pool,
            path: Vec::new(),
        }
    }

    /// Converts every field of a message, keyed by JSON name.
    fn message_properties(&mut self, message: &'a MessageDescriptor) -> BTreeMap<String, Property> {
        self.path.push(canonical_name(&message.full_name));
        let mut properties = BTreeMap::new();
        for field in &message.fields {
            let property = self.field_property(field);
            properties.insert(field.json_name.clone(), property);
        }
        self.path.pop();
        properties
    }

    /// Converts one field, recursing into nested messages.
    fn field_property(&mut self, field: &'a FieldDescriptor) -> Property {
        let description = extract_comment(&field.comments);
        if field.is_list() {
            return Property::array(json_type(&field.kind), description);
        }
        if field.is_map {
            return Property::new(SchemaType::Object, description);
        }

        let mut property = Property::new(json_type(&field.kind), description);
        match &field.kind {
            FieldKind::Enum(name) => {
                if let Some(descriptor) = self.pool.enum_type(name) {
                    property.enum_values.clone_from(&descriptor.values);
                }
            }
            FieldKind::Message(name) => {
                property.properties = self.nested_properties(name);
            }
            _ => {}
        }
        property
    }

    /// Expands a nested message unless it is unresolved or already on the path.
    fn nested_properties(&mut self, name: &str) -> Option<BTreeMap<String, Property>> {
        let pool = self.pool;
        let message = pool.message(name)?;
        if self.path.contains(&canonical_name(&message.full_name)) {
            return None;
        }
        Some(self.message_properties(message))
    }
}

/// Normalizes a fully-qualified name for path comparisons.
fn canonical_name(name: &str) -> &str {
    name.trim_start_matches('.')
}

#[cfg(test)]
mod tests;
