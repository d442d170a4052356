// crates/utcp-generator/src/type_map.rs
// ============================================================================
// Module: Type Mapper
// Description: Field kind to JSON Schema type lookup.
// Dependencies: utcp-contract
// ============================================================================

//! ## Overview
//! Pure, fail-open lookup. Byte fields map to `string` by convention: the
//! value is carried as base64 text and no transform happens here.

use utcp_contract::SchemaType;

use crate::descriptor::FieldKind;

/// Returns the JSON Schema type for a field kind.
#[must_use]
pub const fn json_type(kind: &FieldKind) -> SchemaType {
    match kind {
        FieldKind::Bool => SchemaType::Boolean,
        FieldKind::Int32
        | FieldKind::Sint32
        | FieldKind::Uint32
        | FieldKind::Int64
        | FieldKind::Sint64
        | FieldKind::Uint64
        | FieldKind::Sfixed32
        | FieldKind::Fixed32
        | FieldKind::Sfixed64
        | FieldKind::Fixed64 => SchemaType::Integer,
        FieldKind::Float | FieldKind::Double => SchemaType::Number,
        FieldKind::Message(_) => SchemaType::Object,
        FieldKind::String | FieldKind::Bytes | FieldKind::Enum(_) | FieldKind::Unknown => {
            SchemaType::String
        }
    }
}
