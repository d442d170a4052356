// crates/utcp-generator/src/schema/tests.rs
// ============================================================================
// Module: Schema Converter Unit Tests
// Description: Field conversion rules, nesting, and cycle handling.
// Dependencies: utcp-generator, serde_json
// ============================================================================

//! ## Overview
//! Covers each conversion branch plus the recursion guard for self-referential
//! and mutually recursive messages.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::json;
use utcp_contract::SchemaType;

use super::field_property;
use super::input_schema;
use super::output_schema;
use crate::descriptor::Cardinality;
use crate::descriptor::DescriptorPool;
use crate::descriptor::EnumDescriptor;
use crate::descriptor::FieldDescriptor;
use crate::descriptor::FieldKind;
use crate::descriptor::MessageDescriptor;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

fn message(full_name: &str, fields: Vec<FieldDescriptor>) -> MessageDescriptor {
    MessageDescriptor {
        full_name: full_name.to_string(),
        fields,
        is_map_entry: false,
    }
}

fn repeated(mut field: FieldDescriptor) -> FieldDescriptor {
    field.cardinality = Cardinality::Repeated;
    field
}

fn documented(mut field: FieldDescriptor, comments: &str) -> FieldDescriptor {
    field.comments = comments.to_string();
    field
}

fn color_pool() -> DescriptorPool {
    let mut pool = DescriptorPool::new();
    pool.insert_enum(EnumDescriptor {
        full_name: String::from("acme.v1.Color"),
        values: vec![
            String::from("COLOR_UNSPECIFIED"),
            String::from("COLOR_RED"),
            String::from("COLOR_BLUE"),
        ],
    });
    pool
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn empty_message_yields_empty_schema() {
    let pool = DescriptorPool::new();
    let empty = message("acme.v1.Empty", Vec::new());

    let inputs = input_schema(&pool, Some(&empty));
    assert_eq!(inputs.schema_type, SchemaType::Object);
    assert!(inputs.properties.is_empty());
    assert!(inputs.required.is_empty());

    let outputs = output_schema(&pool, &empty);
    assert_eq!(outputs.schema_type, SchemaType::Object);
    assert!(outputs.properties.is_empty());
}

#[test]
fn missing_input_message_yields_empty_object() {
    let inputs = input_schema(&DescriptorPool::new(), None);
    assert_eq!(inputs.schema_type, SchemaType::Object);
    assert!(inputs.properties.is_empty());
    assert!(inputs.required.is_empty());
}

#[test]
fn repeated_integer_becomes_array_of_integer() {
    let field = repeated(FieldDescriptor::new("counts", "counts", FieldKind::Int64));
    let property = field_property(&DescriptorPool::new(), &field);
    assert_eq!(
        serde_json::to_value(&property).unwrap(),
        json!({ "type": "array", "items": { "type": "integer" } })
    );
}

#[test]
fn repeated_message_items_stay_shallow() {
    let mut pool = DescriptorPool::new();
    pool.insert_message(message(
        "acme.v1.Point",
        vec![FieldDescriptor::new("x", "x", FieldKind::Double)],
    ));
    let field = repeated(FieldDescriptor::new(
        "points",
        "points",
        FieldKind::Message(String::from(".acme.v1.Point")),
    ));
    let property = field_property(&pool, &field);
    assert_eq!(property.schema_type, SchemaType::Array);
    let items = property.items.expect("array items");
    assert_eq!(items.schema_type, SchemaType::Object);
    assert!(items.properties.is_none());
}

#[test]
fn map_field_is_untyped_object() {
    let mut field = repeated(FieldDescriptor::new(
        "labels",
        "labels",
        FieldKind::Message(String::from("acme.v1.Widget.LabelsEntry")),
    ));
    field.is_map = true;
    let field = documented(field, " Free-form labels.");
    let property = field_property(&DescriptorPool::new(), &field);
    assert_eq!(
        serde_json::to_value(&property).unwrap(),
        json!({ "type": "object", "description": "Free-form labels." })
    );
    assert!(property.items.is_none());
    assert!(property.properties.is_none());
}

#[test]
fn enum_field_lists_members_in_order() {
    let field = FieldDescriptor::new("color", "color", FieldKind::Enum(String::from(".acme.v1.Color")));
    let property = field_property(&color_pool(), &field);
    assert_eq!(
        serde_json::to_value(&property).unwrap(),
        json!({
            "type": "string",
            "enum": ["COLOR_UNSPECIFIED", "COLOR_RED", "COLOR_BLUE"]
        })
    );
}

#[test]
fn unresolved_enum_is_plain_string() {
    let field = FieldDescriptor::new("mood", "mood", FieldKind::Enum(String::from("acme.v1.Mood")));
    let property = field_property(&color_pool(), &field);
    assert_eq!(property.schema_type, SchemaType::String);
    assert!(property.enum_values.is_empty());
}

#[test]
fn nested_message_recurses() {
    let mut pool = color_pool();
    pool.insert_message(message(
        "acme.v1.Style",
        vec![
            FieldDescriptor::new("color", "color", FieldKind::Enum(String::from("acme.v1.Color"))),
            documented(FieldDescriptor::new("font_size", "fontSize", FieldKind::Uint32), "// Points."),
        ],
    ));
    let widget = message(
        "acme.v1.Widget",
        vec![
            FieldDescriptor::new("name", "name", FieldKind::String),
            FieldDescriptor::new("style", "style", FieldKind::Message(String::from(".acme.v1.Style"))),
        ],
    );
    let outputs = output_schema(&pool, &widget);
    assert_eq!(
        serde_json::to_value(&outputs).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "style": {
                    "type": "object",
                    "properties": {
                        "color": {
                            "type": "string",
                            "enum": ["COLOR_UNSPECIFIED", "COLOR_RED", "COLOR_BLUE"]
                        },
                        "fontSize": { "type": "integer", "description": "Points." }
                    }
                }
            }
        })
    );
}

#[test]
fn self_reference_terminates_with_bare_object() {
    let mut pool = DescriptorPool::new();
    let node = message(
        "acme.v1.Node",
        vec![
            FieldDescriptor::new("value", "value", FieldKind::Int32),
            FieldDescriptor::new("next", "next", FieldKind::Message(String::from(".acme.v1.Node"))),
        ],
    );
    pool.insert_message(node.clone());
    let outputs = output_schema(&pool, &node);
    assert_eq!(
        serde_json::to_value(&outputs).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "next": { "type": "object" },
                "value": { "type": "integer" }
            }
        })
    );
}

#[test]
fn mutual_recursion_expands_each_message_once_per_path() {
    let mut pool = DescriptorPool::new();
    pool.insert_message(message(
        "acme.v1.Parent",
        vec![FieldDescriptor::new("child", "child", FieldKind::Message(String::from("acme.v1.Child")))],
    ));
    pool.insert_message(message(
        "acme.v1.Child",
        vec![FieldDescriptor::new("parent", "parent", FieldKind::Message(String::from("acme.v1.Parent")))],
    ));
    let parent = pool.message("acme.v1.Parent").cloned().unwrap();
    let outputs = output_schema(&pool, &parent);
    assert_eq!(
        serde_json::to_value(&outputs).unwrap(),
        json!({
            "type": "object",
            "properties": {
                "child": {
                    "type": "object",
                    "properties": {
                        "parent": { "type": "object" }
                    }
                }
            }
        })
    );
}

#[test]
fn sibling_fields_may_reuse_a_message() {
    let mut pool = DescriptorPool::new();
    pool.insert_message(message(
        "acme.v1.Point",
        vec![FieldDescriptor::new("x", "x", FieldKind::Float)],
    ));
    let line = message(
        "acme.v1.Line",
        vec![
            FieldDescriptor::new("start", "start", FieldKind::Message(String::from("acme.v1.Point"))),
            FieldDescriptor::new("end", "end", FieldKind::Message(String::from("acme.v1.Point"))),
        ],
    );
    let outputs = output_schema(&pool, &line);
    for key in ["start", "end"] {
        let nested = outputs.properties[key].properties.as_ref().expect("expanded");
        assert_eq!(nested["x"].schema_type, SchemaType::Number);
    }
}

#[test]
fn unresolved_message_is_bare_object() {
    let field = FieldDescriptor::new(
        "created_at",
        "createdAt",
        FieldKind::Message(String::from("google.protobuf.Timestamp")),
    );
    let property = field_property(&DescriptorPool::new(), &field);
    assert_eq!(property.schema_type, SchemaType::Object);
    assert!(property.properties.is_none());
}

#[test]
fn required_fields_follow_declaration_order() {
    let mut id = FieldDescriptor::new("id", "id", FieldKind::String);
    id.cardinality = Cardinality::Required;
    let mut owner = FieldDescriptor::new("owner_id", "ownerId", FieldKind::String);
    owner.cardinality = Cardinality::Required;
    let note = FieldDescriptor::new("note", "note", FieldKind::String);
    let request = message("acme.v1.Request", vec![owner, note, id]);

    let inputs = input_schema(&DescriptorPool::new(), Some(&request));
    assert_eq!(inputs.required, vec![String::from("ownerId"), String::from("id")]);
    assert_eq!(inputs.properties.len(), 3);
}

#[test]
fn property_keys_use_json_names() {
    let request = message(
        "acme.v1.Request",
        vec![FieldDescriptor::new("page_token", "pageToken", FieldKind::String)],
    );
    let inputs = input_schema(&DescriptorPool::new(), Some(&request));
    assert!(inputs.properties.contains_key("pageToken"));
    assert!(!inputs.properties.contains_key("page_token"));
}
