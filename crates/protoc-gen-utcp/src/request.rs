// crates/protoc-gen-utcp/src/request.rs
// ============================================================================
// Module: Request Conversion
// Description: Lowering of protoc file descriptors into the generator model.
// Purpose: Build the descriptor pool and per-file service lists.
// Dependencies: prost-types, utcp-generator
// ============================================================================

//! ## Overview
//! protoc hands the plugin every file in the transitive import closure, in
//! dependency order. All of them feed one [`DescriptorPool`] so that message
//! references resolve across imports; only the files listed in
//! `file_to_generate` are turned into documents.
//!
//! Leading comments are read from `SourceCodeInfo`, which addresses elements
//! by path: `[6, i]` for services, `[6, i, 2, j]` for methods, `[4, i]` for
//! top-level messages, `[.., 3, j]` for nested messages, and `[.., 2, k]`
//! for fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::collections::HashMap;

use prost_types::DescriptorProto;
use prost_types::EnumDescriptorProto;
use prost_types::FieldDescriptorProto;
use prost_types::FileDescriptorProto;
use prost_types::ServiceDescriptorProto;
use prost_types::SourceCodeInfo;
use prost_types::field_descriptor_proto::Label;
use prost_types::field_descriptor_proto::Type;
use utcp_generator::Cardinality;
use utcp_generator::DescriptorPool;
use utcp_generator::EnumDescriptor;
use utcp_generator::FieldDescriptor;
use utcp_generator::FieldKind;
use utcp_generator::FileDescriptor;
use utcp_generator::MessageDescriptor;
use utcp_generator::MethodDescriptor;
use utcp_generator::ServiceDescriptor;

// ============================================================================
// SECTION: Source Paths
// ============================================================================

/// `FileDescriptorProto.message_type` field number.
const FILE_MESSAGE_TYPE: i32 = 4;
/// `FileDescriptorProto.service` field number.
const FILE_SERVICE: i32 = 6;
/// `DescriptorProto.field` field number.
const MESSAGE_FIELD: i32 = 2;
/// `DescriptorProto.nested_type` field number.
const MESSAGE_NESTED_TYPE: i32 = 3;
/// `ServiceDescriptorProto.method` field number.
const SERVICE_METHOD: i32 = 2;

// ============================================================================
// SECTION: Descriptor Set
// ============================================================================

/// Converted view of every file in a code generation request.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSet {
    /// Messages and enums from all files.
    pool: DescriptorPool,
    /// Files keyed by source path.
    files: HashMap<String, FileDescriptor>,
}

impl DescriptorSet {
    /// Converts the request's `proto_file` list.
    #[must_use]
    pub fn from_protos(protos: &[FileDescriptorProto]) -> Self {
        let map_entries = collect_map_entries(protos);
        let mut set = Self::default();
        for proto in protos {
            let file = convert_file(proto, &map_entries, &mut set.pool);
            set.files.insert(file.name.clone(), file);
        }
        set
    }

    /// Returns the shared descriptor pool.
    #[must_use]
    pub const fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// Looks up a converted file by source path.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&FileDescriptor> {
        self.files.get(name)
    }
}

// ============================================================================
// SECTION: Files
// ============================================================================

/// Converts one file, registering its types in `pool`.
fn convert_file(
    proto: &FileDescriptorProto,
    map_entries: &BTreeSet<String>,
    pool: &mut DescriptorPool,
) -> FileDescriptor {
    let comments = CommentIndex::new(proto.source_code_info.as_ref());
    let package = proto.package();
    let mut lowering = Lowering {
        comments: &comments,
        map_entries,
        pool,
    };

    for (index, message) in proto.message_type.iter().enumerate() {
        lowering.register_message(package, message, &[FILE_MESSAGE_TYPE, path_index(index)]);
    }
    for descriptor in &proto.enum_type {
        lowering.register_enum(package, descriptor);
    }

    let services = proto
        .service
        .iter()
        .enumerate()
        .map(|(index, service)| convert_service(&comments, service, path_index(index)))
        .collect();

    FileDescriptor {
        name: proto.name().to_string(),
        package: package.to_string(),
        services,
    }
}

/// Converts a service and its methods.
fn convert_service(
    comments: &CommentIndex,
    service: &ServiceDescriptorProto,
    index: i32,
) -> ServiceDescriptor {
    let methods = service
        .method
        .iter()
        .enumerate()
        .map(|(method_index, method)| MethodDescriptor {
            name: method.name().to_string(),
            comments: comments.leading(&[FILE_SERVICE, index, SERVICE_METHOD, path_index(method_index)]),
            input_type: non_empty(method.input_type()),
            output_type: non_empty(method.output_type()),
        })
        .collect();

    ServiceDescriptor {
        name: service.name().to_string(),
        comments: comments.leading(&[FILE_SERVICE, index]),
        methods,
    }
}

// ============================================================================
// SECTION: Messages
// ============================================================================

/// Per-file state for registering message and enum definitions.
struct Lowering<'a> {
    /// Leading comments of the file being converted.
    comments: &'a CommentIndex,
    /// Fully-qualified names of all map entry messages in the request.
    map_entries: &'a BTreeSet<String>,
    /// Destination pool.
    pool: &'a mut DescriptorPool,
}

impl Lowering<'_> {
    /// Registers `message` and everything nested in it under `scope`.
    fn register_message(&mut self, scope: &str, message: &DescriptorProto, path: &[i32]) {
        let full_name = qualify(scope, message.name());

        for (index, nested) in message.nested_type.iter().enumerate() {
            let mut nested_path = path.to_vec();
            nested_path.extend([MESSAGE_NESTED_TYPE, path_index(index)]);
            self.register_message(&full_name, nested, &nested_path);
        }
        for descriptor in &message.enum_type {
            self.register_enum(&full_name, descriptor);
        }

        let fields = message
            .field
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let mut field_path = path.to_vec();
                field_path.extend([MESSAGE_FIELD, path_index(index)]);
                self.convert_field(field, &field_path)
            })
            .collect();

        self.pool.insert_message(MessageDescriptor {
            full_name,
            fields,
            is_map_entry: is_map_entry(message),
        });
    }

    /// Registers an enum under `scope`.
    fn register_enum(&mut self, scope: &str, descriptor: &EnumDescriptorProto) {
        self.pool.insert_enum(EnumDescriptor {
            full_name: qualify(scope, descriptor.name()),
            values: descriptor.value.iter().map(|value| value.name().to_string()).collect(),
        });
    }

    /// Converts one field.
    fn convert_field(&self, field: &FieldDescriptorProto, path: &[i32]) -> FieldDescriptor {
        let kind = field_kind(field);
        let cardinality = match field.label() {
            Label::Optional => Cardinality::Optional,
            Label::Required => Cardinality::Required,
            Label::Repeated => Cardinality::Repeated,
        };
        let is_map = cardinality == Cardinality::Repeated
            && matches!(&kind, FieldKind::Message(name) if self.map_entries.contains(trim_leading_dot(name)));
        let json_name = if field.json_name.is_some() {
            field.json_name().to_string()
        } else {
            lower_camel(field.name())
        };

        FieldDescriptor {
            name: field.name().to_string(),
            json_name,
            kind,
            cardinality,
            is_map,
            comments: self.comments.leading(path),
        }
    }
}

/// Maps the wire type of a field to a [`FieldKind`].
fn field_kind(field: &FieldDescriptorProto) -> FieldKind {
    let type_name = || trim_leading_dot(field.type_name()).to_string();
    match field.r#type() {
        Type::Bool => FieldKind::Bool,
        Type::Int32 => FieldKind::Int32,
        Type::Sint32 => FieldKind::Sint32,
        Type::Uint32 => FieldKind::Uint32,
        Type::Int64 => FieldKind::Int64,
        Type::Sint64 => FieldKind::Sint64,
        Type::Uint64 => FieldKind::Uint64,
        Type::Sfixed32 => FieldKind::Sfixed32,
        Type::Fixed32 => FieldKind::Fixed32,
        Type::Sfixed64 => FieldKind::Sfixed64,
        Type::Fixed64 => FieldKind::Fixed64,
        Type::Float => FieldKind::Float,
        Type::Double => FieldKind::Double,
        Type::String => FieldKind::String,
        Type::Bytes => FieldKind::Bytes,
        Type::Enum => FieldKind::Enum(type_name()),
        Type::Message => FieldKind::Message(type_name()),
        Type::Group => FieldKind::Unknown,
    }
}

/// Returns true when the message carries the `map_entry` option.
fn is_map_entry(message: &DescriptorProto) -> bool {
    message.options.as_ref().is_some_and(prost_types::MessageOptions::map_entry)
}

/// Collects the fully-qualified names of every map entry message.
fn collect_map_entries(protos: &[FileDescriptorProto]) -> BTreeSet<String> {
    /// Walks one message subtree.
    fn walk(scope: &str, message: &DescriptorProto, out: &mut BTreeSet<String>) {
        let full_name = qualify(scope, message.name());
        for nested in &message.nested_type {
            walk(&full_name, nested, out);
        }
        if is_map_entry(message) {
            out.insert(full_name);
        }
    }

    let mut out = BTreeSet::new();
    for proto in protos {
        for message in &proto.message_type {
            walk(proto.package(), message, &mut out);
        }
    }
    out
}

// ============================================================================
// SECTION: Comments
// ============================================================================

/// Leading comments keyed by source path.
#[derive(Debug, Default)]
struct CommentIndex {
    /// Raw leading comment text per path.
    leading: HashMap<Vec<i32>, String>,
}

impl CommentIndex {
    /// Indexes the locations that carry a leading comment.
    fn new(info: Option<&SourceCodeInfo>) -> Self {
        let leading = info
            .map(|info| {
                info.location
                    .iter()
                    .filter(|location| location.leading_comments.is_some())
                    .map(|location| (location.path.clone(), location.leading_comments().to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Self { leading }
    }

    /// Returns the raw leading comment at `path`, or an empty string.
    fn leading(&self, path: &[i32]) -> String {
        self.leading.get(path).cloned().unwrap_or_default()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Joins a scope and a simple name into a fully-qualified name.
fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() { name.to_string() } else { format!("{scope}.{name}") }
}

/// Strips the protobuf leading-dot marker.
fn trim_leading_dot(name: &str) -> &str {
    name.strip_prefix('.').unwrap_or(name)
}

/// Returns `None` for an empty type reference.
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Converts a source path index, saturating on absurd element counts.
fn path_index(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// Derives the JSON name protoc would assign: underscores are dropped and the
/// following character is uppercased.
fn lower_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut capitalize_next = false;
    for ch in name.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
