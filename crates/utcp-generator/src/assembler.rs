// crates/utcp-generator/src/assembler.rs
// ============================================================================
// Module: Document Assembler
// Description: Builds and renders the tool collection for one input file.
// Purpose: Compose naming, comments, schemas, and providers per RPC method.
// Dependencies: utcp-contract, serde_json, crate modules
// ============================================================================

//! ## Overview
//! One tool per RPC method, in service then method declaration order. Files
//! without services produce no document. Rendering uses two-space indented
//! JSON with a trailing newline; serialization failure is the only error.
//!
//! Tool names must be unique within a document. When two services declare
//! the same method name, later tools are renamed `{service}_{method}`; if
//! that name is also taken, `_2`, `_3`, and so on are appended.

// ============================================================================
// SECTION: Imports
// ============================================================================

use utcp_contract::Tool;
use utcp_contract::ToolCollection;

use crate::GeneratorError;
use crate::comments::extract_comment;
use crate::config::GeneratorConfig;
use crate::descriptor::DescriptorPool;
use crate::descriptor::FileDescriptor;
use crate::descriptor::MethodDescriptor;
use crate::descriptor::ServiceDescriptor;
use crate::naming::to_snake_case;
use crate::provider::MethodTarget;
use crate::provider::synthesize_provider;
use crate::schema::input_schema;
use crate::schema::output_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Suffix appended to the generated file name prefix.
pub const OUTPUT_SUFFIX: &str = ".utcp.json";

// ============================================================================
// SECTION: Generated Output
// ============================================================================

/// Rendered document for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path, e.g. `acme/v1/widgets.utcp.json`.
    pub name: String,
    /// Pretty-printed JSON document.
    pub content: String,
    /// Number of tools in the document.
    pub tool_count: usize,
}

/// Returns the output path for an input file path.
///
/// # Examples
/// ```
/// use utcp_generator::assembler::output_file_name;
///
/// assert_eq!(output_file_name("acme/v1/widgets.proto"), "acme/v1/widgets.utcp.json");
/// ```
#[must_use]
pub fn output_file_name(source: &str) -> String {
    let prefix = source.strip_suffix(".proto").unwrap_or(source);
    format!("{prefix}{OUTPUT_SUFFIX}")
}

// ============================================================================
// SECTION: Generator
// ============================================================================

/// Document assembler bound to one configuration.
///
/// # Invariants
/// - Holds no state across calls; files may be generated in any order.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    /// Provider settings shared by every tool.
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator for the given configuration.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders the document for a file, or `None` when it declares no services.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Serialization`] when the collection cannot be
    /// rendered as JSON.
    pub fn generate_file(
        &self,
        pool: &DescriptorPool,
        file: &FileDescriptor,
    ) -> Result<Option<GeneratedFile>, GeneratorError> {
        if file.services.is_empty() {
            return Ok(None);
        }
        let collection = self.tool_collection(pool, file);
        let content = render_collection(&collection)?;
        Ok(Some(GeneratedFile {
            name: output_file_name(&file.name),
            content,
            tool_count: collection.tools.len(),
        }))
    }

    /// Builds the tool collection for every method of every service in a file.
    #[must_use]
    pub fn tool_collection(&self, pool: &DescriptorPool, file: &FileDescriptor) -> ToolCollection {
        let mut collection = ToolCollection::default();
        for service in &file.services {
            for method in &service.methods {
                let mut tool = self.build_tool(pool, file, service, method);
                tool.name = unique_tool_name(&collection, &service.name, tool.name);
                collection.tools.push(tool);
            }
        }
        collection
    }

    /// Builds a single tool from an RPC method.
    fn build_tool(
        &self,
        pool: &DescriptorPool,
        file: &FileDescriptor,
        service: &ServiceDescriptor,
        method: &MethodDescriptor,
    ) -> Tool {
        let mut description = extract_comment(&method.comments);
        if description.is_empty() {
            description = format!("{} method in {} service", method.name, service.name);
        }
        let input = method.input_type.as_deref().and_then(|name| pool.message(name));
        let outputs = method
            .output_type
            .as_deref()
            .map(|name| pool.message(name).map(|message| output_schema(pool, message)).unwrap_or_default());
        let target = MethodTarget {
            package: &file.package,
            service: &service.name,
            method: &method.name,
        };
        Tool {
            name: to_snake_case(&method.name),
            description,
            inputs: input_schema(pool, input),
            outputs,
            tool_provider: Some(synthesize_provider(&self.config, &target)),
        }
    }
}

/// Returns `name`, or a service-qualified variant when it is already taken.
///
/// The qualified form `{service}_{name}` can itself collide with a method
/// whose own name normalizes to it; a numeric suffix resolves that case.
fn unique_tool_name(collection: &ToolCollection, service: &str, name: String) -> String {
    if !collection.contains(&name) {
        return name;
    }
    let qualified = format!("{}_{name}", to_snake_case(service));
    if !collection.contains(&qualified) {
        return qualified;
    }
    let mut index = 2_usize;
    loop {
        let candidate = format!("{qualified}_{index}");
        if !collection.contains(&candidate) {
            return candidate;
        }
        index += 1;
    }
}

/// Serializes a collection as two-space indented JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`GeneratorError::Serialization`] when JSON rendering fails.
pub fn render_collection(collection: &ToolCollection) -> Result<String, GeneratorError> {
    let mut content = serde_json::to_string_pretty(collection)?;
    content.push('\n');
    Ok(content)
}
