// crates/utcp-generator/src/lib.rs
// ============================================================================
// Module: UTCP Generator Library
// Description: Translation engine from RPC descriptors to UTCP manifests.
// Purpose: Convert services, methods, and messages into tool definitions.
// Dependencies: utcp-contract, serde, serde_json, thiserror, toml
// ============================================================================

//! ## Overview
//! The generator consumes an already-parsed descriptor graph and produces one
//! UTCP tool per RPC method. The translation is a pure fold over in-memory
//! values: no I/O, no shared mutable state, and nothing retained between
//! calls, so callers may process files independently and in parallel.
//!
//! Components, leaves first:
//! - [`naming`]: identifier normalization to `snake_case`.
//! - [`comments`]: leading documentation to one-line descriptions.
//! - [`type_map`]: field kinds to JSON Schema type tags.
//! - [`schema`]: recursive field and message conversion.
//! - [`provider`]: invocation descriptor synthesis.
//! - [`assembler`]: per-file orchestration and rendering.
//!
//! ## Example
//! ```
//! use utcp_generator::DescriptorPool;
//! use utcp_generator::FileDescriptor;
//! use utcp_generator::Generator;
//! use utcp_generator::GeneratorConfig;
//! use utcp_generator::MethodDescriptor;
//! use utcp_generator::ServiceDescriptor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = FileDescriptor {
//!     name: String::from("greeter.proto"),
//!     package: String::from("demo"),
//!     services: vec![ServiceDescriptor {
//!         name: String::from("Greeter"),
//!         comments: String::new(),
//!         methods: vec![MethodDescriptor {
//!             name: String::from("SayHello"),
//!             ..MethodDescriptor::default()
//!         }],
//!     }],
//! };
//! let generator = Generator::new(GeneratorConfig::default());
//! let output = generator
//!     .generate_file(&DescriptorPool::new(), &file)?
//!     .ok_or("file declares a service")?;
//! assert_eq!(output.name, "greeter.utcp.json");
//! assert!(output.content.contains("\"name\": \"say_hello\""));
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assembler;
pub mod comments;
pub mod config;
pub mod descriptor;
pub mod naming;
pub mod provider;
pub mod schema;
pub mod type_map;

// ============================================================================
// SECTION: Errors
// ============================================================================

use thiserror::Error;

/// Errors raised while generating a document.
///
/// # Invariants
/// - Serialization is the only failure; every other condition degrades to a
///   default value.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The assembled collection could not be rendered as JSON.
    #[error("failed to marshal UTCP tools: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assembler::GeneratedFile;
pub use assembler::Generator;
pub use config::ConfigError;
pub use config::GeneratorConfig;
pub use descriptor::Cardinality;
pub use descriptor::DescriptorPool;
pub use descriptor::EnumDescriptor;
pub use descriptor::FieldDescriptor;
pub use descriptor::FieldKind;
pub use descriptor::FileDescriptor;
pub use descriptor::MessageDescriptor;
pub use descriptor::MethodDescriptor;
pub use descriptor::ServiceDescriptor;
