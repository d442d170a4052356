// crates/protoc-gen-utcp/src/plugin.rs
// ============================================================================
// Module: Plugin Driver
// Description: protoc request handling and response framing.
// Purpose: Map a code generation request to UTCP documents.
// Dependencies: prost, prost-types, utcp-generator
// ============================================================================

//! ## Overview
//! [`run`] parses the plugin parameter, converts the descriptor set, and
//! generates one document per requested file that declares services. Any
//! failure is reported through the response `error` field with no files
//! attached, which is how protoc expects plugins to report problems.
//! [`read_request`] and [`write_response`] handle the binary framing on
//! stdin and stdout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::io::Write;

use prost::Message;
use prost_types::compiler::CodeGeneratorRequest;
use prost_types::compiler::CodeGeneratorResponse;
use prost_types::compiler::code_generator_response::Feature;
use prost_types::compiler::code_generator_response::File;
use utcp_generator::Generator;

use crate::PluginError;
use crate::events::GenerationEvent;
use crate::events::GenerationEventSink;
use crate::events::NoopEventSink;
use crate::events::StderrEventSink;
use crate::options::PluginOptions;
use crate::options::parse_parameter;
use crate::request::DescriptorSet;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted request size in bytes.
pub const MAX_REQUEST_BYTES: u64 = 64 * 1024 * 1024;

// ============================================================================
// SECTION: Driver
// ============================================================================

/// Handles one request, selecting the event sink from the parameter.
#[must_use]
pub fn run(request: &CodeGeneratorRequest) -> CodeGeneratorResponse {
    let options = match parse_parameter(request.parameter()) {
        Ok(options) => options,
        Err(err) => return error_response(err.to_string()),
    };
    if options.log_events {
        generate(request, &options, &StderrEventSink)
    } else {
        generate(request, &options, &NoopEventSink)
    }
}

/// Handles one request with already-parsed options.
#[must_use]
pub fn generate(
    request: &CodeGeneratorRequest,
    options: &PluginOptions,
    sink: &dyn GenerationEventSink,
) -> CodeGeneratorResponse {
    let descriptors = DescriptorSet::from_protos(&request.proto_file);
    let generator = Generator::new(options.config.clone());

    let mut files = Vec::new();
    for name in &request.file_to_generate {
        let Some(file) = descriptors.file(name) else {
            let message = format!("file to generate not found in request: {name}");
            sink.record(&GenerationEvent::failed(name, &message));
            return error_response(message);
        };
        match generator.generate_file(descriptors.pool(), file) {
            Ok(Some(output)) => {
                sink.record(&GenerationEvent::generated(name, &output.name, output.tool_count));
                files.push(File {
                    name: Some(output.name),
                    content: Some(output.content),
                    ..Default::default()
                });
            }
            Ok(None) => sink.record(&GenerationEvent::skipped(name)),
            Err(err) => {
                let message = err.to_string();
                sink.record(&GenerationEvent::failed(name, &message));
                return error_response(message);
            }
        }
    }

    CodeGeneratorResponse {
        supported_features: Some(supported_features()),
        file: files,
        ..Default::default()
    }
}

/// Builds a response that reports `message` and carries no files.
fn error_response(message: String) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        error: Some(message),
        supported_features: Some(supported_features()),
        ..Default::default()
    }
}

/// Feature bits advertised to protoc.
fn supported_features() -> u64 {
    u64::try_from(i32::from(Feature::Proto3Optional)).unwrap_or_default()
}

// ============================================================================
// SECTION: Framing
// ============================================================================

/// Reads and decodes a request, refusing inputs above [`MAX_REQUEST_BYTES`].
///
/// # Errors
///
/// Returns [`PluginError`] when reading fails, the input is too large, or the
/// bytes are not a valid request.
pub fn read_request(reader: impl Read) -> Result<CodeGeneratorRequest, PluginError> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_REQUEST_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|err| PluginError::Io(err.to_string()))?;
    if !u64::try_from(bytes.len()).is_ok_and(|len| len <= MAX_REQUEST_BYTES) {
        return Err(PluginError::InputTooLarge(MAX_REQUEST_BYTES));
    }
    CodeGeneratorRequest::decode(bytes.as_slice()).map_err(|err| PluginError::Decode(err.to_string()))
}

/// Encodes and writes a response.
///
/// # Errors
///
/// Returns [`PluginError::Io`] when writing fails.
pub fn write_response(mut writer: impl Write, response: &CodeGeneratorResponse) -> Result<(), PluginError> {
    writer
        .write_all(&response.encode_to_vec())
        .and_then(|()| writer.flush())
        .map_err(|err| PluginError::Io(err.to_string()))
}
