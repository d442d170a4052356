// crates/protoc-gen-utcp/src/main.rs
// ============================================================================
// Module: protoc-gen-utcp CLI
// Description: Executable invoked by protoc for `--utcp_out`.
// Purpose: Translate a stdin request into a stdout response.
// Dependencies: clap, protoc-gen-utcp
// ============================================================================

//! ## Overview
//! protoc locates the plugin by name on `PATH` and runs it without
//! arguments. The only flags are `--version` and `--help`; everything else
//! is carried in the request parameter.
//!
//! Request-level problems are returned in the response so protoc can report
//! them. Only framing failures exit non-zero.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use protoc_gen_utcp::PluginError;
use protoc_gen_utcp::read_request;
use protoc_gen_utcp::write_response;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// CLI arguments for the plugin.
#[derive(Debug, Parser)]
#[command(
    name = "protoc-gen-utcp",
    version,
    about = "protoc plugin that emits UTCP tool manifests (.utcp.json)."
)]
struct Cli {}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entrypoint.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_error(&err),
    }
}

/// Reads the request, generates, and writes the response.
fn run() -> Result<(), PluginError> {
    let _ = Cli::parse();
    let request = read_request(std::io::stdin().lock())?;
    let response = protoc_gen_utcp::run(&request);
    write_response(std::io::stdout().lock(), &response)
}

/// Emits a CLI error and returns a failure exit code.
fn report_error(err: &PluginError) -> ExitCode {
    let mut stderr = std::io::stderr();
    let _ = writeln!(stderr, "protoc-gen-utcp: {err}");
    ExitCode::FAILURE
}
