// crates/utcp-generator/src/comments.rs
// ============================================================================
// Module: Comment Extractor
// Description: Normalizes leading documentation into one-line descriptions.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Each line is trimmed and stripped of a leading `//`, a leading `/*`, and a
//! trailing `*/`; lines left empty are dropped and the rest are joined with a
//! single space.

/// Collapses raw leading documentation into a single-line description.
///
/// # Examples
/// ```
/// use utcp_generator::comments::extract_comment;
///
/// assert_eq!(extract_comment("// Creates a widget.\n// Idempotent."), "Creates a widget. Idempotent.");
/// assert_eq!(extract_comment(""), "");
/// ```
#[must_use]
pub fn extract_comment(raw: &str) -> String {
    raw.lines().filter_map(clean_line).collect::<Vec<_>>().join(" ")
}

/// Strips comment markers from one line; `None` when nothing is left.
fn clean_line(line: &str) -> Option<&str> {
    let line = line.trim();
    let line = line.strip_prefix("//").unwrap_or(line);
    let line = line.strip_prefix("/*").unwrap_or(line);
    let line = line.strip_suffix("*/").unwrap_or(line);
    let line = line.trim();
    (!line.is_empty()).then_some(line)
}
