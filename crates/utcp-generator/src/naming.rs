// crates/utcp-generator/src/naming.rs
// ============================================================================
// Module: Identifier Normalizer
// Description: Canonical snake_case names for tools and properties.
// Purpose: Convert Pascal/camel case identifiers, including acronym runs.
// Dependencies: std
// ============================================================================

//! ## Overview
//! An underscore is inserted before an uppercase ASCII letter at position
//! `i > 0` when the previous character is lowercase or the next character is
//! lowercase, so acronym runs split at their tail (`XMLParser` becomes
//! `xml_parser`). The result is then lowercased.

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Converts an identifier to canonical `snake_case`.
///
/// # Examples
/// ```
/// use utcp_generator::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("GetNewsMLDocument"), "get_news_ml_document");
/// assert_eq!(to_snake_case("HTTPServer"), "http_server");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 5);
    for (index, &ch) in chars.iter().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            let prev_is_lower = chars[index - 1].is_ascii_lowercase();
            let next_is_lower = chars.get(index + 1).is_some_and(char::is_ascii_lowercase);
            if prev_is_lower || next_is_lower {
                out.push('_');
            }
        }
        out.push(ch);
    }
    out.to_lowercase()
}
