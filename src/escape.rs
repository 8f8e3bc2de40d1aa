//! Per-format text escaping
//!
//! Absent cells reach these functions as empty strings.

/// Quote a delimited field: wrap in `"` and double embedded quotes.
/// Commas and line breaks stay raw inside the quotes.
pub fn delimited_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Escape text for XML content and attribute values
pub fn markup(s: &str) -> String {
    // & first, otherwise the entities below get escaped twice
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Escape text for HTML. Apostrophes are left as-is.
pub fn hypertext(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
