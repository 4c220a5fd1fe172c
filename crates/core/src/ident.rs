//! Identifier sanitization and quoting
//!
//! Table and column names come from CSV headers and file names. They are
//! stripped of quote characters before they reach the schema, and every
//! identifier written into SQL goes through [`quote_identifier`].

/// Characters removed from identifiers.
pub const QUOTE_CHARS: &[char] = &['`', '"'];

/// Table name used when the hint is empty after stripping.
pub const DEFAULT_TABLE_NAME: &str = "data";

/// Remove every quote character from `raw`.
pub fn strip_quotes(raw: &str) -> String {
    raw.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect()
}

/// Sanitize a destination table name hint.
///
/// Falls back to `"data"` when nothing is left after stripping.
pub fn sanitize_table_name(raw: &str) -> String {
    let name = strip_quotes(raw);
    if name.is_empty() {
        DEFAULT_TABLE_NAME.to_string()
    } else {
        name
    }
}

/// Sanitize a column name.
///
/// `position` is 1-indexed; an empty result falls back to `col<position>`.
pub fn sanitize_column_name(raw: &str, position: usize) -> String {
    let name = strip_quotes(raw);
    if name.is_empty() {
        format!("col{}", position)
    } else {
        name
    }
}

/// Quote an identifier for SQLite.
///
/// Embedded double quotes are doubled, so the result is always a single
/// identifier token.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
