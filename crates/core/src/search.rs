//! Title search helpers.
//!
//! Queries are normalized once, before any store sees them, so the Postgres
//! and REST backends hand `websearch_to_tsquery` the same input.

/// Text-search configuration used for game titles.
pub const SEARCH_CONFIG: &str = "english";

/// Normalize a free-text query for websearch parsing.
///
/// Only whitespace is touched: runs collapse to single spaces and the ends
/// are trimmed. Websearch operators (`-term`, `"quoted phrase"`, `or`) pass
/// through unchanged, since `websearch_to_tsquery` accepts arbitrary text.
/// Returns `None` for blank input, in which case the caller skips the store
/// round trip entirely.
///
/// # Examples
///
/// ```
/// use gamezee_core::search::normalize_query;
/// assert_eq!(normalize_query("  moto   x3m "), Some("moto x3m".to_string()));
/// assert_eq!(normalize_query("racer -moto"), Some("racer -moto".to_string()));
/// assert_eq!(normalize_query(" \t "), None);
/// ```
pub fn normalize_query(query: &str) -> Option<String> {
    let terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        None
    } else {
        Some(terms.join(" "))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
