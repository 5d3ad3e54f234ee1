//! Query string formatting for the search endpoint.
//!
//! The substitutions here are literal: statement keywords are uppercased by
//! plain substring replacement and only spaces and `=` are encoded. A field
//! such as `date_from` therefore comes out as `date_FROM` when statement
//! formatting is on. Turn `format_statements` off for such queries.

use serde::{Deserialize, Serialize};

/// Keyword replacements, applied in order.
const STATEMENTS: [(&str, &str); 8] = [
    ("select", "SELECT"),
    ("from", "FROM"),
    ("where", "WHERE"),
    ("order by", "ORDER BY"),
    ("desc", "DESC "),
    ("limit", "LIMIT"),
    ("asc", "ASC"),
    ("offset", "OFFSET"),
];

/// Options applied when a query is turned into a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Append `&api.pretty_print=true`.
    pub pretty_print: bool,
    /// Append `&api.for_ui_search=true` so the search is tracked in community analytics.
    pub track_in_lsi: bool,
    /// Append `&api.always_ok=true`.
    pub always_ok: bool,
    /// Append `&api.error_code=...` when non-empty.
    pub error_code: String,
    /// Uppercase statement keywords before encoding.
    pub format_statements: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            pretty_print: false,
            track_in_lsi: false,
            always_ok: false,
            error_code: String::new(),
            format_statements: true,
        }
    }
}

/// Formats query text for use as the `q` parameter of a search URL.
///
/// # Example
///
/// ```
/// use liql::{format_query, FormatOptions};
///
/// let q = format_query("select id from messages where id = 5", &FormatOptions::default());
/// assert_eq!(q, "SELECT+id+FROM+messages+WHERE+id+%3D+5");
/// ```
pub fn format_query(query: &str, options: &FormatOptions) -> String {
    let mut query = query.to_string();
    if options.format_statements {
        for (from, to) in STATEMENTS {
            query = query.replace(from, to);
        }
    }
    let mut query = query.replace(' ', "+").replace('=', "%3D");
    if options.pretty_print {
        query.push_str("&api.pretty_print=true");
    }
    if options.track_in_lsi {
        query.push_str("&api.for_ui_search=true");
    }
    if options.always_ok {
        query.push_str("&api.always_ok=true");
    }
    if !options.error_code.is_empty() {
        query.push_str("&api.error_code=");
        query.push_str(&options.error_code);
    }
    query
}

/// Builds the full search URL for a query.
///
/// `base` is the API v2 base URL; a trailing slash is ignored.
pub fn query_url(base: &str, query: &str, options: &FormatOptions) -> String {
    format!(
        "{}/search?q={}",
        base.trim_end_matches('/'),
        format_query(query, options)
    )
}
