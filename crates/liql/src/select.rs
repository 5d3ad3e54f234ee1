//! SELECT field lists.

use std::collections::HashSet;

/// Fields for the SELECT statement, as text or as a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectFields {
    /// A ready-made list such as `"id, subject"` or `"id;subject"`.
    Text(String),
    /// Ordered field names.
    List(Vec<String>),
    /// Field names in no particular order.
    Set(HashSet<String>),
}

impl From<&str> for SelectFields {
    fn from(fields: &str) -> Self {
        SelectFields::Text(fields.to_string())
    }
}

impl From<String> for SelectFields {
    fn from(fields: String) -> Self {
        SelectFields::Text(fields)
    }
}

impl From<Vec<String>> for SelectFields {
    fn from(fields: Vec<String>) -> Self {
        SelectFields::List(fields)
    }
}

impl From<Vec<&str>> for SelectFields {
    fn from(fields: Vec<&str>) -> Self {
        SelectFields::List(fields.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SelectFields {
    fn from(fields: [&str; N]) -> Self {
        SelectFields::List(fields.into_iter().map(String::from).collect())
    }
}

impl From<HashSet<String>> for SelectFields {
    fn from(fields: HashSet<String>) -> Self {
        SelectFields::Set(fields)
    }
}

/// Renders the comma-separated SELECT list.
///
/// Text has `;` turned into `,` and `", "` collapsed to `","`; collections
/// are joined with `,`.
///
/// ```
/// use liql::parse_select_fields;
///
/// assert_eq!(parse_select_fields("id; subject".into()), "id,subject");
/// assert_eq!(parse_select_fields(["id", "subject"].into()), "id,subject");
/// ```
pub fn parse_select_fields(fields: SelectFields) -> String {
    match fields {
        SelectFields::Text(text) => text.replace(';', ",").replace(", ", ","),
        SelectFields::List(list) => list.join(","),
        SelectFields::Set(set) => set.into_iter().collect::<Vec<_>>().join(","),
    }
}
