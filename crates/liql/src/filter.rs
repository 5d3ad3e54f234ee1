//! Filter expressions and the shape normalizer.
//!
//! Callers describe a WHERE condition in whichever shape is convenient: a
//! single pair or triple, an ordered sequence of clauses, a set of clauses,
//! or a mapping from field to value (or to an `(operator, value)` pair).
//! [`normalize`] turns every shape into the same ordered list of
//! [`RawClause`]s without dropping any of them.
//!
//! Sets are accepted as a convenience. Their iteration order is unspecified,
//! so the clause order (and therefore the compiled text) is not stable when a
//! set is supplied.

use std::collections::HashSet;

use serde_json::Value as Json;

use crate::clause::RawClause;
use crate::error::{LiqlError, Result};
use crate::value::Value;

/// A filter expression in any of the recognized shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// `(field, value)`.
    Pair(String, Value),
    /// `(field, operator, value)`.
    Triple(String, String, Value),
    /// Ordered clauses.
    Sequence(Vec<RawClause>),
    /// Unordered clauses.
    Set(HashSet<RawClause>),
    /// Field to value, or field to `(operator, value)`, in insertion order.
    Mapping(Vec<(String, MappingValue)>),
}

/// The value side of a [`Filter::Mapping`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingValue {
    /// One-to-one: compared with `=`.
    Scalar(Value),
    /// One-to-two: must hold exactly `[operator, value]`.
    List(Vec<Value>),
}

impl Filter {
    /// Creates a pair filter.
    pub fn pair(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Pair(field.into(), value.into())
    }

    /// Creates a triple filter.
    pub fn triple(field: impl Into<String>, op: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Triple(field.into(), op.into(), value.into())
    }

    /// Creates a sequence filter from anything that converts into clauses.
    pub fn sequence<I, C>(clauses: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<RawClause>,
    {
        Filter::Sequence(clauses.into_iter().map(Into::into).collect())
    }

    /// Creates a one-to-one mapping filter.
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Filter::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), MappingValue::Scalar(v.into())))
                .collect(),
        )
    }

    /// Builds a filter from dynamic data such as a parsed JSON or YAML file.
    ///
    /// - `["id", 5]` and `["id", ">", 5]` are a pair and a triple.
    /// - `[["id", 5], "(a = 1 OR b = 2)"]` is a sequence; strings are verbatim.
    /// - `["(a = 1 OR b = 2)", "(c = 3 OR d = 4)"]` is a sequence too: a
    ///   leading string is only a field when it looks like a field path (no
    ///   whitespace, no comparison characters, not opening with `(`).
    /// - `{"id": 5, "views": [">", 10]}` is a mapping, in key order.
    /// - A bare string is a single verbatim clause.
    ///
    /// Numbers must be integers. Anything else is an unsupported shape.
    pub fn from_json(json: &Json) -> Result<Filter> {
        match json {
            Json::String(s) => Ok(Filter::Sequence(vec![RawClause::verbatim(s.as_str())])),
            Json::Array(items) if is_flat_clause(items) => clause_from_json(items).map(Filter::from),
            Json::Array(items) if !items.is_empty() => items
                .iter()
                .map(|item| match item {
                    Json::String(s) => Ok(RawClause::verbatim(s.as_str())),
                    Json::Array(parts) => clause_from_json(parts),
                    other => Err(unsupported(other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Filter::Sequence),
            Json::Object(map) => map
                .iter()
                .map(|(field, value)| {
                    let value = match value {
                        Json::Array(parts) => MappingValue::List(
                            parts.iter().map(scalar_from_json).collect::<Result<_>>()?,
                        ),
                        other => MappingValue::Scalar(scalar_from_json(other)?),
                    };
                    Ok((field.clone(), value))
                })
                .collect::<Result<Vec<_>>>()
                .map(Filter::Mapping),
            other => Err(unsupported(other)),
        }
    }
}

impl From<RawClause> for Filter {
    fn from(clause: RawClause) -> Self {
        match clause {
            RawClause::Pair { field, value } => Filter::Pair(field, value),
            RawClause::Triple { field, op, value } => Filter::Triple(field, op, value),
            verbatim => Filter::Sequence(vec![verbatim]),
        }
    }
}

impl From<Vec<RawClause>> for Filter {
    fn from(clauses: Vec<RawClause>) -> Self {
        Filter::Sequence(clauses)
    }
}

impl From<HashSet<RawClause>> for Filter {
    fn from(clauses: HashSet<RawClause>) -> Self {
        Filter::Set(clauses)
    }
}

/// Canonicalizes a filter into an ordered list of clauses.
///
/// Sequences come back unchanged. A mapping value that is a list must hold
/// exactly an operator and a value, otherwise
/// [`LiqlError::OperatorMismatch`] is returned.
pub fn normalize(filter: Filter) -> Result<Vec<RawClause>> {
    match filter {
        Filter::Pair(field, value) => Ok(vec![RawClause::Pair { field, value }]),
        Filter::Triple(field, op, value) => Ok(vec![RawClause::Triple { field, op, value }]),
        Filter::Sequence(clauses) => Ok(clauses),
        Filter::Set(clauses) => Ok(clauses.into_iter().collect()),
        Filter::Mapping(entries) => entries
            .into_iter()
            .map(|(field, value)| match value {
                MappingValue::Scalar(value) => Ok(RawClause::Pair { field, value }),
                MappingValue::List(parts) => match <[Value; 2]>::try_from(parts) {
                    Ok([op, value]) => Ok(RawClause::Triple {
                        field,
                        op: op.to_string(),
                        value,
                    }),
                    Err(parts) => Err(LiqlError::OperatorMismatch {
                        field,
                        len: parts.len(),
                    }),
                },
            })
            .collect(),
    }
}

// Two or three scalars led by a field path read as one clause.
fn is_flat_clause(items: &[Json]) -> bool {
    matches!(items.len(), 2 | 3)
        && items[0].as_str().is_some_and(is_field_path)
        && items.iter().all(|item| !item.is_array() && !item.is_object())
}

// `replies.count(*)` is a field; `(a = 1 OR b = 2)` and `id=5` are not.
fn is_field_path(text: &str) -> bool {
    !text.is_empty()
        && !text.starts_with('(')
        && !text
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '=' | '<' | '>' | '!'))
}

fn clause_from_json(parts: &[Json]) -> Result<RawClause> {
    match parts {
        [Json::String(field), value] => Ok(RawClause::pair(field.as_str(), scalar_from_json(value)?)),
        [Json::String(field), Json::String(op), value] => Ok(RawClause::triple(
            field.as_str(),
            op.as_str(),
            scalar_from_json(value)?,
        )),
        _ => Err(LiqlError::UnsupportedShape {
            shape: format!("clause {}", Json::Array(parts.to_vec())),
        }),
    }
}

fn scalar_from_json(json: &Json) -> Result<Value> {
    match json {
        Json::String(s) => Ok(Value::Str(s.clone())),
        Json::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_u64().map(Value::from))
            .ok_or_else(|| unsupported(json)),
        other => Err(unsupported(other)),
    }
}

fn unsupported(json: &Json) -> LiqlError {
    let kind = match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(items) if items.is_empty() => "empty list",
        Json::Array(_) => "list",
        Json::Object(_) => "object",
    };
    LiqlError::UnsupportedShape {
        shape: format!("{kind} {json}"),
    }
}
