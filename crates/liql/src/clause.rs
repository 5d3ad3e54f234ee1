//! Clause types and the clause compiler.
//!
//! A [`RawClause`] is a single filter predicate as the caller wrote it: the
//! operator of a [`RawClause::Triple`] is still unvalidated text. Validation
//! happens when the clause is compiled with [`compile_clause`].

use crate::error::Result;
use crate::op::Op;
use crate::value::{format_value, Value};

/// A single filter predicate before compilation.
///
/// # Example
///
/// ```
/// use liql::{compile_clause, RawClause};
///
/// let pair = RawClause::pair("id", 5);
/// let triple = RawClause::triple("id", "=", 5);
/// assert_eq!(compile_clause(&pair).unwrap(), "id = 5");
/// assert_eq!(compile_clause(&triple).unwrap(), "id = 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawClause {
    /// `(field, value)`, compared with `=`.
    Pair { field: String, value: Value },
    /// `(field, operator, value)`.
    Triple {
        field: String,
        op: String,
        value: Value,
    },
    /// A pre-rendered sub-expression, emitted as-is.
    Verbatim(String),
}

impl RawClause {
    /// Creates a two-element clause.
    pub fn pair(field: impl Into<String>, value: impl Into<Value>) -> Self {
        RawClause::Pair {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a three-element clause.
    pub fn triple(field: impl Into<String>, op: impl Into<String>, value: impl Into<Value>) -> Self {
        RawClause::Triple {
            field: field.into(),
            op: op.into(),
            value: value.into(),
        }
    }

    /// Creates a verbatim clause.
    pub fn verbatim(text: impl Into<String>) -> Self {
        RawClause::Verbatim(text.into())
    }

    /// Validates the operator and returns the typed clause.
    ///
    /// Verbatim clauses have no structure and yield `None`.
    pub fn to_clause(&self) -> Result<Option<Clause>> {
        match self {
            RawClause::Pair { field, value } => {
                Ok(Some(Clause::new(field.clone(), Op::Eq, value.clone())))
            }
            RawClause::Triple { field, op, value } => {
                Ok(Some(Clause::new(field.clone(), Op::parse(op)?, value.clone())))
            }
            RawClause::Verbatim(_) => Ok(None),
        }
    }
}

impl<F: Into<String>, V: Into<Value>> From<(F, V)> for RawClause {
    fn from((field, value): (F, V)) -> Self {
        RawClause::pair(field, value)
    }
}

impl<F: Into<String>, O: Into<String>, V: Into<Value>> From<(F, O, V)> for RawClause {
    fn from((field, op, value): (F, O, V)) -> Self {
        RawClause::triple(field, op, value)
    }
}

/// A validated clause: field, comparison operator and value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    /// Dotted field path, such as `replies.count(*)`.
    pub field: String,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: Value,
}

impl Clause {
    /// Creates a new clause.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        Clause {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, format_value(&self.value))
    }
}

/// Renders one clause to LiQL text.
///
/// Pairs render with `=`, triples have their operator checked against the
/// comparison allow-list, and verbatim clauses pass through untouched.
pub fn compile_clause(raw: &RawClause) -> Result<String> {
    match raw {
        RawClause::Verbatim(text) => Ok(text.clone()),
        _ => Ok(raw.to_clause()?.map(|clause| clause.to_string()).unwrap_or_default()),
    }
}
