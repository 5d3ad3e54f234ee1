//! Join logic and the clause interleaver.
//!
//! Clauses are combined left to right. A single join keyword is repeated
//! between every pair of clauses; a longer sequence must supply exactly one
//! keyword per gap and is consumed in order.

use crate::clause::{compile_clause, RawClause};
use crate::error::{LiqlError, Result};
use crate::filter::{normalize, Filter};
use crate::op::Logic;

/// Join keywords as supplied by the caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinLogic {
    /// One keyword, used between every pair of clauses.
    Single(String),
    /// One keyword per gap. A one-element sequence behaves like `Single`.
    Sequence(Vec<String>),
}

impl Default for JoinLogic {
    fn default() -> Self {
        JoinLogic::Single(Logic::default().as_str().to_string())
    }
}

impl From<&str> for JoinLogic {
    fn from(op: &str) -> Self {
        JoinLogic::Single(op.to_string())
    }
}

impl From<String> for JoinLogic {
    fn from(op: String) -> Self {
        JoinLogic::Single(op)
    }
}

impl From<Logic> for JoinLogic {
    fn from(logic: Logic) -> Self {
        JoinLogic::Single(logic.as_str().to_string())
    }
}

impl From<Vec<String>> for JoinLogic {
    fn from(ops: Vec<String>) -> Self {
        JoinLogic::Sequence(ops)
    }
}

impl From<Vec<&str>> for JoinLogic {
    fn from(ops: Vec<&str>) -> Self {
        JoinLogic::Sequence(ops.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for JoinLogic {
    fn from(ops: [&str; N]) -> Self {
        JoinLogic::Sequence(ops.into_iter().map(String::from).collect())
    }
}

impl JoinLogic {
    /// Validates the keywords and returns one per gap between `clauses`.
    pub fn resolve(&self, clauses: usize) -> Result<Vec<Logic>> {
        let gaps = clauses.saturating_sub(1);
        match self {
            JoinLogic::Single(op) => Ok(vec![Logic::parse(op)?; gaps]),
            JoinLogic::Sequence(ops) if ops.len() == 1 => Ok(vec![Logic::parse(&ops[0])?; gaps]),
            JoinLogic::Sequence(ops) if ops.len() != gaps => Err(LiqlError::OperatorCountMismatch {
                clauses,
                operators: ops.len(),
            }),
            JoinLogic::Sequence(ops) => ops.iter().map(|op| Logic::parse(op)).collect(),
        }
    }
}

/// Compiles each clause and joins them with the given logic.
///
/// The result has no surrounding parentheses and no `WHERE` keyword.
///
/// # Example
///
/// ```
/// use liql::{interleave, RawClause};
///
/// let clauses = [RawClause::pair("id", 5), RawClause::pair("id", 6)];
/// assert_eq!(interleave(&clauses, &"OR".into()).unwrap(), "id = 5 OR id = 6");
/// ```
pub fn interleave(clauses: &[RawClause], join_logic: &JoinLogic) -> Result<String> {
    let joins = join_logic.resolve(clauses.len())?;
    let mut out = String::new();
    for (i, clause) in clauses.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(joins[i - 1].as_str());
            out.push(' ');
        }
        out.push_str(&compile_clause(clause)?);
    }
    Ok(out)
}

/// Compiles a filter expression into a WHERE fragment.
///
/// # Example
///
/// ```
/// use liql::{parse_where_clause, Filter, JoinLogic};
///
/// let filter = Filter::sequence([("id", ">", 5), ("id", "<", 10)]);
/// let fragment = parse_where_clause(filter, &JoinLogic::default()).unwrap();
/// assert_eq!(fragment, "id > 5 AND id < 10");
/// ```
pub fn parse_where_clause(filter: impl Into<Filter>, join_logic: &JoinLogic) -> Result<String> {
    let clauses = normalize(filter.into())?;
    interleave(&clauses, join_logic)
}
