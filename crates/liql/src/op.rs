//! Comparison and join operators.
//!
//! Both operator sets are closed: [`Op`] covers the comparisons allowed
//! inside a clause and [`Logic`] covers the keywords allowed between
//! clauses. Anything else is rejected with
//! [`LiqlError::InvalidOperator`](crate::LiqlError::InvalidOperator).

use crate::error::{LiqlError, Result};

/// Comparison operator of a WHERE clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (`=`). The implied operator of a two-element clause.
    Eq,
    /// Not equal (`!=`).
    Ne,
    /// Greater than (`>`).
    Gt,
    /// Less than (`<`).
    Lt,
    /// Greater than or equal (`>=`).
    Gte,
    /// Less than or equal (`<=`).
    Lte,
}

impl Op {
    /// Every comparison operator, in allow-list order.
    pub const ALL: [Op; 6] = [Op::Eq, Op::Ne, Op::Gt, Op::Lt, Op::Gte, Op::Lte];

    const ALLOWED: &'static str = "=, !=, >, <, >=, <=";

    /// Parses an operator token.
    ///
    /// Only the exact tokens of the allow-list are accepted; surrounding
    /// whitespace is not trimmed.
    pub fn parse(token: &str) -> Result<Op> {
        Op::ALL
            .into_iter()
            .find(|op| op.as_str() == token)
            .ok_or_else(|| LiqlError::InvalidOperator {
                op: token.to_string(),
                allowed: Op::ALLOWED,
            })
    }

    /// Returns the LiQL token for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Gte => ">=",
            Op::Lte => "<=",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boolean keyword joining two adjacent clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Logic {
    #[default]
    And,
    Or,
    In,
    Matches,
}

impl Logic {
    /// Every join keyword, in allow-list order.
    pub const ALL: [Logic; 4] = [Logic::And, Logic::Or, Logic::In, Logic::Matches];

    const ALLOWED: &'static str = "AND, OR, IN, MATCHES";

    /// Parses a join keyword. Matching is case-sensitive.
    pub fn parse(token: &str) -> Result<Logic> {
        Logic::ALL
            .into_iter()
            .find(|logic| logic.as_str() == token)
            .ok_or_else(|| LiqlError::InvalidOperator {
                op: token.to_string(),
                allowed: Logic::ALLOWED,
            })
    }

    /// Returns the LiQL keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
            Logic::In => "IN",
            Logic::Matches => "MATCHES",
        }
    }
}

impl std::fmt::Display for Logic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
