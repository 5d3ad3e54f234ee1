//! Error types for the liql crate.

use thiserror::Error;

/// Errors that can occur when compiling queries or reading responses.
#[derive(Debug, Error)]
pub enum LiqlError {
    /// The top-level filter expression is not a recognized shape.
    #[error("unsupported filter shape: {shape}")]
    UnsupportedShape { shape: String },

    /// A mapping value meant as `(operator, value)` has the wrong length.
    #[error("filter for '{field}' must be an (operator, value) pair, got {len} element(s)")]
    OperatorMismatch { field: String, len: usize },

    /// Comparison or join operator outside its allow-list.
    #[error("invalid operator '{op}' (expected one of: {allowed})")]
    InvalidOperator { op: String, allowed: &'static str },

    /// Sort direction other than ASC or DESC.
    #[error("invalid sort direction '{dir}' (expected ASC or DESC)")]
    InvalidDirection { dir: String },

    /// Join logic sequence does not fit between the clauses.
    #[error("{operators} join operator(s) cannot combine {clauses} clause(s)")]
    OperatorCountMismatch { clauses: usize, operators: usize },

    /// A query was built without a FROM source.
    #[error("query has no FROM source")]
    MissingSource,

    /// Malformed JSON in a search response.
    #[error("invalid search response: {0}")]
    Json(#[from] serde_json::Error),

    /// The search response reported a failure.
    #[error("query failed with status '{status}': {message}")]
    QueryFailed { status: String, message: String },
}

/// Result type for liql operations.
pub type Result<T> = std::result::Result<T, LiqlError>;
