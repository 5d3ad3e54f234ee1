//! LiQL - query compiler for community platform search APIs.
//!
//! LiQL is the SQL-like language the community search endpoint accepts. This
//! crate turns loosely shaped filter expressions into the text of a WHERE
//! clause and assembles full queries and search URLs around it:
//!
//! - Filters as pairs, triples, sequences, sets or field mappings
//! - Closed operator sets for comparisons and for joining clauses
//! - Integer-aware value quoting
//! - SELECT lists, ORDER BY / LIMIT / OFFSET / CURSOR suffixes
//! - Query-string formatting and search response helpers
//!
//! No I/O happens here. The output is handed to whatever HTTP client the
//! caller uses.
//!
//! # Quick Start
//!
//! ```rust
//! use liql::{parse_where_clause, Filter, JoinLogic, RawClause};
//!
//! let filter = Filter::sequence([
//!     RawClause::triple("replies.count(*)", ">", 5),
//!     RawClause::triple("replies.count(*)", "<", 10),
//! ]);
//!
//! let fragment = parse_where_clause(filter, &JoinLogic::from(["AND"])).unwrap();
//! assert_eq!(fragment, "replies.count(*) > 5 AND replies.count(*) < 10");
//! ```
//!
//! # Compilation Pipeline
//!
//! ```text
//! Filter --normalize--> [RawClause] --compile_clause--> [text] --interleave--> WHERE fragment
//! ```
//!
//! - **Normalize**: every shape becomes an ordered list of clauses
//! - **Compile**: operators are checked, values are quoted unless integral
//! - **Interleave**: join keywords are placed between clauses, left to right
//!
//! # Operators
//!
//! | Kind | Allowed |
//! |------|---------|
//! | Comparison | `=`, `!=`, `>`, `<`, `>=`, `<=` |
//! | Join | `AND`, `OR`, `IN`, `MATCHES` |
//! | Order | `ASC`, `DESC` |

mod clause;
mod error;
mod filter;
mod format;
mod logic;
mod op;
mod ordering;
mod query;
mod response;
mod select;
mod value;

// Re-export public API
pub use clause::{compile_clause, Clause, RawClause};
pub use error::{LiqlError, Result};
pub use filter::{normalize, Filter, MappingValue};
pub use format::{format_query, query_url, FormatOptions};
pub use logic::{interleave, parse_where_clause, JoinLogic};
pub use op::{Logic, Op};
pub use ordering::{Dir, OrderBy};
pub use query::Query;
pub use response::{structure_cursor_clause, LiqlResponse, ResponseData};
pub use select::{parse_select_fields, SelectFields};
pub use value::{format_value, Value};
