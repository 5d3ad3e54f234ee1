//! Query builder.
//!
//! The [`Query`] struct assembles a full LiQL statement from its parts:
//! SELECT list, FROM source, an optional filter compiled into the WHERE
//! clause, and the ORDER BY / LIMIT / OFFSET / CURSOR suffixes.

use crate::error::{LiqlError, Result};
use crate::filter::Filter;
use crate::format::{query_url, FormatOptions};
use crate::logic::{parse_where_clause, JoinLogic};
use crate::ordering::{Dir, OrderBy};
use crate::response::structure_cursor_clause;
use crate::select::{parse_select_fields, SelectFields};

/// A LiQL query under construction.
///
/// Nothing is validated until [`Query::build`], which compiles the filter
/// and fails on the first invalid shape or operator.
///
/// # Example
///
/// ```
/// use liql::{Dir, Filter, Query};
///
/// let query = Query::select("id, subject")
///     .from("messages")
///     .filter(Filter::triple("kudos.sum(weight)", ">", 5))
///     .order_by("post_time", Dir::Desc)
///     .limit(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     query,
///     "SELECT id,subject FROM messages WHERE kudos.sum(weight) > 5 ORDER BY post_time DESC LIMIT 10"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    fields: SelectFields,
    source: String,
    filter: Option<Filter>,
    join_logic: JoinLogic,
    order: Option<OrderBy>,
    limit: Option<usize>,
    offset: Option<usize>,
    cursor: Option<String>,
}

impl Query {
    /// Starts a query selecting the given fields.
    pub fn select(fields: impl Into<SelectFields>) -> Self {
        Query {
            fields: fields.into(),
            source: String::new(),
            filter: None,
            join_logic: JoinLogic::default(),
            order: None,
            limit: None,
            offset: None,
            cursor: None,
        }
    }

    /// Sets the collection to query, such as `messages` or `users`.
    pub fn from(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Sets the filter compiled into the WHERE clause.
    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the keywords joining filter clauses. Defaults to `AND`.
    pub fn join_logic(mut self, join_logic: impl Into<JoinLogic>) -> Self {
        self.join_logic = join_logic.into();
        self
    }

    // ========================================================================
    // Suffixes
    // ========================================================================

    /// Orders results by a field. A later call replaces an earlier one.
    pub fn order_by(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.order = Some(OrderBy::new(field, dir));
        self
    }

    /// Orders results ascending by a field.
    pub fn order_asc(self, field: impl Into<String>) -> Self {
        self.order_by(field, Dir::Asc)
    }

    /// Orders results descending by a field.
    pub fn order_desc(self, field: impl Into<String>) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Limits the number of results. A limit of zero is left out.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Skips the first `n` results.
    pub fn offset(mut self, n: usize) -> Self {
        self.offset = Some(n);
        self
    }

    /// Continues from a cursor returned by a previous response.
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the collection being queried.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the filter, if one was set.
    pub fn get_filter(&self) -> Option<&Filter> {
        self.filter.as_ref()
    }

    /// Returns the keywords joining filter clauses.
    pub fn get_join_logic(&self) -> &JoinLogic {
        &self.join_logic
    }

    /// Returns the ORDER BY field and direction, if set.
    pub fn ordering(&self) -> Option<&OrderBy> {
        self.order.as_ref()
    }

    /// Returns the result limit, if set.
    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the result offset, if set.
    pub fn get_offset(&self) -> Option<usize> {
        self.offset
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Renders the query text.
    pub fn build(&self) -> Result<String> {
        if self.source.is_empty() {
            return Err(LiqlError::MissingSource);
        }
        let fields = parse_select_fields(self.fields.clone());
        let mut query = format!("SELECT {fields} FROM {}", self.source);

        if let Some(filter) = &self.filter {
            let fragment = parse_where_clause(filter.clone(), &self.join_logic)?;
            if !fragment.is_empty() {
                query.push_str(" WHERE ");
                query.push_str(&fragment);
            }
        }
        if let Some(order) = &self.order {
            query.push_str(&format!(" ORDER BY {order}"));
        }
        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            query.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            query.push_str(&format!(" OFFSET {offset}"));
        }
        let cursor = structure_cursor_clause(self.cursor.as_deref());
        if !cursor.is_empty() {
            query.push(' ');
            query.push_str(&cursor);
        }
        Ok(query)
    }

    /// Renders the query and wraps it in a search URL.
    pub fn to_url(&self, base: &str, options: &FormatOptions) -> Result<String> {
        Ok(query_url(base, &self.build()?, options))
    }
}
