//! Search response envelope.
//!
//! The search endpoint wraps results as
//! `{"status": ..., "data": {"type": ..., "size": ..., "items": [...], "next_cursor": ...}}`.
//! These helpers read that envelope; fetching it is up to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::{LiqlError, Result};

/// A parsed search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiqlResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: ResponseData,
}

/// The `data` member of a search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub items: Vec<Json>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl LiqlResponse {
    /// Parses a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Returns `true` if the endpoint reported success.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Returns the returned items, or only the first one.
    ///
    /// Fails with [`LiqlError::QueryFailed`] when the status is not `success`.
    pub fn returned_items(&self, only_first: bool) -> Result<&[Json]> {
        if !self.is_success() {
            return Err(LiqlError::QueryFailed {
                status: self.status.clone(),
                message: self.message.clone().unwrap_or_default(),
            });
        }
        let items = self.data.items.as_slice();
        Ok(if only_first {
            &items[..items.len().min(1)]
        } else {
            items
        })
    }

    /// Returns the cursor for the next page, if any.
    pub fn cursor(&self) -> Option<&str> {
        self.data.next_cursor.as_deref()
    }
}

/// Renders a `CURSOR '...'` clause, or an empty string without a cursor.
pub fn structure_cursor_clause(cursor: Option<&str>) -> String {
    match cursor {
        Some(cursor) if !cursor.is_empty() => format!("CURSOR '{cursor}'"),
        _ => String::new(),
    }
}
