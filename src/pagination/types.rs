//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by the pager.

use serde_json::Value;

/// One response's worth of a paginated collection
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the page was fetched from
    pub url: String,
    /// Decoded JSON body
    pub body: Value,
}

impl Page {
    /// Create a page from a fetched body
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            body,
        }
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Another page is available
    Continue {
        /// Absolute URL of the next page
        url: String,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation pointing at a URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Core trait for pagination strategies
pub trait PageStrategy: Send + Sync {
    /// Compute the next page from the current page body
    fn next_page(&self, body: &Value) -> NextPage;
}

/// Walk a dot-notation path into a JSON object tree
pub(crate) fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);

    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(part)?,
            _ => return None,
        }
    }

    Some(current)
}
