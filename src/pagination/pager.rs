//! Pager and strategy implementations

use super::types::{lookup_path, NextPage, Page, PageStrategy};
use crate::client::ServiceClient;
use crate::error::Result;
use futures::stream::{Stream, TryStreamExt};
use serde_json::Value;
use tracing::debug;

// ============================================================================
// Single Page
// ============================================================================

/// Strategy for collections that fit in one response
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePage;

impl PageStrategy for SinglePage {
    fn next_page(&self, _body: &Value) -> NextPage {
        NextPage::Done
    }
}

// ============================================================================
// Next Link
// ============================================================================

/// Follows an absolute next-page URL embedded in the response body
///
/// Common patterns:
/// - `{ "next": "https://cloud.example.com/items?marker=..." }`
/// - `{ "links": { "next": "..." } }`
#[derive(Debug, Clone)]
pub struct NextLink {
    /// Dot-notation path to the next URL in the body
    pub path: String,
}

impl NextLink {
    /// Create a next link strategy
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl PageStrategy for NextLink {
    fn next_page(&self, body: &Value) -> NextPage {
        match lookup_path(body, &self.path).and_then(Value::as_str) {
            Some(url) if !url.is_empty() => NextPage::with_url(url),
            _ => NextPage::Done,
        }
    }
}

// ============================================================================
// Pager
// ============================================================================

/// Restartable lazy sequence of pages from a collection endpoint
///
/// Each call to [`Pager::pages`] starts over from the first URL; the
/// resulting stream is forward-only and fetches one page at a time.
pub struct Pager<'a> {
    client: &'a ServiceClient,
    first_url: String,
    strategy: Box<dyn PageStrategy + 'a>,
}

impl<'a> Pager<'a> {
    /// Create a pager over a single-page collection
    pub fn new(client: &'a ServiceClient, first_url: impl Into<String>) -> Self {
        Self {
            client,
            first_url: first_url.into(),
            strategy: Box::new(SinglePage),
        }
    }

    /// Replace the pagination strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl PageStrategy + 'a) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// URL of the first page
    pub fn first_url(&self) -> &str {
        &self.first_url
    }

    /// Lazily iterate over pages
    ///
    /// Transport, status, and decode errors surface as the stream item for
    /// the page being fetched.
    pub fn pages(&self) -> impl Stream<Item = Result<Page>> + '_ {
        futures::stream::try_unfold(Some(self.first_url.clone()), move |state| async move {
            let Some(url) = state else {
                return Ok(None);
            };

            let body: Value = self.client.get_json(&url).await?;
            let page = Page::new(url, body);

            let next = match self.strategy.next_page(&page.body) {
                // A next link pointing back at the current page would loop forever
                NextPage::Continue { url: next_url } if next_url != page.url => {
                    debug!("Advancing to next page: {}", next_url);
                    Some(next_url)
                }
                _ => None,
            };

            Ok(Some((page, next)))
        })
    }

    /// Invoke a callback for each page; return `false` to stop early
    pub async fn each_page<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&Page) -> Result<bool>,
    {
        let mut pages = std::pin::pin!(self.pages());
        while let Some(page) = pages.try_next().await? {
            if !f(&page)? {
                break;
            }
        }
        Ok(())
    }

    /// Fetch every page eagerly
    pub async fn all_pages(&self) -> Result<Vec<Page>> {
        self.pages().try_collect().await
    }
}

impl std::fmt::Debug for Pager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("first_url", &self.first_url)
            .finish_non_exhaustive()
    }
}
