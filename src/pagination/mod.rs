//! Pagination module
//!
//! Models a paginated collection as a restartable, forward-only sequence of
//! pages. A strategy decides how the next page URL is derived from the
//! current page body; the pager drives fetching lazily, one page at a time.

mod pager;
mod types;

pub use pager::{NextLink, Pager, SinglePage};
pub use types::{NextPage, Page, PageStrategy};
