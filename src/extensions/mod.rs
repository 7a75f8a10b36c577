//! Extensions API binding
//!
//! Lists the optional API capabilities a deployment exposes and fetches a
//! single capability's metadata by alias.
//!
//! # Overview
//!
//! Two operations compose against the generic [`Pager`](crate::pagination::Pager)
//! abstraction: [`list`] walks the extensions collection one page at a time
//! and [`get`] fetches one record. [`extract_extensions`] decodes the records
//! carried by a listing page.

mod requests;
mod types;

pub use requests::{extract_extensions, get, list};
pub use types::Extension;
