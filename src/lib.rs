//! # Stratus SDK
//!
//! A minimal, Rust-native client for OpenStack-compatible cloud APIs.
//!
//! ## Features
//!
//! - **Service Client**: reqwest-backed HTTP client bound to a service
//!   endpoint and auth token
//! - **Token Auth**: pre-issued token headers (`X-Auth-Token`) and bearer
//!   tokens
//! - **Pagination**: restartable, lazy page sequences over collection
//!   endpoints
//! - **Extensions API**: list available API extensions and fetch a single
//!   extension by alias
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stratus_sdk::auth::AuthConfig;
//! use stratus_sdk::client::ServiceClient;
//! use stratus_sdk::extensions;
//!
//! #[tokio::main]
//! async fn main() -> stratus_sdk::Result<()> {
//!     let client = ServiceClient::new(
//!         "https://cloud.example.com/",
//!         AuthConfig::token("my-token"),
//!     )?;
//!
//!     // Walk the extensions collection one page at a time
//!     extensions::list(&client)
//!         .each_page(|page| {
//!             for ext in extensions::extract_extensions(page)? {
//!                 println!("{} ({})", ext.name, ext.alias);
//!             }
//!             Ok(true)
//!         })
//!         .await?;
//!
//!     // Fetch a single extension by alias
//!     let agent = extensions::get(&client, "agent").await?;
//!     println!("{}", agent.description);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                  Extensions API                  │
//! │   list() → Pager     get(alias) → Extension      │
//! └──────────────────────────────────────────────────┘
//!                         │
//! ┌───────────┬───────────┴───────────┬──────────────┐
//! │   Auth    │     Service Client    │  Pagination  │
//! ├───────────┼───────────────────────┼──────────────┤
//! │ Token     │ GET / status mapping  │ Single Page  │
//! │ Bearer    │ JSON decoding         │ Next Link    │
//! └───────────┴───────────────────────┴──────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Authentication configuration
pub mod auth;

/// Service client bound to an endpoint and auth token
pub mod client;

/// Lazy page sequences over paginated collections
pub mod pagination;

/// Extensions API binding
pub mod extensions;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use auth::AuthConfig;
pub use client::ServiceClient;
pub use extensions::Extension;
pub use pagination::{Page, Pager};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
