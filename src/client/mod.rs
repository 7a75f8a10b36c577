//! Service client module
//!
//! Provides a reqwest-backed HTTP client bound to a service endpoint and an
//! auth configuration. One request per call; non-2xx statuses and malformed
//! bodies are mapped to typed errors here.

mod service;

pub use service::{ServiceClient, ServiceClientConfig, ServiceClientConfigBuilder};
