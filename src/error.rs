//! Error types for the Stratus SDK
//!
//! This module defines the error hierarchy for the whole SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Stratus SDK
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ========================================================================
    // HTTP Errors
    // ========================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ========================================================================
    // Decode Errors
    // ========================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Check if this error came from the transport or an HTTP status
    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http(_) | Error::HttpStatus { .. })
    }

    /// Check if this error came from response decoding
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode { .. } | Error::JsonParse(_))
    }
}

/// Result type alias for the Stratus SDK
pub type Result<T> = std::result::Result<T, Error>;
