//! Authentication configuration
//!
//! Supports pre-issued token headers and bearer tokens. Credentials are
//! obtained out of band (an identity service issues the token); this module
//! only attaches them to outgoing requests.

use reqwest::RequestBuilder;

/// Default header for pre-issued cloud tokens
pub const DEFAULT_TOKEN_HEADER: &str = "X-Auth-Token";

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// Pre-issued token placed in a header
    Token {
        /// Header name (defaults to `X-Auth-Token`)
        header_name: Option<String>,
        /// The token value
        token: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Create a token config using the default header
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            header_name: None,
            token: token.into(),
        }
    }

    /// Create a token config with a custom header name
    pub fn token_in_header(header_name: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Token {
            header_name: Some(header_name.into()),
            token: token.into(),
        }
    }

    /// Create a bearer token config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => req,
            Self::Token { header_name, token } => {
                let header = header_name.as_deref().unwrap_or(DEFAULT_TOKEN_HEADER);
                req.header(header, token)
            }
            Self::Bearer { token } => req.bearer_auth(token),
        }
    }
}
