//! Service client implementation

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for a service client
#[derive(Debug, Clone)]
pub struct ServiceClientConfig {
    /// Base endpoint for all requests
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ServiceClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout: Duration::from_secs(30),
            default_headers: HashMap::new(),
            user_agent: format!("stratus-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServiceClientConfig {
    /// Create a new config builder
    pub fn builder() -> ServiceClientConfigBuilder {
        ServiceClientConfigBuilder::default()
    }
}

/// Builder for service client config
#[derive(Default)]
pub struct ServiceClientConfigBuilder {
    config: ServiceClientConfig,
}

impl ServiceClientConfigBuilder {
    /// Set the base endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ServiceClientConfig {
        self.config
    }
}

/// HTTP client bound to a service endpoint and auth configuration
pub struct ServiceClient {
    client: Client,
    config: ServiceClientConfig,
    auth: AuthConfig,
}

impl ServiceClient {
    /// Create a client for an endpoint with the given auth
    pub fn new(endpoint: impl Into<String>, auth: AuthConfig) -> Result<Self> {
        Self::with_config(
            ServiceClientConfig::builder().endpoint(endpoint).build(),
            auth,
        )
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ServiceClientConfig, auth: AuthConfig) -> Result<Self> {
        if config.endpoint.is_empty() {
            return Err(Error::config("endpoint must not be empty"));
        }
        Url::parse(&config.endpoint)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Ok(Self {
            client,
            config,
            auth,
        })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// The configured base endpoint
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Build a full URL from the endpoint and path segments
    pub fn service_url(&self, parts: &[&str]) -> String {
        let base = self.config.endpoint.trim_end_matches('/');
        let path = parts
            .iter()
            .map(|part| part.trim_matches('/'))
            .collect::<Vec<_>>()
            .join("/");
        format!("{base}/{path}")
    }

    /// Make a GET request
    ///
    /// Non-2xx statuses are mapped to [`Error::HttpStatus`] with the
    /// response body attached.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let mut req = self.client.get(url);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        req = self.auth.apply(req);

        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: GET {} ({})", url, status.as_u16());
        Ok(response)
    }

    /// Make a GET request and decode the JSON response body
    ///
    /// A malformed or mismatched body surfaces as [`Error::Decode`].
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.get(url).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::decode(format!("invalid JSON body: {e}")))
    }
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("config", &self.config)
            .field("has_auth", &!matches!(self.auth, AuthConfig::None))
            .finish_non_exhaustive()
    }
}
