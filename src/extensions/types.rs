//! Extension record types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata describing an optional API capability exposed by the service
///
/// Decoded straight from the response envelope. Missing fields default to
/// empty values; unexpected fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Extension {
    /// Timestamp of the last update to the extension definition
    #[serde(default)]
    pub updated: String,
    /// Human-readable name
    #[serde(default)]
    pub name: String,
    /// Related link objects, passed through undecoded
    #[serde(default)]
    pub links: Vec<Value>,
    /// Documentation namespace URI
    #[serde(default)]
    pub namespace: String,
    /// Short identifier used to address the extension
    #[serde(default)]
    pub alias: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

/// Envelope for the listing response body
#[derive(Debug, Deserialize)]
pub(super) struct ListEnvelope {
    #[serde(default)]
    pub extensions: Vec<Extension>,
}

/// Envelope for the single-resource response body
#[derive(Debug, Deserialize)]
pub(super) struct GetEnvelope {
    pub extension: Extension,
}
