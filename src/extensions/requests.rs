//! List and get operations for the extensions API

use super::types::{Extension, GetEnvelope, ListEnvelope};
use crate::client::ServiceClient;
use crate::error::{Error, Result};
use crate::pagination::{Page, Pager};
use tracing::debug;

/// List the extensions the deployment exposes
///
/// The collection fits in a single response; the pager still yields it as a
/// lazy page sequence so callers drive extraction per page.
pub fn list(client: &ServiceClient) -> Pager<'_> {
    Pager::new(client, list_url(client))
}

/// Fetch a single extension by alias
pub async fn get(client: &ServiceClient, alias: &str) -> Result<Extension> {
    debug!("Fetching extension {}", alias);
    let envelope: GetEnvelope = client.get_json(&get_url(client, alias)).await?;
    Ok(envelope.extension)
}

/// Decode the extension records carried by a listing page
///
/// An absent or empty `extensions` array yields an empty vec.
pub fn extract_extensions(page: &Page) -> Result<Vec<Extension>> {
    let envelope: ListEnvelope = serde_json::from_value(page.body.clone())
        .map_err(|e| Error::decode(format!("extensions listing: {e}")))?;
    Ok(envelope.extensions)
}

fn list_url(client: &ServiceClient) -> String {
    client.service_url(&["extensions"])
}

fn get_url(client: &ServiceClient, alias: &str) -> String {
    client.service_url(&["v2.0", "extensions", alias])
}
