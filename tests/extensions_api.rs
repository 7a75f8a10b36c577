//! Integration tests for the extensions API binding
//!
//! Drives the full flow against a mock HTTP server: service client → pager →
//! envelope extraction. The mock only answers GET requests carrying the
//! configured token header, so these tests also pin the wire contract.

use pretty_assertions::assert_eq;
use serde_json::json;
use stratus_sdk::auth::AuthConfig;
use stratus_sdk::client::ServiceClient;
use stratus_sdk::extensions::{self, Extension};
use stratus_sdk::Error;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_ID: &str = "123";

fn service_client(uri: &str) -> ServiceClient {
    ServiceClient::new(uri, AuthConfig::token(TOKEN_ID)).unwrap()
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_extensions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/extensions"))
        .and(header("X-Auth-Token", TOKEN_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "extensions": [
                {
                    "updated": "2013-01-20T00:00:00-00:00",
                    "name": "Neutron Service Type Management",
                    "links": [],
                    "namespace": "http://docs.openstack.org/ext/neutron/service-type/api/v1.0",
                    "alias": "service-type",
                    "description": "API for retrieving service providers for Neutron advanced services"
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = service_client(&mock_server.uri());

    let mut count = 0;
    extensions::list(&client)
        .each_page(|page| {
            count += 1;
            let actual = extensions::extract_extensions(page)?;

            let expected = vec![Extension {
                updated: "2013-01-20T00:00:00-00:00".to_string(),
                name: "Neutron Service Type Management".to_string(),
                links: vec![],
                namespace: "http://docs.openstack.org/ext/neutron/service-type/api/v1.0"
                    .to_string(),
                alias: "service-type".to_string(),
                description: "API for retrieving service providers for Neutron advanced services"
                    .to_string(),
            }];
            assert_eq!(expected, actual);

            Ok(true)
        })
        .await
        .unwrap();

    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_list_empty_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/extensions"))
        .and(header("X-Auth-Token", TOKEN_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"extensions": []})))
        .mount(&mock_server)
        .await;

    let client = service_client(&mock_server.uri());
    let pages = extensions::list(&client).all_pages().await.unwrap();

    assert_eq!(pages.len(), 1);
    assert!(extensions::extract_extensions(&pages[0]).unwrap().is_empty());
}

#[tokio::test]
async fn test_list_requires_token_header() {
    let mock_server = MockServer::start().await;

    // The mock only matches requests carrying the token header
    Mock::given(method("GET"))
        .and(path("/extensions"))
        .and(header("X-Auth-Token", TOKEN_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"extensions": []})))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri(), AuthConfig::None).unwrap();
    let err = extensions::list(&client).all_pages().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

// ============================================================================
// Get Tests
// ============================================================================

#[tokio::test]
async fn test_get_extension() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.0/extensions/agent"))
        .and(header("X-Auth-Token", TOKEN_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "extension": {
                "updated": "2013-02-03T10:00:00-00:00",
                "name": "agent",
                "links": [],
                "namespace": "http://docs.openstack.org/ext/agent/api/v2.0",
                "alias": "agent",
                "description": "The agent management extension."
            }
        })))
        .mount(&mock_server)
        .await;

    let client = service_client(&mock_server.uri());
    let ext = extensions::get(&client, "agent").await.unwrap();

    assert_eq!(ext.updated, "2013-02-03T10:00:00-00:00");
    assert_eq!(ext.name, "agent");
    assert_eq!(ext.namespace, "http://docs.openstack.org/ext/agent/api/v2.0");
    assert_eq!(ext.alias, "agent");
    assert_eq!(ext.description, "The agent management extension.");
}

#[tokio::test]
async fn test_get_requires_token_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.0/extensions/agent"))
        .and(header("X-Auth-Token", TOKEN_ID))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"extension": {}})))
        .mount(&mock_server)
        .await;

    let client = ServiceClient::new(mock_server.uri(), AuthConfig::None).unwrap();
    let err = extensions::get(&client, "agent").await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}
