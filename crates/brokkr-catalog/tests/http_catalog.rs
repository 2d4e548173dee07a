//! Integration tests for the HTTP catalog against a mock API
//!
//! The catalog client is blocking, so it is built and driven on the blocking
//! pool while wiremock serves from the test runtime.

use brokkr_catalog::{is_catalog_application, ApplicationCatalog, HttpCatalog};
use serde_json::json;
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2/kubernetes/applications"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "traefik",
                "version": "2.11",
                "category": "networking",
                "maintainer": "ops@example.com"
            },
            {
                "name": "metrics-server",
                "version": "0.7"
            }
        ])))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_marketplace_applications() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let uri = server.uri();
    let applications = tokio::task::spawn_blocking(move || {
        let catalog = HttpCatalog::new(uri, "test-token")?;
        catalog.list_applications()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(applications.len(), 2);
    assert_eq!(applications[0].name, "traefik");
    assert_eq!(applications[0].category, "networking");
    // Fields the API omits fall back to empty strings
    assert_eq!(applications[1].maintainer, "");
}

#[tokio::test(flavor = "multi_thread")]
async fn server_errors_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/kubernetes/applications"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let catalog = HttpCatalog::new(uri, "test-token")?;
        catalog.list_applications()
    })
    .await
    .unwrap();

    assert!(result.is_err());
}

#[tokio::test(flavor = "multi_thread")]
async fn membership_check_works_over_http() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let uri = server.uri();
    let (known, unknown) = tokio::task::spawn_blocking(move || {
        let catalog = HttpCatalog::new(uri, "test-token").unwrap();
        (
            is_catalog_application("traefik:2.11", &catalog),
            is_catalog_application("linkerd", &catalog),
        )
    })
    .await
    .unwrap();

    assert!(known);
    assert!(!unknown);
}
