//! Region metadata fetch over real HTTP using wiremock.
//!
//! These tests drive `RegionApi` through `ReqwestHttpClient` and check the
//! request it sends, the error messages it produces and its caching.

mod common;

use std::sync::Arc;

use common::*;
use region_selector::adapters::ReqwestHttpClient;
use region_selector::api::RegionApi;
use region_selector::app::App;
use region_selector::error::LoadError;
use region_selector::models::RegionMetadataResponse;
use region_selector::traits::HttpClient;
use region_selector::ui::Viewport;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const METADATA: &str = "/api/v1/regions/metadata";

fn body() -> RegionMetadataResponse {
    RegionMetadataResponse {
        regions: two_regions(),
    }
}

fn api_for(server: &MockServer) -> RegionApi<ReqwestHttpClient> {
    RegionApi::new(ReqwestHttpClient::new(), format!("{}/api/v1", server.uri()))
}

#[tokio::test]
async fn test_fetch_sends_json_get_and_parses_regions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(METADATA))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body()))
        .expect(1)
        .mount(&server)
        .await;

    let data = api_for(&server).fetch_region_metadata().await.unwrap();
    let ids: Vec<&str> = data.regions.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["hongdae", "gangnam"]);
}

#[tokio::test]
async fn test_server_error_maps_to_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(METADATA))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "error": "Failed to load region data" })),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_region_metadata().await.unwrap_err();
    assert_eq!(
        err,
        LoadError::Status {
            status: 500,
            reason: "Internal Server Error".to_string(),
        }
    );
    assert_eq!(err.user_message(), "API 요청 실패: 500 Internal Server Error");
}

#[tokio::test]
async fn test_malformed_body_maps_to_malformed_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(METADATA))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_region_metadata().await.unwrap_err();
    assert!(matches!(err, LoadError::MalformedBody(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_success_is_cached_until_invalidated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(METADATA))
        .respond_with(ResponseTemplate::new(200).set_body_json(body()))
        .expect(2)
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.fetch_region_metadata().await.unwrap();
    api.fetch_region_metadata().await.unwrap();
    api.invalidate();
    api.fetch_region_metadata().await.unwrap();
    // `expect(2)` is verified when the server drops.
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(METADATA))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(METADATA))
        .respond_with(ResponseTemplate::new(200).set_body_json(body()))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert!(api.fetch_region_metadata().await.is_err());
    let data = api.fetch_region_metadata().await.unwrap();
    assert_eq!(data.regions.len(), 2);
}

#[tokio::test]
async fn test_app_mount_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(METADATA))
        .respond_with(ResponseTemplate::new(200).set_body_json(body()))
        .mount(&server)
        .await;

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let api = Arc::new(RegionApi::new(http, format!("{}/api/v1/", server.uri())));
    let mut app = App::new(api, Viewport::new(TERMINAL_WIDTH, TERMINAL_HEIGHT, None));

    app.mount();
    assert!(app.store.state().is_loading);
    pump(&mut app).await;

    assert!(!app.store.state().is_loading);
    assert!(app.store.state().error.is_none());
    assert_eq!(app.quick_select.buttons().len(), 2);
    assert_eq!(app.map.scene().shapes().len(), 2);
}
