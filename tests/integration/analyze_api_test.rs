// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers;
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_analyze_relays_report_with_derived_data() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("url", "https://example.com/"))
        .and(query_param("key", "test-key"))
        .and(query_param("strategy", "desktop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::sample_report_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let server =
        helpers::spawn_server(&helpers::pagespeed_settings(&upstream.uri(), Some("test-key")))
            .await;

    let response = server
        .post("/v1/analyze")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    // The raw report is relayed unchanged
    assert_eq!(
        body["results"]["lighthouseResult"]["categories"]["performance"]["score"],
        json!(0.95)
    );
    // Derived presentation data rides along
    assert_eq!(body["performance"]["color"], json!("good"));
    assert_eq!(body["suggestions"], json!(["Enable text compression"]));
    assert_eq!(body["metrics"][0]["id"], json!("first-contentful-paint"));
    assert_eq!(body["metrics"][0]["color"], json!("medium"));
    assert_eq!(body["metrics"][0]["display_value"], json!("1.8 s"));
}

#[tokio::test]
async fn test_analyze_rejects_scheme_less_url_without_upstream_call() {
    let upstream = MockServer::start().await;

    let server =
        helpers::spawn_server(&helpers::pagespeed_settings(&upstream.uri(), Some("test-key")))
            .await;

    let response = server
        .post("/v1/analyze")
        .json(&json!({ "url": "example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("http://"));

    let requests = upstream.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_analyze_rejects_missing_url() {
    let upstream = MockServer::start().await;
    let server =
        helpers::spawn_server(&helpers::pagespeed_settings(&upstream.uri(), Some("test-key")))
            .await;

    let response = server.post("/v1/analyze").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_without_credential_is_a_server_error() {
    let upstream = MockServer::start().await;
    let server = helpers::spawn_server(&helpers::pagespeed_settings(&upstream.uri(), None)).await;

    let response = server
        .post("/v1/analyze")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("configuration error"));

    // The credential check happens before any outbound call
    let requests = upstream.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_analyze_relays_upstream_status_and_message() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quota exceeded" }
        })))
        .mount(&upstream)
        .await;

    let server =
        helpers::spawn_server(&helpers::pagespeed_settings(&upstream.uri(), Some("test-key")))
            .await;

    let response = server
        .post("/v1/analyze")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let body: Value = response.json();
    assert_eq!(body["error"], json!("quota exceeded"));
}

#[tokio::test]
async fn test_analyze_unreachable_upstream_is_a_server_error() {
    // Nothing listens on this port
    let server =
        helpers::spawn_server(&helpers::pagespeed_settings("http://127.0.0.1:9", Some("test-key")))
            .await;

    let response = server
        .post("/v1/analyze")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("try again"));
}

#[tokio::test]
async fn test_analyze_rejects_non_post_methods() {
    let upstream = MockServer::start().await;
    let server =
        helpers::spawn_server(&helpers::pagespeed_settings(&upstream.uri(), Some("test-key")))
            .await;

    let response = server.get("/v1/analyze").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}
