// Copyright (c) 2025 Speedrs Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers;
use speedrs::domain::scoring::{ScoringError, ScoringProvider};
use speedrs::infrastructure::pagespeed::client::PageSpeedClient;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_single_outbound_call_with_url_embedded() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("url", "https://example.com/pricing"))
        .and(query_param("strategy", "desktop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::sample_report_body()))
        .expect(1)
        .mount(&upstream)
        .await;

    let client = PageSpeedClient::new(&helpers::pagespeed_settings(
        &upstream.uri(),
        Some("test-key"),
    ))
    .unwrap();

    let report = client.analyze("https://example.com/pricing").await.unwrap();
    assert!(report.category_score("performance").is_some());
    assert_eq!(client.name(), "pagespeed");
    // .expect(1) verifies exactly one call on drop
}

#[tokio::test]
async fn test_invalid_input_short_circuits_before_network() {
    let upstream = MockServer::start().await;
    let client = PageSpeedClient::new(&helpers::pagespeed_settings(
        &upstream.uri(),
        Some("test-key"),
    ))
    .unwrap();

    let err = client.analyze("example.com").await.unwrap_err();
    assert!(matches!(err, ScoringError::InvalidInput(_)));

    let requests = upstream.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_missing_credential_is_a_configuration_error() {
    let upstream = MockServer::start().await;
    let client =
        PageSpeedClient::new(&helpers::pagespeed_settings(&upstream.uri(), None)).unwrap();

    let err = client.analyze("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScoringError::Configuration));

    // Empty keys count as missing too
    let client =
        PageSpeedClient::new(&helpers::pagespeed_settings(&upstream.uri(), Some(""))).unwrap();
    let err = client.analyze("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScoringError::Configuration));
}

#[tokio::test]
async fn test_transport_failure_maps_to_upstream_unavailable() {
    let client = PageSpeedClient::new(&helpers::pagespeed_settings(
        "http://127.0.0.1:9",
        Some("test-key"),
    ))
    .unwrap();

    let err = client.analyze("https://example.com").await.unwrap_err();
    assert!(matches!(err, ScoringError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_upstream_error_without_body_gets_generic_message() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let client = PageSpeedClient::new(&helpers::pagespeed_settings(
        &upstream.uri(),
        Some("test-key"),
    ))
    .unwrap();

    match client.analyze("https://example.com").await.unwrap_err() {
        ScoringError::Upstream { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("scoring service"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}
