use crate::helpers::{content_client, content_path, content_settings, geo_client};

use elebase_client::{ClientError, RequestError, RequestOptions, TransportError};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A content error body becomes a typed error carrying the id,
/// the detail data and the usage-limit headers.
///
/// **BUG THIS CATCHES**: Losing the usage-limit headers leaves callers
/// unable to back off after a rate limit.
#[tokio::test]
async fn given_content_404_when_getting_then_request_error_has_id_and_usage_headers() {
    // GIVEN: A not-found answer with usage headers
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(content_path("/entries/missing")))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Usage-Limit-Info", "99")
                .insert_header("X-Usage-Limit-Time", "3600")
                .set_body_json(json!({"error": {"id": "not_found", "data": {"entry": "missing"}}})),
        )
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server));

    // WHEN
    let error = client
        .get("/entries/missing", RequestOptions::new())
        .await
        .expect_err("404 must fail");

    // THEN
    let request_error = error.request_error().expect("should be a request error");
    assert_eq!(request_error.status().as_u16(), 404);
    assert_eq!(request_error.usage_limit_info(), Some("99"));
    assert_eq!(request_error.usage_limit_time(), Some("3600"));
    match request_error {
        RequestError::Content {
            id, data, message, ..
        } => {
            assert_eq!(id, "not_found");
            assert_eq!(data.as_ref(), Some(&json!({"entry": "missing"})));
            assert!(message.starts_with("API error: "));
        }
        other => panic!("Expected content error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_geo_error_body_when_getting_then_geo_error_has_code_and_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/places"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 1029, "info": "slow down", "type": "rate_limit"}
        })))
        .mount(&server)
        .await;

    let client = geo_client(&server);

    let error = client
        .get("/places", RequestOptions::new())
        .await
        .unwrap_err();

    assert!(error.is_retryable());
    match error.request_error() {
        Some(RequestError::Geo {
            code,
            info,
            error_type,
            ..
        }) => {
            assert_eq!(code, "1029");
            assert_eq!(info.as_ref(), Some(&json!("slow down")));
            assert_eq!(error_type, "rate_limit");
        }
        other => panic!("Expected geo error, got {other:?}"),
    }
}

/// **VALUE**: A configured timeout surfaces as a retryable transport error.
#[tokio::test]
async fn given_slow_server_when_timeout_elapses_then_transport_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server).with_timeout_ms(100));

    let error = client
        .get("/entries", RequestOptions::new())
        .await
        .unwrap_err();

    assert!(
        matches!(error, ClientError::Transport(TransportError::Timeout { .. })),
        "Expected timeout, got {error:?}"
    );
    assert!(error.is_retryable());
}

/// **BUG THIS CATCHES**: Validating after sending would hit the service
/// with bodiless writes and absolute URLs.
#[tokio::test]
async fn given_invalid_calls_when_sent_then_rejected_before_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server));

    let missing_body = client.post("/entries", RequestOptions::new()).await;
    let absolute_path = client
        .get("https://elsewhere.test/entries", RequestOptions::new())
        .await;
    let blank_path = client.get("   ", RequestOptions::new()).await;

    assert!(matches!(missing_body, Err(ClientError::Validation(_))));
    assert!(matches!(absolute_path, Err(ClientError::Validation(_))));
    assert!(matches!(blank_path, Err(ClientError::Validation(_))));
}
