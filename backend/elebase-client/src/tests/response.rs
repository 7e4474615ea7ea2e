// Unit tests for response normalization and error unification.

use super::support::raw_response;

use crate::error::{RequestError, USAGE_LIMIT_INFO_HEADER, USAGE_LIMIT_TIME_HEADER};
use crate::response::{normalize, normalize_response};

use models::{ApiTarget, EchoContext, Headers, HttpMethod, TransportRequest};

use serde_json::{Map, json};

fn sent() -> TransportRequest {
    TransportRequest {
        method: HttpMethod::Post,
        url: "/entries".to_string(),
        headers: Headers::new()
            .with("Authorization", "Basic abc")
            .with("X-Custom", "1"),
        params: Map::new(),
        body: Some(json!({"name": "Park"})),
    }
}

fn context(target: ApiTarget) -> EchoContext {
    EchoContext {
        target,
        path: "entries/".to_string(),
        first: false,
    }
}

#[test]
fn given_data_envelope_when_normalized_then_unwrapped_one_level() {
    let response =
        normalize_response(raw_response(200, json!({"data": {"id": 1, "data": {"x": 1}}})));

    assert_eq!(response.data, json!({"id": 1, "data": {"x": 1}}));
}

#[test]
fn given_non_object_body_when_normalized_then_data_is_empty_object() {
    assert_eq!(normalize_response(raw_response(200, json!(null))).data, json!({}));
    assert_eq!(normalize_response(raw_response(200, json!("text"))).data, json!({}));
}

#[test]
fn given_scalar_data_field_when_normalized_then_body_kept_whole() {
    let response = normalize_response(raw_response(200, json!({"data": 5, "meta": true})));

    assert_eq!(response.data, json!({"data": 5, "meta": true}));
}

#[test]
fn given_sent_request_when_normalized_then_echo_has_lowercase_headers_and_context() {
    let transaction = normalize(
        raw_response(201, json!({"data": {}})),
        &sent(),
        context(ApiTarget::Content),
    );

    let echo = &transaction.request;
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.url, "/entries");
    assert_eq!(echo.context.path, "entries/");
    assert_eq!(echo.body, Some(json!({"name": "Park"})));
    let names: Vec<&str> = echo.headers.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["authorization", "content-type", "x-custom"]);
    assert_eq!(echo.headers.get("content-type"), Some("application/json"));
    assert!(transaction.error.is_none());
}

#[test]
fn given_status_304_when_normalized_then_not_an_error() {
    let transaction = normalize(raw_response(304, json!({})), &sent(), context(ApiTarget::Content));

    assert!(!transaction.is_error());
}

/// **VALUE**: A content API 404 becomes a `Content` error with its id and a
/// message naming it.
///
/// **WHY THIS MATTERS**: Callers branch on `id` (e.g. `not_found`) to decide
/// between "create it" and "give up".
#[test]
fn given_content_error_body_when_normalized_then_content_request_error() {
    let transaction = normalize(
        raw_response(404, json!({"error": {"id": "not_found"}})),
        &sent(),
        context(ApiTarget::Content),
    );

    match transaction.error {
        Some(RequestError::Content {
            status, id, data, message, ..
        }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(id, "not_found");
            assert_eq!(data, None);
            assert!(message.contains("not_found"));
        }
        other => panic!("expected content error, got {other:?}"),
    }
}

#[test]
fn given_content_error_without_id_when_normalized_then_unknown_and_empty_message() {
    let transaction = normalize(
        raw_response(500, json!("oops")),
        &sent(),
        context(ApiTarget::Content),
    );

    match transaction.error {
        Some(RequestError::Content { id, message, .. }) => {
            assert_eq!(id, "unknown");
            assert_eq!(message, "");
        }
        other => panic!("expected content error, got {other:?}"),
    }
}

#[test]
fn given_geo_error_body_when_normalized_then_geo_request_error() {
    let transaction = normalize(
        raw_response(
            400,
            json!({"error": {"code": 12, "info": "bad bbox", "type": "invalid_param"}}),
        ),
        &sent(),
        context(ApiTarget::Geo),
    );

    match transaction.error {
        Some(RequestError::Geo {
            status,
            code,
            info,
            error_type,
            ..
        }) => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(code, "12");
            assert_eq!(info, Some(json!("bad bbox")));
            assert_eq!(error_type, "invalid_param");
        }
        other => panic!("expected geo error, got {other:?}"),
    }
}

#[test]
fn given_geo_error_without_fields_when_normalized_then_defaults() {
    let transaction = normalize(raw_response(503, json!({})), &sent(), context(ApiTarget::Geo));

    match transaction.error {
        Some(RequestError::Geo {
            code, info, error_type, ..
        }) => {
            assert_eq!(code, "unknown");
            assert_eq!(info, None);
            assert_eq!(error_type, "unknown");
        }
        other => panic!("expected geo error, got {other:?}"),
    }
}

/// **VALUE**: Usage-limit headers are copied onto the error when present and
/// leave no key when absent.
///
/// **BUG THIS CATCHES**: Would catch a case-sensitive lookup (transports
/// deliver lowercase names) or inserting empty placeholders.
#[test]
fn given_usage_limit_headers_when_error_built_then_copied_only_if_present() {
    let mut raw = raw_response(429, json!({"error": {"id": "rate_limited"}}));
    raw.headers.insert("x-usage-limit-info", "0/1000");

    let with_info = normalize(raw, &sent(), context(ApiTarget::Content)).error.unwrap();
    let without = normalize(raw_response(429, json!({})), &sent(), context(ApiTarget::Content))
        .error
        .unwrap();

    assert_eq!(with_info.usage_limit_info(), Some("0/1000"));
    assert_eq!(
        with_info
            .headers()
            .get(USAGE_LIMIT_INFO_HEADER)
            .map(String::as_str),
        Some("0/1000")
    );
    assert!(!with_info.headers().contains_key(USAGE_LIMIT_TIME_HEADER));
    assert!(without.headers().is_empty());
    assert!(with_info.is_retryable());
}

/// **VALUE**: Transport defaults sit beneath the per-call headers in the
/// echo, and the per-call value wins a collision.
#[test]
fn given_default_headers_when_layered_then_per_call_headers_win() {
    let defaults = Headers::new()
        .with("Accept", "application/json")
        .with("X-Custom", "default");

    let transaction = normalize(
        raw_response(200, json!({})),
        &sent(),
        context(ApiTarget::Content),
    )
    .with_default_headers(&defaults);

    let headers = &transaction.request.headers;
    assert_eq!(headers.get("accept"), Some("application/json"));
    assert_eq!(headers.get("x-custom"), Some("1"));
    assert_eq!(headers.len(), 4);
}
