use crate::helpers::{TEST_TOKEN, content_client, content_path, content_settings};

use elebase_client::auth::sign_basic;
use elebase_client::{ClientSettings, RequestOptions, SDK_USER_AGENT};

use serde_json::json;
use wiremock::matchers::{
    body_json, header, header_regex, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End-to-end GET: path normalization, default phases, locales,
/// Basic auth and default headers all reach the wire.
///
/// **WHY THIS MATTERS**: Unit tests prove each piece; this proves the pieces
/// survive reqwest, URL joining and query encoding together.
#[tokio::test]
async fn given_content_defaults_when_getting_entries_then_request_carries_them() {
    // GIVEN: A server expecting the fully decorated request
    let server = MockServer::start().await;
    let authorization = sign_basic(TEST_TOKEN, Some("user-1"));
    Mock::given(method("GET"))
        .and(path(content_path("/entries")))
        .and(query_param("phase", "0,2,3"))
        .and(query_param("limit", "5"))
        .and(header("accept-language", "en,fr"))
        .and(header("authorization", authorization.as_str()))
        .and(header("accept", "application/json"))
        .and(header("user-agent", SDK_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"index": [{"id": "e1"}], "total": 1}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = content_client(
        content_settings(&server)
            .with_phases([2, 0, 3])
            .with_locales(["en", " fr"])
            .with_user("user-1"),
    );

    // WHEN: Calling with a sloppy path
    let response = client
        .get("entries/", RequestOptions::new().with_param("limit", 5))
        .await
        .expect("request should succeed");

    // THEN: Envelope is unwrapped one level
    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.data, json!({"index": [{"id": "e1"}], "total": 1}));
}

#[tokio::test]
async fn given_first_mode_when_getting_entries_then_returns_first_item() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(content_path("/entries")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"index": [{"id": 1}, {"id": 2}]}})),
        )
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server));

    let response = client
        .get("/entries", RequestOptions::new().with_first(true))
        .await
        .unwrap();

    assert_eq!(response.data, json!({"id": 1}));
}

#[tokio::test]
async fn given_explicit_phase_when_getting_entries_then_caller_value_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(content_path("/entries")))
        .and(query_param("phase", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server).with_phases([1]));

    client
        .get("/entries", RequestOptions::new().with_param("phase", 4))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_other_path_when_getting_then_no_phase_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(content_path("/assets")))
        .and(query_param_is_missing("phase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server).with_phases([1]));

    let response = client.get("/assets", RequestOptions::new()).await.unwrap();

    assert_eq!(response.data, json!([]));
}

/// **VALUE**: HMAC-signed POST sends the body the signature was computed over.
#[tokio::test]
async fn given_key_pair_when_posting_then_hmac_header_and_json_body_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(content_path("/entries")))
        .and(header_regex(
            "authorization",
            r"^Elebase pub:[0-9a-f]{64}:\d+:user-1$",
        ))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Park"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": "e9"}})))
        .expect(1)
        .mount(&server)
        .await;

    let settings = ClientSettings::new()
        .with_key("pub", "secret")
        .with_project("project-1")
        .with_user("user-1")
        .with_base_url(format!("{}{}", server.uri(), content_path("")));
    let client = content_client(settings);

    let response = client
        .create(
            "/entries",
            RequestOptions::new().with_body(json!({"name": "Park"})),
        )
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 201);
    assert_eq!(response.data, json!({"id": "e9"}));
}

#[tokio::test]
async fn given_configured_and_call_headers_when_sent_then_call_header_wins() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(content_path("/entries/1")))
        .and(header("x-app", "demo"))
        .and(header("accept-language", "es"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = content_client(
        content_settings(&server)
            .with_locales(["en"])
            .with_default_header("X-App", "demo"),
    );

    let response = client
        .update(
            "/entries/1",
            RequestOptions::new()
                .with_body(json!({"name": "x"}))
                .with_header("Accept-Language", "es"),
        )
        .await
        .unwrap();

    // Empty 204 body normalizes to an empty object.
    assert_eq!(response.data, json!({}));
}

/// **VALUE**: A caller-supplied `Content-Type` is the only one on the wire.
///
/// **BUG THIS CATCHES**: The JSON default appended after the caller's
/// header, sending two conflicting values.
#[tokio::test]
async fn given_caller_content_type_when_posting_then_single_caller_value_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(content_path("/entries")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server));

    client
        .post(
            "/entries",
            RequestOptions::new()
                .with_body(json!({"a": 1}))
                .with_header("Content-Type", "application/vnd.custom+json"),
        )
        .await
        .unwrap();

    let received = server.received_requests().await.expect("recording enabled");
    let content_types: Vec<&str> = received[0]
        .headers
        .get_all("content-type")
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();
    assert_eq!(content_types, vec!["application/vnd.custom+json"]);
}

#[tokio::test]
async fn given_root_path_when_getting_then_base_url_requested() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(content_path("")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ok": true}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = content_client(content_settings(&server));

    let response = client.get("/", RequestOptions::new()).await.unwrap();

    assert_eq!(response.data, json!({"ok": true}));
}
