use crate::helpers::{TEST_TOKEN, geo_client};

use elebase_client::RequestOptions;

use serde_json::json;
use wiremock::matchers::{body_json, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Geo reads authenticate through the `token` query parameter.
///
/// **BUG THIS CATCHES**: Sending an Authorization header instead, which the
/// geo API ignores.
#[tokio::test]
async fn given_geo_client_when_getting_then_token_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/places/search"))
        .and(query_param("token", TEST_TOKEN))
        .and(query_param("q", "park"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"name": "Central"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = geo_client(&server);

    let response = client
        .get("places/search", RequestOptions::new().with_param("q", "park"))
        .await
        .unwrap();

    assert_eq!(response.data, json!([{"name": "Central"}]));
}

#[tokio::test]
async fn given_geo_client_when_posting_then_token_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/places"))
        .and(body_json(json!({"name": "Pier", "token": TEST_TOKEN})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let client = geo_client(&server);

    let response = client
        .post(
            "/places",
            RequestOptions::new().with_body(json!({"name": "Pier"})),
        )
        .await
        .unwrap();

    // No data envelope: the body is kept as-is.
    assert_eq!(response.data, json!({"id": 7}));
}

#[tokio::test]
async fn given_geo_client_when_deleting_then_token_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/places/7"))
        .and(query_param("token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = geo_client(&server);

    client
        .delete("/places/7", RequestOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn given_geo_client_when_sent_then_sdk_headers_present() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header_exists("user-agent"))
        .and(header_exists("accept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    geo_client(&server)
        .get("/ping", RequestOptions::new())
        .await
        .unwrap();
}
