// Unit tests for diagnostics labelling and redaction.

use super::support::raw_response;

use crate::diagnostics::{DiagnosticEntry, Outcome, REDACTED_MASK, label, redact};
use crate::response::normalize;

use models::{ApiTarget, EchoContext, Headers, HttpMethod, RequestEcho, TransportRequest};

use common::HttpStatusCode;

use serde_json::{Map, Value, json};

fn echo(params: Value, body: Option<Value>) -> RequestEcho {
    RequestEcho {
        context: EchoContext {
            target: ApiTarget::Content,
            path: "/entries".to_string(),
            first: false,
        },
        headers: Headers::new().with("authorization", "Basic abc"),
        body,
        method: "GET".to_string(),
        params: match params {
            Value::Object(map) => map,
            _ => Map::new(),
        },
        url: "/entries".to_string(),
    }
}

#[test]
fn given_params_when_labelled_then_sorted_unencoded_query_and_status() {
    let request = echo(json!({"b": 1, "a": "x y"}), None);

    assert_eq!(label(&request, HttpStatusCode(200)), "GET /entries?a=x y&b=1 (200)");
}

#[test]
fn given_no_params_when_labelled_then_no_question_mark() {
    let request = echo(json!({}), None);

    assert_eq!(label(&request, HttpStatusCode(404)), "GET /entries (404)");
}

/// **VALUE**: `pwd` is masked before any sink sees the request.
///
/// **WHY THIS MATTERS**: Login calls carry the user's password in the body;
/// logging it verbatim leaks credentials into log files.
#[test]
fn given_pwd_in_body_when_redacted_then_masked_and_original_untouched() {
    let request = echo(json!({}), Some(json!({"email": "a@b.c", "pwd": "hunter2"})));

    let redacted = redact(&request);

    assert_eq!(
        redacted.body,
        Some(json!({"email": "a@b.c", "pwd": REDACTED_MASK}))
    );
    assert_eq!(request.body, Some(json!({"email": "a@b.c", "pwd": "hunter2"})));
}

#[test]
fn given_body_without_pwd_when_redacted_then_body_unchanged() {
    let body = json!({"email": "a@b.c", "password_hint": "x"});
    let request = echo(json!({}), Some(body.clone()));

    assert_eq!(redact(&request).body, Some(body));
}

#[test]
fn given_authorization_header_when_redacted_then_masked() {
    let redacted = redact(&echo(json!({}), None));

    assert_eq!(redacted.headers.get("authorization"), Some(REDACTED_MASK));
}

#[test]
fn given_error_transaction_when_entry_built_then_failure_outcome_with_redacted_request() {
    let sent = TransportRequest {
        method: HttpMethod::Post,
        url: "/users/login".to_string(),
        headers: Headers::new(),
        params: Map::new(),
        body: Some(json!({"pwd": "hunter2"})),
    };
    let transaction = normalize(
        raw_response(401, json!({"error": {"id": "unauthorized"}})),
        &sent,
        EchoContext {
            target: ApiTarget::Content,
            path: "/users/login".to_string(),
            first: false,
        },
    );

    let entry = DiagnosticEntry::from_transaction(&transaction);

    assert_eq!(entry.label, "POST /users/login (401)");
    assert!(matches!(entry.outcome, Outcome::Failure(_)));
    assert_eq!(entry.request.body, Some(json!({"pwd": REDACTED_MASK})));
    assert_eq!(transaction.request.body, Some(json!({"pwd": "hunter2"})));
}
