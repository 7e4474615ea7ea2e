use crate::HttpStatusCode;

#[test]
fn given_statuses_around_304_when_classified_then_only_above_304_is_error() {
    assert!(!HttpStatusCode(200).is_error());
    assert!(!HttpStatusCode(304).is_error());
    assert!(HttpStatusCode(305).is_error());
    assert!(HttpStatusCode(404).is_error());
}

#[test]
fn given_rate_limited_status_when_classified_then_retryable_client_error() {
    let status = HttpStatusCode::from(429);

    assert!(status.is_rate_limited());
    assert!(status.is_retryable());
    assert!(status.is_client_error());
    assert!(!status.is_server_error());
}

#[test]
fn given_not_found_when_classified_then_not_retryable() {
    let status = HttpStatusCode(404);

    assert!(!status.is_retryable());
    assert_eq!(status.to_string(), "404");
}
