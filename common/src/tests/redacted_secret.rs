use crate::RedactedSecret;

/// **VALUE**: Verifies secrets never appear in Debug or Display output.
///
/// **WHY THIS MATTERS**: Client configs are logged with `{:?}` while debugging.
/// A token or private key in that output is a credential leak.
#[test]
fn given_secret_when_formatted_then_value_is_hidden() {
    let secret = RedactedSecret::new("token", "super-secret-token");

    let debug = format!("{secret:?}");
    let display = secret.to_string();

    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("token"));
    assert!(!display.contains("super-secret-token"));
}

#[test]
fn given_secret_when_exposed_then_returns_raw_value() {
    let secret = RedactedSecret::new("private key", "abc123");

    assert_eq!(secret.expose(), "abc123");
    assert_eq!(secret.label(), "private key");
    assert!(!secret.is_empty());
}

/// **BUG THIS CATCHES**: Would catch a derived `Serialize` sneaking back in and
/// writing the secret into a JSON diagnostics dump.
#[test]
fn given_secret_when_serialized_then_refuses() {
    let secret = RedactedSecret::new("token", "abc123");

    let result = serde_json::to_string(&secret);

    let err = result.expect_err("serialization must be refused");
    assert!(err.to_string().contains("expose()"));
}
