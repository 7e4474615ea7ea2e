use crate::Headers;

/// **VALUE**: Verifies header names compare case-insensitively.
///
/// **WHY THIS MATTERS**: Caller overrides must replace builder-set headers
/// whatever casing the caller used, or the request would carry two
/// `Authorization` headers.
#[test]
fn given_mixed_case_names_when_inserted_then_last_write_wins() {
    let mut headers = Headers::new();
    headers.insert("Authorization", "Basic one");
    let replaced = headers.insert("AUTHORIZATION", "Basic two");

    assert_eq!(replaced.as_deref(), Some("Basic one"));
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("authorization"), Some("Basic two"));
}

#[test]
fn given_two_maps_when_merged_then_other_wins_on_collision() {
    let mut base = Headers::new()
        .with("Accept-Language", "en")
        .with("X-Keep", "yes");
    let overrides = Headers::new().with("accept-language", "fr");

    base.merge(&overrides);

    assert_eq!(base.get("Accept-Language"), Some("fr"));
    assert_eq!(base.get("x-keep"), Some("yes"));
}

#[test]
fn given_json_object_when_deserialized_then_names_are_lowercased() {
    let headers: Headers = serde_json::from_str(r#"{"X-Custom": "1"}"#).unwrap();

    assert_eq!(headers.iter().collect::<Vec<_>>(), vec![("x-custom", "1")]);
}
