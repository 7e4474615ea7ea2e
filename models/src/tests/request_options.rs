use crate::RequestOptions;

use serde_json::json;

#[test]
fn given_non_object_params_when_set_then_defaults_to_empty_map() {
    let options = RequestOptions::new().with_params(json!(["not", "a", "map"]));

    assert!(options.params.is_empty());
}

#[test]
fn given_builder_calls_when_chained_then_all_fields_set() {
    let options = RequestOptions::new()
        .with_body(json!({"name": "Park"}))
        .with_param("limit", 10)
        .with_header("X-Trace", "abc")
        .with_locales(["en", "fr"])
        .with_user("user-1")
        .with_first(true);

    assert_eq!(options.body, Some(json!({"name": "Park"})));
    assert_eq!(options.params.get("limit"), Some(&json!(10)));
    assert_eq!(options.headers.get("x-trace"), Some("abc"));
    assert_eq!(options.locales, Some(vec!["en".to_string(), "fr".to_string()]));
    assert_eq!(options.user.as_deref(), Some("user-1"));
    assert!(options.first);
}
