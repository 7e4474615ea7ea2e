use crate::{ApiTarget, ApiVersion, HttpMethod, ModelError, Phase};

use std::str::FromStr;

/// **VALUE**: Verifies phases outside 0-4 are rejected.
///
/// **WHY THIS MATTERS**: The phase filter is a closed set on the server. An
/// out-of-range default would be silently injected into every `/entries` call.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the range check or a
/// negative value wrapping into a valid `u8`.
#[test]
fn given_out_of_range_phase_when_converted_then_returns_validation_error() {
    for invalid in [-1_i64, 5, 256] {
        match Phase::try_from(invalid) {
            Err(ModelError::Validation { message, .. }) => {
                assert!(message.contains(&invalid.to_string()));
            }
            other => panic!("expected validation error for {invalid}, got {other:?}"),
        }
    }
}

#[test]
fn given_phases_when_joined_then_produces_comma_list() {
    let phases: Vec<Phase> = [0_u8, 2, 3]
        .into_iter()
        .map(|p| Phase::try_from(p).unwrap())
        .collect();

    assert_eq!(Phase::join(&phases), "0,2,3");
    assert_eq!(Phase::join(&[]), "");
}

#[test]
fn given_phase_json_when_deserialized_then_validates() {
    let ok: Vec<Phase> = serde_json::from_str("[4, 1]").unwrap();
    assert_eq!(ok.iter().map(Phase::value).collect::<Vec<_>>(), vec![4, 1]);

    let err = serde_json::from_str::<Vec<Phase>>("[7]");
    assert!(err.is_err());
}

#[test]
fn given_lowercase_method_when_parsed_then_matches_verb() {
    assert_eq!(HttpMethod::from_str("get").unwrap(), HttpMethod::Get);
    assert_eq!(HttpMethod::from_str("Delete").unwrap(), HttpMethod::Delete);
    assert!(HttpMethod::from_str("PATCH").is_err());
}

#[test]
fn given_methods_when_checked_then_only_post_and_put_require_body() {
    assert!(HttpMethod::Post.requires_body());
    assert!(HttpMethod::Put.requires_body());
    assert!(!HttpMethod::Get.requires_body());
    assert!(!HttpMethod::Delete.requires_body());
}

#[test]
fn given_version_strings_when_parsed_then_only_v1_supported() {
    assert_eq!(ApiVersion::from_str("v1").unwrap(), ApiVersion::V1);
    assert_eq!(ApiVersion::default().to_string(), "v1");

    match ApiVersion::from_str("v2") {
        Err(ModelError::UnknownVariant { kind, value, .. }) => {
            assert_eq!(kind, "API version");
            assert_eq!(value, "v2");
        }
        other => panic!("expected unknown variant, got {other:?}"),
    }
}

#[test]
fn given_legacy_api_name_when_parsed_then_maps_to_content_target() {
    assert_eq!(ApiTarget::from_str("api").unwrap(), ApiTarget::Content);
    assert_eq!(ApiTarget::from_str("geo").unwrap(), ApiTarget::Geo);
}
