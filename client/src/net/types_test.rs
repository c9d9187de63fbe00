use super::*;
use serde_json::json;

fn metadata(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("metadata fixture must be an object"),
    }
}

#[test]
fn current_user_response_parses_both_metadata_maps() {
    let body = json!({
        "response": {
            "id": "user_2abc",
            "public_metadata": { "role": "teacher" },
            "unsafe_metadata": { "role": "student", "theme": "dark" }
        },
        "client": null
    });
    let parsed: CurrentUserResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.response.id.as_deref(), Some("user_2abc"));
    assert_eq!(role_attribute(&parsed.response.public_metadata).as_deref(), Some("teacher"));
    assert_eq!(role_attribute(&parsed.response.unsafe_metadata).as_deref(), Some("student"));
}

#[test]
fn current_user_response_defaults_missing_metadata() {
    let parsed: CurrentUserResponse = serde_json::from_value(json!({ "response": {} })).unwrap();
    assert_eq!(parsed.response, ProviderUser::default());
}

#[test]
fn role_attribute_treats_falsy_values_as_absent() {
    for value in [json!(null), json!(""), json!(false), json!(0)] {
        assert_eq!(role_attribute(&metadata(json!({ "role": value.clone() }))), None, "{value}");
    }
    assert_eq!(role_attribute(&Map::new()), None);
}

#[test]
fn role_attribute_keeps_non_string_truthy_values() {
    assert_eq!(role_attribute(&metadata(json!({ "role": 3 }))).as_deref(), Some("3"));
    assert_eq!(role_attribute(&metadata(json!({ "role": true }))).as_deref(), Some("true"));
}

#[test]
fn snapshot_constructors_set_flags() {
    assert_eq!(IdentitySnapshot::loading(), IdentitySnapshot { is_loaded: false, is_signed_in: false, user: None });
    assert!(IdentitySnapshot::signed_out().is_loaded);
    assert!(!IdentitySnapshot::signed_out().is_signed_in);
    let snap = IdentitySnapshot::signed_in(ProviderUser::default());
    assert!(snap.is_loaded && snap.is_signed_in && snap.user.is_some());
}
