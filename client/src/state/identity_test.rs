use super::*;
use serde_json::{Map, Value, json};

fn user(public_role: Option<&str>, unsafe_role: Option<&str>) -> ProviderUser {
    let meta = |role: Option<&str>| -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(role) = role {
            map.insert("role".to_owned(), json!(role));
        }
        map
    };
    ProviderUser { id: Some("user_1".to_owned()), public_metadata: meta(public_role), unsafe_metadata: meta(unsafe_role) }
}

fn signed_in(public_role: Option<&str>, unsafe_role: Option<&str>) -> IdentityState {
    IdentityState::from_snapshot(&IdentitySnapshot::signed_in(user(public_role, unsafe_role)), &RoleLookup::default())
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_is_exact_and_case_sensitive() {
    assert_eq!(Role::parse("teacher"), Role::Teacher);
    assert_eq!(Role::parse("student"), Role::Student);
    assert_eq!(Role::parse("Teacher"), Role::Unrecognized("Teacher".to_owned()));
    assert_eq!(Role::parse("admin").as_str(), "admin");
}

// =============================================================
// IdentityState::from_snapshot
// =============================================================

#[test]
fn unloaded_snapshot_ignores_other_fields() {
    let snap = IdentitySnapshot { is_loaded: false, is_signed_in: true, user: Some(user(Some("student"), None)) };
    assert_eq!(IdentityState::from_snapshot(&snap, &RoleLookup::default()), IdentityState::Unloaded);
}

#[test]
fn loaded_signed_out_snapshot() {
    let state = IdentityState::from_snapshot(&IdentitySnapshot::signed_out(), &RoleLookup::default());
    assert_eq!(state, IdentityState::SignedOut);
    assert!(!state.is_signed_in());
}

#[test]
fn signed_in_without_any_role_is_valid() {
    let state = signed_in(None, None);
    assert_eq!(state, IdentityState::SignedIn { role: None });
    assert!(state.is_signed_in());
    assert!(state.role().is_none());
}

#[test]
fn signed_in_without_user_payload_has_no_role() {
    let snap = IdentitySnapshot { is_loaded: true, is_signed_in: true, user: None };
    assert_eq!(IdentityState::from_snapshot(&snap, &RoleLookup::default()), IdentityState::SignedIn { role: None });
}

// =============================================================
// RoleLookup precedence
// =============================================================

#[test]
fn primary_source_wins_when_both_are_set() {
    assert_eq!(signed_in(Some("student"), Some("teacher")).role(), Some(&Role::Student));
    assert_eq!(signed_in(Some("teacher"), Some("student")).role(), Some(&Role::Teacher));
}

#[test]
fn secondary_source_used_when_primary_missing_or_empty() {
    assert_eq!(signed_in(None, Some("student")).role(), Some(&Role::Student));
    assert_eq!(signed_in(Some(""), Some("student")).role(), Some(&Role::Student));
}

#[test]
fn resolve_reports_which_source_matched() {
    let lookup = RoleLookup::default();
    assert_eq!(lookup.resolve(&user(Some("teacher"), None)), Some((Role::Teacher, RoleSource::PublicMetadata)));
    assert_eq!(lookup.resolve(&user(None, Some("teacher"))), Some((Role::Teacher, RoleSource::UnsafeMetadata)));
    assert_eq!(lookup.resolve(&user(None, None)), None);
}

#[test]
fn public_only_lookup_drops_the_deprecated_fallback() {
    let lookup = RoleLookup::public_only();
    assert_eq!(lookup.sources(), &[RoleSource::PublicMetadata]);
    assert_eq!(lookup.resolve(&user(None, Some("student"))), None);
}

#[test]
fn custom_order_is_respected() {
    let lookup = RoleLookup::new(vec![RoleSource::UnsafeMetadata, RoleSource::PublicMetadata]);
    assert_eq!(lookup.resolve(&user(Some("teacher"), Some("student"))).map(|(r, _)| r), Some(Role::Student));
}

#[test]
fn only_unsafe_metadata_is_deprecated() {
    assert!(RoleSource::UnsafeMetadata.is_deprecated());
    assert!(!RoleSource::PublicMetadata.is_deprecated());
    assert_eq!(RoleSource::UnsafeMetadata.label(), "unsafe_metadata");
}

#[test]
fn lookup_parses_comma_separated_labels() {
    let lookup = RoleLookup::parse(" public_metadata , unsafe_metadata ").unwrap();
    assert_eq!(lookup, RoleLookup::default());
    assert_eq!(lookup.to_list(), "public_metadata,unsafe_metadata");
    assert_eq!(RoleLookup::parse("public_metadata").unwrap(), RoleLookup::public_only());
}

#[test]
fn lookup_parse_rejects_unknown_or_empty_lists() {
    assert_eq!(
        RoleLookup::parse("public_metadata,private_metadata"),
        Err(RoleLookupError::UnknownSource("private_metadata".to_owned()))
    );
    assert_eq!(RoleLookup::parse(" , "), Err(RoleLookupError::Empty));
}
