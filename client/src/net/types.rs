//! Identity-provider DTOs for the provider/client boundary.
//!
//! DESIGN
//! ======
//! Only the fields the shell reads are modelled. Metadata maps stay as raw
//! JSON because the provider lets any client write arbitrary keys into them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;
use serde_json::{Map, Value};

/// A signed-in user as returned by the provider's current-user endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ProviderUser {
    #[serde(default)]
    pub id: Option<String>,
    /// Server-writable attributes, readable by the browser.
    #[serde(default)]
    pub public_metadata: Map<String, Value>,
    /// Browser-writable attributes. Only read as a legacy role fallback.
    #[serde(default)]
    pub unsafe_metadata: Map<String, Value>,
}

/// Envelope around the current-user payload.
#[derive(Clone, Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub response: ProviderUser,
}

/// Point-in-time view of the provider's session state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentitySnapshot {
    pub is_loaded: bool,
    pub is_signed_in: bool,
    pub user: Option<ProviderUser>,
}

impl IdentitySnapshot {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn signed_out() -> Self {
        Self { is_loaded: true, is_signed_in: false, user: None }
    }

    pub fn signed_in(user: ProviderUser) -> Self {
        Self { is_loaded: true, is_signed_in: true, user: Some(user) }
    }
}

/// Read `role` out of a metadata map.
///
/// Missing, `null`, empty-string, `false` and zero values count as absent so
/// the next lookup tier gets a chance; any other non-string value is kept in
/// its JSON form and later treated as an unrecognized role.
pub fn role_attribute(metadata: &Map<String, Value>) -> Option<String> {
    match metadata.get("role")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
