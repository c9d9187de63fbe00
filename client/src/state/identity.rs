//! Identity state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider owns sign-in state and user attributes. The shell
//! only reads snapshots of it, folded into [`IdentityState`] so the route
//! guards can match on three explicit cases instead of nullable flags.
//!
//! ROLE LOOKUP
//! ===========
//! Roles are read from an ordered list of attribute sources; the first
//! non-empty value wins. `unsafe_metadata` is a legacy source kept only for
//! accounts created before roles moved to `public_metadata`.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::{IdentitySnapshot, ProviderUser, role_attribute};

/// Role attribute of an authenticated user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Student,
    /// Any value other than `teacher` or `student`, kept verbatim.
    Unrecognized(String),
}

impl Role {
    /// Exact, case-sensitive parse of the raw attribute value.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "teacher" => Self::Teacher,
            "student" => Self::Student,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// A user attribute map that may carry a `role` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleSource {
    PublicMetadata,
    /// Deprecated: writable by the browser, so never authoritative.
    UnsafeMetadata,
}

impl RoleSource {
    pub fn is_deprecated(self) -> bool {
        matches!(self, Self::UnsafeMetadata)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::PublicMetadata => "public_metadata",
            Self::UnsafeMetadata => "unsafe_metadata",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "public_metadata" => Some(Self::PublicMetadata),
            "unsafe_metadata" => Some(Self::UnsafeMetadata),
            _ => None,
        }
    }

    fn read(self, user: &ProviderUser) -> Option<String> {
        match self {
            Self::PublicMetadata => role_attribute(&user.public_metadata),
            Self::UnsafeMetadata => role_attribute(&user.unsafe_metadata),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleLookupError {
    #[error("unknown role source: {0:?}")]
    UnknownSource(String),
    #[error("role source list is empty")]
    Empty,
}

/// Ordered role-attribute precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleLookup {
    sources: Vec<RoleSource>,
}

impl Default for RoleLookup {
    fn default() -> Self {
        Self { sources: vec![RoleSource::PublicMetadata, RoleSource::UnsafeMetadata] }
    }
}

impl RoleLookup {
    pub fn new(sources: Vec<RoleSource>) -> Self {
        Self { sources }
    }

    /// Precedence with the deprecated fallback removed.
    pub fn public_only() -> Self {
        Self { sources: vec![RoleSource::PublicMetadata] }
    }

    /// Parse a comma-separated list such as `public_metadata,unsafe_metadata`.
    ///
    /// # Errors
    ///
    /// Returns a [`RoleLookupError`] for an unknown label or an empty list.
    pub fn parse(raw: &str) -> Result<Self, RoleLookupError> {
        let sources = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| RoleSource::parse(part).ok_or_else(|| RoleLookupError::UnknownSource(part.to_owned())))
            .collect::<Result<Vec<_>, _>>()?;
        if sources.is_empty() {
            return Err(RoleLookupError::Empty);
        }
        Ok(Self { sources })
    }

    /// Inverse of [`RoleLookup::parse`].
    pub fn to_list(&self) -> String {
        self.sources.iter().map(|s| s.label()).collect::<Vec<_>>().join(",")
    }

    pub fn sources(&self) -> &[RoleSource] {
        &self.sources
    }

    /// Resolve the user's role, returning the source it came from.
    pub fn resolve(&self, user: &ProviderUser) -> Option<(Role, RoleSource)> {
        self.sources.iter().find_map(|&source| {
            let raw = source.read(user)?;
            if source.is_deprecated() {
                log::warn!("role {raw:?} read from deprecated {} attribute", source.label());
            }
            Some((Role::parse(&raw), source))
        })
    }
}

/// Authentication state as seen by the route guards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum IdentityState {
    /// The provider has not reported yet.
    #[default]
    Unloaded,
    SignedOut,
    /// `role` is `None` when no source carries one; that is not an error.
    SignedIn { role: Option<Role> },
}

impl IdentityState {
    /// Fold a provider snapshot into identity state using `lookup` for roles.
    pub fn from_snapshot(snapshot: &IdentitySnapshot, lookup: &RoleLookup) -> Self {
        if !snapshot.is_loaded {
            return Self::Unloaded;
        }
        if !snapshot.is_signed_in {
            return Self::SignedOut;
        }
        let role = snapshot
            .user
            .as_ref()
            .and_then(|user| lookup.resolve(user))
            .map(|(role, _)| role);
        Self::SignedIn { role }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    pub fn role(&self) -> Option<&Role> {
        match self {
            Self::SignedIn { role } => role.as_ref(),
            _ => None,
        }
    }
}
