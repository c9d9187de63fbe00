//! Identity-provider configuration shared by the server and the WASM client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only required startup parameter is the provider's publishable key.
//! The server validates it before binding a port; the browser re-reads it
//! from a `<meta>` tag that the SSR shell writes into `<head>`.
//!
//! KEY FORMAT
//! ==========
//! `pk_test_<base64>` or `pk_live_<base64>`, where the payload decodes to the
//! provider's frontend API host followed by a literal `$`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::state::identity::RoleLookup;

/// `<meta name=...>` carrying the publishable key into the browser.
pub const PUBLISHABLE_KEY_META: &str = "identity-publishable-key";
/// `<meta name=...>` carrying the hosted sign-in page URL.
pub const SIGN_IN_URL_META: &str = "identity-sign-in-url";
/// `<meta name=...>` carrying the hosted sign-up page URL.
pub const SIGN_UP_URL_META: &str = "identity-sign-up-url";
/// `<meta name=...>` carrying the role-attribute precedence list.
pub const ROLE_SOURCES_META: &str = "identity-role-sources";

const KEY_PREFIXES: [&str; 2] = ["pk_test_", "pk_live_"];

// Provider keys are emitted both with and without trailing `=` padding.
const KEY_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityKeyError {
    #[error("missing identity publishable key")]
    Missing,
    #[error("identity publishable key must start with pk_test_ or pk_live_")]
    BadPrefix,
    #[error("identity publishable key payload is not valid base64")]
    BadEncoding,
    #[error("identity publishable key does not encode a frontend API host")]
    BadHost,
}

/// Where the identity provider lives, derived from its publishable key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub publishable_key: String,
    /// Frontend API host, e.g. `happy-cat-12.clerk.accounts.dev`.
    pub frontend_api: String,
    pub sign_in_url: String,
    pub sign_up_url: String,
    /// Which user attributes carry the role, in precedence order.
    pub role_lookup: RoleLookup,
}

impl IdentityConfig {
    /// Validate a publishable key and derive the provider endpoints from it.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityKeyError`] when the key is blank, has an unknown
    /// prefix, or does not decode to a plausible host.
    pub fn from_publishable_key(key: &str) -> Result<Self, IdentityKeyError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(IdentityKeyError::Missing);
        }
        let payload = KEY_PREFIXES
            .iter()
            .find_map(|prefix| key.strip_prefix(prefix))
            .ok_or(IdentityKeyError::BadPrefix)?;
        let frontend_api = decode_frontend_api(payload)?;

        Ok(Self {
            publishable_key: key.to_owned(),
            sign_in_url: format!("https://{frontend_api}/sign-in"),
            sign_up_url: format!("https://{frontend_api}/sign-up"),
            frontend_api,
            role_lookup: RoleLookup::default(),
        })
    }

    /// Replace the derived sign-in URL; blank values are ignored.
    #[must_use]
    pub fn with_sign_in_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.sign_in_url = url.to_owned();
        }
        self
    }

    /// Replace the derived sign-up URL; blank values are ignored.
    #[must_use]
    pub fn with_sign_up_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.sign_up_url = url.to_owned();
        }
        self
    }

    #[must_use]
    pub fn with_role_lookup(mut self, lookup: RoleLookup) -> Self {
        self.role_lookup = lookup;
        self
    }

    /// Current-user endpoint on the provider's frontend API.
    pub fn current_user_url(&self) -> String {
        format!("https://{}/v1/me", self.frontend_api)
    }

    /// Whether this key belongs to a development instance.
    pub fn is_development(&self) -> bool {
        self.publishable_key.starts_with("pk_test_")
    }
}

fn decode_frontend_api(payload: &str) -> Result<String, IdentityKeyError> {
    let bytes = KEY_ENGINE
        .decode(payload)
        .map_err(|_| IdentityKeyError::BadEncoding)?;
    let decoded = String::from_utf8(bytes).map_err(|_| IdentityKeyError::BadEncoding)?;
    let host = decoded.strip_suffix('$').ok_or(IdentityKeyError::BadHost)?;
    if host.is_empty() || host.contains(|c: char| c.is_whitespace() || c == '/' || c == '$') {
        return Err(IdentityKeyError::BadHost);
    }
    Ok(host.to_owned())
}
