//! Identity-provider client.
//!
//! Client-side (hydrate): one credentialed `GET` against the provider's
//! current-user endpoint via `gloo-net`.
//! Server-side (SSR): always reports "not loaded"; the browser resolves the
//! real state after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Any failure to reach the provider is reported as signed out so protected
//! routes fall back to the login redirect instead of hanging on a spinner.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::types::IdentitySnapshot;
use crate::config::IdentityConfig;

/// Map a provider HTTP status to whether the caller is signed in.
///
/// `None` means the status carries no verdict (e.g. a 5xx) and the caller
/// should treat it as a failed lookup.
pub fn signed_in_from_status(status: u16) -> Option<bool> {
    match status {
        200..=299 => Some(true),
        401 | 403 | 404 => Some(false),
        _ => None,
    }
}

/// Fetch the current identity snapshot from the provider.
pub async fn fetch_identity(config: &IdentityConfig) -> IdentitySnapshot {
    #[cfg(feature = "hydrate")]
    {
        use super::types::CurrentUserResponse;

        let url = config.current_user_url();
        let resp = match gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("identity provider unreachable: {e}");
                return IdentitySnapshot::signed_out();
            }
        };

        match signed_in_from_status(resp.status()) {
            Some(true) => match resp.json::<CurrentUserResponse>().await {
                Ok(body) => IdentitySnapshot::signed_in(body.response),
                Err(e) => {
                    log::warn!("identity provider returned malformed user: {e}");
                    IdentitySnapshot::signed_out()
                }
            },
            Some(false) => IdentitySnapshot::signed_out(),
            None => {
                log::warn!("identity provider returned status {}", resp.status());
                IdentitySnapshot::signed_out()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        IdentitySnapshot::loading()
    }
}
