//! Authentication gate in front of protected views.
//!
//! Gates on sign-in only. A signed-in user of any role, including one with
//! no role at all, may render any protected view.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use super::{LOGIN_PATH, NavTarget};
use crate::state::identity::IdentityState;

/// What a protected route should do for the current identity snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderDecision<V> {
    ShowLoadingPlaceholder,
    Redirect(NavTarget),
    Render(V),
}

/// Decide whether `view` may render for `identity`.
pub fn resolve<V>(identity: &IdentityState, view: V) -> RenderDecision<V> {
    match identity {
        IdentityState::Unloaded => RenderDecision::ShowLoadingPlaceholder,
        IdentityState::SignedOut => RenderDecision::Redirect(NavTarget::replace(LOGIN_PATH)),
        IdentityState::SignedIn { .. } => RenderDecision::Render(view),
    }
}
