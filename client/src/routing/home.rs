//! Landing-page choice for the root path.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use super::{LOGIN_PATH, NavTarget, STUDENT_HOME_PATH, TEACHER_HOME_PATH};
use crate::state::identity::{IdentityState, Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeDecision {
    ShowLoadingPlaceholder,
    Redirect(NavTarget),
}

/// Pick where `/` sends the current user.
///
/// Users without a role, or with a role other than `student`, land on the
/// teacher dashboard.
pub fn resolve_home(identity: &IdentityState) -> HomeDecision {
    match identity {
        IdentityState::Unloaded => HomeDecision::ShowLoadingPlaceholder,
        IdentityState::SignedOut => HomeDecision::Redirect(NavTarget::push(LOGIN_PATH)),
        IdentityState::SignedIn { role } => HomeDecision::Redirect(NavTarget::push(home_path(role.as_ref()))),
    }
}

fn home_path(role: Option<&Role>) -> &'static str {
    match role {
        Some(Role::Student) => STUDENT_HOME_PATH,
        Some(Role::Teacher | Role::Unrecognized(_)) | None => TEACHER_HOME_PATH,
    }
}
