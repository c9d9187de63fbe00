//! Navigation decisions: route lookup, authentication gate, home redirect,
//! and header visibility.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of the current path and identity
//! snapshot. Components in `app` re-run these on every render, so a change
//! in identity state is picked up without any cached decision to invalidate.


pub mod access;
pub mod home;
pub mod shell;
pub mod table;

use access::RenderDecision;
use home::{HomeDecision, resolve_home};
use shell::{HeaderVisibility, header_visibility};
use table::{RouteTable, ViewId};

use crate::state::identity::IdentityState;

pub const LOGIN_PATH: &str = "/login";
pub const TEACHER_HOME_PATH: &str = "/dashboard";
pub const STUDENT_HOME_PATH: &str = "/student-dashboard";

/// A navigation the shell should perform instead of rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub path: &'static str,
    /// Replace the current history entry so "back" skips the gated page.
    pub replace: bool,
}

impl NavTarget {
    pub const fn push(path: &'static str) -> Self {
        Self { path, replace: false }
    }

    pub const fn replace(path: &'static str) -> Self {
        Self { path, replace: true }
    }

    pub fn navigate_options(self) -> leptos_router::NavigateOptions {
        leptos_router::NavigateOptions { replace: self.replace, ..Default::default() }
    }
}

impl<V> From<HomeDecision> for RenderDecision<V> {
    fn from(decision: HomeDecision) -> Self {
        match decision {
            HomeDecision::ShowLoadingPlaceholder => Self::ShowLoadingPlaceholder,
            HomeDecision::Redirect(target) => Self::Redirect(target),
        }
    }
}

/// Everything the shell needs to draw one path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub header: HeaderVisibility,
    pub outcome: RenderDecision<ViewId>,
}

/// Resolve `path` for `identity`: look the path up, send `/` through the
/// home redirect, gate protected entries, and decide header visibility.
pub fn resolve_navigation(table: &RouteTable, path: &str, identity: &IdentityState) -> Navigation {
    let route = table.resolve(path);
    let outcome = if route.view == ViewId::Home {
        resolve_home(identity).into()
    } else if route.protected {
        access::resolve(identity, route.view)
    } else {
        RenderDecision::Render(route.view)
    };
    Navigation { header: header_visibility(path), outcome }
}
