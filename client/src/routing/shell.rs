//! Header visibility for the current path.
//!
//! Student screens and the auth pages draw their own chrome, so the shared
//! header is dropped on them. This is presentation only; it grants or denies
//! nothing.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

pub const HEADERLESS_PATHS: [&str; 6] = [
    "/student-dashboard",
    "/student-subjects",
    "/student-forecast",
    "/student-profile",
    "/login",
    "/register",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

pub fn header_visibility(path: &str) -> HeaderVisibility {
    if HEADERLESS_PATHS.contains(&path) {
        HeaderVisibility::Hidden
    } else {
        HeaderVisibility::Shown
    }
}
