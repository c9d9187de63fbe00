//! Display theme shared across the render tree.
//!
//! DESIGN
//! ======
//! The theme is the only mutable value the shell shares. It lives in a
//! [`ThemeContext`] provided once at the root; every write goes through
//! [`ThemeContext::set_mode`] so the `<html>` class and the stored preference
//! never drift from the signal.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use leptos::prelude::*;

use crate::util::theme_storage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

/// Read/write handle to the theme, passed down through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
    state: RwSignal<ThemeState>,
}

impl ThemeContext {
    pub fn new(initial: ThemeState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Current mode; tracked when read inside a reactive scope.
    pub fn mode(&self) -> ThemeMode {
        self.state.get().mode
    }

    pub fn mode_untracked(&self) -> ThemeMode {
        self.state.get_untracked().mode
    }

    /// The single write path for theme state.
    pub fn set_mode(&self, mode: ThemeMode) {
        if self.mode_untracked() == mode {
            return;
        }
        self.state.update(|s| s.mode = mode);
        theme_storage::apply(mode);
        theme_storage::persist(mode);
    }

    pub fn toggle(&self) {
        self.set_mode(self.mode_untracked().toggled());
    }
}

/// Create the theme context from the stored preference and provide it.
pub fn provide_theme() -> ThemeContext {
    let initial = ThemeState { mode: theme_storage::read_preference() };
    theme_storage::apply(initial.mode);
    let theme = ThemeContext::new(initial);
    provide_context(theme);
    theme
}

/// Fetch the theme context installed by [`provide_theme`].
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
