//! Theme persistence and `<html>` class toggling.
//!
//! Reads the user's preference from `localStorage` and applies the
//! `.theme-dark` class to the `<html>` element. Writes go back to
//! `localStorage`. Requires a browser environment; every function is a
//! no-op (or returns the default) without the `hydrate` feature.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use crate::state::theme::ThemeMode;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "rollcall_theme";
#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "theme-dark";

/// Read the stored theme, falling back to the system color-scheme preference.
pub fn read_preference() -> ThemeMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return ThemeMode::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Some(mode) = ThemeMode::parse(&val) {
                    return mode;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ThemeMode::default()
    }
}

/// Apply or remove the `.theme-dark` class on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let class_list = el.class_list();
            let _ = match mode {
                ThemeMode::Dark => class_list.add_1(DARK_CLASS),
                ThemeMode::Light => class_list.remove_1(DARK_CLASS),
            };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Persist the preference to `localStorage`.
pub fn persist(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
                    log::warn!("could not persist theme preference");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
