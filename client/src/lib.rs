//! # client
//!
//! Leptos + WASM frontend shell for the Rollcall attendance tracker.
//!
//! This crate owns navigation: the static route table, the authentication
//! gate in front of protected views, the role-based home redirect, header
//! visibility, and the theme context. Identity comes from an external
//! provider; attendance data comes from the backend behind `/api`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: reads the identity key the server embedded in the
/// page and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let identity = match util::page_meta::read_identity_config() {
        Ok(identity) => identity,
        Err(e) => {
            log::error!("refusing to start: {e}");
            return;
        }
    };

    leptos::mount::hydrate_body(move || {
        provide_context(identity.clone());
        view! { <app::App/> }
    });
}
