//! Top navigation bar for teacher screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the shell on every path outside the headerless list. Holds
//! the primary navigation, the theme toggle, and the signed-in role badge.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::table::ViewId;
use crate::state::identity::IdentityState;
use crate::state::theme::{ThemeMode, use_theme};

const NAV_LINKS: [(&str, ViewId); 7] = [
    ("/dashboard", ViewId::Dashboard),
    ("/attendance", ViewId::MarkAttendance),
    ("/students", ViewId::StudentList),
    ("/analytics", ViewId::Analytics),
    ("/reports", ViewId::Reports),
    ("/add-students", ViewId::AddStudents),
    ("/settings", ViewId::Settings),
];

#[component]
pub fn Header() -> impl IntoView {
    let identity = expect_context::<RwSignal<IdentityState>>();
    let theme = use_theme();
    let pathname = use_location().pathname;

    let role_label = move || {
        identity
            .get()
            .role()
            .map_or_else(|| "signed in".to_owned(), |r| r.as_str().to_owned())
    };

    view! {
        <header class="header">
            <a href="/" class="header__brand">"Rollcall"</a>

            <nav class="header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, page)| {
                        let active = move || pathname.get() == href;
                        view! {
                            <a href=href class="header__link" class:active=active>
                                {page.title()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <span class="header__spacer"></span>

            <button
                class="btn header__theme-toggle"
                on:click=move |_| theme.toggle()
                title="Toggle dark mode"
            >
                {move || if theme.mode() == ThemeMode::Dark { "☀" } else { "☾" }}
            </button>

            <Show when=move || identity.get().is_signed_in()>
                <span class="header__role">{role_label}</span>
            </Show>
        </header>
    }
}
