//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::header::Header;
use crate::components::loading::LoadingPlaceholder;
use crate::config::{IdentityConfig, PUBLISHABLE_KEY_META, ROLE_SOURCES_META, SIGN_IN_URL_META, SIGN_UP_URL_META};
use crate::pages;
use crate::routing::access::RenderDecision;
use crate::routing::shell::HeaderVisibility;
use crate::routing::table::RouteTable;
use crate::routing::{Navigation, resolve_navigation};
use crate::state::identity::IdentityState;
use crate::state::theme::provide_theme;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Expects an [`IdentityConfig`] in context; its values are written into
/// `<meta>` tags so the WASM entry point can pick them up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let identity = use_context::<IdentityConfig>();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {identity.map(|cfg| view! {
                    <meta name=PUBLISHABLE_KEY_META content=cfg.publishable_key/>
                    <meta name=SIGN_IN_URL_META content=cfg.sign_in_url/>
                    <meta name=SIGN_UP_URL_META content=cfg.sign_up_url/>
                    <meta name=ROLE_SOURCES_META content=cfg.role_lookup.to_list()/>
                })}
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides identity and theme contexts and hands every path to [`Shell`],
/// which resolves it against the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let identity = RwSignal::new(IdentityState::default());
    provide_context(identity);
    provide_theme();

    #[cfg(feature = "hydrate")]
    match use_context::<IdentityConfig>() {
        Some(config) => leptos::task::spawn_local(async move {
            let snapshot = crate::net::identity::fetch_identity(&config).await;
            identity.set(IdentityState::from_snapshot(&snapshot, &config.role_lookup));
        }),
        None => log::error!("identity config missing from context; staying unloaded"),
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/rollcall.css"/>
        <Title text="Rollcall"/>

        <Router>
            <Routes fallback=|| view! { <Shell/> }>
                <Route path=StaticSegment("") view=Shell/>
                <Route path=WildcardSegment("any") view=Shell/>
            </Routes>
        </Router>
    }
}

/// Page frame: optional header plus the view for the current path.
///
/// Reads the path and the identity signal inside reactive closures, so the
/// decision is re-derived on every navigation and every identity change.
#[component]
pub fn Shell() -> impl IntoView {
    let identity = expect_context::<RwSignal<IdentityState>>();
    let pathname = use_location().pathname;
    let navigation = Memo::new(move |_| resolve_navigation(&RouteTable::standard(), &pathname.get(), &identity.get()));

    let show_header = move || navigation.with(|nav| nav.header == HeaderVisibility::Shown);

    view! {
        <div class="min-h-screen">
            <Show when=show_header>
                <Header/>
            </Show>

            <div class="p-6">{move || render_outcome(navigation.get())}</div>
        </div>
    }
}

fn render_outcome(navigation: Navigation) -> AnyView {
    match navigation.outcome {
        RenderDecision::ShowLoadingPlaceholder => view! { <LoadingPlaceholder/> }.into_any(),
        RenderDecision::Redirect(target) => {
            view! { <Redirect path=target.path options=target.navigate_options()/> }.into_any()
        }
        RenderDecision::Render(page) => pages::render(page),
    }
}
