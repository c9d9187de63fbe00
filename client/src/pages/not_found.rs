//! Catch-all screen for unmatched paths.

use leptos::prelude::*;

use crate::routing::table::ViewId;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <div>{ViewId::NotFound.title()}</div> }
}
