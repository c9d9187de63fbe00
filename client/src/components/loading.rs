//! Full-height placeholder shown while identity state is still loading.

use leptos::prelude::*;

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">"Loading..."</div>
    }
}
