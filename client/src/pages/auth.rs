//! Sign-in and sign-up entry points.
//!
//! Authentication itself happens on the identity provider's hosted pages;
//! these screens only link out to them.

use leptos::prelude::*;

use crate::config::IdentityConfig;

#[component]
pub fn LoginPage() -> impl IntoView {
    let href = use_context::<IdentityConfig>().map(|cfg| cfg.sign_in_url);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Rollcall"</h1>
                <p class="login-card__subtitle">"Attendance tracking for teachers and students"</p>
                <a href=href class="login-button">"Sign in"</a>
                <p class="login-card__alt">
                    "New here? " <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let href = use_context::<IdentityConfig>().map(|cfg| cfg.sign_up_url);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create your account"</h1>
                <p class="login-card__subtitle">"Your school will assign your teacher or student role."</p>
                <a href=href class="login-button">"Sign up"</a>
                <p class="login-card__alt">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
