//! Fallback for unknown paths

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;
    log::warn!("[APP] no route for {}", pathname.get_untracked());

    view! {
        <div class="centered-screen">
            <h1 class="hero-title">"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <a href="/" class="btn btn-link">"Return to Home"</a>
        </div>
    }
}
