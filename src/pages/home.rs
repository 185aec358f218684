//! Landing Page

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="landing-nav">
                <a href="/signin" class="btn btn-ghost">"🔑 Login"</a>
                <a href="/signin" class="btn btn-ghost">"👤 Sign Up"</a>
            </nav>
            <main class="landing-hero">
                <h1 class="hero-title">"CampusConnect"</h1>
                <p class="hero-subtitle">"Manage your campus resources efficiently"</p>
                <a href="/dashboard" class="btn btn-primary">"Enter Dashboard"</a>
            </main>
        </div>
    }
}
