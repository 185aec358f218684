//! Page Shell Component
//!
//! Navbar + sidebar layout around a headed feature page.

use leptos::prelude::*;

use super::{Navbar, Sidebar};

#[component]
pub fn PageShell(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="shell">
            <Navbar />
            <div class="shell-body">
                <Sidebar />
                <main class="page">
                    <div class="page-heading">
                        <h1>{title}</h1>
                        {subtitle.map(|s| view! { <p class="muted">{s}</p> })}
                    </div>
                    {children()}
                </main>
            </div>
        </div>
    }
}
