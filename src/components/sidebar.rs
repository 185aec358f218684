//! Sidebar Component
//!
//! Collapsible navigation; the entry matching the current path is
//! highlighted.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::models::NAV_ITEMS;

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <button
                type="button"
                class="icon-btn sidebar-toggle"
                title="Toggle sidebar"
                on:click=move |_| set_collapsed.update(|c| *c = !*c)
            >
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>
            <nav class="sidebar-nav">
                {NAV_ITEMS.iter().map(|item| {
                    let item = *item;
                    let class = move || {
                        if item.is_active(&pathname.get()) { "nav-link active" } else { "nav-link" }
                    };
                    view! {
                        <a href=item.href class=class title=item.title>
                            <span class="nav-icon">{item.icon}</span>
                            <Show when=move || !collapsed.get()>
                                <span class="nav-title">{item.title}</span>
                            </Show>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
