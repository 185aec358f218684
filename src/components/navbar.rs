//! Navbar Component
//!
//! Brand, notifications dropdown, theme toggle and the user menu.

use campus_core::catalog;
use leptos::prelude::*;

use crate::context::use_app;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Menu {
    Notifications,
    User,
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app();
    let (open, set_open) = signal(None::<Menu>);
    let (unread, set_unread) = signal(true);

    let toggle = move |menu: Menu| {
        set_open.update(|current| {
            *current = if *current == Some(menu) { None } else { Some(menu) };
        });
        if menu == Menu::Notifications {
            set_unread.set(false);
        }
    };

    // the link itself routes to /signin
    let on_sign_out = move |_| {
        set_open.set(None);
        log::info!("[AUTH] signed out");
        ctx.toast("Signed Out", "You have been signed out.");
    };

    view! {
        <header class="navbar">
            <a href="/" class="brand">
                <span class="brand-mark">"CC"</span>
                <span class="brand-name">"CampusConnect"</span>
            </a>
            <div class="navbar-actions">
                <div class="dropdown">
                    <button
                        type="button"
                        class="icon-btn"
                        title="Notifications"
                        on:click=move |_| toggle(Menu::Notifications)
                    >
                        "🔔"
                        <Show when=move || unread.get()>
                            <span class="unread-dot"></span>
                        </Show>
                    </button>
                    <Show when=move || open.get() == Some(Menu::Notifications)>
                        <div class="dropdown-menu wide">
                            <p class="dropdown-label">"Notifications"</p>
                            {catalog::notifications().into_iter().map(|n| view! {
                                <div class="dropdown-item notification">
                                    <p class="notification-title">{n.title}</p>
                                    <p class="tiny muted">{n.message}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </Show>
                </div>

                <button
                    type="button"
                    class="icon-btn"
                    title="Toggle theme"
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || if ctx.theme.get().is_dark() { "☀" } else { "🌙" }}
                </button>

                <div class="dropdown">
                    <button type="button" class="avatar" on:click=move |_| toggle(Menu::User)>
                        "ST"
                    </button>
                    <Show when=move || open.get() == Some(Menu::User)>
                        <div class="dropdown-menu">
                            <p class="dropdown-label">"My Account"</p>
                            <button type="button" class="dropdown-item" on:click=move |_| set_open.set(None)>"Profile"</button>
                            <button type="button" class="dropdown-item" on:click=move |_| set_open.set(None)>"Settings"</button>
                            <a href="/signin" class="dropdown-item" on:click=on_sign_out>"Sign out"</a>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
