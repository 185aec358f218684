//! Toaster Component
//!
//! Renders the toast queue from `AppContext`, newest at the bottom.

use leptos::prelude::*;

use crate::context::use_app;
use crate::models::ToastKind;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="toaster">
            <For
                each=move || ctx.toasts.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Info => "toast",
                        ToastKind::Error => "toast toast-destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <p class="toast-title">{toast.title}</p>
                                <p class="toast-description">{toast.description}</p>
                            </div>
                            <button type="button" class="icon-btn tiny" on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
