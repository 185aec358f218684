//! Tab Bar Component
//!
//! Row of tab buttons switching a view between a fixed set of panes.

use leptos::prelude::*;

/// Tab bar over any small copyable key
#[component]
pub fn TabBar<T>(
    /// (key, label) pairs in display order
    tabs: Vec<(T, &'static str)>,
    current: ReadSignal<T>,
    set_current: WriteSignal<T>,
) -> impl IntoView
where
    T: Copy + PartialEq + Send + Sync + 'static,
{
    let columns = tabs.len();

    view! {
        <div class="tab-list" style=format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns)>
            {tabs.into_iter().map(|(key, label)| {
                let is_active = move || current.get() == key;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "tab active" } else { "tab" }
                        on:click=move |_| set_current.set(key)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
