//! Resource Availability Component
//!
//! Search box, status filter and category tabs over the facility catalog.
//! Filtering happens on every keystroke; the list is recomputed from the
//! active tab's resources each time.

use campus_core::{catalog, filter_resources, ResourceCategory, StatusFilter};
use leptos::prelude::*;

use super::{ResourceCard, StatusLegend, TabBar};
use crate::models::BookingNotice;

#[component]
pub fn ResourceAvailability(
    /// Tab shown first; Labs when unset
    #[prop(optional)]
    initial_tab: Option<ResourceCategory>,
) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (filter, set_filter) = signal(StatusFilter::All);
    let (tab, set_tab) = signal(initial_tab.unwrap_or_default());

    let visible = Memo::new(move |_| {
        filter_resources(&catalog::resources(tab.get()), &query.get(), filter.get())
    });

    let on_filter_change = move |ev: web_sys::Event| match event_target_value(&ev).parse::<StatusFilter>() {
        Ok(next) => set_filter.set(next),
        Err(e) => log::warn!("[AVAILABILITY] {}", e),
    };

    let tabs = ResourceCategory::ALL
        .into_iter()
        .map(|category| (category, category.label()))
        .collect::<Vec<_>>();

    view! {
        <div class="stack">
            <div class="filter-row">
                <div class="field grow">
                    <label for="resource-search">"Search Resources"</label>
                    <div class="search-box">
                        <span class="search-icon">"🔍"</span>
                        <input
                            id="resource-search"
                            type="text"
                            placeholder="Search by name or description..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="field">
                    <label for="resource-filter">"Filter by Status"</label>
                    <select
                        id="resource-filter"
                        prop:value=move || filter.get().as_str()
                        on:change=on_filter_change
                    >
                        {StatusFilter::options().map(|option| view! {
                            <option value=option.as_str()>{option.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <StatusLegend />

            <div class="tabs">
                <TabBar tabs=tabs current=tab set_current=set_tab />
                <div class="resource-grid">
                    {move || {
                        let category = tab.get();
                        let list = visible.get();
                        if list.is_empty() {
                            view! { <div class="empty-state">{category.empty_message()}</div> }.into_any()
                        } else {
                            list.into_iter().map(|resource| view! {
                                <ResourceCard
                                    resource=resource
                                    action_label=category.action_label()
                                    notice=BookingNotice::Requested
                                />
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
