//! Grievance Portal Component
//!
//! Two tabs: the filterable board with upvotes, and the submission form.
//! Submissions are prepended to this view's board only.

use campus_core::event::format_short;
use campus_core::{Grievance, GrievanceCategory, GrievanceDraft, GrievanceFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use super::TabBar;
use crate::commands;
use crate::context::use_app;
use crate::store::{self, GrievancePortalState, GrievancePortalStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortalTab {
    View,
    Submit,
}

#[component]
pub fn GrievancePortal() -> impl IntoView {
    let state = Store::new(GrievancePortalState::new());
    let (tab, set_tab) = signal(PortalTab::View);

    let tabs = vec![(PortalTab::View, "View Grievances"), (PortalTab::Submit, "Submit Grievance")];

    view! {
        <div class="tabs">
            <TabBar tabs=tabs current=tab set_current=set_tab />
            {move || match tab.get() {
                PortalTab::View => view! { <GrievanceList state=state /> }.into_any(),
                PortalTab::Submit => view! { <GrievanceForm state=state /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn GrievanceList(state: Store<GrievancePortalState>) -> impl IntoView {
    let visible = move || state.board().read().filtered(state.filter().get());

    let on_filter = move |ev: web_sys::Event| match event_target_value(&ev).parse::<GrievanceFilter>() {
        Ok(filter) => state.filter().set(filter),
        Err(e) => log::warn!("[GRIEVANCE] {}", e),
    };

    view! {
        <div class="stack">
            <div class="filter-row">
                <div class="field">
                    <label for="grievance-filter">"Filter"</label>
                    <select
                        id="grievance-filter"
                        prop:value=move || state.filter().get().as_str()
                        on:change=on_filter
                    >
                        {GrievanceFilter::OPTIONS.into_iter().map(|option| view! {
                            <option value=option.as_str()>{option.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            {move || {
                let list = visible();
                if list.is_empty() {
                    let message = state.filter().get().empty_message();
                    view! { <div class="empty-state">{message}</div> }.into_any()
                } else {
                    list.into_iter().map(|g| view! { <GrievanceCard grievance=g state=state /> }).collect_view().into_any()
                }
            }}
        </div>
    }
}

#[component]
fn GrievanceCard(grievance: Grievance, state: Store<GrievancePortalState>) -> impl IntoView {
    let id = grievance.id;
    let status = grievance.status;

    view! {
        <div class="card grievance-card">
            <div class="card-header">
                <div class="card-title-row">
                    <h3 class="card-title">{grievance.title}</h3>
                    <span class=status.badge_class()>{status.label()}</span>
                </div>
                <p class="card-description">
                    {grievance.category.label()} " • " {format_short(grievance.date)}
                    {grievance.location.map(|l| view! { " • " {l} })}
                </p>
            </div>
            <div class="card-content">
                <p>{grievance.description}</p>
            </div>
            <div class="card-footer">
                <button
                    type="button"
                    class="btn btn-sm btn-ghost"
                    on:click=move |_| {
                        state.board().write().upvote(id);
                    }
                >
                    "▲ " {grievance.upvotes}
                </button>
                <span class="tiny muted">"💬 " {grievance.comments} " comments"</span>
            </div>
        </div>
    }
}

#[component]
fn GrievanceForm(state: Store<GrievancePortalState>) -> impl IntoView {
    let ctx = use_app();
    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(GrievanceCategory::default());
    let (description, set_description) = signal(String::new());
    let (location, set_location) = signal(String::new());

    let reset = move || {
        set_title.set(String::new());
        set_category.set(GrievanceCategory::default());
        set_description.set(String::new());
        set_location.set(String::new());
    };

    let on_category = move |ev: web_sys::Event| match event_target_value(&ev).parse::<GrievanceCategory>() {
        Ok(next) => set_category.set(next),
        Err(e) => log::warn!("[GRIEVANCE] {}", e),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if state.submitting().get_untracked() {
            return;
        }
        let draft = GrievanceDraft {
            title: title.get_untracked(),
            category: category.get_untracked(),
            description: description.get_untracked(),
            location: location.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            ctx.toast_error("Incomplete Grievance", e.to_string());
            return;
        }

        state.submitting().set(true);
        spawn_local(async move {
            let filed = match commands::submit_grievance(draft).await {
                Ok(draft) => match store::file_grievance(state, draft, commands::today()) {
                    Some(result) => result.map_err(|e| e.to_string()),
                    None => return,
                },
                Err(e) => Err(e),
            };
            match filed {
                Ok(grievance) => {
                    log::info!("[GRIEVANCE] submitted #{} {:?}", grievance.id, grievance.title);
                    ctx.toast("Grievance Submitted", "Your grievance has been submitted successfully.");
                    reset();
                }
                Err(e) => ctx.toast_error("Submission Failed", e),
            }
            state.submitting().try_update(|busy| *busy = false);
        });
    };

    view! {
        <form class="card form-card" on:submit=on_submit>
            <div class="card-header">
                <h3 class="card-title">"Submit a Grievance"</h3>
                <p class="card-description">"Report an issue with campus facilities or services"</p>
            </div>
            <div class="card-content stack">
                <div class="field">
                    <label for="grievance-title">"Title"</label>
                    <input
                        id="grievance-title"
                        type="text"
                        placeholder="Brief title of your grievance"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="grievance-category">"Category"</label>
                    <select
                        id="grievance-category"
                        prop:value=move || category.get().as_str()
                        on:change=on_category
                    >
                        {GrievanceCategory::ALL.into_iter().map(|c| view! {
                            <option value=c.as_str()>{c.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="field">
                    <label for="grievance-description">"Description"</label>
                    <textarea
                        id="grievance-description"
                        rows="5"
                        placeholder="Provide detailed information about the issue"
                        required
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="field">
                    <label for="grievance-location">"Specific Location"</label>
                    <input
                        id="grievance-location"
                        type="text"
                        placeholder="Building, room number, etc."
                        required
                        prop:value=move || location.get()
                        on:input=move |ev| set_location.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="card-footer">
                <button type="submit" class="btn btn-primary" disabled=move || state.submitting().get()>
                    {move || if state.submitting().get() { "Submitting..." } else { "Submit Grievance" }}
                </button>
            </div>
        </form>
    }
}
