//! Feedback Form Component

use campus_core::{FeedbackDraft, Rating, ResourceKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app;

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let ctx = use_app();
    let (kind, set_kind) = signal(None::<ResourceKind>);
    let (resource_name, set_resource_name) = signal(String::new());
    let (rating, set_rating) = signal(None::<Rating>);
    let (feedback, set_feedback) = signal(String::new());
    let (suggestions, set_suggestions) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        set_kind.set(None);
        set_resource_name.set(String::new());
        set_rating.set(None);
        set_feedback.set(String::new());
        set_suggestions.set(String::new());
    };

    let on_kind = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<ResourceKind>() {
            Ok(next) => set_kind.set(Some(next)),
            Err(e) => {
                log::warn!("[FEEDBACK] {}", e);
                set_kind.set(None);
            }
        }
    };

    let on_rating = move |ev: web_sys::Event| {
        let stars = event_target_value(&ev).parse::<u8>().ok().and_then(|n| Rating::new(n).ok());
        set_rating.set(stars);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = FeedbackDraft {
            resource_kind: kind.get_untracked(),
            resource_name: resource_name.get_untracked(),
            rating: rating.get_untracked(),
            feedback: feedback.get_untracked(),
            suggestions: suggestions.get_untracked(),
        };
        if let Err(e) = draft.validate() {
            ctx.toast_error("Incomplete Feedback", e.to_string());
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            match commands::submit_feedback(draft).await {
                Ok(()) => {
                    ctx.toast("Feedback Submitted", "Thank you for your valuable feedback!");
                    reset();
                }
                Err(e) => ctx.toast_error("Submission Failed", e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="card form-card" on:submit=on_submit>
            <div class="card-header">
                <h3 class="card-title">"Resource Feedback"</h3>
                <p class="card-description">"Help us improve campus facilities by sharing your experience"</p>
            </div>
            <div class="card-content stack">
                <div class="field-grid">
                    <div class="field">
                        <label for="feedback-kind">"Resource Type"</label>
                        <select
                            id="feedback-kind"
                            required
                            prop:value=move || kind.get().map_or("", |k| k.as_str())
                            on:change=on_kind
                        >
                            <option value="" disabled>"Select resource type"</option>
                            {ResourceKind::ALL.into_iter().map(|k| view! {
                                <option value=k.as_str()>{k.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="field">
                        <label for="feedback-name">"Resource Name/Number"</label>
                        <input
                            id="feedback-name"
                            type="text"
                            placeholder="e.g. Physics Lab 3, Room 201"
                            required
                            prop:value=move || resource_name.get()
                            on:input=move |ev| set_resource_name.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="field">
                    <label for="feedback-rating">"Rating"</label>
                    <select
                        id="feedback-rating"
                        required
                        prop:value=move || rating.get().map(|r| r.stars().to_string()).unwrap_or_default()
                        on:change=on_rating
                    >
                        <option value="" disabled>"Select rating"</option>
                        {Rating::options().map(|r| view! {
                            <option value=r.stars().to_string()>{r.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="field">
                    <label for="feedback-text">"Your Feedback"</label>
                    <textarea
                        id="feedback-text"
                        rows="4"
                        placeholder="Please share your experience with this resource"
                        required
                        prop:value=move || feedback.get()
                        on:input=move |ev| set_feedback.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="field">
                    <label for="feedback-suggestions">"Suggestions for Improvement (Optional)"</label>
                    <textarea
                        id="feedback-suggestions"
                        rows="3"
                        placeholder="Any suggestions to make this resource better?"
                        prop:value=move || suggestions.get()
                        on:input=move |ev| set_suggestions.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </div>
            <div class="card-footer">
                <button type="submit" class="btn btn-primary btn-block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Feedback" }}
                </button>
            </div>
        </form>
    }
}
