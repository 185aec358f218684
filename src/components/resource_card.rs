//! Resource Card Component
//!
//! One facility with its status and a booking button that is only
//! enabled while the facility is available.

use campus_core::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::StatusIndicator;
use crate::commands;
use crate::context::use_app;
use crate::models::BookingNotice;

#[component]
pub fn ResourceCard(
    resource: Resource,
    #[prop(into)] action_label: String,
    /// Toast raised once the simulated booking request succeeds
    notice: BookingNotice,
) -> impl IntoView {
    let ctx = use_app();
    let (booking, set_booking) = signal(false);

    let bookable = resource.is_bookable();
    let status = resource.status;
    let name = resource.name.clone();
    let description = resource.description.clone();
    let details = resource.details.clone();
    let resource = StoredValue::new(resource);

    let on_click = move |_| {
        if booking.get_untracked() {
            return;
        }
        set_booking.set(true);
        let resource = resource.get_value();
        spawn_local(async move {
            // the toast queue outlives this card; the card's own flag may not
            match commands::request_booking(resource).await {
                Ok(booked) => {
                    let (title, description) = notice.toast(&booked.name);
                    ctx.toast(title, description);
                }
                Err(e) => ctx.toast_error("Booking Unavailable", e),
            }
            set_booking.try_set(false);
        });
    };

    view! {
        <div class="card resource-card">
            <div class="card-header">
                <div class="card-title-row">
                    <h3 class="card-title">{name}</h3>
                    <StatusIndicator status=status with_text=false />
                </div>
                <p class="card-description">{description}</p>
            </div>
            <div class="card-content">
                {details.map(|d| view! { <p class="muted small">{d}</p> })}
            </div>
            <div class="card-footer">
                <StatusIndicator status=status />
                <button
                    class=if bookable { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" }
                    disabled=move || !bookable || booking.get()
                    on:click=on_click
                >
                    {move || if booking.get() { "Booking...".to_string() } else { action_label.clone() }}
                </button>
            </div>
        </div>
    }
}
