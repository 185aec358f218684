//! Event Calendar Component
//!
//! Month grid with per-day event highlighting, the selected day's events
//! and the next few upcoming events.

use campus_core::event::{self, CampusEvent};
use campus_core::{catalog, MonthCursor, WEEKDAY_HEADERS};
use chrono::{Datelike, NaiveDate};
use leptos::prelude::*;

use crate::commands;

#[component]
pub fn EventCalendar() -> impl IntoView {
    let events = StoredValue::new(catalog::calendar_events());
    let today = commands::today();
    let (selected, set_selected) = signal(Some(today));
    let (cursor, set_cursor) = signal(MonthCursor::containing(today));

    let selected_events = move || {
        selected
            .get()
            .map(|day| events.with_value(|list| event::events_on(list, day)))
            .unwrap_or_default()
    };
    let upcoming = events.with_value(|list| event::upcoming(list, today, 3));

    // Clicking the selected day again clears the selection
    let on_pick = move |day: NaiveDate| {
        set_selected.update(|current| {
            *current = if *current == Some(day) { None } else { Some(day) };
        });
    };

    let day_cell = move |cell: Option<NaiveDate>| match cell {
        None => view! { <span class="day empty"></span> }.into_any(),
        Some(day) => {
            let mut class = String::from("day");
            if let Some(kind) = events.with_value(|list| event::day_event_type(list, day)) {
                class.push(' ');
                class.push_str(kind.day_class());
            }
            if day == today {
                class.push_str(" today");
            }
            view! {
                <button
                    type="button"
                    class=move || if selected.get() == Some(day) { format!("{} selected", class) } else { class.clone() }
                    on:click=move |_| on_pick(day)
                >
                    {day.day()}
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div class="calendar-layout">
            <div class="card calendar-card">
                <div class="card-header">
                    <h3 class="card-title">"Campus Calendar"</h3>
                    <p class="card-description">"View and track important campus events"</p>
                </div>
                <div class="card-content">
                    <div class="month-nav">
                        <button type="button" class="icon-btn" on:click=move |_| set_cursor.update(|c| *c = c.previous())>"‹"</button>
                        <span class="month-title">{move || cursor.get().title()}</span>
                        <button type="button" class="icon-btn" on:click=move |_| set_cursor.update(|c| *c = c.next())>"›"</button>
                    </div>
                    <div class="month-grid">
                        {WEEKDAY_HEADERS.into_iter().map(|h| view! { <span class="weekday">{h}</span> }).collect_view()}
                        {move || cursor.get().grid().into_iter().map(day_cell).collect_view()}
                    </div>
                    <div class="calendar-key">
                        {event::EventType::ALL.into_iter().map(|kind| view! {
                            <div class="status">
                                <span class=format!("key-swatch {}", kind.day_class())></span>
                                <span class="tiny">{kind.as_str()}</span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </div>

            <div class="stack">
                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">
                            {move || selected.get().map_or_else(|| "Select a date".to_string(), event::format_long)}
                        </h3>
                        <p class="card-description">"Events scheduled for this day"</p>
                    </div>
                    <div class="card-content">
                        {move || {
                            let list = selected_events();
                            if list.is_empty() {
                                view! { <p class="muted">"No events scheduled for this day."</p> }.into_any()
                            } else {
                                list.into_iter().map(|e| view! { <EventRow event=e /> }).collect_view().into_any()
                            }
                        }}
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h3 class="card-title">"Upcoming Events"</h3>
                        <p class="card-description">"Events in the coming days"</p>
                    </div>
                    <div class="card-content">
                        {if upcoming.is_empty() {
                            view! { <p class="muted">"No upcoming events."</p> }.into_any()
                        } else {
                            upcoming.into_iter().map(|e| view! { <EventRow event=e with_date=true /> }).collect_view().into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EventRow(event: CampusEvent, #[prop(optional)] with_date: bool) -> impl IntoView {
    let kind = event.event_type;
    view! {
        <div class="event-row">
            <div>
                <p class="event-title">{event.title}</p>
                {with_date.then(|| view! { <p class="tiny muted">{event::format_short(event.date)}</p> })}
            </div>
            <span class=format!("badge badge-{}", kind.badge_variant())>{kind.as_str()}</span>
        </div>
    }
}
