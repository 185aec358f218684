//! Dashboard Page
//!
//! Headline numbers, the campus map, highlights and quick-access cards.

use campus_core::event::format_short;
use campus_core::catalog;
use leptos::prelude::*;

use crate::components::{CampusMap, PageShell, ResourceCard};
use crate::models::BookingNotice;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = catalog::dashboard_stats();

    view! {
        <PageShell title="Campus Resource Dashboard">
            <div class="stat-grid">
                <StatCard
                    title="Total Resources"
                    subtitle="Campus-wide resource count"
                    value=stats.total()
                    accent=""
                    note=format!(
                        "{} labs, {} classrooms, {} library spaces, {} hostel units",
                        stats.labs, stats.classrooms, stats.library_spaces, stats.hostel_units,
                    )
                />
                <StatCard
                    title="Currently Available"
                    subtitle="Resources ready for booking"
                    value=stats.available
                    accent="text-available"
                    note=format!("{}% of all resources are currently available", stats.available_percent())
                />
                <StatCard
                    title="Your Bookings"
                    subtitle="Your active resource bookings"
                    value=stats.bookings
                    accent="text-accent"
                    note=catalog::BOOKINGS_SUMMARY.to_string()
                />
            </div>

            <div class="dashboard-grid">
                <div class="span-2">
                    <CampusMap />
                </div>
                <div class="stack">
                    <div class="card">
                        <div class="card-header">
                            <h3 class="card-title">"Upcoming Events"</h3>
                            <p class="card-description">"Events happening on campus"</p>
                        </div>
                        <ul class="card-content highlight-list">
                            {catalog::campus_highlights().into_iter().map(|h| view! {
                                <li>
                                    <p class="event-title">{h.name}</p>
                                    <div class="row-between small muted">
                                        <span>{format_short(h.date)}</span>
                                        <span>{h.location}</span>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="card">
                        <div class="card-header">
                            <h3 class="card-title">"Maintenance Notice"</h3>
                            <p class="card-description">"Upcoming facility maintenance"</p>
                        </div>
                        <div class="card-content">
                            <p class="small">{catalog::MAINTENANCE_NOTICE}</p>
                        </div>
                    </div>
                </div>
            </div>

            <h2 class="section-title">"Quick Access Resources"</h2>
            <div class="resource-grid four">
                {catalog::quick_access_resources().into_iter().map(|resource| view! {
                    <ResourceCard resource=resource action_label="Book Now" notice=BookingNotice::Booked />
                }).collect_view()}
            </div>

            <div class="row-center">
                <a href="/availability" class="btn btn-primary">"View All Resources"</a>
                <a href="/booking" class="btn btn-outline">"My Bookings"</a>
            </div>
        </PageShell>
    }
}

#[component]
fn StatCard(
    title: &'static str,
    subtitle: &'static str,
    value: u32,
    accent: &'static str,
    note: String,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
                <p class="card-description">{subtitle}</p>
            </div>
            <div class="card-content">
                <div class=format!("stat-value {}", accent)>{value}</div>
                <p class="small muted">{note}</p>
            </div>
        </div>
    }
}
