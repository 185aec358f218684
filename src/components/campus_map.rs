//! Campus Map Component
//!
//! Static mock-up: building pins placed over a plain canvas.

use campus_core::catalog;
use leptos::prelude::*;

use super::StatusLegend;

#[component]
pub fn CampusMap() -> impl IntoView {
    view! {
        <div class="stack">
            <div class="map-header">
                <h2 class="section-title">"Campus Map"</h2>
                <StatusLegend />
            </div>
            <div class="card map-card">
                <div class="map-canvas">
                    {catalog::map_markers().into_iter().map(|marker| view! {
                        <div class="map-marker" style=marker.position>
                            <p class="marker-name">{marker.name}</p>
                            <div class="status">
                                <span class=marker.status.css_class()></span>
                                <span class="tiny">{marker.activity}</span>
                            </div>
                            {marker.badge.map(|b| view! { <span class="badge badge-destructive">{b}</span> })}
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
