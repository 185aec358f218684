//! Status Indicator Components
//!
//! Coloured status dot, optionally labelled, and the four-status legend.

use campus_core::ResourceStatus;
use leptos::prelude::*;

#[component]
pub fn StatusIndicator(
    status: ResourceStatus,
    #[prop(default = true)] with_text: bool,
) -> impl IntoView {
    view! {
        <div class="status">
            <span class=status.css_class()></span>
            {with_text.then(|| view! { <span class="status-text">{status.label()}</span> })}
        </div>
    }
}

/// "Status Key" row listing every status colour
#[component]
pub fn StatusLegend(#[prop(optional)] heading: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="status-legend">
            {heading.map(|h| view! { <h3 class="legend-heading">{h}</h3> })}
            {ResourceStatus::ALL.into_iter().map(|status| view! {
                <div class="status">
                    <span class=status.css_class()></span>
                    <span class="tiny">{status.legend_label()}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
