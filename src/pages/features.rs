//! Feature Pages
//!
//! Booking, Availability and Library all show the availability widget;
//! Library opens on its own tab.

use campus_core::ResourceCategory;
use leptos::prelude::*;

use crate::components::{
    CampusMap, Chatbot, EventCalendar, FeedbackForm, GrievancePortal, LoginForm, PageShell,
    ResourceAvailability,
};

#[component]
pub fn CalendarPage() -> impl IntoView {
    view! {
        <PageShell title="Campus Calendar">
            <EventCalendar />
        </PageShell>
    }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    view! {
        <PageShell title="Resource Booking">
            <ResourceAvailability />
        </PageShell>
    }
}

#[component]
pub fn AvailabilityPage() -> impl IntoView {
    view! {
        <PageShell title="Resource Availability">
            <ResourceAvailability />
        </PageShell>
    }
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    view! {
        <PageShell title="Library Resources">
            <ResourceAvailability initial_tab=ResourceCategory::Library />
        </PageShell>
    }
}

#[component]
pub fn MapsPage() -> impl IntoView {
    view! {
        <PageShell title="Campus Map">
            <CampusMap />
        </PageShell>
    }
}

#[component]
pub fn ChatbotPage() -> impl IntoView {
    view! {
        <PageShell title="Campus Assistant">
            <Chatbot />
        </PageShell>
    }
}

#[component]
pub fn GrievancePage() -> impl IntoView {
    view! {
        <PageShell title="Grievance Portal">
            <GrievancePortal />
        </PageShell>
    }
}

#[component]
pub fn FeedbackPage() -> impl IntoView {
    view! {
        <PageShell title="Resource Feedback">
            <FeedbackForm />
        </PageShell>
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    view! {
        <PageShell title="Sign In / Login">
            <LoginForm />
        </PageShell>
    }
}
