//! CampusConnect App
//!
//! Root component: theme and toast context, the startup splash and the
//! route table.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Toaster;
use crate::config::{self, delays, Settings};
use crate::context::AppContext;
use crate::pages::{
    AvailabilityPage, BookingPage, CalendarPage, ChatbotPage, DashboardPage, FeedbackPage,
    GrievancePage, HomePage, LibraryPage, MapsPage, NotFoundPage, SignInPage,
};

#[component]
pub fn App() -> impl IntoView {
    let settings = Settings::load();
    config::apply_theme(settings.theme);
    provide_context(AppContext::new(signal(settings.theme)));

    // Splash
    let (loading, set_loading) = signal(true);
    spawn_local(async move {
        TimeoutFuture::new(delays::SPLASH_MS).await;
        set_loading.set(false);
        log::debug!("[APP] ready");
    });

    view! {
        <Show when=move || !loading.get() fallback=Splash>
            <Toaster />
            <Router>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/calendar") view=CalendarPage />
                    <Route path=path!("/booking") view=BookingPage />
                    <Route path=path!("/availability") view=AvailabilityPage />
                    <Route path=path!("/library") view=LibraryPage />
                    <Route path=path!("/maps") view=MapsPage />
                    <Route path=path!("/chatbot") view=ChatbotPage />
                    <Route path=path!("/grievance") view=GrievancePage />
                    <Route path=path!("/feedback") view=FeedbackPage />
                    <Route path=path!("/signin") view=SignInPage />
                </Routes>
            </Router>
        </Show>
    }
}

#[component]
fn Splash() -> impl IntoView {
    view! {
        <div class="centered-screen">
            <h1 class="splash-title pulse">"CampusConnect"</h1>
            <p class="muted">"Loading campus resources..."</p>
        </div>
    }
}
