//! Routed Pages
//!
//! One component per route. Feature pages wrap a single widget in the
//! shared shell.

mod dashboard;
mod features;
mod home;
mod not_found;

pub use dashboard::DashboardPage;
pub use features::{
    AvailabilityPage, BookingPage, CalendarPage, ChatbotPage, FeedbackPage, GrievancePage,
    LibraryPage, MapsPage, SignInPage,
};
pub use home::HomePage;
pub use not_found::NotFoundPage;
