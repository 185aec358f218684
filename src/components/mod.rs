//! UI Components
//!
//! Reusable Leptos components.

mod campus_map;
mod chatbot;
mod event_calendar;
mod feedback_form;
mod grievance_portal;
mod login_form;
mod navbar;
mod page_shell;
mod resource_availability;
mod resource_card;
mod sidebar;
mod status_indicator;
mod tab_bar;
mod toaster;

pub use campus_map::CampusMap;
pub use chatbot::Chatbot;
pub use event_calendar::EventCalendar;
pub use feedback_form::FeedbackForm;
pub use grievance_portal::GrievancePortal;
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use page_shell::PageShell;
pub use resource_availability::ResourceAvailability;
pub use resource_card::ResourceCard;
pub use sidebar::Sidebar;
pub use status_indicator::{StatusIndicator, StatusLegend};
pub use tab_bar::TabBar;
pub use toaster::Toaster;
