//! CampusConnect Core
//!
//! Platform-independent view-models and behaviour behind the campus
//! dashboard: the mock catalog, resource search, the event calendar,
//! the keyword assistant, the grievance board and form validation.
//! Nothing here touches the browser, so it is tested natively.

pub mod auth;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod entity;
pub mod error;
pub mod event;
pub mod feedback;
pub mod grievance;
pub mod resource;

pub use auth::{LoginDraft, SignupDraft};
pub use calendar::{MonthCursor, WEEKDAY_HEADERS};
pub use chat::{ChatSession, Language, Message, Sender};
pub use entity::Entity;
pub use error::{FormError, FormResult, ParseError};
pub use event::{CampusEvent, EventType};
pub use feedback::{FeedbackDraft, Rating, ResourceKind};
pub use grievance::{Grievance, GrievanceBoard, GrievanceCategory, GrievanceDraft, GrievanceFilter, GrievanceStatus};
pub use resource::{filter_resources, Resource, ResourceCategory, ResourceStatus, StatusFilter};
