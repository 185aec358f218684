//! Simulated Requests
//!
//! Every action that would talk to a server in a real deployment lives
//! here, organized by domain. Each one validates its input, waits on a
//! fixed timer and resolves with a canned outcome.

mod assistant;
mod auth;
mod booking;
mod forms;

use chrono::{Local, NaiveDate, NaiveDateTime};
use gloo_timers::future::TimeoutFuture;

// Re-export all public items
pub use assistant::*;
pub use auth::*;
pub use booking::*;
pub use forms::*;

/// Local wall-clock time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stand-in for network latency
async fn latency(millis: u32) {
    TimeoutFuture::new(millis).await;
}
