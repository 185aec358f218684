//! Application Context
//!
//! Shared state provided via Leptos Context API: the colour theme and
//! the toast queue. Campus data never goes here; each view owns its own.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{self, delays, Settings, Theme};
use crate::models::{ToastKind, ToastQueue};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current colour theme - read
    pub theme: ReadSignal<Theme>,
    /// Current colour theme - write
    set_theme: WriteSignal<Theme>,
    /// Toasts on screen
    pub toasts: RwSignal<ToastQueue>,
}

impl AppContext {
    pub fn new(theme: (ReadSignal<Theme>, WriteSignal<Theme>)) -> Self {
        Self {
            theme: theme.0,
            set_theme: theme.1,
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Flip light/dark, apply it to the document and persist it
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme.set(next);
        config::apply_theme(next);
        if let Err(e) = (Settings { theme: next }).save() {
            log::warn!("[CONFIG] {}", e);
        }
    }

    /// Show a toast that dismisses itself
    pub fn toast(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastKind::Info);
    }

    pub fn toast_error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastKind::Error);
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|queue| queue.dismiss(id));
    }

    fn push(&self, title: String, description: String, kind: ToastKind) {
        let mut id = 0;
        self.toasts.update(|queue| id = queue.push(title, description, kind));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(delays::TOAST_MS).await;
            toasts.update(|queue| queue.dismiss(id));
        });
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
