//! Client Settings
//!
//! User preferences persisted in `localStorage` as JSON, plus the fixed
//! latencies used by the simulated actions.

use serde::{Deserialize, Serialize};

/// localStorage key holding the serialized [`Settings`]
pub const STORAGE_KEY: &str = "campus_connect_settings";

/// Simulated latencies in milliseconds
pub mod delays {
    pub const SPLASH_MS: u32 = 1000;
    pub const LOGIN_MS: u32 = 1500;
    pub const SIGNUP_MS: u32 = 1500;
    pub const FACE_SCAN_MS: u32 = 3000;
    pub const BOOKING_MS: u32 = 1000;
    pub const FEEDBACK_MS: u32 = 1500;
    pub const GRIEVANCE_MS: u32 = 1500;
    pub const BOT_REPLY_MS: u32 = 1000;
    pub const VOICE_CAPTURE_MS: u32 = 2000;
    pub const VOICE_AUTO_SEND_MS: u32 = 500;
    pub const READ_ALOUD_MS: u32 = 2000;
    pub const TOAST_MS: u32 = 4000;
}

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
}

impl Settings {
    /// Parse stored settings; unreadable JSON is logged and ignored
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw)
            .map_err(|e| log::warn!("[CONFIG] ignoring stored settings: {}", e))
            .ok()
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }

    /// Stored settings, or defaults that follow the system colour scheme
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&raw) {
                    return settings;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        Self {
            theme: if prefers_dark { Theme::Dark } else { Theme::Light },
        }
    }

    pub fn save(&self) -> Result<(), String> {
        let json = self.to_json()?;
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| format!("failed to store settings: {:?}", e))
    }
}

/// Add or remove the `dark` class on `<html>`
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let class_list = root.class_list();
    let result = if theme.is_dark() {
        class_list.add_1("dark")
    } else {
        class_list.remove_1("dark")
    };
    if let Err(e) = result {
        log::warn!("[CONFIG] could not apply theme: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_json() {
        let settings = Settings { theme: Theme::Dark };
        let json = settings.to_json().unwrap();
        assert_eq!(json, r#"{"theme":"dark"}"#);
        assert_eq!(Settings::from_json(&json), Some(settings));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        assert_eq!(Settings::from_json("{}"), Some(Settings::default()));
    }

    #[test]
    fn test_garbage_is_ignored() {
        assert_eq!(Settings::from_json("not json"), None);
        assert_eq!(Settings::from_json(r#"{"theme":"sepia"}"#), None);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Light.toggled().is_dark());
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
