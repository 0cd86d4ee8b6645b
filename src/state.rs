//! Application state
//!
//! Explicit state struct passed to whatever front end hosts the views;
//! nothing here is process-global.

use serde::{Deserialize, Serialize};

use crate::notifications::Inbox;

/// The views the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Dashboard,
    Forecast,
    EsgSimulator,
    Map,
    Tenants,
    Documents,
    Maintenance,
    Comparison,
    Settings,
}

/// User-tunable preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications_enabled: bool,
    pub email_alerts: bool,
    /// Seconds between data refreshes
    pub refresh_interval: u32,
    pub default_view: View,
    pub currency: String,
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications_enabled: true,
            email_alerts: true,
            refresh_interval: 30,
            default_view: View::Dashboard,
            currency: "AED".to_string(),
            language: "en".to_string(),
        }
    }
}

/// Account profile fields shown on the settings view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub phone: String,
    pub last_login: String,
}

/// Top-level application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub active_view: View,
    pub settings: Settings,
    pub profile: UserProfile,
    pub inbox: Inbox,
}

impl AppState {
    pub fn new(settings: Settings, profile: UserProfile, inbox: Inbox) -> Self {
        Self {
            active_view: settings.default_view,
            settings,
            profile,
            inbox,
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.settings.dark_mode = !self.settings.dark_mode;
    }

    pub fn switch_view(&mut self, view: View) {
        self.active_view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!(state.active_view, View::Dashboard);
        assert!(!state.settings.dark_mode);
        assert_eq!(state.settings.refresh_interval, 30);
        assert_eq!(state.settings.currency, "AED");
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut state = AppState::default();
        state.toggle_dark_mode();
        assert!(state.settings.dark_mode);
        state.toggle_dark_mode();
        assert!(!state.settings.dark_mode);
    }

    #[test]
    fn test_new_starts_on_default_view() {
        let settings = Settings {
            default_view: View::Forecast,
            ..Default::default()
        };
        let state = AppState::new(settings, UserProfile::default(), Inbox::default());
        assert_eq!(state.active_view, View::Forecast);
    }
}
