//! Headless mode - line commands on stdin, NDJSON events on stdout
//!
//! Each stdin line is one command (`tap`, `target 33`, `save`, ...). Every
//! state change the engine reports is written to stdout as one JSON object
//! per line, tagged by its "event" field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"session","phrase_text":"","count":1,"target":0,"can_undo":true,"timestamp":1704700001000}
//! {"event":"alert","title":"Success","message":"Target count set to 33","actions":["OK"],"timestamp":1704700002000}
//! {"event":"name_required","timestamp":1704700003000}
//! ```

pub mod command;
pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use tasbih_app::config::Settings;
use tasbih_app::{EngineEvent, Session};
use tasbih_core::{CatalogCategory, CustomDhikrEntry, FavoriteEntry};
use tasbih_drivers::{Alert, AlertPresenter};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Current session state
    Session {
        phrase_text: String,
        count: u32,
        target: u32,
        can_undo: bool,
        timestamp: i64,
    },

    /// A message the user has to acknowledge
    Alert {
        title: String,
        message: String,
        actions: Vec<String>,
        timestamp: i64,
    },

    /// `save` needs a name: answer with `save <name>` or `cancel-name`
    NameRequired { timestamp: i64 },

    Favorites {
        favorites: Vec<FavoriteEntry>,
        timestamp: i64,
    },

    CustomDhikrs {
        custom_dhikrs: Vec<CustomDhikrEntry>,
        timestamp: i64,
    },

    Catalog {
        categories: Vec<CatalogCategory>,
        timestamp: i64,
    },

    Settings {
        settings: Settings,
        dark_mode: bool,
        timestamp: i64,
    },

    /// A command could not be understood
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn session(session: &Session, can_undo: bool) -> Self {
        Self::Session {
            phrase_text: session.phrase_text.clone(),
            count: session.count,
            target: session.target,
            can_undo,
            timestamp: Self::now(),
        }
    }

    pub fn alert(alert: &Alert) -> Self {
        Self::Alert {
            title: alert.title.clone(),
            message: alert.message.clone(),
            actions: alert.actions.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn name_required() -> Self {
        Self::NameRequired {
            timestamp: Self::now(),
        }
    }

    pub fn favorites(favorites: Vec<FavoriteEntry>) -> Self {
        Self::Favorites {
            favorites,
            timestamp: Self::now(),
        }
    }

    pub fn custom_dhikrs(custom_dhikrs: Vec<CustomDhikrEntry>) -> Self {
        Self::CustomDhikrs {
            custom_dhikrs,
            timestamp: Self::now(),
        }
    }

    pub fn catalog(categories: Vec<CatalogCategory>) -> Self {
        Self::Catalog {
            categories,
            timestamp: Self::now(),
        }
    }

    pub fn settings(settings: Settings, dark_mode: bool) -> Self {
        Self::Settings {
            settings,
            dark_mode,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            timestamp: Self::now(),
        }
    }

    /// Map an engine notification onto its stdout form.
    ///
    /// `Shutdown` has no stdout form.
    pub fn from_engine_event(event: EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::SessionChanged { session, can_undo } => {
                Some(Self::session(&session, can_undo))
            }
            EngineEvent::FavoritesChanged { favorites } => Some(Self::favorites(favorites)),
            EngineEvent::CustomDhikrsChanged { custom_dhikrs } => {
                Some(Self::custom_dhikrs(custom_dhikrs))
            }
            EngineEvent::SettingsChanged {
                settings,
                dark_mode,
            } => Some(Self::settings(settings, dark_mode)),
            EngineEvent::NameRequested => Some(Self::name_required()),
            EngineEvent::Shutdown => None,
        }
    }
}

/// Presents alerts as `alert` events on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutAlertPresenter;

impl AlertPresenter for StdoutAlertPresenter {
    fn show(&self, alert: &Alert) {
        HeadlessEvent::alert(alert).emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_session_serialization() {
        let session = Session {
            phrase_text: "الحمد لله".to_string(),
            count: 12,
            target: 33,
        };
        let value = to_value(&HeadlessEvent::session(&session, true));

        assert_eq!(value["event"], "session");
        assert_eq!(value["phrase_text"], "الحمد لله");
        assert_eq!(value["count"], 12);
        assert_eq!(value["target"], 33);
        assert_eq!(value["can_undo"], true);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_alert_serialization() {
        let value = to_value(&HeadlessEvent::alert(&Alert::ok(
            "Success",
            "Target count set to 33",
        )));

        assert_eq!(value["event"], "alert");
        assert_eq!(value["title"], "Success");
        assert_eq!(value["message"], "Target count set to 33");
        assert_eq!(value["actions"][0], "OK");
    }

    #[test]
    fn test_favorites_serialization() {
        let value = to_value(&HeadlessEvent::favorites(vec![FavoriteEntry::new(
            "Morning", 10, 33,
        )]));

        assert_eq!(value["event"], "favorites");
        assert_eq!(value["favorites"][0]["key"], "Morning");
        assert_eq!(value["favorites"][0]["count"], 10);
    }

    #[test]
    fn test_settings_serialization() {
        let value = to_value(&HeadlessEvent::settings(Settings::default(), true));

        assert_eq!(value["event"], "settings");
        assert_eq!(value["dark_mode"], true);
        assert_eq!(value["settings"]["feedback"]["sound_on"], true);
        assert_eq!(value["settings"]["behavior"]["stop_on_target"], false);
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("unknown command: jump"));

        assert_eq!(value["event"], "error");
        assert_eq!(value["message"], "unknown command: jump");
    }

    #[test]
    fn test_engine_event_mapping() {
        assert!(matches!(
            HeadlessEvent::from_engine_event(EngineEvent::NameRequested),
            Some(HeadlessEvent::NameRequired { .. })
        ));
        assert!(HeadlessEvent::from_engine_event(EngineEvent::Shutdown).is_none());
    }
}
