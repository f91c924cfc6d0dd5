//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`, so subscribers see a consistent view of the
//! state changes a message caused.

use tasbih_core::{CustomDhikrEntry, FavoriteEntry};

use crate::config::Settings;
use crate::session::Session;

/// Domain events emitted by the Engine for external consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Count, target, phrase or undo availability changed
    SessionChanged { session: Session, can_undo: bool },

    /// The favorites list changed
    FavoritesChanged { favorites: Vec<FavoriteEntry> },

    /// The custom phrase list changed
    CustomDhikrsChanged { custom_dhikrs: Vec<CustomDhikrEntry> },

    /// A toggle, the theme or the resolved dark mode changed
    SettingsChanged { settings: Settings, dark_mode: bool },

    /// A save needs a name before it can go ahead
    NameRequested,

    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Get a short event type name for logging/filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::SessionChanged { .. } => "session_changed",
            EngineEvent::FavoritesChanged { .. } => "favorites_changed",
            EngineEvent::CustomDhikrsChanged { .. } => "custom_dhikrs_changed",
            EngineEvent::SettingsChanged { .. } => "settings_changed",
            EngineEvent::NameRequested => "name_requested",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
