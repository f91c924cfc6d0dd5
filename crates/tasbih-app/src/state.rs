//! Application state (Model in TEA pattern)

use tasbih_core::{Appearance, SettingToggle};

use crate::config::Settings;
use crate::history::HistoryStack;
use crate::session::Session;
use crate::stores::{CustomDhikrStore, FavoritesStore};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub phase: AppPhase,

    /// The live counting session
    pub session: Session,

    /// Single-slot undo buffer
    pub history: HistoryStack,

    pub favorites: FavoritesStore,

    pub custom_dhikrs: CustomDhikrStore,

    /// Feedback, behaviour and theme settings
    pub settings: Settings,

    /// A save is waiting for the user to name the session
    pub pending_name_prompt: bool,

    /// Appearance last reported by the host
    pub system_appearance: Appearance,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn setting(&self, toggle: SettingToggle) -> bool {
        self.settings.toggle(toggle)
    }

    pub fn stop_on_target(&self) -> bool {
        self.settings.behavior.stop_on_target
    }

    pub fn speech_enabled(&self) -> bool {
        self.settings.feedback.text_to_speech
    }

    /// Theme preference resolved against the system appearance
    pub fn dark_mode(&self) -> bool {
        self.settings.ui.theme.resolve(self.system_appearance)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
