//! Message types for the application (TEA pattern)

use tasbih_core::{Appearance, Phrase, SettingToggle, ThemePreference};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Counter
    // ─────────────────────────────────────────────────────────
    /// Count one repetition
    Tap,
    /// Zero count, target and phrase (undoable)
    Reset,
    /// Restore the last captured snapshot
    Undo,
    /// Raw target text as typed by the user
    SetTarget(String),

    // ─────────────────────────────────────────────────────────
    // Starting a session
    // ─────────────────────────────────────────────────────────
    StartSession(Phrase),
    /// Start a phrase from the built-in catalog by position
    StartCatalogDhikr { category: usize, item: usize },
    /// Start a phrase from the custom list by position
    StartCustomDhikr(usize),

    // ─────────────────────────────────────────────────────────
    // Favorites
    // ─────────────────────────────────────────────────────────
    /// Save the session; `Some(name)` answers a name prompt
    SaveFavorite(Option<String>),
    /// Dismiss a pending name prompt
    CancelFavoriteName,
    SelectFavorite(String),
    DeleteFavorite(String),

    // ─────────────────────────────────────────────────────────
    // Custom phrases
    // ─────────────────────────────────────────────────────────
    AddCustomDhikr(String),
    RemoveCustomDhikr(usize),

    // ─────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────
    ToggleSetting(SettingToggle),
    SetTheme(ThemePreference),
    SystemAppearanceChanged(Appearance),

    /// Shut down (from user input or an OS signal)
    Quit,
}
