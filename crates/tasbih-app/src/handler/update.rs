//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{counter, favorites, settings, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and the actions to perform
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::action(UpdateAction::CancelSpeech)
        }

        // ─────────────────────────────────────────────────────────
        // Counter Messages
        // ─────────────────────────────────────────────────────────
        Message::Tap => counter::handle_tap(state),
        Message::Reset => counter::handle_reset(state),
        Message::Undo => counter::handle_undo(state),
        Message::SetTarget(raw) => counter::handle_set_target(state, &raw),
        Message::StartSession(phrase) => counter::handle_start_session(state, &phrase),
        Message::StartCatalogDhikr { category, item } => {
            counter::handle_start_catalog(state, category, item)
        }
        Message::StartCustomDhikr(index) => counter::handle_start_custom(state, index),

        // ─────────────────────────────────────────────────────────
        // Favorites / Custom Phrase Messages
        // ─────────────────────────────────────────────────────────
        Message::SaveFavorite(name) => favorites::handle_save_favorite(state, name),
        Message::CancelFavoriteName => favorites::handle_cancel_name(state),
        Message::SelectFavorite(key) => favorites::handle_select_favorite(state, &key),
        Message::DeleteFavorite(key) => favorites::handle_delete_favorite(state, &key),
        Message::AddCustomDhikr(name) => favorites::handle_add_custom(state, &name),
        Message::RemoveCustomDhikr(index) => favorites::handle_remove_custom(state, index),

        // ─────────────────────────────────────────────────────────
        // Settings Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleSetting(toggle) => settings::handle_toggle(state, toggle),
        Message::SetTheme(theme) => settings::handle_set_theme(state, theme),
        Message::SystemAppearanceChanged(appearance) => {
            settings::handle_system_appearance(state, appearance)
        }
    }
}
