//! Settings handlers

use tasbih_core::prelude::*;
use tasbih_core::{Appearance, SettingToggle, ThemePreference};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_toggle(state: &mut AppState, toggle: SettingToggle) -> UpdateResult {
    let enabled = state.settings.flip(toggle);
    info!("{} = {}", toggle, enabled);

    // Silence whatever was queued when speech is switched off
    if toggle == SettingToggle::TextToSpeech && !enabled {
        return UpdateResult::action(UpdateAction::CancelSpeech);
    }
    UpdateResult::none()
}

pub fn handle_set_theme(state: &mut AppState, theme: ThemePreference) -> UpdateResult {
    state.settings.ui.theme = theme;
    debug!("Theme {} (dark mode: {})", theme, state.dark_mode());
    UpdateResult::none()
}

pub fn handle_system_appearance(state: &mut AppState, appearance: Appearance) -> UpdateResult {
    state.system_appearance = appearance;
    UpdateResult::none()
}
