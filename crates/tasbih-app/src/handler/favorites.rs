//! Favorites and custom phrase handlers

use tasbih_core::prelude::*;
use tasbih_core::types::progress_label;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Minimum trimmed length of a name typed into the name prompt
const MIN_FAVORITE_NAME_CHARS: usize = 2;

/// Save the session as a favorite.
///
/// Without a name the session is saved under its phrase, or a name prompt is
/// requested when there is no phrase and naming is enabled. With a name the
/// session is saved under it and the name becomes the active phrase.
pub fn handle_save_favorite(state: &mut AppState, name: Option<String>) -> UpdateResult {
    match name {
        Some(name) => save_named(state, name),
        None => save_current(state),
    }
}

fn save_current(state: &mut AppState) -> UpdateResult {
    let session = &state.session;

    if session.phrase_text.trim().is_empty() {
        if state.settings.behavior.show_counter_name {
            debug!("Saving requires a name");
            state.pending_name_prompt = true;
            return UpdateResult::action(UpdateAction::RequestFavoriteName);
        }
        debug!("Nothing to save: no phrase and naming disabled");
        return UpdateResult::none();
    }

    let (key, count, target) = (session.phrase_text.clone(), session.count, session.target);
    match state.favorites.save(&key, count, target) {
        Ok(outcome) => {
            debug!("Favorite {:?} {:?}", key, outcome);
            UpdateResult::alert(
                "Saved",
                format!("\"{}\" saved at {}", key, progress_label(count, target)),
            )
        }
        Err(e) => {
            warn!("Favorite not saved: {}", e);
            UpdateResult::none()
        }
    }
}

fn save_named(state: &mut AppState, name: String) -> UpdateResult {
    if name.trim().chars().count() < MIN_FAVORITE_NAME_CHARS {
        return UpdateResult::alert(
            "Invalid Name",
            "Please enter at least 2 characters for the dhikr name",
        );
    }

    let (count, target) = (state.session.count, state.session.target);
    if let Err(e) = state.favorites.save(&name, count, target) {
        warn!("Favorite not saved: {}", e);
        return UpdateResult::none();
    }

    state.session.phrase_text = name;
    state.pending_name_prompt = false;
    UpdateResult::alert("Success", "Dhikr name has been saved")
}

pub fn handle_cancel_name(state: &mut AppState) -> UpdateResult {
    state.pending_name_prompt = false;
    UpdateResult::none()
}

pub fn handle_select_favorite(state: &mut AppState, key: &str) -> UpdateResult {
    match state.favorites.get(key) {
        Some(entry) => {
            let entry = entry.clone();
            state.session.load_favorite(&entry);
        }
        None => warn!("No favorite named {:?}", key),
    }
    UpdateResult::none()
}

pub fn handle_delete_favorite(state: &mut AppState, key: &str) -> UpdateResult {
    if let Err(e) = state.favorites.delete(key) {
        warn!("Delete ignored: {}", e);
    }
    UpdateResult::none()
}

pub fn handle_add_custom(state: &mut AppState, name: &str) -> UpdateResult {
    match state.custom_dhikrs.add(name) {
        Ok(()) => UpdateResult::none(),
        Err(_) => UpdateResult::alert("Error", "Please enter a dhikr name"),
    }
}

pub fn handle_remove_custom(state: &mut AppState, index: usize) -> UpdateResult {
    if let Err(e) = state.custom_dhikrs.remove_at(index) {
        warn!("Remove ignored: {}", e);
    }
    UpdateResult::none()
}
