//! Counter handlers: tap, reset, undo, target and session start

use tasbih_core::prelude::*;
use tasbih_core::{find_phrase, validate_target, GuardRejection, Phrase, Snapshot};
use tasbih_drivers::Alert;

use crate::state::AppState;

use super::{utterance_for, UpdateAction, UpdateResult, TARGET_COMPLETED};

fn target_completed_alert() -> UpdateAction {
    UpdateAction::ShowAlert(Alert::ok("", TARGET_COMPLETED))
}

/// Count one tap and emit its feedback.
///
/// Action order on the completion tick mirrors the feedback sequence: the
/// count announcement is scheduled first, then replaced by the immediate
/// completion announcement.
pub fn handle_tap(state: &mut AppState) -> UpdateResult {
    let step = match state.session.increment(state.stop_on_target()) {
        Ok(step) => step,
        Err(GuardRejection::TargetAlreadyReached) => {
            debug!("Tap refused: target {} already reached", state.session.target);
            let mut actions = vec![target_completed_alert()];
            if state.speech_enabled() {
                actions.push(UpdateAction::SpeakNow {
                    text: TARGET_COMPLETED.to_string(),
                });
            }
            return UpdateResult::actions(actions);
        }
        Err(GuardRejection::MaxCountReached) => {
            trace!("Tap ignored: count at maximum");
            return UpdateResult::none();
        }
    };

    state.history.capture(Snapshot::count_only(step.previous));

    let feedback = &state.settings.feedback;
    let mut actions = Vec::new();

    if feedback.sound_on {
        actions.push(UpdateAction::PlayClick);
    }
    if feedback.vibration_on {
        actions.push(UpdateAction::Vibrate {
            duration_ms: feedback.vibration_ms,
        });
    }
    if feedback.text_to_speech {
        actions.push(UpdateAction::ScheduleSpeech {
            text: utterance_for(step.count, state.session.target),
            delay_ms: feedback.speech_delay_ms,
        });
    }

    if step.target_reached {
        info!("Target {} reached", state.session.target);
        actions.push(target_completed_alert());
        if feedback.text_to_speech {
            actions.push(UpdateAction::SpeakNow {
                text: TARGET_COMPLETED.to_string(),
            });
        }
    }

    UpdateResult::actions(actions)
}

pub fn handle_reset(state: &mut AppState) -> UpdateResult {
    let snapshot = state.session.reset();
    state.history.capture(snapshot);
    UpdateResult::none()
}

pub fn handle_undo(state: &mut AppState) -> UpdateResult {
    match state.history.take() {
        Some(snapshot) => {
            debug!("Undo to {:?}", snapshot);
            state.session.restore(snapshot);
        }
        None => trace!("Nothing to undo"),
    }
    UpdateResult::none()
}

pub fn handle_set_target(state: &mut AppState, raw: &str) -> UpdateResult {
    match validate_target(raw, state.session.count) {
        Ok(target) => {
            state.session.target = target;
            UpdateResult::alert("Success", format!("Target count set to {}", target))
        }
        Err(e) => {
            debug!("Target {:?} rejected: {}", raw, e);
            UpdateResult::alert(e.title(), e.message())
        }
    }
}

pub fn handle_start_session(state: &mut AppState, phrase: &Phrase) -> UpdateResult {
    state.session.start(phrase);
    UpdateResult::none()
}

pub fn handle_start_catalog(state: &mut AppState, category: usize, item: usize) -> UpdateResult {
    match find_phrase(category, item) {
        Some(phrase) => handle_start_session(state, &phrase),
        None => {
            warn!("No catalog phrase at {}/{}", category, item);
            UpdateResult::none()
        }
    }
}

pub fn handle_start_custom(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(entry) = state.custom_dhikrs.get(index) else {
        warn!("No custom phrase at index {}", index);
        return UpdateResult::none();
    };
    let name = entry.name.clone();
    state.session.start_named(&name);
    UpdateResult::none()
}
