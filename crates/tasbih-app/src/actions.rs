//! Action handlers: perform the side effects returned by `update()`

use std::time::Duration;

use tokio::sync::broadcast;

use tasbih_core::prelude::*;
use tasbih_drivers::AlertPresenter;

use crate::engine_event::EngineEvent;
use crate::feedback::FeedbackCoordinator;
use crate::handler::UpdateAction;

/// Execute one action returned by the update function
pub fn handle_action(
    action: UpdateAction,
    feedback: &mut FeedbackCoordinator,
    alerts: &dyn AlertPresenter,
    event_tx: &broadcast::Sender<EngineEvent>,
) {
    match action {
        UpdateAction::PlayClick => feedback.play_click(),

        UpdateAction::Vibrate { duration_ms } => feedback.vibrate(duration_ms),

        UpdateAction::ScheduleSpeech { text, delay_ms } => {
            feedback.schedule_utterance(text, Duration::from_millis(delay_ms));
        }

        UpdateAction::SpeakNow { text } => feedback.speak_now(&text),

        UpdateAction::CancelSpeech => feedback.cancel_speech(),

        UpdateAction::ShowAlert(alert) => {
            debug!("Alert: {} / {}", alert.title, alert.message);
            alerts.show(&alert);
        }

        UpdateAction::RequestFavoriteName => {
            // No subscribers is fine
            let _ = event_tx.send(EngineEvent::NameRequested);
        }
    }
}
