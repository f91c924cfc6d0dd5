//! Handler module - TEA update function and intent handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `counter`: Tap, reset, undo, target and session start handlers
//! - `favorites`: Favorites and custom phrase handlers
//! - `settings`: Toggle and theme handlers

pub(crate) mod counter;
pub(crate) mod favorites;
pub(crate) mod settings;
pub(crate) mod update;


use tasbih_drivers::Alert;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Spoken and shown when a tap lands on the target
pub const TARGET_COMPLETED: &str = "Target completed";

/// Side effects the engine should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Replay the click sound
    PlayClick,

    /// Pulse the vibration motor
    Vibrate { duration_ms: u32 },

    /// Replace any pending utterance with `text`, spoken after `delay_ms`
    ScheduleSpeech { text: String, delay_ms: u64 },

    /// Cancel pending and in-flight speech, then speak `text` immediately
    SpeakNow { text: String },

    /// Cancel pending and in-flight speech
    CancelSpeech,

    /// Show an alert to the user
    ShowAlert(Alert),

    /// Ask the presentation layer for a name to save the session under
    RequestFavoriteName,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the engine to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }

    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::action(UpdateAction::ShowAlert(Alert::ok(title, message)))
    }
}

/// The announcement scheduled after a tap
pub fn utterance_for(count: u32, target: u32) -> String {
    if target > 0 && count == target {
        format!("{} completed!", target)
    } else {
        count.to_string()
    }
}
