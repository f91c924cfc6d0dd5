//! # tasbih-drivers - Feedback Drivers
//!
//! The external collaborators the counter core talks to, expressed as narrow
//! object-safe traits, plus concrete implementations backed by command-line
//! tools found on `PATH`.
//!
//! Depends on [`tasbih_core`] for error handling.
//!
//! ## Public API
//!
//! ### Collaborator Traits
//! - [`AudioPlayer`] - Load a sound once, replay it on every tap
//! - [`SpeechSynthesizer`] - Speak text, stop the utterance in flight
//! - [`HapticDriver`] - Vibrate for a duration
//! - [`AlertPresenter`] - Show a titled message to the user
//!
//! Every driver call must return promptly: long-running work (playback,
//! synthesis) happens in a child process the driver owns.
//!
//! ### Implementations
//! - [`CommandAudioPlayer`], [`CommandSpeech`] - Spawn `paplay`/`afplay`/`espeak-ng`/`say`...
//! - [`BellHaptics`] - Terminal bell stands in for a vibration motor
//! - [`SilentAudio`], [`SilentSpeech`], [`NoHaptics`], [`LogAlertPresenter`] - Null drivers
//!
//! ### Platform Utilities
//! - [`ToolAvailability`] - Probe for audio and speech tools once at startup
//! - [`Drivers`] - Bundle of shared driver handles handed to the engine

pub mod alerts;
pub mod audio;
pub mod haptics;
pub mod speech;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;
pub mod tool_availability;

use std::sync::Arc;

use tracing::info;

// Public API re-exports
pub use alerts::{Alert, AlertPresenter, LogAlertPresenter};
pub use audio::{AudioPlayer, CommandAudioPlayer, SilentAudio, SoundHandle};
pub use haptics::{BellHaptics, HapticDriver, NoHaptics};
pub use speech::{CommandSpeech, SilentSpeech, SpeechOptions, SpeechSynthesizer};
pub use tool_availability::{ToolAvailability, ToolPath};

#[cfg(any(test, feature = "test-helpers"))]
pub use alerts::MockAlertPresenter;
#[cfg(any(test, feature = "test-helpers"))]
pub use audio::MockAudioPlayer;
#[cfg(any(test, feature = "test-helpers"))]
pub use haptics::MockHapticDriver;
#[cfg(any(test, feature = "test-helpers"))]
pub use speech::MockSpeechSynthesizer;

/// Shared handles to every feedback collaborator
#[derive(Clone)]
pub struct Drivers {
    pub audio: Arc<dyn AudioPlayer>,
    pub speech: Arc<dyn SpeechSynthesizer>,
    pub haptics: Arc<dyn HapticDriver>,
    pub alerts: Arc<dyn AlertPresenter>,
}

impl Drivers {
    /// Drivers that never make a sound; alerts go to the log
    pub fn silent() -> Self {
        Self {
            audio: Arc::new(SilentAudio::default()),
            speech: Arc::new(SilentSpeech),
            haptics: Arc::new(NoHaptics),
            alerts: Arc::new(LogAlertPresenter),
        }
    }

    /// Pick the best available driver for each concern.
    ///
    /// Missing tools fall back to the silent driver for that concern only.
    pub fn from_availability(tools: &ToolAvailability, alerts: Arc<dyn AlertPresenter>) -> Self {
        let audio: Arc<dyn AudioPlayer> = match &tools.audio {
            Some(tool) => {
                info!("Using {} for click sounds", tool.name);
                Arc::new(CommandAudioPlayer::new(tool.clone()))
            }
            None => {
                info!("No audio player found, click sounds disabled");
                Arc::new(SilentAudio::default())
            }
        };

        let speech: Arc<dyn SpeechSynthesizer> = match &tools.speech {
            Some(tool) => {
                info!("Using {} for speech", tool.name);
                Arc::new(CommandSpeech::new(tool.clone()))
            }
            None => {
                info!("No speech synthesizer found, speech disabled");
                Arc::new(SilentSpeech)
            }
        };

        Self {
            audio,
            speech,
            haptics: Arc::new(BellHaptics),
            alerts,
        }
    }

    /// Replace the alert presenter
    pub fn with_alerts(mut self, alerts: Arc<dyn AlertPresenter>) -> Self {
        self.alerts = alerts;
        self
    }
}

impl std::fmt::Debug for Drivers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drivers").finish_non_exhaustive()
    }
}
