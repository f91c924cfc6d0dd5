//! Feedback coordination
//!
//! `FeedbackCoordinator` fronts the sound, speech and haptic drivers. Sound
//! and vibration are fire-and-forget. Speech goes through a debounced,
//! cancellable channel: each new request cancels the pending utterance and
//! stops the one in flight, so only the latest request is ever heard.
//!
//! Driver failures never leave this module; they are logged at debug level.

mod timer;

pub use timer::CancellableTimer;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tasbih_core::prelude::*;
use tasbih_drivers::{
    AudioPlayer, Drivers, HapticDriver, SoundHandle, SpeechOptions, SpeechSynthesizer,
};

pub struct FeedbackCoordinator {
    audio: Arc<dyn AudioPlayer>,
    speech: Arc<dyn SpeechSynthesizer>,
    haptics: Arc<dyn HapticDriver>,
    speech_options: SpeechOptions,
    click: Option<SoundHandle>,
    timer: CancellableTimer,
}

impl FeedbackCoordinator {
    pub fn new(drivers: &Drivers, speech_options: SpeechOptions) -> Self {
        Self {
            audio: drivers.audio.clone(),
            speech: drivers.speech.clone(),
            haptics: drivers.haptics.clone(),
            speech_options,
            click: None,
            timer: CancellableTimer::new(),
        }
    }

    /// Load the click sound. Without it, `play_click` does nothing.
    pub fn load_click(&mut self, asset: &Path) {
        match self.audio.load(asset) {
            Ok(handle) => self.click = Some(handle),
            Err(e) => warn!("Click sound unavailable: {}", e),
        }
    }

    pub fn has_click(&self) -> bool {
        self.click.is_some()
    }

    pub fn play_click(&self) {
        let Some(handle) = &self.click else {
            return;
        };
        if let Err(e) = self.audio.replay(handle) {
            log_failure("Click replay", &e);
        }
    }

    pub fn vibrate(&self, duration_ms: u32) {
        if let Err(e) = self.haptics.vibrate(duration_ms) {
            log_failure("Vibration", &e);
        }
    }

    /// Speak `text` after `delay`, superseding anything pending or in flight.
    ///
    /// The text is fixed now; later state changes don't alter it.
    pub fn schedule_utterance(&mut self, text: String, delay: Duration) {
        self.silence();

        let speech = self.speech.clone();
        let options = self.speech_options.clone();
        self.timer.schedule(delay, move || {
            if let Err(e) = speech.speak(&text, &options) {
                log_failure("Speech", &e);
            }
        });
    }

    /// Speak `text` now, superseding anything pending or in flight
    pub fn speak_now(&mut self, text: &str) {
        self.silence();
        if let Err(e) = self.speech.speak(text, &self.speech_options) {
            log_failure("Speech", &e);
        }
    }

    /// Cancel pending and in-flight speech
    pub fn cancel_speech(&mut self) {
        self.silence();
    }

    pub fn is_speech_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Release everything: pending speech, the current utterance and the click
    pub fn shutdown(&mut self) {
        self.silence();
        if let Some(handle) = self.click.take() {
            self.audio.unload(&handle);
        }
        debug!("Feedback coordinator shut down");
    }

    fn silence(&mut self) {
        if self.timer.cancel_pending() {
            trace!("Cancelled pending utterance");
        }
        if let Err(e) = self.speech.stop() {
            log_failure("Speech stop", &e);
        }
    }
}

/// Expected driver trouble (missing tool, busy device) stays at debug
fn log_failure(what: &str, e: &Error) {
    if e.is_driver_failure() {
        debug!("{} failed: {}", what, e);
    } else {
        warn!("{} failed: {}", what, e);
    }
}

impl std::fmt::Debug for FeedbackCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackCoordinator")
            .field("speech_options", &self.speech_options)
            .field("click", &self.click)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasbih_drivers::test_utils::{RecordingDrivers, RecordingSpeech, SpeechCall};
    use tasbih_drivers::{MockAudioPlayer, MockHapticDriver, MockSpeechSynthesizer};

    const DEBOUNCE: Duration = Duration::from_millis(200);

    fn coordinator(recording: &RecordingDrivers) -> FeedbackCoordinator {
        FeedbackCoordinator::new(&recording.drivers(), SpeechOptions::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_requests_speak_only_the_last() {
        let recording = RecordingDrivers::new();
        let mut feedback = coordinator(&recording);

        for count in 1..=5 {
            feedback.schedule_utterance(count.to_string(), DEBOUNCE);
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(recording.speech.spoken().is_empty());

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(recording.speech.spoken(), vec!["5"]);
        assert_eq!(recording.speech.stop_count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_speak_now_supersedes_scheduled() {
        let recording = RecordingDrivers::new();
        let mut feedback = coordinator(&recording);

        feedback.schedule_utterance("10 completed!".to_string(), DEBOUNCE);
        feedback.speak_now("Target completed");
        assert!(!feedback.is_speech_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(recording.speech.spoken(), vec!["Target completed"]);
        assert_eq!(
            recording.speech.calls(),
            vec![
                SpeechCall::Stop,
                SpeechCall::Stop,
                SpeechCall::Speak("Target completed".to_string())
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_speech() {
        let recording = RecordingDrivers::new();
        let mut feedback = coordinator(&recording);

        feedback.schedule_utterance("3".to_string(), DEBOUNCE);
        feedback.cancel_speech();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(recording.speech.spoken().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_speech_failure_is_swallowed() {
        let recording = RecordingDrivers {
            speech: Arc::new(RecordingSpeech::failing()),
            ..RecordingDrivers::new()
        };
        let mut feedback = coordinator(&recording);

        feedback.speak_now("Target completed");
        feedback.schedule_utterance("4".to_string(), DEBOUNCE);
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(recording.speech.spoken(), vec!["Target completed", "4"]);
    }

    #[tokio::test]
    async fn test_click_loaded_once_and_unloaded_on_shutdown() {
        let recording = RecordingDrivers::new();
        let mut feedback = coordinator(&recording);

        feedback.play_click();
        assert_eq!(recording.audio.replay_count(), 0);

        feedback.load_click(Path::new("/assets/click.wav"));
        feedback.play_click();
        feedback.play_click();
        feedback.shutdown();

        assert_eq!(recording.audio.load_count(), 1);
        assert_eq!(recording.audio.replay_count(), 2);
        assert_eq!(recording.audio.unload_count(), 1);
        assert!(!feedback.has_click());
    }

    #[tokio::test]
    async fn test_driver_errors_never_escape() {
        let mut audio = MockAudioPlayer::new();
        audio
            .expect_load()
            .returning(|p| Err(Error::asset_not_found(p)));
        let mut haptics = MockHapticDriver::new();
        haptics
            .expect_vibrate()
            .times(1)
            .returning(|_| Err(Error::haptic("no motor")));
        let mut speech = MockSpeechSynthesizer::new();
        speech
            .expect_stop()
            .returning(|| Err(Error::speech("busy")));
        speech
            .expect_speak()
            .times(1)
            .returning(|_, _| Err(Error::speech("no voice")));

        let drivers = Drivers {
            audio: Arc::new(audio),
            speech: Arc::new(speech),
            haptics: Arc::new(haptics),
            alerts: Arc::new(tasbih_drivers::LogAlertPresenter),
        };
        let mut feedback = FeedbackCoordinator::new(&drivers, SpeechOptions::default());

        feedback.load_click(Path::new("/missing.wav"));
        assert!(!feedback.has_click());
        feedback.play_click();
        feedback.vibrate(150);
        feedback.speak_now("1");
        feedback.shutdown();
    }
}
