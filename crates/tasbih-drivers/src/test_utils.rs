//! Test utilities for feedback drivers
//!
//! Recording fakes that capture every call so engine-level tests can assert on
//! what reached each driver, and in which order.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tasbih_core::prelude::*;

use crate::{
    Alert, AlertPresenter, AudioPlayer, Drivers, HapticDriver, SoundHandle, SpeechOptions,
    SpeechSynthesizer,
};

/// One call received by [`RecordingSpeech`]
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechCall {
    Stop,
    Speak(String),
}

/// Records speech calls; optionally fails every call after recording it
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    calls: Mutex<Vec<SpeechCall>>,
    fail: AtomicBool,
}

impl RecordingSpeech {
    pub fn failing() -> Self {
        let speech = Self::default();
        speech.fail.store(true, Ordering::SeqCst);
        speech
    }

    pub fn calls(&self) -> Vec<SpeechCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Texts passed to `speak`, in order
    pub fn spoken(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                SpeechCall::Speak(text) => Some(text),
                SpeechCall::Stop => None,
            })
            .collect()
    }

    pub fn stop_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, SpeechCall::Stop))
            .count()
    }

    fn result(&self) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            Err(Error::speech("recording synthesizer set to fail"))
        } else {
            Ok(())
        }
    }
}

impl SpeechSynthesizer for RecordingSpeech {
    fn stop(&self) -> Result<()> {
        self.calls.lock().unwrap().push(SpeechCall::Stop);
        self.result()
    }

    fn speak(&self, text: &str, _options: &SpeechOptions) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(SpeechCall::Speak(text.to_string()));
        self.result()
    }
}

/// Records loads, replays and unloads
#[derive(Debug, Default)]
pub struct RecordingAudio {
    next_id: AtomicU64,
    loaded: Mutex<Vec<SoundHandle>>,
    replays: Mutex<Vec<u64>>,
    unloaded: Mutex<Vec<u64>>,
    fail: AtomicBool,
}

impl RecordingAudio {
    pub fn failing() -> Self {
        let audio = Self::default();
        audio.fail.store(true, Ordering::SeqCst);
        audio
    }

    pub fn load_count(&self) -> usize {
        self.loaded.lock().unwrap().len()
    }

    pub fn replay_count(&self) -> usize {
        self.replays.lock().unwrap().len()
    }

    pub fn unload_count(&self) -> usize {
        self.unloaded.lock().unwrap().len()
    }
}

impl AudioPlayer for RecordingAudio {
    fn load(&self, asset: &Path) -> Result<SoundHandle> {
        let handle = SoundHandle {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            path: asset.to_path_buf(),
        };
        self.loaded.lock().unwrap().push(handle.clone());
        Ok(handle)
    }

    fn replay(&self, handle: &SoundHandle) -> Result<()> {
        self.replays.lock().unwrap().push(handle.id);
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::audio("recording player set to fail"));
        }
        Ok(())
    }

    fn unload(&self, handle: &SoundHandle) {
        self.unloaded.lock().unwrap().push(handle.id);
    }
}

/// Records vibration durations
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: Mutex<Vec<u32>>,
}

impl RecordingHaptics {
    pub fn pulses(&self) -> Vec<u32> {
        self.pulses.lock().unwrap().clone()
    }
}

impl HapticDriver for RecordingHaptics {
    fn vibrate(&self, duration_ms: u32) -> Result<()> {
        self.pulses.lock().unwrap().push(duration_ms);
        Ok(())
    }
}

/// Records every alert shown
#[derive(Debug, Default)]
pub struct RecordingAlerts {
    shown: Mutex<Vec<Alert>>,
}

impl RecordingAlerts {
    pub fn shown(&self) -> Vec<Alert> {
        self.shown.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.shown().into_iter().map(|a| a.title).collect()
    }
}

impl AlertPresenter for RecordingAlerts {
    fn show(&self, alert: &Alert) {
        self.shown.lock().unwrap().push(alert.clone());
    }
}

/// A full set of recording drivers, keeping typed handles for assertions
#[derive(Debug, Clone, Default)]
pub struct RecordingDrivers {
    pub audio: Arc<RecordingAudio>,
    pub speech: Arc<RecordingSpeech>,
    pub haptics: Arc<RecordingHaptics>,
    pub alerts: Arc<RecordingAlerts>,
}

impl RecordingDrivers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type-erased handles for the engine
    pub fn drivers(&self) -> Drivers {
        Drivers {
            audio: self.audio.clone(),
            speech: self.speech.clone(),
            haptics: self.haptics.clone(),
            alerts: self.alerts.clone(),
        }
    }
}
