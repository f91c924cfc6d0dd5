//! Configuration types for the tasbih counter
//!
//! `Settings` mirrors `config.toml`. Every field has a default so a partial
//! (or missing) file still produces a complete configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tasbih_core::{SettingToggle, ThemePreference};
use tasbih_drivers::SpeechOptions;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub feedback: FeedbackSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    pub fn toggle(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::SoundOn => self.feedback.sound_on,
            SettingToggle::VibrationOn => self.feedback.vibration_on,
            SettingToggle::TextToSpeech => self.feedback.text_to_speech,
            SettingToggle::StopOnTarget => self.behavior.stop_on_target,
            SettingToggle::ShowCounterName => self.behavior.show_counter_name,
        }
    }

    /// Flip a toggle and return its new value
    pub fn flip(&mut self, toggle: SettingToggle) -> bool {
        let slot = match toggle {
            SettingToggle::SoundOn => &mut self.feedback.sound_on,
            SettingToggle::VibrationOn => &mut self.feedback.vibration_on,
            SettingToggle::TextToSpeech => &mut self.feedback.text_to_speech,
            SettingToggle::StopOnTarget => &mut self.behavior.stop_on_target,
            SettingToggle::ShowCounterName => &mut self.behavior.show_counter_name,
        };
        *slot = !*slot;
        *slot
    }
}

/// Sound, vibration and speech feedback
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedbackSettings {
    #[serde(default = "default_true")]
    pub sound_on: bool,

    #[serde(default)]
    pub vibration_on: bool,

    #[serde(default)]
    pub text_to_speech: bool,

    /// Length of the vibration pulse on each tap
    #[serde(default = "default_vibration_ms")]
    pub vibration_ms: u32,

    /// Debounce before the count is announced
    #[serde(default = "default_speech_delay_ms")]
    pub speech_delay_ms: u64,

    #[serde(default = "default_speech_language")]
    pub speech_language: String,

    #[serde(default = "default_speech_rate")]
    pub speech_rate: f32,

    /// Click sound played on each tap. `None` uses the bundled asset path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_sound: Option<PathBuf>,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            sound_on: true,
            vibration_on: false,
            text_to_speech: false,
            vibration_ms: default_vibration_ms(),
            speech_delay_ms: default_speech_delay_ms(),
            speech_language: default_speech_language(),
            speech_rate: default_speech_rate(),
            click_sound: None,
        }
    }
}

impl FeedbackSettings {
    pub fn speech_options(&self) -> SpeechOptions {
        SpeechOptions {
            language: self.speech_language.clone(),
            rate: self.speech_rate,
        }
    }
}

/// Counting behaviour
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Refuse taps once the target is reached
    #[serde(default)]
    pub stop_on_target: bool,

    /// Ask for a name when saving a session that has no phrase
    #[serde(default = "default_true")]
    pub show_counter_name: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            stop_on_target: false,
            show_counter_name: true,
        }
    }
}

/// Presentation preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: ThemePreference,
}

fn default_true() -> bool {
    true
}

fn default_vibration_ms() -> u32 {
    150
}

fn default_speech_delay_ms() -> u64 {
    200
}

fn default_speech_language() -> String {
    "en".to_string()
}

fn default_speech_rate() -> f32 {
    0.8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.feedback.sound_on);
        assert!(!settings.feedback.vibration_on);
        assert!(!settings.feedback.text_to_speech);
        assert_eq!(settings.feedback.vibration_ms, 150);
        assert_eq!(settings.feedback.speech_delay_ms, 200);
        assert!(!settings.behavior.stop_on_target);
        assert!(settings.behavior.show_counter_name);
        assert_eq!(settings.ui.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[feedback]
text_to_speech = true
speech_rate = 1.0

[ui]
theme = "system"
"#,
        )
        .unwrap();

        assert!(settings.feedback.text_to_speech);
        assert!(settings.feedback.sound_on);
        assert_eq!(settings.feedback.speech_options().rate, 1.0);
        assert_eq!(settings.ui.theme, ThemePreference::System);
        assert!(settings.behavior.show_counter_name);
    }

    #[test]
    fn test_flip_every_toggle() {
        let mut settings = Settings::default();
        for toggle in SettingToggle::ALL {
            let before = settings.toggle(toggle);
            assert_eq!(settings.flip(toggle), !before);
            assert_eq!(settings.toggle(toggle), !before);
        }
    }
}
