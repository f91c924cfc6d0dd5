//! Core domain types shared by the counter state machine and its shells

use serde::{Deserialize, Serialize};

/// Upper bound for both the count and the target.
pub const MAX_COUNT: u32 = 100_000;

/// A partial or full capture of session fields, taken before a mutating
/// operation so that it can be undone.
///
/// Fields left as `None` were not captured and are left untouched on restore.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Snapshot {
    pub count: u32,
    pub target: Option<u32>,
    pub phrase_text: Option<String>,
}

impl Snapshot {
    /// Snapshot of the count only (taken by a tap)
    pub fn count_only(count: u32) -> Self {
        Self {
            count,
            target: None,
            phrase_text: None,
        }
    }

    /// Snapshot of every session field (taken by a reset)
    pub fn full(count: u32, target: u32, phrase_text: impl Into<String>) -> Self {
        Self {
            count,
            target: Some(target),
            phrase_text: Some(phrase_text.into()),
        }
    }

    pub fn is_full(&self) -> bool {
        self.target.is_some() && self.phrase_text.is_some()
    }
}

/// A saved (phrase, count, target) triple, keyed by phrase text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub key: String,
    pub count: u32,
    pub target: u32,
}

impl FavoriteEntry {
    pub fn new(key: impl Into<String>, count: u32, target: u32) -> Self {
        Self {
            key: key.into(),
            count,
            target,
        }
    }

    /// "12/33" or "12/No Target"
    pub fn progress_label(&self) -> String {
        progress_label(self.count, self.target)
    }
}

/// Format a count against a target, with 0 rendered as "No Target".
pub fn progress_label(count: u32, target: u32) -> String {
    if target == 0 {
        format!("{}/No Target", count)
    } else {
        format!("{}/{}", count, target)
    }
}

/// A user-authored phrase name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomDhikrEntry {
    pub name: String,
}

impl CustomDhikrEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Why a tap was refused. These are expected steady-state conditions,
/// not user-facing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardRejection {
    /// The count is already at [`MAX_COUNT`]
    MaxCountReached,
    /// Stop-on-target is active and the target has been reached
    TargetAlreadyReached,
}

impl std::fmt::Display for GuardRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardRejection::MaxCountReached => write!(f, "maximum count reached"),
            GuardRejection::TargetAlreadyReached => write!(f, "target already reached"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// The appearance reported by the host system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl std::str::FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            other => Err(format!("unknown appearance: {}", other)),
        }
    }
}

/// User theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemePreference {
    /// Resolve the preference against the system appearance.
    ///
    /// Returns `true` when the presentation layer should render dark.
    pub fn resolve(self, system: Appearance) -> bool {
        match self {
            ThemePreference::Dark => true,
            ThemePreference::Light => false,
            ThemePreference::System => system == Appearance::Dark,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "light"),
            ThemePreference::Dark => write!(f, "dark"),
            ThemePreference::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings toggles
// ─────────────────────────────────────────────────────────────────────────────

/// The boolean settings that can be flipped by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingToggle {
    SoundOn,
    VibrationOn,
    StopOnTarget,
    TextToSpeech,
    ShowCounterName,
}

impl SettingToggle {
    pub const ALL: [SettingToggle; 5] = [
        SettingToggle::SoundOn,
        SettingToggle::VibrationOn,
        SettingToggle::StopOnTarget,
        SettingToggle::TextToSpeech,
        SettingToggle::ShowCounterName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingToggle::SoundOn => "sound_on",
            SettingToggle::VibrationOn => "vibration_on",
            SettingToggle::StopOnTarget => "stop_on_target",
            SettingToggle::TextToSpeech => "text_to_speech",
            SettingToggle::ShowCounterName => "show_counter_name",
        }
    }
}

impl std::fmt::Display for SettingToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SettingToggle {
    type Err = String;

    /// Accepts snake_case (`sound_on`), camelCase (`soundOn`) and kebab-case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "soundon" | "sound" => Ok(SettingToggle::SoundOn),
            "vibrationon" | "vibration" => Ok(SettingToggle::VibrationOn),
            "stopontarget" => Ok(SettingToggle::StopOnTarget),
            "texttospeech" | "tts" | "speech" => Ok(SettingToggle::TextToSpeech),
            "showcountername" => Ok(SettingToggle::ShowCounterName),
            _ => Err(format!("unknown setting: {}", s.trim())),
        }
    }
}
