//! Tool availability checking for feedback drivers
//!
//! Sound and speech are produced by external command-line tools. This module
//! probes `PATH` once at startup for the first usable player and synthesizer.

use std::path::PathBuf;

/// Audio players, in order of preference
pub const AUDIO_PLAYERS: &[&str] = &["paplay", "aplay", "afplay", "ffplay"];

/// Speech synthesizers, in order of preference
pub const SPEECH_SYNTHESIZERS: &[&str] = &["espeak-ng", "espeak", "spd-say", "say"];

/// A resolved external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPath {
    /// Command name as listed in the candidate table (e.g. "paplay")
    pub name: String,
    /// Absolute path found on PATH
    pub path: PathBuf,
}

impl ToolPath {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Cached availability of external feedback tools
#[derive(Debug, Clone, Default)]
pub struct ToolAvailability {
    /// First audio player found, if any
    pub audio: Option<ToolPath>,

    /// First speech synthesizer found, if any
    pub speech: Option<ToolPath>,
}

impl ToolAvailability {
    /// Check tool availability (run once at startup)
    pub fn check() -> Self {
        Self::check_with(|name| {
            which::which(name)
                .inspect_err(|e| tracing::trace!("{} not on PATH: {}", name, e))
                .ok()
        })
    }

    /// Check availability with a custom PATH lookup
    pub fn check_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let audio = first_available(AUDIO_PLAYERS, &lookup);
        let speech = first_available(SPEECH_SYNTHESIZERS, &lookup);

        tracing::debug!(
            "Tool availability: audio={:?}, speech={:?}",
            audio.as_ref().map(|t| &t.name),
            speech.as_ref().map(|t| &t.name)
        );

        Self { audio, speech }
    }

    /// Get user-friendly message for unavailable audio tools
    pub fn audio_unavailable_message(&self) -> Option<&'static str> {
        if self.audio.is_some() {
            None
        } else {
            Some("No audio player found. Install pulseaudio-utils, alsa-utils or ffmpeg for click sounds.")
        }
    }

    /// Get user-friendly message for unavailable speech tools
    pub fn speech_unavailable_message(&self) -> Option<&'static str> {
        if self.speech.is_some() {
            None
        } else {
            Some("No speech synthesizer found. Install espeak-ng for text to speech.")
        }
    }
}

fn first_available<F>(candidates: &[&str], lookup: &F) -> Option<ToolPath>
where
    F: Fn(&str) -> Option<PathBuf>,
{
    candidates
        .iter()
        .find_map(|name| lookup(name).map(|path| ToolPath::new(*name, path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_availability_default() {
        let availability = ToolAvailability::default();
        assert!(availability.audio.is_none());
        assert!(availability.speech.is_none());
        assert!(availability.audio_unavailable_message().is_some());
        assert!(availability.speech_unavailable_message().is_some());
    }

    #[test]
    fn test_prefers_earlier_candidates() {
        let availability = ToolAvailability::check_with(|name| match name {
            "aplay" | "ffplay" | "espeak" | "say" => Some(PathBuf::from(format!("/usr/bin/{name}"))),
            _ => None,
        });

        assert_eq!(availability.audio.unwrap().name, "aplay");
        assert_eq!(availability.speech.unwrap().name, "espeak");
    }

    #[test]
    fn test_nothing_on_path() {
        let availability = ToolAvailability::check_with(|_| None);
        assert!(availability.audio.is_none());
        assert!(availability.speech.is_none());
    }
}
