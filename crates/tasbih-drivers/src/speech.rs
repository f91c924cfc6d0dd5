//! Text-to-speech through an external synthesizer
//!
//! At most one utterance is ever in flight: [`SpeechSynthesizer::stop`] kills
//! the running synthesizer process before the next one is spawned.

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use tasbih_core::prelude::*;

use crate::tool_availability::ToolPath;

/// Words per minute an espeak-style synthesizer uses at rate 1.0
const BASE_WORDS_PER_MINUTE: f32 = 175.0;

/// Voice options applied to each utterance
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechOptions {
    /// Language code, e.g. "en"
    pub language: String,
    /// Relative speaking rate, 1.0 = normal
    pub rate: f32,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            rate: 0.8,
        }
    }
}

impl SpeechOptions {
    fn words_per_minute(&self) -> u32 {
        (BASE_WORDS_PER_MINUTE * self.rate.max(0.1)).round() as u32
    }
}

/// Speaks text and interrupts the utterance in flight
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait SpeechSynthesizer: Send + Sync {
    /// Stop any utterance in progress. Stopping when idle is not an error.
    fn stop(&self) -> Result<()>;

    /// Begin speaking `text` without waiting for it to finish
    fn speak(&self, text: &str, options: &SpeechOptions) -> Result<()>;
}

/// Speech backed by `espeak-ng`, `espeak`, `spd-say` or `say`
pub struct CommandSpeech {
    tool: ToolPath,
    speaking: Mutex<Option<Child>>,
}

impl CommandSpeech {
    pub fn new(tool: ToolPath) -> Self {
        Self {
            tool,
            speaking: Mutex::new(None),
        }
    }

    fn synth_args(&self, text: &str, options: &SpeechOptions) -> Vec<String> {
        let mut args = match self.tool.name.as_str() {
            "espeak-ng" | "espeak" => vec![
                "-v".to_string(),
                options.language.clone(),
                "-s".to_string(),
                options.words_per_minute().to_string(),
            ],
            "spd-say" => {
                // spd-say takes a rate in [-100, 100] around 0
                let rate = ((options.rate - 1.0) * 100.0).round().clamp(-100.0, 100.0) as i32;
                vec![
                    "-l".to_string(),
                    options.language.clone(),
                    "-r".to_string(),
                    rate.to_string(),
                ]
            }
            "say" => vec!["-r".to_string(), options.words_per_minute().to_string()],
            _ => Vec::new(),
        };
        args.push(text.to_string());
        args
    }
}

impl CommandSpeech {
    /// Kill and reap the utterance held in `slot`, if still running
    fn stop_locked(&self, slot: &mut Option<Child>) -> Result<()> {
        if let Some(mut child) = slot.take() {
            match child.try_wait() {
                Ok(Some(_)) => {}
                Ok(None) => {
                    child
                        .kill()
                        .map_err(|e| Error::speech(format!("failed to stop {}: {}", self.tool.name, e)))?;
                    let _ = child.wait();
                    trace!("Stopped {} utterance", self.tool.name);
                }
                Err(e) => return Err(Error::speech(e.to_string())),
            }
        }
        Ok(())
    }
}

impl SpeechSynthesizer for CommandSpeech {
    fn stop(&self) -> Result<()> {
        let mut speaking = self.speaking.lock().unwrap_or_else(|e| e.into_inner());
        self.stop_locked(&mut speaking)
    }

    fn speak(&self, text: &str, options: &SpeechOptions) -> Result<()> {
        // One guard across stop, spawn and store so overlapping calls
        // never leave an untracked child behind.
        let mut speaking = self.speaking.lock().unwrap_or_else(|e| e.into_inner());
        self.stop_locked(&mut speaking)?;

        let child = Command::new(&self.tool.path)
            .args(self.synth_args(text, options))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::speech(format!("failed to spawn {}: {}", self.tool.name, e)))?;

        debug!("Speaking {:?} via {}", text, self.tool.name);
        *speaking = Some(child);
        Ok(())
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Swallows every utterance
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeech;

impl SpeechSynthesizer for SilentSpeech {
    fn stop(&self) -> Result<()> {
        Ok(())
    }

    fn speak(&self, text: &str, _options: &SpeechOptions) -> Result<()> {
        trace!("Speech disabled, dropping {:?}", text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synth(name: &str) -> CommandSpeech {
        CommandSpeech::new(ToolPath::new(name, format!("/usr/bin/{name}")))
    }

    #[test]
    fn test_default_options() {
        let options = SpeechOptions::default();
        assert_eq!(options.language, "en");
        assert_eq!(options.words_per_minute(), 140);
    }

    #[test]
    fn test_espeak_args() {
        let args = synth("espeak-ng").synth_args("7", &SpeechOptions::default());
        assert_eq!(args, vec!["-v", "en", "-s", "140", "7"]);
    }

    #[test]
    fn test_spd_say_rate_is_centered_on_zero() {
        let args = synth("spd-say").synth_args("Target completed", &SpeechOptions::default());
        assert_eq!(args, vec!["-l", "en", "-r", "-20", "Target completed"]);
    }

    #[test]
    fn test_say_args() {
        let options = SpeechOptions {
            language: "en".to_string(),
            rate: 1.0,
        };
        let args = synth("say").synth_args("33 completed!", &options);
        assert_eq!(args, vec!["-r", "175", "33 completed!"]);
    }

    #[test]
    fn test_stop_when_idle_is_ok() {
        assert!(synth("espeak").stop().is_ok());
    }

    #[test]
    fn test_spawn_failure_is_speech_error() {
        let speech = CommandSpeech::new(ToolPath::new("espeak", "/definitely/not/espeak"));
        let err = speech.speak("1", &SpeechOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Speech { .. }));
    }

    #[test]
    fn test_mock_synthesizer() {
        let mut mock = MockSpeechSynthesizer::new();
        mock.expect_stop().times(1).returning(|| Ok(()));
        mock.expect_speak()
            .withf(|text, _| text == "3")
            .times(1)
            .returning(|_, _| Ok(()));

        mock.stop().unwrap();
        mock.speak("3", &SpeechOptions::default()).unwrap();
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_overlapping_speak_leaves_one_child_to_stop() {
        use std::os::unix::fs::PermissionsExt;
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let pids = dir.path().join("pids");
        let script = dir.path().join("fake-say");
        std::fs::write(
            &script,
            format!("#!/bin/sh\necho $$ >> {}\nexec sleep 30\n", pids.display()),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let speech = Arc::new(CommandSpeech::new(ToolPath::new("fake-say", script.clone())));
        for _ in 0..20 {
            let workers: Vec<_> = (0..2)
                .map(|_| {
                    let speech = Arc::clone(&speech);
                    std::thread::spawn(move || {
                        speech.speak("1", &SpeechOptions::default()).unwrap();
                    })
                })
                .collect();
            for worker in workers {
                worker.join().unwrap();
            }
            speech.stop().unwrap();
        }
        std::thread::sleep(std::time::Duration::from_millis(200));

        let running: Vec<String> = std::fs::read_to_string(&pids)
            .unwrap_or_default()
            .lines()
            .filter(|pid| std::path::Path::new(&format!("/proc/{}", pid)).exists())
            .map(str::to_string)
            .collect();
        assert!(running.is_empty(), "utterances still running: {:?}", running);
    }
}
