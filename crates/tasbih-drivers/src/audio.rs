//! Click sound playback
//!
//! The click is loaded once when the engine starts and replayed on every
//! accepted tap. Replaying while a previous click is still audible restarts it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tasbih_core::prelude::*;

use crate::tool_availability::ToolPath;

/// Opaque handle to a loaded sound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundHandle {
    pub id: u64,
    pub path: PathBuf,
}

/// Loads and replays short sound assets
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait AudioPlayer: Send + Sync {
    /// Prepare an asset for playback
    fn load(&self, asset: &Path) -> Result<SoundHandle>;

    /// Play a loaded sound from the start, interrupting any earlier playback
    fn replay(&self, handle: &SoundHandle) -> Result<()>;

    /// Release a loaded sound
    fn unload(&self, handle: &SoundHandle);
}

/// Plays sounds by spawning an external player per replay
pub struct CommandAudioPlayer {
    tool: ToolPath,
    next_id: AtomicU64,
    loaded: Mutex<HashMap<u64, PathBuf>>,
    playing: Mutex<Option<Child>>,
}

impl CommandAudioPlayer {
    pub fn new(tool: ToolPath) -> Self {
        Self {
            tool,
            next_id: AtomicU64::new(1),
            loaded: Mutex::new(HashMap::new()),
            playing: Mutex::new(None),
        }
    }

    /// Player-specific arguments for a one-shot playback of `path`
    fn player_args(&self, path: &Path) -> Vec<String> {
        let file = path.display().to_string();
        match self.tool.name.as_str() {
            "ffplay" => vec![
                "-nodisp".to_string(),
                "-autoexit".to_string(),
                "-loglevel".to_string(),
                "quiet".to_string(),
                file,
            ],
            "aplay" => vec!["-q".to_string(), file],
            _ => vec![file],
        }
    }

    fn stop_playing(&self) {
        let mut playing = self.playing.lock().unwrap_or_else(|e| e.into_inner());
        reap(&mut playing);
    }
}

/// Kill the click still playing in `slot` and wait for it
fn reap(slot: &mut Option<Child>) {
    if let Some(mut child) = slot.take() {
        if let Ok(None) = child.try_wait() {
            let _ = child.kill();
        }
        let _ = child.wait();
    }
}

impl AudioPlayer for CommandAudioPlayer {
    fn load(&self, asset: &Path) -> Result<SoundHandle> {
        if !asset.is_file() {
            return Err(Error::asset_not_found(asset));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.loaded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, asset.to_path_buf());

        debug!("Loaded sound {} from {}", id, asset.display());
        Ok(SoundHandle {
            id,
            path: asset.to_path_buf(),
        })
    }

    fn replay(&self, handle: &SoundHandle) -> Result<()> {
        let path = self
            .loaded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&handle.id)
            .cloned()
            .ok_or_else(|| Error::audio(format!("sound {} is not loaded", handle.id)))?;

        let mut playing = self.playing.lock().unwrap_or_else(|e| e.into_inner());
        reap(&mut playing);

        let child = Command::new(&self.tool.path)
            .args(self.player_args(&path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::audio(format!("failed to spawn {}: {}", self.tool.name, e)))?;

        *playing = Some(child);
        Ok(())
    }

    fn unload(&self, handle: &SoundHandle) {
        self.stop_playing();
        if self
            .loaded
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&handle.id)
            .is_some()
        {
            debug!("Unloaded sound {}", handle.id);
        }
    }
}

impl Drop for CommandAudioPlayer {
    fn drop(&mut self) {
        self.stop_playing();
    }
}

/// Accepts every call and plays nothing
#[derive(Debug, Default)]
pub struct SilentAudio {
    next_id: AtomicU64,
}

impl AudioPlayer for SilentAudio {
    fn load(&self, asset: &Path) -> Result<SoundHandle> {
        Ok(SoundHandle {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            path: asset.to_path_buf(),
        })
    }

    fn replay(&self, _handle: &SoundHandle) -> Result<()> {
        Ok(())
    }

    fn unload(&self, _handle: &SoundHandle) {}
}
