//! Settings loading and saving
//!
//! The config file lives at `<config_dir>/tasbih/config.toml` unless a path is
//! given explicitly. A missing or broken file never stops the counter.

use std::path::{Path, PathBuf};

use tasbih_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR: &str = "tasbih";
const CONFIG_FILENAME: &str = "config.toml";

/// Default location of the config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `path`, or from the default location when `None`.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            debug!("No config directory on this platform, using defaults");
            return Settings::default();
        }
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Writing
// ─────────────────────────────────────────────────────────────────────────────

/// Save settings to `path`.
///
/// Uses atomic write (temp file + rename) so a crash never leaves a
/// half-written config behind.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let body = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    write_atomic(path, &format!("{}{}", generate_config_header(), body))
        .with_context(|| format!("Saving settings to {}", path.display()))?;
    info!("Saved settings to {:?}", path);
    Ok(())
}

/// Write a commented default config to `path` (or the default location).
///
/// An existing file is left untouched. Returns the path of the config file.
pub fn init_config_file(path: Option<&Path>) -> Result<PathBuf> {
    let config_path = path
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if config_path.exists() {
        debug!("Config already exists at {:?}", config_path);
        return Ok(config_path);
    }

    write_atomic(&config_path, &generate_default_config())
        .with_context(|| format!("Writing default config to {}", config_path.display()))?;
    info!("Created default config at {:?}", config_path);
    Ok(config_path)
}

fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(CONFIG_FILENAME);
    let temp_path = dir.join(format!(".{}.tmp", file_name));

    std::fs::write(&temp_path, content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    Ok(())
}

fn generate_config_header() -> String {
    r#"# Tasbih Configuration
# Generated by tasbih

"#
    .to_string()
}

fn generate_default_config() -> String {
    r#"# Tasbih Configuration

[feedback]
sound_on = true
vibration_on = false
text_to_speech = false
vibration_ms = 150          # Length of the vibration pulse
speech_delay_ms = 200       # Wait this long after the last tap before speaking
speech_language = "en"
speech_rate = 0.8           # 1.0 = normal speed
# click_sound = "/path/to/click.wav"

[behavior]
stop_on_target = false      # Refuse taps once the target is reached
show_counter_name = true    # Ask for a name when saving without a phrase

[ui]
theme = "dark"              # light, dark or system
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasbih_core::ThemePreference;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(temp.path().join("config.toml").as_path()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[behavior]
stop_on_target = true

[feedback]
vibration_ms = 300
"#,
        )
        .unwrap();

        let settings = load_settings(Some(path.as_path()));
        assert!(settings.behavior.stop_on_target);
        assert_eq!(settings.feedback.vibration_ms, 300);
        assert!(settings.feedback.sound_on);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "not valid toml {{{{").unwrap();

        assert_eq!(load_settings(Some(path.as_path())), Settings::default());
    }

    #[test]
    fn test_init_config_file_writes_parseable_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let written = init_config_file(Some(path.as_path())).unwrap();
        assert_eq!(written, path);
        assert_eq!(load_settings(Some(path.as_path())), Settings::default());
        assert!(!temp.path().join("nested/.config.toml.tmp").exists());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"light\"\n").unwrap();

        init_config_file(Some(path.as_path())).unwrap();
        assert_eq!(load_settings(Some(path.as_path())).ui.theme, ThemePreference::Light);
    }

    #[test]
    fn test_save_under_a_file_is_config_error() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = save_settings(&blocker.join("config.toml"), &Settings::default()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_save_and_reload() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");

        let mut settings = Settings::default();
        settings.feedback.text_to_speech = true;
        settings.ui.theme = ThemePreference::System;
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(Some(path.as_path())), settings);
    }
}
