//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ─────────────────────────────────────────────────────────────
    // Feedback Driver Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Audio playback error: {message}")]
    Audio { message: String },

    #[error("Speech synthesis error: {message}")]
    Speech { message: String },

    #[error("Haptic driver error: {message}")]
    Haptic { message: String },

    #[error("Sound asset not found: {path}")]
    AssetNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    // ─────────────────────────────────────────────────────────────
    // Process Lifecycle Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Signal handling error: {message}")]
    Signal { message: String },

    #[error("Failed to initialize logging: {message}")]
    LoggingInit { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn audio(message: impl Into<String>) -> Self {
        Self::Audio {
            message: message.into(),
        }
    }

    pub fn speech(message: impl Into<String>) -> Self {
        Self::Speech {
            message: message.into(),
        }
    }

    pub fn haptic(message: impl Into<String>) -> Self {
        Self::Haptic {
            message: message.into(),
        }
    }

    pub fn asset_not_found(path: impl Into<PathBuf>) -> Self {
        Self::AssetNotFound { path: path.into() }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn signal(message: impl Into<String>) -> Self {
        Self::Signal {
            message: message.into(),
        }
    }

    /// Whether this error came from a feedback driver (sound, speech, haptics).
    ///
    /// Driver failures are best-effort and are swallowed at the coordinator.
    pub fn is_driver_failure(&self) -> bool {
        matches!(
            self,
            Error::Audio { .. }
                | Error::Speech { .. }
                | Error::Haptic { .. }
                | Error::AssetNotFound { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::speech("espeak exited with status 1");
        assert_eq!(
            err.to_string(),
            "Speech synthesis error: espeak exited with status 1"
        );

        let err = Error::asset_not_found("/tmp/click.wav");
        assert!(err.to_string().contains("click.wav"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_driver_failure() {
        assert!(Error::asset_not_found("/tmp/click.wav").is_driver_failure());
        assert!(Error::speech("no voice").is_driver_failure());
        assert!(!Error::config("bad").is_driver_failure());
        assert!(!Error::channel_send("stdin").is_driver_failure());
    }

    #[test]
    fn test_context_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("writing config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_with_context_preserves_error() {
        let res: Result<()> = Err(Error::config("bad toml"));
        let err = res
            .with_context(|| "loading settings".to_string())
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
