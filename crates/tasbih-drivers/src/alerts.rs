//! User-facing alerts

use serde::Serialize;
use tasbih_core::prelude::*;

/// A titled message with the buttons offered to dismiss it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub actions: Vec<String>,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>, actions: Vec<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            actions,
        }
    }

    /// An alert with a single "OK" button
    pub fn ok(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, vec!["OK".to_string()])
    }
}

/// Shows alerts to the user
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait AlertPresenter: Send + Sync {
    fn show(&self, alert: &Alert);
}

/// Writes alerts to the log only
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAlertPresenter;

impl AlertPresenter for LogAlertPresenter {
    fn show(&self, alert: &Alert) {
        info!("[alert] {}: {}", alert.title, alert.message);
    }
}
