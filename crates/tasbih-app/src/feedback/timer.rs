//! Cancellable one-shot timer
//!
//! Runs a closure on the tokio runtime after a delay. Scheduling again, or
//! cancelling, aborts the previous task before it fires.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Holds at most one pending delayed task
#[derive(Debug, Default)]
pub struct CancellableTimer {
    pending: Option<JoinHandle<()>>,
}

impl CancellableTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` after `delay`, replacing any pending task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&mut self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel_pending();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
    }

    /// Abort the pending task. Returns `true` if one was still waiting.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CancellableTimer {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
