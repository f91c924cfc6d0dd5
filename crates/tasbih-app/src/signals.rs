//! SIGINT/SIGTERM (Ctrl+C on Windows) become `Message::Quit`

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use tasbih_core::prelude::*;

use crate::message::Message;

/// Listen for a termination signal and ask the engine to quit once.
///
/// The returned handle can be aborted; dropping it leaves the listener running.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match next_termination_signal().await {
            Ok(name) => {
                info!("{} received, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Engine already gone, nothing to stop");
                }
            }
            Err(e) => error!("Signal listener not installed: {}", e),
        }
    })
}

#[cfg(unix)]
async fn next_termination_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::signal(format!("{}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    })
}

#[cfg(windows)]
async fn next_termination_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::signal(format!("Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_no_quit_without_a_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        let listener = spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        assert!(!listener.is_finished());
        listener.abort();
    }
}
