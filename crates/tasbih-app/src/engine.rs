//! Engine - owns the state, the message channel and the feedback drivers
//!
//! Every frontend drives the counter through an `Engine`: it feeds messages
//! in, the engine runs them through `update()`, performs the resulting
//! actions, and broadcasts what changed.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use tasbih_core::prelude::*;
use tasbih_core::{CustomDhikrEntry, FavoriteEntry};
use tasbih_drivers::{AlertPresenter, Drivers};

use crate::actions::handle_action;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::feedback::FeedbackCoordinator;
use crate::handler;
use crate::message::Message;
use crate::session::Session;
use crate::signals;
use crate::state::AppState;

/// Capture of observable state, compared before/after each message
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    session: Session,
    can_undo: bool,
    favorites: Vec<FavoriteEntry>,
    custom_dhikrs: Vec<CustomDhikrEntry>,
    settings: Settings,
    dark_mode: bool,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            session: state.session.clone(),
            can_undo: state.can_undo(),
            favorites: state.favorites.entries().to_vec(),
            custom_dhikrs: state.custom_dhikrs.entries().to_vec(),
            settings: state.settings.clone(),
            dark_mode: state.dark_mode(),
        }
    }
}

/// Orchestration engine for the counter.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    feedback: FeedbackCoordinator,

    alerts: Arc<dyn AlertPresenter>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an engine with the given settings and drivers.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(settings: Settings, drivers: Drivers) -> Self {
        let feedback = FeedbackCoordinator::new(&drivers, settings.feedback.speech_options());
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            feedback,
            alerts: drivers.alerts,
            event_tx,
        }
    }

    /// Load the click sound played on each tap
    pub fn load_click_sound(&mut self, asset: &Path) {
        info!("Loading click sound from {}", asset.display());
        self.feedback.load_click(asset);
    }

    /// Turn SIGINT/SIGTERM into `Message::Quit`
    pub fn spawn_signal_handler(&self) {
        // detached: the listener lives as long as the runtime
        let _ = signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind, older events are dropped
    /// (`RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Runs `update()`, performs every returned action in order, follows up
    /// any chained message, then emits events for what changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        let mut next = Some(msg);
        while let Some(m) = next {
            trace!("Processing {:?}", m);
            let result = handler::update(&mut self.state, m);
            for action in result.actions {
                handle_action(
                    action,
                    &mut self.feedback,
                    self.alerts.as_ref(),
                    &self.event_tx,
                );
            }
            next = result.message;
        }

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Process messages until quit is requested or every sender is gone
    pub async fn run(&mut self) {
        while !self.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => {
                    info!("Message channel closed");
                    break;
                }
            }
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn is_speech_pending(&self) -> bool {
        self.feedback.is_speech_pending()
    }

    /// Cancel pending speech, stop the current utterance and release the click
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        self.feedback.shutdown();
        info!("Engine shut down");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.session != post.session || pre.can_undo != post.can_undo {
            self.emit(EngineEvent::SessionChanged {
                session: post.session.clone(),
                can_undo: post.can_undo,
            });
        }

        if pre.favorites != post.favorites {
            self.emit(EngineEvent::FavoritesChanged {
                favorites: post.favorites.clone(),
            });
        }

        if pre.custom_dhikrs != post.custom_dhikrs {
            self.emit(EngineEvent::CustomDhikrsChanged {
                custom_dhikrs: post.custom_dhikrs.clone(),
            });
        }

        if pre.settings != post.settings || pre.dark_mode != post.dark_mode {
            self.emit(EngineEvent::SettingsChanged {
                settings: post.settings.clone(),
                dark_mode: post.dark_mode,
            });
        }
    }

    /// send() only fails when nobody is subscribed
    fn emit(&self, event: EngineEvent) {
        trace!("Emitting {}", event.event_type());
        let _ = self.event_tx.send(event);
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state)
            .field("feedback", &self.feedback)
            .finish_non_exhaustive()
    }
}
