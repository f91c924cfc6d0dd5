//! # tasbih-app - Session State Machine and Orchestration
//!
//! The counter core, following the Elm Architecture (TEA):
//! - **Model**: [`AppState`] - session, undo slot, stores and settings
//! - **Message**: [`Message`] - every user intent
//! - **Update**: [`handler::update`] - pure state transitions returning [`UpdateAction`]s
//! - **Effects**: [`actions::handle_action`] - feeds actions to the [`FeedbackCoordinator`]
//!   and the alert presenter
//!
//! [`Engine`] ties it together and broadcasts [`EngineEvent`]s after every message.
//!
//! ## Public API
//!
//! ### Core
//! - [`Engine`] - Owns the state, channel and drivers
//! - [`EngineEvent`] - Change notifications for frontends
//! - [`AppState`], [`Session`], [`HistoryStack`] - State
//! - [`FavoritesStore`], [`CustomDhikrStore`] - In-memory lists
//!
//! ### Feedback
//! - [`FeedbackCoordinator`] - Fire-and-forget sound/vibration, debounced speech
//! - [`CancellableTimer`] - One pending delayed task at a time
//!
//! ### Configuration (`config`)
//! - [`config::Settings`] - Loaded from `config.toml`
//! - [`config::load_settings()`], [`config::init_config_file()`]

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod feedback;
pub mod handler;
pub mod history;
pub mod message;
pub mod session;
pub mod signals;
pub mod state;
pub mod stores;

pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use feedback::{CancellableTimer, FeedbackCoordinator};
pub use handler::{update, UpdateAction, UpdateResult};
pub use history::HistoryStack;
pub use message::Message;
pub use session::{Increment, Session};
pub use state::{AppPhase, AppState};
pub use stores::{CustomDhikrStore, FavoritesStore, SaveOutcome, StoreError};
