//! Headless mode runner - stdin commands in, NDJSON events out

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use tasbih_app::config::{self, Settings};
use tasbih_app::{Engine, EngineEvent, Message};
use tasbih_core::builtin_catalog;
use tasbih_core::prelude::*;
use tasbih_drivers::{Drivers, SilentSpeech, ToolAvailability};

use super::command::{parse_command, CommandError, HeadlessCommand, Query};
use super::{HeadlessEvent, StdoutAlertPresenter};

/// Click sound shipped with the crate
const BUNDLED_CLICK: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/click.wav");

type InputLine = std::result::Result<HeadlessCommand, CommandError>;

/// Command-line switches that shape the headless session
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Explicit config file; `None` uses the platform config dir
    pub config_path: Option<PathBuf>,
    /// Use silent drivers for sound, speech and haptics
    pub mute: bool,
    /// Never spawn a speech synthesizer even if one is installed
    pub no_speech_tools: bool,
}

/// Run the counter until `quit`, EOF on stdin, or a termination signal
pub async fn run_headless(options: HeadlessOptions) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("tasbih starting in headless mode");
    info!("═══════════════════════════════════════════════════════");

    let config_path = options
        .config_path
        .clone()
        .or_else(config::default_config_path);
    let loaded = config::load_settings(config_path.as_deref());

    let drivers = build_drivers(&options);
    let click = click_sound_path(&loaded);

    let mut engine = Engine::new(loaded.clone(), drivers);
    engine.load_click_sound(&click);
    engine.spawn_signal_handler();
    let mut events = engine.subscribe();

    let (input_tx, mut input_rx) = mpsc::channel::<InputLine>(64);
    std::thread::spawn(move || {
        read_stdin_blocking(input_tx);
    });

    HeadlessEvent::session(&engine.state.session, engine.state.can_undo()).emit();

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        tokio::select! {
            Some(msg) = engine.msg_rx.recv() => {
                engine.process_message(msg);
            }
            input = input_rx.recv() => match input {
                Some(Ok(HeadlessCommand::Intent(msg))) => engine.process_message(msg),
                Some(Ok(HeadlessCommand::Query(query))) => answer_query(&engine, query),
                Some(Err(e)) => HeadlessEvent::error(e.to_string()).emit(),
                None => {
                    info!("Stdin reader finished");
                    break;
                }
            },
        }

        flush_events(&mut events);
    }

    engine.shutdown();

    if let Some(path) = config_path.as_deref() {
        persist_settings(path, &loaded, &engine.state.settings);
    }

    info!("tasbih headless mode exiting");
    Ok(())
}

fn build_drivers(options: &HeadlessOptions) -> Drivers {
    let alerts = Arc::new(StdoutAlertPresenter);

    if options.mute {
        info!("Muted: using silent drivers");
        return Drivers::silent().with_alerts(alerts);
    }

    let tools = ToolAvailability::check();
    if let Some(msg) = tools.audio_unavailable_message() {
        warn!("{}", msg);
    }

    let mut drivers = Drivers::from_availability(&tools, alerts);
    if options.no_speech_tools {
        info!("Speech tools disabled on the command line");
        drivers.speech = Arc::new(SilentSpeech);
    } else if let Some(msg) = tools.speech_unavailable_message() {
        warn!("{}", msg);
    }
    drivers
}

fn click_sound_path(settings: &Settings) -> PathBuf {
    settings
        .feedback
        .click_sound
        .clone()
        .unwrap_or_else(|| PathBuf::from(BUNDLED_CLICK))
}

fn answer_query(engine: &Engine, query: Query) {
    let state = &engine.state;
    let event = match query {
        Query::Status => HeadlessEvent::session(&state.session, state.can_undo()),
        Query::Catalog => HeadlessEvent::catalog(builtin_catalog()),
        Query::Favorites => HeadlessEvent::favorites(state.favorites.entries().to_vec()),
        Query::CustomDhikrs => {
            HeadlessEvent::custom_dhikrs(state.custom_dhikrs.entries().to_vec())
        }
        Query::Settings => HeadlessEvent::settings(state.settings.clone(), state.dark_mode()),
    };
    event.emit();
}

fn flush_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(event) {
                    headless.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Dropped {} engine events", n);
            }
            Err(_) => break,
        }
    }
}

/// Write toggles and theme changes back so the next run starts with them
fn persist_settings(path: &Path, loaded: &Settings, current: &Settings) {
    if loaded == current {
        return;
    }
    // save_settings logs its own failure
    let _ = config::save_settings(path, current);
}

/// Parse stdin lines and forward them; EOF becomes `quit`
fn read_stdin_blocking(input_tx: mpsc::Sender<InputLine>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Stdin read error: {}", e);
                break;
            }
        };

        let parsed = match parse_command(&line) {
            Ok(Some(command)) => Ok(command),
            Ok(None) => continue,
            Err(e) => {
                debug!("Rejected stdin line {:?}: {}", line, e);
                Err(e)
            }
        };

        if let Err(e) = forward(&input_tx, parsed) {
            debug!("{}", e);
            return;
        }
    }

    info!("Stdin closed, requesting quit");
    if let Err(e) = forward(&input_tx, Ok(HeadlessCommand::Intent(Message::Quit))) {
        debug!("{}", e);
    }
}

/// Hand a parsed line to the event loop; fails once the loop has exited
fn forward(input_tx: &mpsc::Sender<InputLine>, line: InputLine) -> Result<()> {
    input_tx
        .blocking_send(line)
        .map_err(|_| Error::channel_send("headless event loop is gone"))
}
