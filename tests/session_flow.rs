//! End-to-end session flows through the engine, driven by headless commands

use std::path::Path;
use std::time::Duration;

use tasbih::{parse_command, HeadlessCommand};
use tasbih_app::config::Settings;
use tasbih_app::{Engine, EngineEvent, Message};
use tasbih_drivers::test_utils::RecordingDrivers;

fn engine(settings: Settings) -> (Engine, RecordingDrivers) {
    let recording = RecordingDrivers::new();
    let mut engine = Engine::new(settings, recording.drivers());
    engine.load_click_sound(Path::new("assets/click.wav"));
    (engine, recording)
}

/// Feed stdin-style lines to the engine; queries are skipped
fn run_lines(engine: &mut Engine, lines: &[&str]) {
    for line in lines {
        match parse_command(line) {
            Ok(Some(HeadlessCommand::Intent(msg))) => engine.process_message(msg),
            Ok(Some(HeadlessCommand::Query(_))) | Ok(None) => {}
            Err(e) => panic!("{:?} failed to parse: {}", line, e),
        }
    }
}

fn taps(n: usize) -> Vec<&'static str> {
    vec!["tap"; n]
}

#[tokio::test]
async fn target_completion_fires_once() {
    let (mut engine, recording) = engine(Settings::default());

    run_lines(&mut engine, &["target 10"]);
    run_lines(&mut engine, &taps(11));

    assert_eq!(engine.state.session.count, 11);
    let titles = recording.alerts.titles();
    assert_eq!(titles, vec!["Success".to_string(), String::new()]);
    assert_eq!(recording.alerts.shown()[1].message, "Target completed");
}

#[tokio::test]
async fn stop_on_target_blocks_further_taps() {
    let (mut engine, recording) = engine(Settings::default());

    run_lines(&mut engine, &["toggle stop_on_target", "target 5"]);
    run_lines(&mut engine, &taps(6));

    assert_eq!(engine.state.session.count, 5);
    assert_eq!(recording.audio.replay_count(), 5);
}

#[tokio::test]
async fn invalid_targets_leave_session_unchanged() {
    let (mut engine, recording) = engine(Settings::default());
    run_lines(&mut engine, &taps(5));

    run_lines(&mut engine, &["target 3", "target abc", "target", "target 2.5"]);

    assert_eq!(engine.state.session.target, 0);
    assert_eq!(recording.alerts.shown().len(), 4);

    run_lines(&mut engine, &["target 50"]);
    assert_eq!(engine.state.session.target, 50);
}

#[tokio::test]
async fn reset_then_undo_restores_everything() {
    let (mut engine, _recording) = engine(Settings::default());

    run_lines(&mut engine, &["start 0 0"]);
    let phrase = engine.state.session.phrase_text.clone();
    assert!(!phrase.is_empty());
    run_lines(&mut engine, &taps(7));
    let target = engine.state.session.target;

    run_lines(&mut engine, &["reset"]);
    assert_eq!(engine.state.session.count, 0);
    assert_eq!(engine.state.session.target, 0);

    run_lines(&mut engine, &["undo"]);
    assert_eq!(engine.state.session.count, 7);
    assert_eq!(engine.state.session.target, target);
    assert_eq!(engine.state.session.phrase_text, phrase);
    assert!(!engine.state.can_undo());
}

#[tokio::test]
async fn tap_then_undo_restores_only_count() {
    let (mut engine, _recording) = engine(Settings::default());

    run_lines(&mut engine, &["target 33", "tap", "tap", "undo"]);

    assert_eq!(engine.state.session.count, 1);
    assert_eq!(engine.state.session.target, 33);
}

#[tokio::test]
async fn favorites_round_trip_through_naming_prompt() {
    let (mut engine, _recording) = engine(Settings::default());
    let mut events = engine.subscribe();

    run_lines(&mut engine, &["target 33", "tap", "tap", "save"]);
    assert!(engine.state.pending_name_prompt);

    run_lines(&mut engine, &["save Evening", "reset", "select Evening"]);
    assert!(!engine.state.pending_name_prompt);
    assert_eq!(engine.state.session.count, 2);
    assert_eq!(engine.state.session.target, 33);
    assert_eq!(engine.state.session.phrase_text, "Evening");

    run_lines(&mut engine, &["tap", "save"]);
    assert_eq!(engine.state.favorites.len(), 1);
    assert_eq!(engine.state.favorites.get("Evening").map(|f| f.count), Some(3));

    let mut saw_name_request = false;
    while let Ok(event) = events.try_recv() {
        if event == EngineEvent::NameRequested {
            saw_name_request = true;
        }
    }
    assert!(saw_name_request);
}

#[tokio::test]
async fn custom_dhikr_lifecycle() {
    let (mut engine, recording) = engine(Settings::default());

    run_lines(&mut engine, &["add    ", "add Astaghfirullah", "custom 0"]);

    assert_eq!(recording.alerts.titles(), vec!["Error".to_string()]);
    assert_eq!(engine.state.custom_dhikrs.len(), 1);
    assert_eq!(engine.state.session.phrase_text, "Astaghfirullah");

    run_lines(&mut engine, &["remove 0", "remove 0"]);
    assert!(engine.state.custom_dhikrs.is_empty());
}

#[tokio::test(start_paused = true)]
async fn rapid_taps_speak_the_final_count() {
    let mut settings = Settings::default();
    settings.feedback.text_to_speech = true;
    let (mut engine, recording) = engine(settings);

    for _ in 0..5 {
        engine.process_message(Message::Tap);
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(recording.speech.spoken(), vec!["5"]);
}

#[tokio::test(start_paused = true)]
async fn quit_cancels_pending_speech() {
    let mut settings = Settings::default();
    settings.feedback.text_to_speech = true;
    let (mut engine, recording) = engine(settings);

    run_lines(&mut engine, &["tap", "quit"]);
    assert!(engine.should_quit());
    engine.shutdown();
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert!(recording.speech.spoken().is_empty());
    assert_eq!(recording.audio.unload_count(), 1);
}
