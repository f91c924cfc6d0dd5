//! tasbih - a dhikr tally counter
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use tasbih::{run_headless, HeadlessOptions};
use tasbih_app::config::init_config_file;

/// tasbih - count dhikr with targets, undo and spoken feedback
#[derive(Parser, Debug)]
#[command(name = "tasbih")]
#[command(about = "A dhikr tally counter driven by stdin commands", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Disable click sounds, speech and vibration
    #[arg(long)]
    mute: bool,

    /// Never use an installed speech synthesizer
    #[arg(long)]
    no_speech_tools: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = init_config_file(args.config.as_deref())?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    tasbih_core::logging::init()?;

    run_headless(HeadlessOptions {
        config_path: args.config,
        mute: args.mute,
        no_speech_tools: args.no_speech_tools,
    })
    .await?;

    Ok(())
}
