//! Configuration file parsing for the tasbih counter
//!
//! Supports a single `config.toml` with `[feedback]`, `[behavior]` and `[ui]`
//! sections.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, save_settings};
pub use types::*;
