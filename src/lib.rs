//! tasbih - headless dhikr counter shell
//!
//! The binary wires the `tasbih-app` engine to stdin and stdout. This library
//! target exposes the headless runner and command parser so integration
//! tests can drive them.

pub mod headless;

pub use headless::command::{parse_command, CommandError, HeadlessCommand, Query};
pub use headless::runner::{run_headless, HeadlessOptions};
pub use headless::HeadlessEvent;
