//! Headless stdin command parsing
//!
//! One command per line. The first word picks the command, the rest of the
//! line (trimmed) is its argument. `add` keeps its argument as typed.

use tasbih_app::Message;
use tasbih_core::{Appearance, Phrase, SettingToggle, ThemePreference};

/// A parsed stdin line
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    /// Forward to the engine
    Intent(Message),
    /// Answer from current state without changing it
    Query(Query),
}

/// Read-only requests answered by the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Status,
    Catalog,
    Favorites,
    CustomDhikrs,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command}: missing {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("{command}: invalid {what}: {value}")]
    InvalidArgument {
        command: &'static str,
        what: &'static str,
        value: String,
    },
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<HeadlessCommand>, CommandError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let line = line.trim_start().trim_end_matches(['\r', '\n']);

    let (verb, raw_rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (line, ""),
    };
    let rest = raw_rest.trim();

    let intent = |msg: Message| Ok(Some(HeadlessCommand::Intent(msg)));
    let query = |q: Query| Ok(Some(HeadlessCommand::Query(q)));

    match verb {
        "tap" | "t" => intent(Message::Tap),
        "reset" => intent(Message::Reset),
        "undo" | "u" => intent(Message::Undo),
        "target" => intent(Message::SetTarget(rest.to_string())),

        "start" => {
            let mut parts = rest.split_whitespace();
            let category = parse_index("start", "category", parts.next())?;
            let item = parse_index("start", "item", parts.next())?;
            intent(Message::StartCatalogDhikr { category, item })
        }
        "phrase" => {
            let text = require("phrase", "text", rest)?;
            intent(Message::StartSession(Phrase::new(text, 0)))
        }
        "custom" => intent(Message::StartCustomDhikr(parse_index(
            "custom",
            "index",
            non_empty(rest),
        )?)),

        "save" => intent(Message::SaveFavorite(non_empty(rest).map(str::to_string))),
        "cancel-name" => intent(Message::CancelFavoriteName),
        "select" => intent(Message::SelectFavorite(
            require("select", "key", rest)?.to_string(),
        )),
        "delete" => intent(Message::DeleteFavorite(
            require("delete", "key", rest)?.to_string(),
        )),

        // custom names are kept as typed, the single separator aside
        "add" => intent(Message::AddCustomDhikr(raw_rest.to_string())),
        "remove" => intent(Message::RemoveCustomDhikr(parse_index(
            "remove",
            "index",
            non_empty(rest),
        )?)),

        "toggle" => intent(Message::ToggleSetting(parse_value::<SettingToggle>(
            "toggle", "setting", rest,
        )?)),
        "theme" => intent(Message::SetTheme(parse_value::<ThemePreference>(
            "theme", "theme", rest,
        )?)),
        "appearance" => intent(Message::SystemAppearanceChanged(
            parse_value::<Appearance>("appearance", "appearance", rest)?,
        )),

        "status" => query(Query::Status),
        "catalog" => query(Query::Catalog),
        "favorites" => query(Query::Favorites),
        "customs" => query(Query::CustomDhikrs),
        "settings" => query(Query::Settings),

        "quit" | "q" => intent(Message::Quit),

        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

fn require<'a>(
    command: &'static str,
    what: &'static str,
    rest: &'a str,
) -> Result<&'a str, CommandError> {
    non_empty(rest).ok_or(CommandError::MissingArgument { command, what })
}

fn parse_index(
    command: &'static str,
    what: &'static str,
    value: Option<&str>,
) -> Result<usize, CommandError> {
    let value = value.ok_or(CommandError::MissingArgument { command, what })?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        what,
        value: value.to_string(),
    })
}

fn parse_value<T: std::str::FromStr>(
    command: &'static str,
    what: &'static str,
    rest: &str,
) -> Result<T, CommandError> {
    let value = require(command, what, rest)?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        what,
        value: value.to_string(),
    })
}
