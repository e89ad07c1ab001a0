use std::fmt::Display;

use crate::notification::NotificationKind;

/// A line entered in command mode.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Notify(NotificationKind, String),
    /// Kind is passed through unchecked so the queue can reject it.
    NotifyNamed(String, String),
    SaveEmail(String),
    DeleteEmail(String),
    LoadIncident(String),
    ToggleView,
    Dismiss,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown command: {}", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

/// A blank line parses to `None`.
pub fn parse(line: &str) -> Result<Option<Command>, UnknownCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    if let Ok(kind) = name.parse::<NotificationKind>() {
        return Ok(Some(Command::Notify(kind, rest.to_string())));
    }

    let command = match name {
        "notify" => {
            let (kind, message) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Command::NotifyNamed(kind.to_string(), message.trim().to_string())
        }
        "save" => Command::SaveEmail(rest.to_string()),
        "delete" => Command::DeleteEmail(rest.to_string()),
        "load" => Command::LoadIncident(rest.to_string()),
        "view" => Command::ToggleView,
        "dismiss" => Command::Dismiss,
        "q" | "quit" => Command::Quit,
        _ => return Err(UnknownCommand(line.to_string())),
    };
    Ok(Some(command))
}
