//! Line commands accepted by the interactive session.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Stop,
    /// `None` when the prompt was left empty.
    Manual(Option<String>),
    Visualize,
    Negative(Option<String>),
    Edit {
        id: Option<i64>,
        date: String,
        hours: String,
    },
    Refresh,
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

impl SessionCommand {
    pub fn parse(line: &str) -> AppResult<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(SessionCommand::Nothing);
        };

        let cmd = match verb.to_lowercase().as_str() {
            "stop" | "s" => SessionCommand::Stop,
            "manual" | "m" => SessionCommand::Manual(words.next().map(str::to_string)),
            "view" | "v" => SessionCommand::Visualize,
            "negative" | "n" => SessionCommand::Negative(words.next().map(str::to_string)),
            "edit" | "e" => {
                let id = match words.next() {
                    Some(raw) => Some(
                        raw.parse::<i64>()
                            .map_err(|_| AppError::InvalidRecordId(raw.to_string()))?,
                    ),
                    None => None,
                };
                SessionCommand::Edit {
                    id,
                    date: words.next().unwrap_or_default().to_string(),
                    hours: words.next().unwrap_or_default().to_string(),
                }
            }
            "refresh" | "r" => SessionCommand::Refresh,
            "help" | "h" | "?" => SessionCommand::Help,
            "quit" | "q" | "exit" => SessionCommand::Quit,
            other => return Err(AppError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(AppError::UnexpectedArgument(extra.to_string()));
        }

        Ok(cmd)
    }
}

pub const HELP: &str = "\
Commands:
  stop | s                         stop the timer and save today's hours
  manual | m HH:MM                 record today's hours manually
  view | v                         open the record browser
  negative | n HH:MM               record negative hours for today
  edit | e ID DD/MM/YYYY HH:MM     edit a record
  refresh | r                      reload the record browser
  help | h                         show this help
  quit | q                         leave";
