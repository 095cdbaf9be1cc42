//! Line commands typed at the dashboard prompt.

use crate::services::ExportChoice;

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Single-user lookup. The username may be empty; the controller rejects it.
    Lookup(String),
    /// Two-user comparison. Either name may be empty.
    Compare(String, String),
    ToggleMode,
    ToggleTheme,
    /// Reload and show the search history
    History,
    /// Re-run a history entry (0-based index)
    Select(usize),
    ClearHistory,
    Export(ExportChoice),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  lookup <username>          show a user's or organization's stats
  compare <user1> <user2>    compare two users
  mode                       switch between single and compare mode
  theme                      switch between light and dark theme
  history                    reload the recent searches
  open <n>                   repeat recent search number n
  clear                      clear the recent searches (asks first)
  export print|link          print the page or copy its link
  help                       show this help
  quit                       leave the dashboard";

impl Command {
    /// Parse a prompt line. Blank lines are `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let rest: Vec<&str> = words.collect();

        let command = match verb.to_ascii_lowercase().as_str() {
            "lookup" | "l" | "user" => {
                Command::Lookup(rest.first().copied().unwrap_or("").to_string())
            }
            "compare" | "c" | "vs" => Command::Compare(
                rest.first().copied().unwrap_or("").to_string(),
                rest.get(1).copied().unwrap_or("").to_string(),
            ),
            "mode" => Command::ToggleMode,
            "theme" => Command::ToggleTheme,
            "history" | "h" => Command::History,
            "open" | "o" => {
                let raw = rest
                    .first()
                    .copied()
                    .ok_or(CommandError::MissingArgument("open"))?;
                let position: usize = raw
                    .parse()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| CommandError::InvalidArgument(raw.to_string()))?;
                Command::Select(position - 1)
            }
            "clear" => Command::ClearHistory,
            "print" => Command::Export(ExportChoice::Print),
            "export" => match rest.first().map(|w| w.to_ascii_lowercase()).as_deref() {
                Some("print") | Some("pdf") => Command::Export(ExportChoice::Print),
                Some("link") | Some("copy") => Command::Export(ExportChoice::CopyLink),
                Some(other) => return Err(CommandError::InvalidArgument(other.to_string())),
                None => return Err(CommandError::MissingArgument("export")),
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Errors from prompt parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("Missing argument for `{0}`")]
    MissingArgument(&'static str),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
