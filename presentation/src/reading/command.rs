//! Reading REPL commands

use std::str::FromStr;

/// A command typed at the reading prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingCommand {
    Shuffle,
    Split,
    Assemble,
    /// Draw the card at a 1-based board position
    Pick(usize),
    Interpret,
    /// Show the per-card interpretation again
    Cards,
    /// Show the generated interpretation again
    Oracle,
    Board,
    Help,
    Quit,
}

/// Why a line is not a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    MissingPosition,
    InvalidPosition(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Unknown(cmd) => {
                write!(f, "Unknown command: {}. Type help for available commands", cmd)
            }
            CommandError::MissingPosition => write!(f, "Usage: pick <position>"),
            CommandError::InvalidPosition(arg) => {
                write!(f, "'{}' is not a board position", arg)
            }
        }
    }
}

impl FromStr for ReadingCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let line = line.strip_prefix('/').unwrap_or(line);
        let mut parts = line.split_whitespace();
        let head = parts.next().unwrap_or("").to_lowercase();

        let command = match head.as_str() {
            "shuffle" | "1" => ReadingCommand::Shuffle,
            "split" | "2" => ReadingCommand::Split,
            "assemble" | "regroup" | "3" => ReadingCommand::Assemble,
            "interpret" | "4" => ReadingCommand::Interpret,
            "pick" | "p" | "select" => {
                let arg = parts.next().ok_or(CommandError::MissingPosition)?;
                let position = arg
                    .parse::<usize>()
                    .map_err(|_| CommandError::InvalidPosition(arg.to_string()))?;
                ReadingCommand::Pick(position)
            }
            "cards" => ReadingCommand::Cards,
            "oracle" | "ai" => ReadingCommand::Oracle,
            "board" | "b" => ReadingCommand::Board,
            "help" | "h" | "?" => ReadingCommand::Help,
            "quit" | "exit" | "q" => ReadingCommand::Quit,
            _ => return Err(CommandError::Unknown(line.to_string())),
        };
        Ok(command)
    }
}
