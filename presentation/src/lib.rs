//! Presentation layer for reverie
//!
//! This crate contains the CLI definition, the terminal adapter for the
//! interaction port, the reading REPL, console formatting and the progress
//! spinner.

pub mod cli;
pub mod interaction;
pub mod output;
pub mod progress;
pub mod reading;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use interaction::terminal::{ReadLine, TerminalInteraction};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::{ProgressMode, SimpleProgress, SpinnerProgress};
pub use reading::command::{CommandError, ReadingCommand};
pub use reading::repl::{Flow, ReadingRepl};
