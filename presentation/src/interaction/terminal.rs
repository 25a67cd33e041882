//! Terminal adapter for the reading interaction port

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use reverie_application::{InteractionError, Notice, ReadingInteraction};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::cell::RefCell;
use std::path::PathBuf;
use tracing::debug;

/// Line-editor backed prompts and notices
///
/// Ctrl-C cancels the current prompt; Ctrl-D closes the input.
pub struct TerminalInteraction {
    editor: RefCell<DefaultEditor>,
    history_path: Option<PathBuf>,
}

/// What a single line read produced
pub enum ReadLine {
    Line(String),
    Interrupted,
}

impl TerminalInteraction {
    pub fn new() -> Result<Self, InteractionError> {
        let editor = DefaultEditor::new().map_err(|e| InteractionError::IoError(e.to_string()))?;
        Ok(Self {
            editor: RefCell::new(editor),
            history_path: None,
        })
    }

    /// Keep command history in `<data dir>/reverie/history.txt`
    pub fn with_history(mut self) -> Self {
        let history_path = dirs::data_dir().map(|p| p.join("reverie").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.borrow_mut().load_history(path);
        }

        self.history_path = history_path;
        self
    }

    /// Read a command line; commands are added to the history
    pub fn read_command(&self, prompt: &str) -> Result<ReadLine, InteractionError> {
        let mut editor = self.editor.borrow_mut();
        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                Ok(ReadLine::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadLine::Interrupted),
            Err(ReadlineError::Eof) => Err(InteractionError::Closed),
            Err(err) => Err(InteractionError::IoError(err.to_string())),
        }
    }

    pub fn save_history(&self) {
        if let Some(ref path) = self.history_path
            && let Err(e) = self.editor.borrow_mut().save_history(path)
        {
            debug!("Could not save history to {}: {}", path.display(), e);
        }
    }
}

impl ReadingInteraction for TerminalInteraction {
    fn ask_text(&self, prompt: &str) -> Result<Option<String>, InteractionError> {
        println!("{}", prompt.bold());
        match self.editor.borrow_mut().readline("> ") {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(None)
            }
            Err(ReadlineError::Eof) => Err(InteractionError::Closed),
            Err(err) => Err(InteractionError::IoError(err.to_string())),
        }
    }

    fn notify(&self, notice: &Notice) {
        println!("{}", ConsoleFormatter::notice(notice));
    }
}
