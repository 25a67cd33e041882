//! Interpretation dialogs and their open/closed state
//!
//! The view reports what it did with [`DialogEvent`] messages; the session
//! never inspects widgets.

/// The two read-only result dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    /// Concatenated per-card write-ups
    CardInterpretation,
    /// Text returned by the generation backend
    AiInterpretation,
}

impl DialogKind {
    pub fn title(&self) -> &'static str {
        match self {
            DialogKind::CardInterpretation => "Card Interpretation",
            DialogKind::AiInterpretation => "AI Interpretation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Message from the view about a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Opened(DialogKind),
    Closed(DialogKind),
}

/// What the view should do when asked to show a dialog again
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reopen {
    /// Open a fresh dialog with this text
    Show(String),
    /// Already open: bring it to the front
    Focus,
    /// Nothing to show yet
    Unavailable,
}

/// Open/closed state of both dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dialogs {
    card: DialogState,
    ai: DialogState,
}

impl Dialogs {
    pub fn state(&self, kind: DialogKind) -> DialogState {
        match kind {
            DialogKind::CardInterpretation => self.card,
            DialogKind::AiInterpretation => self.ai,
        }
    }

    pub fn apply(&mut self, event: DialogEvent) {
        let (kind, state) = match event {
            DialogEvent::Opened(kind) => (kind, DialogState::Open),
            DialogEvent::Closed(kind) => (kind, DialogState::Closed),
        };
        match kind {
            DialogKind::CardInterpretation => self.card = state,
            DialogKind::AiInterpretation => self.ai = state,
        }
    }
}
