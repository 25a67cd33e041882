//! The reading session: every piece of mutable state for one reading.
//!
//! Use cases receive `&mut ReadingSession`; the presentation layer only
//! reads from it and reports dialog events back.

use super::dialog::{DialogEvent, DialogKind, DialogState, Dialogs, Reopen};
use reverie_domain::{DeckStateMachine, SelectionTracker, Seeker, Spread};

/// Results of the one interpretation a session may request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpretations {
    /// Set once the interpretation has been triggered
    pub requested: bool,
    /// Per-card write-ups from the card table
    pub card_text: Option<String>,
    /// Text from the generation backend, if the request succeeded
    pub ai_text: Option<String>,
}

/// Explicit state of a single reading
#[derive(Debug, Clone)]
pub struct ReadingSession {
    seeker: Seeker,
    deck: DeckStateMachine,
    selection: SelectionTracker,
    interpretations: Interpretations,
    dialogs: Dialogs,
}

impl ReadingSession {
    pub fn new(seeker: Seeker) -> Self {
        Self::with_deck(seeker, DeckStateMachine::default())
    }

    pub fn with_deck(seeker: Seeker, deck: DeckStateMachine) -> Self {
        Self {
            seeker,
            deck,
            selection: SelectionTracker::new(),
            interpretations: Interpretations::default(),
            dialogs: Dialogs::default(),
        }
    }

    pub fn seeker(&self) -> &Seeker {
        &self.seeker
    }

    pub fn deck(&self) -> &DeckStateMachine {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut DeckStateMachine {
        &mut self.deck
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Draw from the deck; both halves of the session are borrowed at once
    pub fn deck_and_selection_mut(&mut self) -> (&DeckStateMachine, &mut SelectionTracker) {
        (&self.deck, &mut self.selection)
    }

    /// The frozen spread, once nine cards are drawn
    pub fn spread(&self) -> Option<Spread> {
        self.selection.spread()
    }

    pub fn interpretations(&self) -> &Interpretations {
        &self.interpretations
    }

    pub fn interpretations_mut(&mut self) -> &mut Interpretations {
        &mut self.interpretations
    }

    /// Whether the interpret step can still be triggered
    pub fn can_interpret(&self) -> bool {
        self.selection.is_complete() && !self.interpretations.requested
    }

    /// Whether the reopen commands are enabled
    pub fn can_reopen(&self) -> bool {
        self.interpretations.requested
    }

    // ==================== Dialogs ====================

    pub fn dialog_state(&self, kind: DialogKind) -> DialogState {
        self.dialogs.state(kind)
    }

    pub fn apply_dialog_event(&mut self, event: DialogEvent) {
        self.dialogs.apply(event);
    }

    fn dialog_text(&self, kind: DialogKind) -> Option<&str> {
        match kind {
            DialogKind::CardInterpretation => self.interpretations.card_text.as_deref(),
            DialogKind::AiInterpretation => self.interpretations.ai_text.as_deref(),
        }
    }

    /// Decide how to honour a request to show a dialog again
    pub fn reopen(&self, kind: DialogKind) -> Reopen {
        match (self.dialog_text(kind), self.dialog_state(kind)) {
            (None, _) => Reopen::Unavailable,
            (Some(_), DialogState::Open) => Reopen::Focus,
            (Some(text), DialogState::Closed) => Reopen::Show(text.to_string()),
        }
    }
}
