//! REPL (Read-Eval-Print Loop) driving one reading

use super::command::ReadingCommand;
use crate::interaction::terminal::{ReadLine, TerminalInteraction};
use crate::output::console::ConsoleFormatter;
use crate::progress::spinner::{ProgressMode, SimpleProgress, SpinnerProgress};
use colored::Colorize;
use reverie_application::{
    DialogEvent, DialogKind, ExternalOutcome, InteractionError, InterpretSpreadUseCase,
    NoProgress, Notice, PrepareDeckUseCase, ProgressNotifier, ReadingInteraction,
    ReadingSession, Reopen, SelectCardUseCase, StepOutcome,
};
use reverie_domain::{CardCatalog, DomainError, SelectOutcome};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::debug;

const CLOSE_PROMPT: &str = "Press Enter to close";

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive reading REPL
pub struct ReadingRepl {
    prepare: PrepareDeckUseCase,
    select: SelectCardUseCase,
    interpret: InterpretSpreadUseCase,
    catalog: Arc<CardCatalog>,
    progress: ProgressMode,
}

impl ReadingRepl {
    pub fn new(
        prepare: PrepareDeckUseCase,
        select: SelectCardUseCase,
        interpret: InterpretSpreadUseCase,
        catalog: Arc<CardCatalog>,
    ) -> Self {
        Self {
            prepare,
            select,
            interpret,
            catalog,
            progress: ProgressMode::choose(true, std::io::stdout().is_terminal()),
        }
    }

    /// Set whether to report the interpretation request while it runs
    pub fn with_progress(mut self, show: bool) -> Self {
        self.progress = ProgressMode::choose(show, std::io::stdout().is_terminal());
        self
    }

    pub fn with_progress_mode(mut self, mode: ProgressMode) -> Self {
        self.progress = mode;
        self
    }

    /// Run the interactive REPL until the user quits or input ends
    pub async fn run(
        &self,
        session: &mut ReadingSession,
        terminal: &TerminalInteraction,
    ) -> Result<(), InteractionError> {
        self.print_welcome(session);

        let result = loop {
            let line = match terminal.read_command("reverie> ") {
                Ok(ReadLine::Line(line)) => line,
                Ok(ReadLine::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(InteractionError::Closed) => break Ok(()),
                Err(e) => break Err(e),
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let command = match line.parse::<ReadingCommand>() {
                Ok(command) => command,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };

            match self.handle(command, session, terminal).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) | Err(InteractionError::Closed) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        println!("Bye!");
        terminal.save_history();
        result
    }

    fn print_welcome(&self, session: &ReadingSession) {
        print!("{}", ConsoleFormatter::welcome());
        println!();
        println!(
            "{} {}",
            "Reading for:".cyan().bold(),
            session.seeker().name()
        );
        println!("{} {}", "Question:".cyan().bold(), session.seeker().question());
        println!();
        print!("{}", ConsoleFormatter::help());
        print!("{}", ConsoleFormatter::board(session));
        println!();
    }

    /// Execute one command against the session
    pub async fn handle(
        &self,
        command: ReadingCommand,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) -> Result<Flow, InteractionError> {
        match command {
            ReadingCommand::Shuffle => {
                if self.prepare.shuffle(session, interaction).is_completed() {
                    self.print_board(session);
                }
            }
            ReadingCommand::Split => {
                if self.prepare.split(session, interaction)?.is_completed() {
                    self.print_board(session);
                }
            }
            ReadingCommand::Assemble => {
                if self.prepare.assemble(session, interaction)?.is_completed() {
                    self.print_board(session);
                    println!("Pick nine cards with {}.", "pick <position>".bold());
                }
            }
            ReadingCommand::Pick(position) => self.pick(position, session, interaction),
            ReadingCommand::Interpret => self.interpret(session, interaction).await?,
            ReadingCommand::Cards | ReadingCommand::Oracle if !session.can_reopen() => {
                debug!("Reopen ignored: the spread has not been interpreted yet");
            }
            ReadingCommand::Cards => {
                self.reopen(DialogKind::CardInterpretation, session, interaction)?
            }
            ReadingCommand::Oracle => {
                self.reopen(DialogKind::AiInterpretation, session, interaction)?
            }
            ReadingCommand::Board => self.print_board(session),
            ReadingCommand::Help => print!("{}", ConsoleFormatter::help()),
            ReadingCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn print_board(&self, session: &ReadingSession) {
        print!("{}", ConsoleFormatter::board(session));
    }

    fn pick(
        &self,
        position: usize,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) {
        // Board positions are 1-based
        let Some(index) = position.checked_sub(1) else {
            interaction.notify(&Notice::warning(
                DomainError::InvalidPosition(position).to_string(),
            ));
            return;
        };

        match self.select.execute(session, index, interaction) {
            StepOutcome::Completed(SelectOutcome::Selected { .. }) => self.print_board(session),
            StepOutcome::Completed(SelectOutcome::Completed(spread)) => {
                self.print_board(session);
                print!("{}", ConsoleFormatter::spread_grid(&spread, &self.catalog));
                println!("Type {} to read the spread.", "interpret".bold());
            }
            StepOutcome::Completed(SelectOutcome::AlreadySelected(_)) | StepOutcome::Refused(_) => {}
        }
    }

    async fn interpret(
        &self,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) -> Result<(), InteractionError> {
        // A refused request never reaches the gateway
        let mode = if session.can_interpret() {
            self.progress
        } else {
            ProgressMode::Off
        };
        let spinner;
        let progress: &dyn ProgressNotifier = match mode {
            ProgressMode::Spinner => {
                spinner = SpinnerProgress::new();
                &spinner
            }
            ProgressMode::Lines => &SimpleProgress,
            ProgressMode::Off => &NoProgress,
        };

        let StepOutcome::Completed(report) =
            self.interpret.execute(session, interaction, progress).await
        else {
            return Ok(());
        };

        if let ExternalOutcome::Received(text) = &report.external {
            self.show_dialog(DialogKind::AiInterpretation, text, session, interaction)?;
        }
        self.show_dialog(
            DialogKind::CardInterpretation,
            &report.card_text,
            session,
            interaction,
        )?;
        println!(
            "Use {} or {} to read them again.",
            "cards".bold(),
            "oracle".bold()
        );
        Ok(())
    }

    fn reopen(
        &self,
        kind: DialogKind,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) -> Result<(), InteractionError> {
        match session.reopen(kind) {
            Reopen::Show(text) => self.show_dialog(kind, &text, session, interaction),
            Reopen::Focus => {
                debug!("{} is already open", kind.title());
                Ok(())
            }
            Reopen::Unavailable => {
                debug!("Nothing to show for {}", kind.title());
                Ok(())
            }
        }
    }

    /// Show a dialog and wait until the user dismisses it
    fn show_dialog(
        &self,
        kind: DialogKind,
        text: &str,
        session: &mut ReadingSession,
        interaction: &dyn ReadingInteraction,
    ) -> Result<(), InteractionError> {
        session.apply_dialog_event(DialogEvent::Opened(kind));
        print!("{}", ConsoleFormatter::dialog(kind.title(), text));
        let dismissed = interaction.ask_text(CLOSE_PROMPT);
        session.apply_dialog_event(DialogEvent::Closed(kind));
        dismissed.map(|_| ())
    }
}
