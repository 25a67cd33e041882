//! Spinner shown while the interpretation request is in flight

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reverie_application::ProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Reports the interpretation request with an indicatif spinner
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SpinnerProgress {
    fn on_request_start(&self, model: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(model.to_string());
        pb.set_message("Consulting the cards...");
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.bar.lock().unwrap_or_else(|e| e.into_inner()) = Some(pb);
    }

    fn on_request_complete(&self, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(|e| e.into_inner()).take() {
            let status = if success {
                format!("{} Interpretation received", "v".green())
            } else {
                format!("{} Interpretation failed", "x".red())
            };
            pb.finish_with_message(status);
        }
    }
}

/// Prints one line per event instead of animating
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, model: &str) {
        println!("Asking {} for an interpretation...", model);
    }

    fn on_request_complete(&self, success: bool) {
        if success {
            println!("{}", "Done.".green());
        } else {
            println!("{}", "Failed.".red());
        }
    }
}

/// How the interpretation request is reported on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Spinner,
    Lines,
    Off,
}

impl ProgressMode {
    /// Animate on a terminal, fall back to plain lines when output is piped
    pub fn choose(show_progress: bool, is_terminal: bool) -> Self {
        match (show_progress, is_terminal) {
            (false, _) => ProgressMode::Off,
            (true, true) => ProgressMode::Spinner,
            (true, false) => ProgressMode::Lines,
        }
    }
}
