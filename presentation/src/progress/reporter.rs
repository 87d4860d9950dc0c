//! Progress reporting for board sessions

use caseboard_application::SessionProgressNotifier;
use caseboard_domain::util::clip;
use caseboard_domain::{DialoguePhase, Message, Roster, SYSTEM_AUTHOR, SessionOutcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while a participant is speaking
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProgressNotifier for ProgressReporter {
    fn on_session_start(&self, roster: &Roster, _turn_limit: usize) {
        println!(
            "{} {} participants, moderated by {}",
            "Session:".cyan().bold(),
            roster.len(),
            roster.moderator().name().yellow()
        );
    }

    fn on_turn_start(&self, speaker: &str, _turn_index: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("{} is speaking...", speaker));
        pb.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_message(&self, message: &Message) {
        self.clear_spinner();
        let author = if message.author() == SYSTEM_AUTHOR {
            message.author().dimmed().to_string()
        } else {
            message.author().yellow().bold().to_string()
        };
        println!("{}: {}", author, clip(message.body(), 240));
    }

    fn on_phase_change(&self, phase: DialoguePhase) {
        self.clear_spinner();
        println!("{} {}", ">>".cyan().bold(), phase.to_string().cyan());
    }

    fn on_session_end(&self, outcome: &SessionOutcome) {
        self.clear_spinner();
        let label = match outcome {
            SessionOutcome::Terminated => outcome.to_string().green().bold(),
            SessionOutcome::Failed { .. } => outcome.to_string().red().bold(),
            _ => outcome.to_string().yellow().bold(),
        };
        println!("{} {}", "Session ended:".cyan().bold(), label);
    }
}

/// Plain-line progress without spinners, for non-interactive terminals
pub struct SimpleProgress;

impl SessionProgressNotifier for SimpleProgress {
    fn on_turn_start(&self, speaker: &str, turn_index: usize) {
        println!("[turn {}] {} is speaking...", turn_index, speaker);
    }

    fn on_message(&self, message: &Message) {
        println!("{}: {}", message.author(), clip(message.body(), 240));
    }

    fn on_phase_change(&self, phase: DialoguePhase) {
        println!(">> {}", phase);
    }

    fn on_session_end(&self, outcome: &SessionOutcome) {
        println!("Session ended: {}", outcome);
    }
}
