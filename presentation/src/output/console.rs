//! Console output formatter for session results

use caseboard_application::BoardSessionOutput;
use caseboard_domain::{SYSTEM_AUTHOR, SessionOutcome};
use colored::Colorize;

/// Formats session results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full transcript with outcome footer
    pub fn format(output: &BoardSessionOutput) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}\n",
            "=== Case Board Session ===".cyan().bold()
        ));

        for message in output.transcript.iter() {
            let banner = if message.author() == SYSTEM_AUTHOR {
                format!("── {} (seed) ──", message.author()).dimmed().to_string()
            } else {
                format!("── {} ──", message.author()).yellow().bold().to_string()
            };
            out.push_str(&format!("\n{}\n{}\n", banner, message.body()));
        }

        out.push_str(&Self::outcome_line(&output.outcome));
        out
    }

    /// Format only the final decision document
    ///
    /// When the session converged, that is the last message (the
    /// moderator's synthesis carrying the stop phrase). Otherwise the
    /// outcome is reported instead of a document.
    pub fn format_document(output: &BoardSessionOutput) -> String {
        if output.outcome.is_converged() {
            match output.transcript.last() {
                Some(message) => format!(
                    "{}\n\n{}\n",
                    "=== Decision Document ===".cyan().bold(),
                    message.body()
                ),
                None => Self::outcome_line(&output.outcome),
            }
        } else {
            format!(
                "{}\n{}",
                "No decision document: the session did not converge.".red(),
                Self::outcome_line(&output.outcome)
            )
        }
    }

    /// Format as JSON
    pub fn format_json(output: &BoardSessionOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    fn outcome_line(outcome: &SessionOutcome) -> String {
        let label = match outcome {
            SessionOutcome::Terminated => format!("{}", "terminated".green().bold()),
            SessionOutcome::Failed { .. } => format!("{}", outcome.to_string().red().bold()),
            SessionOutcome::Cancelled => format!("{}", "cancelled".yellow().bold()),
            SessionOutcome::TurnLimitExceeded => {
                format!("{}", "turn limit exceeded".yellow().bold())
            }
        };
        format!("\n{} {}\n", "Outcome:".cyan().bold(), label)
    }
}
