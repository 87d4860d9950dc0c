//! Progress notification port
//!
//! Defines the interface for reporting progress during a board session.

use caseboard_domain::{DialoguePhase, Message, Roster, SessionOutcome};

/// Callback for progress updates during session execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, spinner, etc.)
pub trait SessionProgressNotifier: Send + Sync {
    /// Called once before the first turn
    fn on_session_start(&self, _roster: &Roster, _turn_limit: usize) {}

    /// Called just before a participant is invoked
    fn on_turn_start(&self, speaker: &str, turn_index: usize);

    /// Called after a message is appended to the transcript
    fn on_message(&self, message: &Message);

    /// Called when the dialogue phase changes
    fn on_phase_change(&self, phase: DialoguePhase);

    /// Called once when the session reaches a terminal state
    fn on_session_end(&self, outcome: &SessionOutcome);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SessionProgressNotifier for NoProgress {
    fn on_turn_start(&self, _speaker: &str, _turn_index: usize) {}
    fn on_message(&self, _message: &Message) {}
    fn on_phase_change(&self, _phase: DialoguePhase) {}
    fn on_session_end(&self, _outcome: &SessionOutcome) {}
}
