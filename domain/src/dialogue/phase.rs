//! Dialogue phase definitions

use serde::Serialize;

/// Phase of a board session
///
/// Transitions are driven by message content, never by a clock:
/// `Gathering → ClosingRound` on the closing trigger phrase,
/// `ClosingRound → Synthesis` when the round cursor is exhausted,
/// `* → Terminated` when the stop phrase appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialoguePhase {
    /// Moderator addresses specialists one at a time, order driven by
    /// explicit addressing
    Gathering,
    /// Moderator cycles every specialist exactly once for final remarks
    ClosingRound,
    /// Moderator-only; produces the consolidated decision document
    Synthesis,
    /// The stop phrase has appeared; the session is over
    Terminated,
}

impl DialoguePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialoguePhase::Gathering => "gathering",
            DialoguePhase::ClosingRound => "closing_round",
            DialoguePhase::Synthesis => "synthesis",
            DialoguePhase::Terminated => "terminated",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DialoguePhase::Gathering => "Information Gathering",
            DialoguePhase::ClosingRound => "Closing Round",
            DialoguePhase::Synthesis => "Synthesis",
            DialoguePhase::Terminated => "Terminated",
        }
    }
}

impl std::fmt::Display for DialoguePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
