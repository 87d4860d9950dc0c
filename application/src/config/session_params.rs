//! Session parameters — driver loop control.
//!
//! [`SessionParams`] groups the static parameters that control the
//! session loop in [`RunBoardUseCase`](crate::use_cases::run_board::RunBoardUseCase).
//! These are deployment knobs, not domain policy: the phrases vary per
//! board, the limit guards against a session that never converges.

use serde::{Deserialize, Serialize};

/// Session loop control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParams {
    /// Literal substring whose appearance in any message ends the session.
    pub stop_phrase: String,
    /// Phrase in a moderator message that starts the closing round.
    pub closing_trigger: String,
    /// Maximum transcript length (seed included) before the session is
    /// cut off with `TurnLimitExceeded`.
    pub turn_limit: usize,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            stop_phrase: "FINAL PLAN:".to_string(),
            closing_trigger: "additional comments".to_string(),
            turn_limit: 50,
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_stop_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.stop_phrase = phrase.into();
        self
    }

    pub fn with_closing_trigger(mut self, phrase: impl Into<String>) -> Self {
        self.closing_trigger = phrase.into();
        self
    }

    pub fn with_turn_limit(mut self, limit: usize) -> Self {
        self.turn_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SessionParams::default();
        assert_eq!(params.stop_phrase, "FINAL PLAN:");
        assert_eq!(params.closing_trigger, "additional comments");
        assert_eq!(params.turn_limit, 50);
    }

    #[test]
    fn test_builders() {
        let params = SessionParams::default()
            .with_stop_phrase("END OF DISCUSSION")
            .with_closing_trigger("final thoughts")
            .with_turn_limit(12);
        assert_eq!(params.stop_phrase, "END OF DISCUSSION");
        assert_eq!(params.closing_trigger, "final thoughts");
        assert_eq!(params.turn_limit, 12);
    }
}
