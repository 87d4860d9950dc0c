//! Terminal session outcomes

use serde::Serialize;

/// How a session ended (Value Object)
///
/// Every way out of the session loop is explicit and inspectable by the
/// caller; nothing is silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The stop phrase appeared; the board converged on a decision document
    Terminated,
    /// A participant invocation failed; the partial transcript is preserved
    Failed { error: String },
    /// External cancellation between turns (or mid-production, best effort)
    Cancelled,
    /// The turn limit was reached before the stop phrase appeared
    TurnLimitExceeded,
}

impl SessionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionOutcome::Terminated => "terminated",
            SessionOutcome::Failed { .. } => "failed",
            SessionOutcome::Cancelled => "cancelled",
            SessionOutcome::TurnLimitExceeded => "turn_limit_exceeded",
        }
    }

    /// Check if the board actually converged on a final document.
    pub fn is_converged(&self) -> bool {
        matches!(self, SessionOutcome::Terminated)
    }
}

impl std::fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionOutcome::Failed { error } => write!(f, "failed: {}", error),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(SessionOutcome::Terminated.as_str(), "terminated");
        assert_eq!(
            SessionOutcome::TurnLimitExceeded.as_str(),
            "turn_limit_exceeded"
        );
    }

    #[test]
    fn test_display_carries_failure_detail() {
        let outcome = SessionOutcome::Failed {
            error: "upstream closed".to_string(),
        };
        assert_eq!(outcome.to_string(), "failed: upstream closed");
    }

    #[test]
    fn test_is_converged() {
        assert!(SessionOutcome::Terminated.is_converged());
        assert!(!SessionOutcome::Cancelled.is_converged());
    }
}
