//! Session termination detection

use crate::transcript::entities::Message;
use serde::Serialize;

/// Stop-phrase termination rule (Value Object)
///
/// The session ends the instant the configured phrase appears anywhere in
/// the body of any message, not just the moderator's. A synthesis
/// message could in principle appear out of the expected phase, so the
/// driver checks this after every append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopRule {
    phrase: String,
}

impl StopRule {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Case-sensitive substring match of the stop phrase against the body.
    pub fn is_terminal(&self, message: &Message) -> bool {
        message.body().contains(&self.phrase)
    }
}
