//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Configuration errors (`EmptyBoard`, `DuplicateName`, `ModeratorCount`)
/// are detected eagerly when a [`Roster`](crate::Roster) is built and are
/// never recovered. Protocol errors (`EmptySession`, `UnknownAuthor`,
/// `SessionOver`) indicate a bug in the caller, not a runtime fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Board has no participants")]
    EmptyBoard,

    #[error("Duplicate participant name: {0}")]
    DuplicateName(String),

    #[error("Board must have exactly one moderator, found {0}")]
    ModeratorCount(usize),

    #[error("Session transcript is empty; it must be seeded before turn selection")]
    EmptySession,

    #[error("Message author is not on the board: {0}")]
    UnknownAuthor(String),

    #[error("Session is already terminated")]
    SessionOver,
}

impl DomainError {
    /// Check if this error is a board configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyBoard
                | DomainError::DuplicateName(_)
                | DomainError::ModeratorCount(_)
        )
    }
}
