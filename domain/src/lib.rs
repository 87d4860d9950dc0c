//! Domain layer for caseboard
//!
//! This crate contains the core decision logic for a case board session:
//! who speaks next, which dialogue phase is active, and when the session
//! is over. It has no dependencies on infrastructure or presentation
//! concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Board
//!
//! A board is a fixed roster of participants: exactly one moderator who
//! drives the session, and any number of specialists who speak only when
//! called on.
//!
//! ## Dialogue
//!
//! A session moves through four phases, driven purely by message content:
//!
//! - **Gathering**: the moderator addresses specialists one at a time
//! - **ClosingRound**: every specialist is visited exactly once for
//!   final remarks
//! - **Synthesis**: only the moderator speaks, producing the consolidated
//!   decision document
//! - **Terminated**: the stop phrase has appeared; nobody speaks again

pub mod board;
pub mod core;
pub mod dialogue;
pub mod transcript;
pub mod util;

// Re-export commonly used types
pub use board::{
    entities::{Participant, Roster},
    role::Role,
};
pub use core::error::DomainError;
pub use dialogue::{
    addressing::{addressed, contains_phrase, mentions},
    cursor::RoundCursor,
    outcome::SessionOutcome,
    phase::DialoguePhase,
    selection::{DialogueState, TurnEngine},
    termination::StopRule,
};
pub use transcript::entities::{Message, SYSTEM_AUTHOR, Transcript};
