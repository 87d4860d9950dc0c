//! Dialogue orchestration domain
//!
//! This module contains the core decision logic for running a board
//! session: addressing resolution, phase tracking, turn selection, and
//! termination detection.
//!
//! # Turn resolution
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  last speaker was NOT the moderator  →  moderator            │
//! │  last speaker was the moderator:                             │
//! │    Gathering     →  trigger phrase? start closing round      │
//! │                     otherwise: last-addressed specialist,    │
//! │                     or the moderator keeps the floor         │
//! │    ClosingRound  →  next cursor name, or enter Synthesis     │
//! │    Synthesis     →  moderator, until the stop phrase         │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod addressing;
pub mod cursor;
pub mod outcome;
pub mod phase;
pub mod selection;
pub mod termination;

// Re-export main types
pub use cursor::RoundCursor;
pub use outcome::SessionOutcome;
pub use phase::DialoguePhase;
pub use selection::{DialogueState, TurnEngine};
pub use termination::StopRule;
