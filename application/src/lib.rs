//! Application layer for caseboard
//!
//! This crate contains the session driver use case and the port
//! definitions for everything the driver consumes: participant message
//! production, progress reporting, and structured transcript logging.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    participant_gateway::{GatewayError, ParticipantGateway},
    progress::{NoProgress, SessionProgressNotifier},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::run_board::{
    BoardSessionOutput, RunBoardError, RunBoardInput, RunBoardUseCase,
};
