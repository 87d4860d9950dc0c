//! Infrastructure layer for caseboard
//!
//! Adapters for the application-layer ports: configuration loading,
//! case-file capability records, structured transcript logging, and
//! participant gateways (scripted replay, and Ollama behind the
//! `ollama` feature).

pub mod casefile;
pub mod config;
pub mod gateways;
pub mod logging;

// Re-export commonly used types
pub use casefile::{CaseFile, CaseFileError, CaseRecord};
pub use config::{
    ConfigError, ConfigLoader, FileBoardConfig, FileConfig, FileParticipantConfig,
    FileSessionConfig,
};
pub use gateways::scripted::{ScriptedParticipantGateway, demo_session};
pub use logging::jsonl_logger::JsonlTranscriptLogger;

#[cfg(feature = "ollama")]
pub use gateways::ollama::OllamaParticipantGateway;
