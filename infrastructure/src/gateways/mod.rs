//! Participant gateway adapters

pub mod scripted;

#[cfg(feature = "ollama")]
pub mod ollama;
