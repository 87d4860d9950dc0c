//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly. Conversion into validated domain types
//! (`Roster`, `SessionParams`) happens here too, so configuration errors
//! surface eagerly at session construction, never mid-session.
//!
//! Example configuration:
//!
//! ```toml
//! [board]
//! seed = "A new case is available for review. Please begin the evaluation."
//!
//! [[board.participants]]
//! name = "Oncologist_Manager"
//! role = "moderator"
//! brief = "You lead the board. Address each specialist by name."
//!
//! [[board.participants]]
//! name = "EHR_Analyst"
//! role = "specialist"
//! brief = "Summarize the record when called on."
//! capabilities = ["patient_summary"]
//!
//! [session]
//! stop_phrase = "FINAL PLAN:"
//! closing_trigger = "additional comments"
//! turn_limit = 50
//! ```

use caseboard_application::SessionParams;
use caseboard_domain::{DomainError, Participant, Role, Roster};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning file configuration into domain types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid role '{role}' for participant {name}")]
    InvalidRole { name: String, role: String },

    #[error("Board configuration rejected: {0}")]
    Board(#[from] DomainError),

    #[error("Configuration load failed: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Board roster and seed message
    pub board: FileBoardConfig,
    /// Session loop control
    pub session: FileSessionConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
    /// Ollama gateway settings (used when the `ollama` feature is active)
    pub ollama: FileOllamaConfig,
}

/// `[board]` section: the roster definition and seed message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBoardConfig {
    /// Body of the seed message appended with the synthetic "system" author
    pub seed: String,
    /// Ordered roster: declaration order drives the closing round
    pub participants: Vec<FileParticipantConfig>,
}

impl Default for FileBoardConfig {
    fn default() -> Self {
        Self {
            seed: "A new case is available for review. Please begin the evaluation process."
                .to_string(),
            participants: Vec::new(),
        }
    }
}

impl FileBoardConfig {
    /// Build the validated domain roster from this section.
    pub fn to_roster(&self) -> Result<Roster, ConfigError> {
        let mut participants = Vec::with_capacity(self.participants.len());
        for p in &self.participants {
            let role: Role = p.role.parse().map_err(|_| ConfigError::InvalidRole {
                name: p.name.clone(),
                role: p.role.clone(),
            })?;
            participants.push(
                Participant::new(p.name.clone(), role)
                    .with_capabilities(p.capabilities.clone()),
            );
        }
        Ok(Roster::new(participants)?)
    }
}

/// One `[[board.participants]]` entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParticipantConfig {
    /// Unique participant name; addressing matches it as a whole word
    pub name: String,
    /// "moderator" or "specialist"
    pub role: String,
    /// System brief handed to the gateway adapter, not the engine
    pub brief: String,
    /// Named retrieval capabilities resolved against the case file
    pub capabilities: Vec<String>,
}

/// `[session]` section: loop control phrases and limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    pub stop_phrase: String,
    pub closing_trigger: String,
    pub turn_limit: usize,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        let params = SessionParams::default();
        Self {
            stop_phrase: params.stop_phrase,
            closing_trigger: params.closing_trigger,
            turn_limit: params.turn_limit,
        }
    }
}

impl FileSessionConfig {
    pub fn to_params(&self) -> SessionParams {
        SessionParams::default()
            .with_stop_phrase(self.stop_phrase.clone())
            .with_closing_trigger(self.closing_trigger.clone())
            .with_turn_limit(self.turn_limit)
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Where to write the JSONL transcript log; disabled when unset
    pub transcript_path: Option<PathBuf>,
}

/// `[ollama]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    pub base_url: String,
    pub model: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [board]
        seed = "New case for review."

        [[board.participants]]
        name = "Moderator"
        role = "moderator"

        [[board.participants]]
        name = "EHR_Analyst"
        role = "specialist"
        capabilities = ["patient_summary"]

        [session]
        stop_phrase = "END OF DISCUSSION"
        turn_limit = 20
    "#;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.board.participants.is_empty());
        assert_eq!(config.session.stop_phrase, "FINAL PLAN:");
        assert_eq!(config.session.turn_limit, 50);
        assert!(config.logging.transcript_path.is_none());
    }

    #[test]
    fn test_parse_sample() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.board.seed, "New case for review.");
        assert_eq!(config.board.participants.len(), 2);
        assert_eq!(config.session.stop_phrase, "END OF DISCUSSION");
        // Unset keys fall back to defaults
        assert_eq!(config.session.closing_trigger, "additional comments");
    }

    #[test]
    fn test_to_roster() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let roster = config.board.to_roster().unwrap();
        assert_eq!(roster.moderator().name(), "Moderator");
        assert_eq!(
            roster.get("EHR_Analyst").unwrap().capabilities(),
            ["patient_summary".to_string()]
        );
    }

    #[test]
    fn test_bad_role_rejected() {
        let mut config: FileConfig = toml::from_str(SAMPLE).unwrap();
        config.board.participants[1].role = "chairperson".to_string();
        let err = config.board.to_roster().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRole { .. }));
    }

    #[test]
    fn test_duplicate_name_surfaces_domain_error() {
        let mut config: FileConfig = toml::from_str(SAMPLE).unwrap();
        config.board.participants[1].name = "Moderator".to_string();
        config.board.participants[1].role = "specialist".to_string();
        let err = config.board.to_roster().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Board(DomainError::DuplicateName(_))
        ));
    }

    #[test]
    fn test_to_params() {
        let config: FileConfig = toml::from_str(SAMPLE).unwrap();
        let params = config.session.to_params();
        assert_eq!(params.stop_phrase, "END OF DISCUSSION");
        assert_eq!(params.turn_limit, 20);
    }
}
