//! Configuration loading and file formats

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigError, FileBoardConfig, FileConfig, FileLoggingConfig, FileOllamaConfig,
    FileParticipantConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
