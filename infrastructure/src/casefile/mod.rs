//! Case file: the record store behind participant capabilities
//!
//! A capability is just a name the roster attaches to a participant; this
//! module gives those names meaning by resolving them against a TOML case
//! file of titled records (patient summary, imaging findings, pathology
//! diagnosis, ...). Gateways inject the resolved records into a
//! participant's context when producing its message.
//!
//! Example case file:
//!
//! ```toml
//! [case]
//! id = "PAT12345"
//! title = "Right lung mass, new diagnosis"
//!
//! [records.patient_summary]
//! title = "Patient summary"
//! body = "65yo male, persistent cough and weight loss over 3 months."
//!
//! [records.imaging_findings]
//! title = "CT Chest 2025-07-15"
//! body = "3.5 cm mass in the right upper lobe with lymphadenopathy."
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a case file
#[derive(Error, Debug)]
pub enum CaseFileError {
    #[error("Could not read case file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse case file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// `[case]` header section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseHeader {
    pub id: String,
    pub title: String,
}

/// One titled record, addressable by capability name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRecord {
    pub title: String,
    pub body: String,
}

/// The full case under review: header plus named records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseFile {
    pub case: CaseHeader,
    /// Keyed by capability name; BTreeMap keeps resolution order stable
    pub records: BTreeMap<String, CaseRecord>,
}

impl CaseFile {
    /// Load and parse a case file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CaseFileError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Resolve one capability name to its record.
    pub fn retrieve(&self, capability: &str) -> Option<&CaseRecord> {
        self.records.get(capability)
    }

    /// Resolve a participant's capability list, skipping unknown names.
    ///
    /// Unknown capabilities are not an error: a roster may name
    /// capabilities this particular case has no record for.
    pub fn retrieve_all<'a>(&'a self, capabilities: &[String]) -> Vec<(&'a str, &'a CaseRecord)> {
        capabilities
            .iter()
            .filter_map(|c| self.records.get_key_value(c.as_str()))
            .map(|(k, v)| (k.as_str(), v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [case]
        id = "PAT12345"
        title = "Right lung mass, new diagnosis"

        [records.patient_summary]
        title = "Patient summary"
        body = "65yo male, persistent cough and weight loss."

        [records.imaging_findings]
        title = "CT Chest"
        body = "3.5 cm mass in the right upper lobe."
    "#;

    #[test]
    fn test_parse_and_retrieve() {
        let case: CaseFile = toml::from_str(SAMPLE).unwrap();
        assert_eq!(case.case.id, "PAT12345");
        let record = case.retrieve("imaging_findings").unwrap();
        assert_eq!(record.title, "CT Chest");
        assert!(case.retrieve("pathology_diagnosis").is_none());
    }

    #[test]
    fn test_retrieve_all_skips_unknown() {
        let case: CaseFile = toml::from_str(SAMPLE).unwrap();
        let capabilities = vec![
            "patient_summary".to_string(),
            "clinical_guidelines".to_string(),
        ];
        let records = case.retrieve_all(&capabilities);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "patient_summary");
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let case = CaseFile::load(&path).unwrap();
        assert_eq!(case.records.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = CaseFile::load("/nonexistent/case.toml").unwrap_err();
        assert!(matches!(err, CaseFileError::Io(_)));
    }
}
