//! Scripted participant gateway
//!
//! Replays canned message bodies per participant, in order. Used by the
//! `--demo` mode and by integration tests: it exercises the full session
//! loop with zero external dependencies, deterministically.

use crate::casefile::CaseFile;
use async_trait::async_trait;
use caseboard_application::ports::participant_gateway::{GatewayError, ParticipantGateway};
use caseboard_domain::{Participant, Roster, Transcript};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Gateway that replays scripted replies per participant.
///
/// An exhausted or missing script surfaces as a [`GatewayError`], which
/// the driver reports as a failed session: a scripted board that runs
/// out of lines before the stop phrase is a misconfigured script.
#[derive(Default)]
pub struct ScriptedParticipantGateway {
    scripts: Mutex<HashMap<String, VecDeque<String>>>,
}

impl ScriptedParticipantGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a participant's reply script (builder style).
    pub fn with_script<S: Into<String>>(
        self,
        name: impl Into<String>,
        replies: impl IntoIterator<Item = S>,
    ) -> Self {
        self.scripts.lock().unwrap().insert(
            name.into(),
            replies.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Append one reply to a participant's script.
    pub fn push_reply(&self, name: &str, body: impl Into<String>) {
        self.scripts
            .lock()
            .unwrap()
            .entry(name.to_string())
            .or_default()
            .push_back(body.into());
    }
}

#[async_trait]
impl ParticipantGateway for ScriptedParticipantGateway {
    async fn produce(
        &self,
        participant: &Participant,
        _transcript: &Transcript,
    ) -> Result<String, GatewayError> {
        let mut scripts = self.scripts.lock().map_err(|_| {
            GatewayError::Other("script table poisoned".to_string())
        })?;
        let queue = scripts.get_mut(participant.name()).ok_or_else(|| {
            GatewayError::ParticipantUnavailable(participant.name().to_string())
        })?;
        queue
            .pop_front()
            .ok_or_else(|| GatewayError::ScriptExhausted(participant.name().to_string()))
    }
}

/// Build a complete self-contained demo session: a tumor-board-style
/// roster, a gateway scripted through all four phases, and the seed
/// message. When a case file is given, specialist replies quote its
/// records; otherwise they use placeholder text.
pub fn demo_session(
    case: Option<&CaseFile>,
) -> (Roster, ScriptedParticipantGateway, String) {
    let roster = Roster::new(vec![
        Participant::moderator("Oncologist_Manager"),
        Participant::specialist("EHR_Analyst")
            .with_capabilities(vec!["patient_summary".to_string()]),
        Participant::specialist("Radiologist")
            .with_capabilities(vec!["imaging_findings".to_string()]),
        Participant::specialist("Pathologist")
            .with_capabilities(vec!["pathology_diagnosis".to_string()]),
    ])
    .expect("demo roster is statically valid");

    let record_or = |capability: &str, fallback: &str| -> String {
        case.and_then(|c| c.retrieve(capability))
            .map(|r| format!("{}: {}", r.title, r.body))
            .unwrap_or_else(|| fallback.to_string())
    };

    let gateway = ScriptedParticipantGateway::new()
        .with_script(
            "Oncologist_Manager",
            [
                "Thank you all for joining. EHR_Analyst, please provide the patient summary.",
                "Noted. Radiologist, please walk us through the imaging findings.",
                "Thank you. Pathologist, what does the tissue show?",
                "That completes the workup. Before we draft the plan: any additional comments?",
                "Thank you.",
                "Understood.",
                "Thank you all.",
                "FINAL PLAN: maximal safe resection, followed by concurrent chemoradiation per current guidelines.",
            ],
        )
        .with_script(
            "EHR_Analyst",
            [
                record_or(
                    "patient_summary",
                    "Patient summary: 58yo female, new-onset seizure with persistent headaches.",
                ),
                "No further comments.".to_string(),
            ],
        )
        .with_script(
            "Radiologist",
            [
                record_or(
                    "imaging_findings",
                    "Imaging: 4.2 cm ring-enhancing left frontal mass with vasogenic edema.",
                ),
                "No further comments.".to_string(),
            ],
        )
        .with_script(
            "Pathologist",
            [
                record_or(
                    "pathology_diagnosis",
                    "Pathology: glioblastoma, IDH-wildtype, MGMT promoter methylated.",
                ),
                "Nothing to add.".to_string(),
            ],
        );

    let seed =
        "A new case is available for review. Please begin the evaluation process.".to_string();

    (roster, gateway, seed)
}
