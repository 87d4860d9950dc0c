//! Ollama participant gateway
//!
//! Produces participant messages through a local Ollama server's
//! `/api/chat` endpoint, non-streaming. Each participant gets its
//! configured system brief plus the case records its capabilities
//! resolve to; the transcript so far is replayed as chat history with
//! the participant's own messages in the assistant role.

use crate::casefile::CaseFile;
use async_trait::async_trait;
use caseboard_application::ports::participant_gateway::{GatewayError, ParticipantGateway};
use caseboard_domain::{Participant, Transcript};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Gateway backed by a local Ollama server
pub struct OllamaParticipantGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
    briefs: HashMap<String, String>,
    case: Option<CaseFile>,
}

impl OllamaParticipantGateway {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            briefs: HashMap::new(),
            case: None,
        }
    }

    /// Attach a per-participant system brief (builder style).
    pub fn with_brief(mut self, name: impl Into<String>, brief: impl Into<String>) -> Self {
        self.briefs.insert(name.into(), brief.into());
        self
    }

    /// Attach the case file used to resolve participant capabilities.
    pub fn with_case(mut self, case: CaseFile) -> Self {
        self.case = Some(case);
        self
    }

    fn system_prompt(&self, participant: &Participant) -> String {
        let mut prompt = match self.briefs.get(participant.name()) {
            Some(brief) => brief.clone(),
            None => format!(
                "You are {}, a {} on a case review board. Reply in character, concisely.",
                participant.name(),
                participant.role()
            ),
        };

        if let Some(case) = &self.case {
            for (name, record) in case.retrieve_all(participant.capabilities()) {
                prompt.push_str(&format!(
                    "\n\n[{}] {}\n{}",
                    name, record.title, record.body
                ));
            }
        }

        prompt
    }

    fn build_messages(&self, participant: &Participant, transcript: &Transcript) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::new("system", self.system_prompt(participant))];
        for message in transcript.iter() {
            if message.author() == participant.name() {
                messages.push(ChatMessage::new("assistant", message.body()));
            } else {
                messages.push(ChatMessage::new(
                    "user",
                    format!("{}: {}", message.author(), message.body()),
                ));
            }
        }
        messages
    }
}

#[async_trait]
impl ParticipantGateway for OllamaParticipantGateway {
    async fn produce(
        &self,
        participant: &Participant,
        transcript: &Transcript,
    ) -> Result<String, GatewayError> {
        let messages = self.build_messages(participant, transcript);
        let request = ChatRequest {
            model: &self.model,
            messages: &messages,
            stream: false,
        };
        let url = format!("{}/api/chat", self.base_url.trim_end_matches('/'));
        debug!(url = %url, participant = participant.name(), "Requesting completion");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::RequestFailed(format!(
                "{} from {}",
                response.status(),
                url
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;
        Ok(parsed.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> OllamaParticipantGateway {
        OllamaParticipantGateway::new("http://localhost:11434", "llama3")
            .with_brief("Radiologist", "You interpret imaging reports.")
    }

    #[test]
    fn test_brief_becomes_system_message() {
        let transcript = Transcript::seeded("seed");
        let p = Participant::specialist("Radiologist");
        let messages = gateway().build_messages(&p, &transcript);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, "You interpret imaging reports.");
    }

    #[test]
    fn test_default_brief_names_participant_and_role() {
        let transcript = Transcript::seeded("seed");
        let p = Participant::moderator("Oncologist_Manager");
        let messages = gateway().build_messages(&p, &transcript);
        assert!(messages[0].content.contains("Oncologist_Manager"));
        assert!(messages[0].content.contains("moderator"));
    }

    #[test]
    fn test_transcript_roles_split_by_author() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Oncologist_Manager", "Radiologist, your read?");
        transcript.append("Radiologist", "Mass in the upper lobe.");

        let p = Participant::specialist("Radiologist");
        let messages = gateway().build_messages(&p, &transcript);

        // system + 3 transcript messages
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.starts_with("system: "));
        assert_eq!(messages[2].role, "user");
        assert!(messages[2].content.starts_with("Oncologist_Manager: "));
        assert_eq!(messages[3].role, "assistant");
        assert_eq!(messages[3].content, "Mass in the upper lobe.");
    }

    #[test]
    fn test_capability_records_appended_to_system_prompt() {
        let case: CaseFile = toml::from_str(
            r#"
            [records.imaging_findings]
            title = "CT Chest"
            body = "3.5 cm right upper lobe mass."
            "#,
        )
        .unwrap();
        let gateway = gateway().with_case(case);
        let p = Participant::specialist("Radiologist")
            .with_capabilities(vec!["imaging_findings".to_string()]);
        let transcript = Transcript::seeded("seed");
        let messages = gateway.build_messages(&p, &transcript);
        assert!(messages[0].content.contains("[imaging_findings] CT Chest"));
        assert!(messages[0].content.contains("3.5 cm right upper lobe mass."));
    }
}
