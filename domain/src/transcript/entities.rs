//! Transcript domain entities

use serde::Serialize;

/// Synthetic author name reserved for the seed message.
///
/// Every other message must carry the name of a roster participant.
pub const SYSTEM_AUTHOR: &str = "system";

/// A message in the session transcript (Entity)
///
/// Immutable once created. The sequence index is assigned at append time
/// and is contiguous from 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    author: String,
    body: String,
    index: usize,
}

impl Message {
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Append-only ordered sequence of messages (Entity)
///
/// Never empty once the session starts: it is created with the seed
/// message already appended. Messages are exclusively owned here and
/// never mutated after append.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with the initial task message.
    ///
    /// The seed carries the synthetic [`SYSTEM_AUTHOR`] and index 0.
    pub fn seeded(body: impl Into<String>) -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
        };
        transcript.append(SYSTEM_AUTHOR, body);
        transcript
    }

    /// Append a message, assigning the next sequence index.
    ///
    /// Returns a reference to the appended message.
    pub fn append(&mut self, author: impl Into<String>, body: impl Into<String>) -> &Message {
        let message = Message {
            author: author.into(),
            body: body.into(),
            index: self.messages.len(),
        };
        self.messages.push(message);
        // Just pushed, so last() is always present.
        &self.messages[self.messages.len() - 1]
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }
}

#[cfg(test)]
impl Transcript {
    /// The illegal pre-seed state; constructible only from tests.
    pub(crate) fn unseeded() -> Self {
        Self {
            messages: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_transcript() {
        let transcript = Transcript::seeded("A new case is available for review.");
        assert_eq!(transcript.len(), 1);
        let seed = transcript.last().unwrap();
        assert_eq!(seed.author(), SYSTEM_AUTHOR);
        assert_eq!(seed.index(), 0);
    }

    #[test]
    fn test_append_assigns_contiguous_indices() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "Radiologist, please proceed.");
        transcript.append("Radiologist", "Findings attached.");

        let indices: Vec<usize> = transcript.iter().map(|m| m.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(transcript.last().unwrap().author(), "Radiologist");
    }

    #[test]
    fn test_append_returns_new_message() {
        let mut transcript = Transcript::seeded("seed");
        let msg = transcript.append("Moderator", "hello");
        assert_eq!(msg.index(), 1);
        assert_eq!(msg.body(), "hello");
    }

    #[test]
    fn test_serializes_to_ordered_array() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "first");
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["messages"][1]["author"], "Moderator");
        assert_eq!(json["messages"][1]["index"], 1);
    }
}
