//! Board roster entities

use crate::board::role::Role;
use crate::core::error::DomainError;
use serde::Serialize;

/// A participant on the board (Entity)
///
/// Identity is the unique name. Capabilities are the named retrieval
/// operations the participant may invoke while producing a message; they
/// are owned by the gateway adapter and referenced here by name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    name: String,
    role: Role,
    capabilities: Vec<String>,
}

impl Participant {
    /// Create the board's moderator
    pub fn moderator(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Moderator,
            capabilities: Vec::new(),
        }
    }

    /// Create a specialist
    pub fn specialist(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::Specialist,
            capabilities: Vec::new(),
        }
    }

    /// Create a participant with an explicit role
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            capabilities: Vec::new(),
        }
    }

    /// Attach named capabilities (builder style)
    pub fn with_capabilities(mut self, capabilities: Vec<String>) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn capabilities(&self) -> &[String] {
        &self.capabilities
    }

    pub fn is_moderator(&self) -> bool {
        self.role.is_moderator()
    }
}

/// The fixed set of participants for one session (Entity)
///
/// Validated at construction: non-empty, unique names, exactly one
/// moderator. Declaration order is preserved; it drives the closing
/// round visiting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Build a roster, validating the board configuration eagerly.
    pub fn new(participants: Vec<Participant>) -> Result<Self, DomainError> {
        if participants.is_empty() {
            return Err(DomainError::EmptyBoard);
        }

        for (i, p) in participants.iter().enumerate() {
            if participants[..i].iter().any(|q| q.name() == p.name()) {
                return Err(DomainError::DuplicateName(p.name().to_string()));
            }
        }

        let moderators = participants.iter().filter(|p| p.is_moderator()).count();
        if moderators != 1 {
            return Err(DomainError::ModeratorCount(moderators));
        }

        Ok(Self { participants })
    }

    /// The distinguished moderator participant.
    pub fn moderator(&self) -> &Participant {
        // Validated in `new`: exactly one moderator exists.
        self.participants
            .iter()
            .find(|p| p.is_moderator())
            .unwrap_or(&self.participants[0])
    }

    /// All non-moderator participants, in declaration order.
    pub fn specialists(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(|p| !p.is_moderator())
    }

    /// Specialist names in declaration order.
    pub fn specialist_names(&self) -> Vec<String> {
        self.specialists().map(|p| p.name().to_string()).collect()
    }

    /// Look up a participant by name.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name() == name)
    }

    /// Check whether a name belongs to the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
