//! Participant role definitions.
//!
//! Defines [`Role`], the single distinction the turn-selection engine
//! cares about: the moderator drives the session, specialists speak only
//! when called on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a participant on the board.
///
/// Exactly one participant per roster is the [`Moderator`](Role::Moderator);
/// control reverts to it whenever no other rule applies. Everyone else is a
/// [`Specialist`](Role::Specialist).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Drives the session and is the default speaker
    Moderator,
    /// Speaks only when addressed or visited by the closing round
    #[default]
    Specialist,
}

impl Role {
    /// Check if this is the moderator role
    pub fn is_moderator(&self) -> bool {
        matches!(self, Role::Moderator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Moderator => write!(f, "moderator"),
            Role::Specialist => write!(f, "specialist"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "moderator" | "mod" => Ok(Role::Moderator),
            "specialist" | "spec" => Ok(Role::Specialist),
            _ => Err(format!("Invalid Role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Role::Moderator), "moderator");
        assert_eq!(format!("{}", Role::Specialist), "specialist");
    }

    #[test]
    fn test_default() {
        assert_eq!(Role::default(), Role::Specialist);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("moderator".parse::<Role>().ok(), Some(Role::Moderator));
        assert_eq!("mod".parse::<Role>().ok(), Some(Role::Moderator));
        assert_eq!("specialist".parse::<Role>().ok(), Some(Role::Specialist));
        assert_eq!("spec".parse::<Role>().ok(), Some(Role::Specialist));
        assert_eq!("Moderator".parse::<Role>().ok(), Some(Role::Moderator));
        assert!("chair".parse::<Role>().is_err());
    }

    #[test]
    fn test_is_moderator() {
        assert!(Role::Moderator.is_moderator());
        assert!(!Role::Specialist.is_moderator());
    }
}
