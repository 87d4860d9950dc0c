//! Turn-selection engine
//!
//! [`TurnEngine::select_next`] is the decision function of the whole
//! system: given the transcript, the roster, and the dialogue state, it
//! names the next speaker. It is deterministic (no hidden state, no
//! randomness, no clock), and all phase/cursor mutation is confined to
//! the [`DialogueState`] passed in by the session driver.

use crate::board::entities::Roster;
use crate::core::error::DomainError;
use crate::dialogue::addressing::{addressed, contains_phrase};
use crate::dialogue::cursor::RoundCursor;
use crate::dialogue::phase::DialoguePhase;
use crate::transcript::entities::{SYSTEM_AUTHOR, Transcript};

/// Phase/round tracker for one session
///
/// The cursor exists exactly while the closing round is active, so the
/// "cursor present in ClosingRound" invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueState {
    Gathering,
    ClosingRound(RoundCursor),
    Synthesis,
    Terminated,
}

impl DialogueState {
    pub fn new() -> Self {
        DialogueState::Gathering
    }

    pub fn phase(&self) -> DialoguePhase {
        match self {
            DialogueState::Gathering => DialoguePhase::Gathering,
            DialogueState::ClosingRound(_) => DialoguePhase::ClosingRound,
            DialogueState::Synthesis => DialoguePhase::Synthesis,
            DialogueState::Terminated => DialoguePhase::Terminated,
        }
    }

    /// Enter the terminal phase, dropping any cursor.
    pub fn terminate(&mut self) {
        *self = DialogueState::Terminated;
    }
}

impl Default for DialogueState {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn-selection engine
///
/// Holds the configured closing-round trigger phrase; everything else it
/// needs arrives as arguments.
#[derive(Debug, Clone)]
pub struct TurnEngine {
    closing_trigger: String,
}

impl TurnEngine {
    pub fn new(closing_trigger: impl Into<String>) -> Self {
        Self {
            closing_trigger: closing_trigger.into(),
        }
    }

    pub fn closing_trigger(&self) -> &str {
        &self.closing_trigger
    }

    /// Decide who speaks next.
    ///
    /// Control always reverts to the moderator after any other speaker;
    /// only a moderator message can hand the floor to a specialist. Phase
    /// transitions happen here as a side effect on `state`:
    /// `Gathering → ClosingRound` when the moderator's message carries the
    /// trigger phrase, `ClosingRound → Synthesis` when the cursor runs dry.
    pub fn select_next(
        &self,
        transcript: &Transcript,
        roster: &Roster,
        state: &mut DialogueState,
    ) -> Result<String, DomainError> {
        let last = transcript.last().ok_or(DomainError::EmptySession)?;
        let author = last.author();

        if author != SYSTEM_AUTHOR && !roster.contains(author) {
            return Err(DomainError::UnknownAuthor(author.to_string()));
        }

        let moderator = roster.moderator().name();
        if author != moderator {
            // Terminal else of the decision logic: a specialist (or the
            // seed) just spoke, so the floor goes back to the moderator.
            return Ok(moderator.to_string());
        }

        match state {
            DialogueState::Gathering => {
                if contains_phrase(last.body(), &self.closing_trigger) {
                    let mut cursor = RoundCursor::from_roster(roster);
                    return match cursor.pop() {
                        Some(name) => {
                            *state = DialogueState::ClosingRound(cursor);
                            Ok(name)
                        }
                        // Moderator-only board: the round is born exhausted.
                        None => {
                            *state = DialogueState::Synthesis;
                            Ok(moderator.to_string())
                        }
                    };
                }

                let specialists = roster.specialist_names();
                match addressed(last.body(), &specialists) {
                    Some(name) => Ok(name.to_string()),
                    // No specialist called on: the moderator keeps the
                    // floor. Degenerate but legal.
                    None => Ok(moderator.to_string()),
                }
            }
            DialogueState::ClosingRound(cursor) => match cursor.pop() {
                Some(name) => Ok(name),
                None => {
                    *state = DialogueState::Synthesis;
                    Ok(moderator.to_string())
                }
            },
            DialogueState::Synthesis => Ok(moderator.to_string()),
            DialogueState::Terminated => Err(DomainError::SessionOver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::entities::Participant;

    const TRIGGER: &str = "additional comments";

    fn board() -> Roster {
        Roster::new(vec![
            Participant::moderator("Moderator"),
            Participant::specialist("EHR_Analyst"),
            Participant::specialist("Radiologist"),
        ])
        .unwrap()
    }

    fn engine() -> TurnEngine {
        TurnEngine::new(TRIGGER)
    }

    #[test]
    fn test_seed_hands_floor_to_moderator() {
        let transcript = Transcript::seeded("A new case is available for review.");
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "Moderator");
        assert_eq!(state.phase(), DialoguePhase::Gathering);
    }

    #[test]
    fn test_control_reverts_to_moderator_after_specialist() {
        // Regardless of phase or content
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Radiologist", "Mentioning EHR_Analyst changes nothing.");
        for mut state in [
            DialogueState::Gathering,
            DialogueState::ClosingRound(RoundCursor::new(vec!["EHR_Analyst".to_string()])),
            DialogueState::Synthesis,
        ] {
            let next = engine()
                .select_next(&transcript, &board(), &mut state)
                .unwrap();
            assert_eq!(next, "Moderator");
        }
    }

    #[test]
    fn test_moderator_addresses_specialist() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "EHR_Analyst, please provide the patient summary.");
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "EHR_Analyst");
    }

    #[test]
    fn test_last_mention_wins() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "EHR_Analyst, then Radiologist, please proceed");
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "Radiologist");
    }

    #[test]
    fn test_no_mention_moderator_keeps_floor() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "Let me summarize what we have so far.");
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "Moderator");
        assert_eq!(state.phase(), DialoguePhase::Gathering);
    }

    #[test]
    fn test_unknown_name_mention_ignored() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "Cardiologist, please weigh in.");
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "Moderator");
    }

    #[test]
    fn test_moderator_self_mention_is_not_addressing() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "As Moderator I will now summarize.");
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "Moderator");
    }

    #[test]
    fn test_empty_transcript_is_an_error() {
        let transcript = Transcript::unseeded();
        let mut state = DialogueState::new();
        let err = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap_err();
        assert_eq!(err, DomainError::EmptySession);
    }

    #[test]
    fn test_unknown_author_is_fatal() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Intruder", "I object!");
        let mut state = DialogueState::new();
        let err = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap_err();
        assert_eq!(err, DomainError::UnknownAuthor("Intruder".to_string()));
    }

    #[test]
    fn test_trigger_starts_closing_round() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append(
            "Moderator",
            "Before we wrap up: any additional comments? EHR_Analyst first.",
        );
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        // The trigger outranks addressing; the cursor starts at the first
        // specialist in declaration order.
        assert_eq!(next, "EHR_Analyst");
        assert_eq!(state.phase(), DialoguePhase::ClosingRound);
    }

    #[test]
    fn test_closing_round_ignores_addressing() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "Thank you. Radiologist, anything else?");
        let mut state =
            DialogueState::ClosingRound(RoundCursor::new(vec!["EHR_Analyst".to_string()]));
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "EHR_Analyst");
    }

    #[test]
    fn test_closing_round_visits_each_specialist_once_then_synthesis() {
        let roster = board();
        let eng = engine();
        let mut state = DialogueState::new();

        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "Any additional comments from the board?");

        let mut visited = Vec::new();
        // Moderator turn → specialist, specialist reply → moderator, repeat
        loop {
            let next = eng.select_next(&transcript, &roster, &mut state).unwrap();
            if state.phase() == DialoguePhase::Synthesis {
                assert_eq!(next, "Moderator");
                break;
            }
            visited.push(next.clone());
            transcript.append(next.as_str(), "No further comments.");
            let back = eng.select_next(&transcript, &roster, &mut state).unwrap();
            assert_eq!(back, "Moderator");
            transcript.append("Moderator", "Thank you.");
        }
        assert_eq!(visited, vec!["EHR_Analyst", "Radiologist"]);
    }

    #[test]
    fn test_synthesis_is_moderator_only() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "Radiologist, one more thing...");
        let mut state = DialogueState::Synthesis;
        let next = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap();
        assert_eq!(next, "Moderator");
        assert_eq!(state.phase(), DialoguePhase::Synthesis);
    }

    #[test]
    fn test_terminated_state_rejects_selection() {
        let transcript = Transcript::seeded("seed");
        let mut state = DialogueState::Terminated;
        let err = engine()
            .select_next(&transcript, &board(), &mut state)
            .unwrap_err();
        assert_eq!(err, DomainError::SessionOver);
    }

    #[test]
    fn test_moderator_only_board_skips_straight_to_synthesis() {
        let roster = Roster::new(vec![Participant::moderator("Moderator")]).unwrap();
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "No specialists today; any additional comments?");
        let mut state = DialogueState::new();
        let next = engine()
            .select_next(&transcript, &roster, &mut state)
            .unwrap();
        assert_eq!(next, "Moderator");
        assert_eq!(state.phase(), DialoguePhase::Synthesis);
    }

    #[test]
    fn test_selection_is_replay_stable() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append("Moderator", "EHR_Analyst, then Radiologist, please proceed");
        let roster = board();
        let eng = engine();

        let mut first_state = DialogueState::new();
        let first = eng
            .select_next(&transcript, &roster, &mut first_state)
            .unwrap();
        for _ in 0..10 {
            let mut state = DialogueState::new();
            assert_eq!(
                eng.select_next(&transcript, &roster, &mut state).unwrap(),
                first
            );
            assert_eq!(state, first_state);
        }
    }
}
