//! Run Board use case
//!
//! The session driver: owns the transcript, the dialogue state, and the
//! round cursor for exactly one session, and runs the strictly
//! sequential control loop — append a message, check termination, select
//! the next speaker, invoke it, repeat. Participant invocation is a
//! suspending operation behind [`ParticipantGateway`]; the loop never has
//! more than one production in flight.

use crate::config::session_params::SessionParams;
use crate::ports::participant_gateway::{GatewayError, ParticipantGateway};
use crate::ports::progress::{NoProgress, SessionProgressNotifier};
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use caseboard_domain::util::clip;
use caseboard_domain::{
    DialogueState, DomainError, Message, Participant, Roster, SessionOutcome, StopRule,
    Transcript, TurnEngine,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Fatal driver errors
///
/// These are programming or configuration bugs, not runtime faults:
/// the driver halts immediately instead of guessing a substitute.
/// Runtime faults (a failed production, cancellation, the turn limit)
/// are *outcomes*, not errors; see [`SessionOutcome`].
#[derive(Error, Debug)]
pub enum RunBoardError {
    #[error("Protocol violation: {0}")]
    Protocol(#[from] DomainError),

    #[error("Next speaker is not on the board: {0}")]
    SpeakerNotFound(String),
}

/// Input for the RunBoard use case
#[derive(Debug, Clone)]
pub struct RunBoardInput {
    /// The validated board roster
    pub roster: Roster,
    /// Body of the seed message (appended with the synthetic "system" author)
    pub seed: String,
    /// Loop control: stop phrase, closing trigger, turn limit
    pub params: SessionParams,
}

impl RunBoardInput {
    pub fn new(roster: Roster, seed: impl Into<String>) -> Self {
        Self {
            roster,
            seed: seed.into(),
            params: SessionParams::default(),
        }
    }

    pub fn with_params(mut self, params: SessionParams) -> Self {
        self.params = params;
        self
    }
}

/// Result of a completed session: the full transcript plus the terminal
/// state tag. The transcript is preserved in every outcome, including
/// `Failed`.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSessionOutput {
    pub transcript: Transcript,
    pub outcome: SessionOutcome,
}

/// Use case for running one board session
pub struct RunBoardUseCase<G: ParticipantGateway + 'static> {
    gateway: Arc<G>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: ParticipantGateway + 'static> RunBoardUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            cancellation_token: None,
        }
    }

    /// Attach an external cancellation signal.
    ///
    /// Raised between turns it halts the loop without invoking another
    /// participant; raised mid-production it drops the in-flight future
    /// and discards its result (best effort).
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the session with default (no-op) progress and logging
    pub async fn execute(&self, input: RunBoardInput) -> Result<BoardSessionOutput, RunBoardError> {
        self.execute_with(input, &NoProgress, &NoTranscriptLogger)
            .await
    }

    /// Execute the session with progress callbacks and transcript logging
    pub async fn execute_with(
        &self,
        input: RunBoardInput,
        progress: &dyn SessionProgressNotifier,
        logger: &dyn TranscriptLogger,
    ) -> Result<BoardSessionOutput, RunBoardError> {
        let RunBoardInput {
            roster,
            seed,
            params,
        } = input;

        let engine = TurnEngine::new(params.closing_trigger.clone());
        let stop = StopRule::new(params.stop_phrase.clone());
        let mut state = DialogueState::new();
        let mut transcript = Transcript::seeded(seed);

        info!(
            participants = roster.len(),
            moderator = roster.moderator().name(),
            "Starting board session"
        );
        progress.on_session_start(&roster, params.turn_limit);
        logger.log(TranscriptEvent::new(
            "session_started",
            json!({
                "participants": roster
                    .participants()
                    .iter()
                    .map(|p| p.name())
                    .collect::<Vec<_>>(),
                "moderator": roster.moderator().name(),
                "turn_limit": params.turn_limit,
            }),
        ));

        let outcome = 'session: {
            // The seed is an append like any other: the stop phrase is
            // honored wherever it appears.
            {
                let seed_msg = transcript.last().ok_or(DomainError::EmptySession)?;
                progress.on_message(seed_msg);
                logger.log(Self::message_event(seed_msg));
                if stop.is_terminal(seed_msg) {
                    state.terminate();
                    break 'session SessionOutcome::Terminated;
                }
            }

            let mut phase = state.phase();

            loop {
                if transcript.len() >= params.turn_limit {
                    warn!(
                        turn_limit = params.turn_limit,
                        "Turn limit reached without the stop phrase"
                    );
                    break 'session SessionOutcome::TurnLimitExceeded;
                }
                if self.is_cancelled() {
                    info!("Session cancelled between turns");
                    break 'session SessionOutcome::Cancelled;
                }

                let speaker = engine.select_next(&transcript, &roster, &mut state)?;

                if state.phase() != phase {
                    phase = state.phase();
                    info!(phase = %phase, "Phase transition");
                    progress.on_phase_change(phase);
                    logger.log(TranscriptEvent::new(
                        "phase_change",
                        json!({ "phase": phase.as_str() }),
                    ));
                }

                let participant = roster
                    .get(&speaker)
                    .ok_or_else(|| RunBoardError::SpeakerNotFound(speaker.clone()))?;

                debug!(speaker = %speaker, turn = transcript.len(), "Invoking participant");
                progress.on_turn_start(&speaker, transcript.len());

                let body = match self.produce_cancellable(participant, &transcript).await {
                    Ok(Some(body)) => body,
                    Ok(None) => {
                        info!(speaker = %speaker, "Session cancelled mid-production");
                        break 'session SessionOutcome::Cancelled;
                    }
                    Err(e) => {
                        warn!(speaker = %speaker, error = %e, "Participant production failed");
                        break 'session SessionOutcome::Failed {
                            error: e.to_string(),
                        };
                    }
                };

                let message = transcript.append(speaker, body);
                debug!(
                    author = message.author(),
                    body = %clip(message.body(), 80),
                    "Message appended"
                );
                progress.on_message(message);
                logger.log(Self::message_event(message));

                if stop.is_terminal(message) {
                    info!("Stop phrase detected; session terminated");
                    state.terminate();
                    break 'session SessionOutcome::Terminated;
                }
            }
        };

        info!(outcome = %outcome, messages = transcript.len(), "Session ended");
        progress.on_session_end(&outcome);
        logger.log(TranscriptEvent::new(
            "session_ended",
            json!({
                "outcome": outcome.as_str(),
                "messages": transcript.len(),
            }),
        ));

        Ok(BoardSessionOutput {
            transcript,
            outcome,
        })
    }

    /// Await one production, racing it against the cancellation signal.
    ///
    /// `Ok(None)` means the signal won and the in-flight result was
    /// discarded.
    async fn produce_cancellable(
        &self,
        participant: &Participant,
        transcript: &Transcript,
    ) -> Result<Option<String>, GatewayError> {
        match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Ok(None),
                    result = self.gateway.produce(participant, transcript) => result.map(Some),
                }
            }
            None => self
                .gateway
                .produce(participant, transcript)
                .await
                .map(Some),
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation_token
            .as_ref()
            .is_some_and(|t| t.is_cancelled())
    }

    fn message_event(message: &Message) -> TranscriptEvent {
        TranscriptEvent::new(
            "message",
            json!({
                "index": message.index(),
                "author": message.author(),
                "body": message.body(),
            }),
        )
    }
}
