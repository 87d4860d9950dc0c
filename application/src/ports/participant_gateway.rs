//! Participant gateway port
//!
//! Defines the interface for obtaining the next message from a
//! participant. Implementations (adapters) live in the infrastructure
//! layer; from the driver's perspective production is an opaque,
//! possibly slow, fallible operation with unbounded latency.

use async_trait::async_trait;
use caseboard_domain::{Participant, Transcript};
use thiserror::Error;

/// Errors that can occur while a participant produces a message
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Participant not available: {0}")]
    ParticipantUnavailable(String),

    #[error("Script exhausted for participant: {0}")]
    ScriptExhausted(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for participant message production
///
/// `produce` is invoked strictly sequentially, never for two speakers at
/// once, and receives the fully materialized transcript so far. Retries,
/// if any, are the adapter's responsibility; the driver surfaces the
/// first error as a failed session.
#[async_trait]
pub trait ParticipantGateway: Send + Sync {
    /// Produce the named participant's next message body.
    async fn produce(
        &self,
        participant: &Participant,
        transcript: &Transcript,
    ) -> Result<String, GatewayError>;
}
