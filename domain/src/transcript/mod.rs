//! Session transcript domain
//!
//! The transcript is the single source of truth the turn-selection engine
//! reads: an append-only sequence of messages, seeded once and owned by
//! the session driver for the lifetime of one session.

pub mod entities;
