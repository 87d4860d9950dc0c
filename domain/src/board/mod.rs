//! Board roster domain
//!
//! A board is a fixed, validated set of participants: exactly one
//! moderator and any number of specialists. The roster is created once
//! per session and never changes while the session runs.

pub mod entities;
pub mod role;
