//! Shared primitive types used across the crate.

/// A score achieved in one play session. Never negative.
pub type Score = u32;

/// A player's identity. Compared by exact string equality,
/// no case-folding or trimming.
pub type PlayerName = String;
