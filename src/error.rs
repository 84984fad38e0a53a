//! Error types for the rules and search engine
//!
//! Illegal moves are expected control flow and come back as values. A side
//! with no legal moves is not an error at all: move selection returns
//! `Ok(None)` and the game record scores it as a forfeit.
//!
//! Two distinct positions sharing a 64-bit position key would silently share
//! a cache entry. That is accepted and not checked.

use thiserror::Error;

use crate::board::Move;

/// Errors produced by the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HasamiError {
    /// Move rejected by the rules
    #[error("Illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },

    /// Board input with wrong dimensions or an invalid cell value
    #[error("Malformed board: {0}")]
    MalformedBoard(String),

    /// A move was submitted after the game ended
    #[error("Game is already over")]
    GameOver,

    /// A shared transposition cache was poisoned by a panicking holder
    #[error("Transposition cache is unavailable (lock poisoned)")]
    CachePoisoned,

    /// Difficulty tier outside 1..=4
    #[error("Unknown difficulty tier {0} (must be 1-4)")]
    UnknownTier(u8),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, HasamiError>;
