//! Game rules for Hasami Shogi
//!
//! This module implements the rule set:
//! - Move generation (rook-like orthogonal slides)
//! - Capture rules (sandwich, optional diagonal, optional corner)
//! - Victory thresholds (minimum pieces, winning margin)
//!
//! Draw adjudication (repetition, quiet moves) needs game history and lives
//! in [`crate::game`].

pub mod capture;
pub mod moves;
pub mod terminal;

// Re-exports for convenient access
pub use capture::{apply_move, captured_positions, count_captures, simulate, Applied};
pub use moves::{all_legal_moves, count_legal_moves, has_legal_move, is_legal, legal_moves};
pub use terminal::{check_terminal, check_victory, WinReason};
