//! Hasami Shogi rules and search engine
//!
//! A 9x9 board game engine:
//! - Each side starts with a full home row (black on row 0, white on row 8)
//! - Pieces slide orthogonally through empty cells, like a rook
//! - Sandwiching a run of enemy pieces between the moved piece and a friendly
//!   piece captures the run; diagonal and corner captures are rule options
//! - A side with too few pieces, or too far behind, has lost
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Move generation, capture resolution, victory thresholds
//! - [`game`]: Game record with repetition, quiet-move and forfeit handling
//! - [`eval`]: Baseline and advanced evaluators
//! - [`search`]: Minimax and alpha-beta with a transposition cache
//! - [`engine`]: Difficulty tiers and move selection
//! - [`selfplay`]: Engine-versus-engine games
//!
//! # Quick Start
//!
//! ```
//! use hasami::{AIEngine, Difficulty, GameRecord, RulesConfig};
//!
//! let rules = RulesConfig::default();
//! let mut game = GameRecord::new(rules);
//! let mut engine = AIEngine::new(Difficulty::Intermediate, rules, 42);
//!
//! // AI plays the first move for black
//! if let Some(mv) = engine.choose_move(game.board(), game.to_move()).unwrap() {
//!     game.play(mv).unwrap();
//!     println!("AI plays {mv}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod selfplay;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Side, BOARD_SIZE};
pub use config::RulesConfig;
pub use engine::{choose_move, AIEngine, Difficulty, MoveResult, SearchType};
pub use error::{HasamiError, Result};
pub use game::{DrawReason, GameRecord, Outcome};
