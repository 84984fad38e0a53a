//! Search module for the Hasami Shogi AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition cache with bound-typed entries
//! - Move ordering (captures, then centre)
//! - Minimax and alpha-beta search

pub mod alphabeta;
pub mod ordering;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{Algorithm, RootResult, SearchStats, Searcher};
pub use ordering::{move_score, order_moves};
pub use tt::{shared_cache, CacheKey, EntryType, SharedCache, TranspositionCache, DEFAULT_CAPACITY};
pub use zobrist::{position_key, ZobristTable, ZOBRIST};
