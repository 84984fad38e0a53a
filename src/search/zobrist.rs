//! Zobrist hashing for position keys
//!
//! A position key is a 64-bit XOR digest of (board, side to move). It keys
//! the transposition cache and the repetition table. Keys of different
//! positions may collide; at 64 bits that risk is accepted rather than
//! guarded against.
//!
//! # Example
//!
//! ```
//! use hasami::board::{Board, Pos, Side};
//! use hasami::search::{position_key, ZOBRIST};
//!
//! let board = Board::initial();
//! let key = position_key(&board, Side::Black);
//!
//! let mut moved = board;
//! moved.remove(Pos::new(0, 4));
//! moved.place(Pos::new(4, 4), Side::Black);
//!
//! // Incremental update is equivalent to full recomputation
//! let incremental = ZOBRIST.update_slide(key, Pos::new(0, 4), Pos::new(4, 4), Side::Black);
//! assert_eq!(incremental, position_key(&moved, Side::White));
//! ```

use crate::board::{Board, Pos, Side, TOTAL_CELLS};

/// Shared table, generated at compile time.
pub static ZOBRIST: ZobristTable = ZobristTable::new();

/// Position key of `board` with `side_to_move` to play.
#[inline]
#[must_use]
pub fn position_key(board: &Board, side_to_move: Side) -> u64 {
    ZOBRIST.hash(board, side_to_move)
}

/// Zobrist hash table for position hashing.
///
/// Uses XOR-based hashing with precomputed random values for each
/// (cell, side) combination, plus one value toggled when white is to move.
pub struct ZobristTable {
    pieces: [[u64; TOTAL_CELLS]; 2],
    white_to_move: u64,
}

impl ZobristTable {
    /// Create a table with deterministic values.
    ///
    /// Knuth's MMIX LCG with a fixed seed, so keys are identical across runs
    /// and the table can be built in a `const` context.
    #[must_use]
    pub const fn new() -> Self {
        let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut pieces = [[0u64; TOTAL_CELLS]; 2];

        let mut side = 0;
        while side < 2 {
            let mut i = 0;
            while i < TOTAL_CELLS {
                seed = seed
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                // High bits of an LCG are the well-mixed ones
                pieces[side][i] = seed ^ (seed >> 29);
                i += 1;
            }
            side += 1;
        }

        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        Self {
            pieces,
            white_to_move: seed ^ (seed >> 29),
        }
    }

    /// Full hash of a position.
    #[must_use]
    pub fn hash(&self, board: &Board, side_to_move: Side) -> u64 {
        let mut h = 0u64;

        for pos in board.black.iter_ones() {
            h ^= self.pieces[0][pos.to_index()];
        }
        for pos in board.white.iter_ones() {
            h ^= self.pieces[1][pos.to_index()];
        }

        if side_to_move == Side::White {
            h ^= self.white_to_move;
        }

        h
    }

    /// Incrementally update a hash for a slide by `side`, toggling the side
    /// to move. Captures are applied separately with [`Self::update_capture`].
    #[inline]
    #[must_use]
    pub fn update_slide(&self, hash: u64, from: Pos, to: Pos, side: Side) -> u64 {
        let table = &self.pieces[side.index()];
        hash ^ table[from.to_index()] ^ table[to.to_index()] ^ self.white_to_move
    }

    /// Remove a captured piece of `side` without toggling side to move.
    #[inline]
    #[must_use]
    pub fn update_capture(&self, hash: u64, pos: Pos, side: Side) -> u64 {
        hash ^ self.pieces[side.index()][pos.to_index()]
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
