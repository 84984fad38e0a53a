//! Bitboard over the 81 cells

use super::{Pos, TOTAL_CELLS};

const MASK: u128 = (1u128 << TOTAL_CELLS) - 1;

/// One bit per cell, row-major, packed into a single `u128`
/// (81 of the 128 bits are used).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Bitboard with every cell of `row` set.
    pub const fn full_row(row: usize) -> Self {
        Self {
            bits: 0x1FFu128 << (row * 9),
        }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u128 << pos.to_index();
    }

    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u128 << pos.to_index());
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count set cells (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        (self.bits & MASK).count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits & MASK == 0
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard {
            bits: self.bits | other.bits,
        }
    }

    #[inline]
    pub fn intersects(self, other: Bitboard) -> bool {
        self.bits & other.bits != 0
    }

    /// Raw bits, row-major from (0,0).
    #[inline]
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Iterate over set positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            remaining: self.bits & MASK,
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    remaining: u128,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.remaining.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.remaining &= self.remaining - 1;
        Some(Pos::from_index(idx))
    }
}
