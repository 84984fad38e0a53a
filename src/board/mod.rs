//! Board representation for Hasami Shogi

pub mod bitboard;
pub mod board;


use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (9x9)
pub const BOARD_SIZE: usize = 9;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 81

/// The two sides. Black starts on row 0 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Whether both coordinates fall inside the 9x9 grid. The fields are
    /// public, so positions built by hand can lie outside it.
    #[inline]
    pub fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Step `(dr, dc)` away from this cell, or `None` past the edge.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Pos> {
        let r = self.row as i32 + dr;
        let c = self.col as i32 + dc;
        Pos::is_valid(r, c).then(|| Pos::new(r as u8, c as u8))
    }

    /// Inside the 5x5 zone (rows/cols 2..=6) favoured by move ordering
    /// and the opening heuristic.
    #[inline]
    pub fn is_central(self) -> bool {
        (2..=6).contains(&self.row) && (2..=6).contains(&self.col)
    }

    /// Inside the 3x3 block (rows/cols 3..=5) scored by the evaluators.
    #[inline]
    pub fn is_core(self) -> bool {
        (3..=5).contains(&self.row) && (3..=5).contains(&self.col)
    }

    #[inline]
    pub fn is_corner(self) -> bool {
        let last = BOARD_SIZE as u8 - 1;
        (self.row == 0 || self.row == last) && (self.col == 0 || self.col == last)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// An orthogonal slide from `from` to `to`.
///
/// Captures are not part of the move; they are derived by
/// [`crate::rules::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
