//! Board value: two bitboards, one per side

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Pos, Side, BOARD_SIZE, TOTAL_CELLS};
use crate::error::HasamiError;

/// A 9x9 board. `Copy`, so every simulated move works on a fresh value and
/// never touches the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black pieces bitboard
    pub black: Bitboard,
    /// White pieces bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Starting position: row 0 all black, row 8 all white.
    pub fn initial() -> Self {
        Self {
            black: Bitboard::full_row(0),
            white: Bitboard::full_row(BOARD_SIZE - 1),
        }
    }

    /// Build a board from a numeric grid (0 empty, 1 black, 2 white).
    ///
    /// Fails with [`HasamiError::MalformedBoard`] unless the grid is exactly
    /// 9 rows of 9 cells, each in `0..=2`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, HasamiError> {
        if rows.len() != BOARD_SIZE {
            return Err(HasamiError::MalformedBoard(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != BOARD_SIZE {
                return Err(HasamiError::MalformedBoard(format!(
                    "row {r} has {} cells, expected {BOARD_SIZE}",
                    row.len()
                )));
            }
            for (c, &cell) in row.iter().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                match cell {
                    0 => {}
                    1 => board.place(pos, Side::Black),
                    2 => board.place(pos, Side::White),
                    other => {
                        return Err(HasamiError::MalformedBoard(format!(
                            "invalid cell value {other} at {pos}"
                        )))
                    }
                }
            }
        }
        Ok(board)
    }

    /// Get piece at position. `None` for off-board positions.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Side> {
        if !pos.is_on_board() {
            None
        } else if self.black.get(pos) {
            Some(Side::Black)
        } else if self.white.get(pos) {
            Some(Side::White)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.is_on_board() && !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a piece on a cell, replacing whatever was there. Off-board
    /// positions are ignored.
    #[inline]
    pub fn place(&mut self, pos: Pos, side: Side) {
        if !pos.is_on_board() {
            return;
        }
        self.remove(pos);
        self.pieces_mut(side).set(pos);
    }

    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        if !pos.is_on_board() {
            return;
        }
        self.black.clear(pos);
        self.white.clear(pos);
    }

    #[inline]
    pub fn pieces(&self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    #[inline]
    fn pieces_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    #[inline]
    pub fn count(&self, side: Side) -> u32 {
        self.pieces(side).count()
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.piece_count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Some(Side::Black) => 'b',
                    Some(Side::White) => 'w',
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the diagram printed by `Display`: nine lines of nine cells, `.`
/// for empty, `b` for black, `w` for white. Blank lines and surrounding
/// whitespace are ignored.
impl FromStr for Board {
    type Err = HasamiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|ch| match ch {
                        '.' => Ok(0u8),
                        'b' | 'B' => Ok(1),
                        'w' | 'W' => Ok(2),
                        other => Err(HasamiError::MalformedBoard(format!(
                            "unexpected character {other:?}"
                        ))),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_rows(&rows)
    }
}
