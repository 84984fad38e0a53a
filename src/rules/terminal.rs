//! Victory thresholds
//!
//! Both conditions depend on piece counts alone:
//! 1. A side with `min_pieces` or fewer has lost
//! 2. A lead of `winning_margin` or more pieces wins
//!
//! The minimum-pieces test runs first and checks black before white.

use crate::board::{Board, Side};
use crate::config::RulesConfig;

/// Why a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// Loser dropped to the minimum piece count
    MinimumPieces,
    /// Winner led by the winning margin
    Margin,
    /// Loser had no legal move on their turn
    NoLegalMoves,
}

/// Winner by piece-count thresholds, with the condition that fired.
#[must_use]
pub fn check_victory(board: &Board, rules: &RulesConfig) -> Option<(Side, WinReason)> {
    let black = board.count(Side::Black);
    let white = board.count(Side::White);

    if black <= rules.min_pieces {
        return Some((Side::White, WinReason::MinimumPieces));
    }
    if white <= rules.min_pieces {
        return Some((Side::Black, WinReason::MinimumPieces));
    }

    if black.abs_diff(white) >= rules.winning_margin {
        let winner = if black > white { Side::Black } else { Side::White };
        return Some((winner, WinReason::Margin));
    }

    None
}

/// Winner by piece-count thresholds, if any.
///
/// # Example
///
/// ```
/// use hasami::board::{Board, Side};
/// use hasami::config::RulesConfig;
/// use hasami::rules::check_terminal;
///
/// let board = Board::initial();
/// assert_eq!(check_terminal(&board, &RulesConfig::default()), None);
/// ```
#[inline]
#[must_use]
pub fn check_terminal(board: &Board, rules: &RulesConfig) -> Option<Side> {
    check_victory(board, rules).map(|(winner, _)| winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_with(black: u8, white: u8) -> Board {
        let mut board = Board::new();
        for c in 0..black {
            board.place(Pos::new(0, c), Side::Black);
        }
        for c in 0..white {
            board.place(Pos::new(8, c), Side::White);
        }
        board
    }

    #[test]
    fn test_minimum_pieces_loses() {
        let rules = RulesConfig::default();
        assert_eq!(
            check_victory(&board_with(2, 3), &rules),
            Some((Side::White, WinReason::MinimumPieces))
        );
        assert_eq!(
            check_victory(&board_with(4, 2), &rules),
            Some((Side::Black, WinReason::MinimumPieces))
        );
    }

    #[test]
    fn test_one_above_minimum_is_not_terminal() {
        let rules = RulesConfig::default();
        assert_eq!(check_terminal(&board_with(3, 3), &rules), None);
    }

    #[test]
    fn test_margin_wins() {
        let rules = RulesConfig::default();
        assert_eq!(
            check_victory(&board_with(9, 6), &rules),
            Some((Side::Black, WinReason::Margin))
        );
        assert_eq!(
            check_victory(&board_with(5, 8), &rules),
            Some((Side::White, WinReason::Margin))
        );
        assert_eq!(check_terminal(&board_with(9, 7), &rules), None);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let rules = RulesConfig {
            min_pieces: 4,
            winning_margin: 5,
            ..RulesConfig::default()
        };
        assert_eq!(check_terminal(&board_with(4, 5), &rules), Some(Side::White));
        assert_eq!(check_terminal(&board_with(9, 5), &rules), None);
        assert_eq!(check_terminal(&board_with(9, 9), &rules), None);
    }
}
