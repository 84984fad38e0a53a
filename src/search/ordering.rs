//! Move ordering heuristics
//!
//! Moves that capture more come first, then moves landing in the central
//! zone. Ordering only changes how early alpha-beta can prune, never the
//! value it returns.

use std::cmp::Reverse;

use crate::board::{Board, Move, Side};
use crate::config::RulesConfig;
use crate::rules::count_captures;

/// Sort key of a move: (pieces captured if played, lands centrally).
#[inline]
pub fn move_score(board: &Board, mv: Move, side: Side, rules: &RulesConfig) -> (u32, bool) {
    (count_captures(board, mv, side, rules), mv.to.is_central())
}

/// Stable sort by descending [`move_score`]; ties keep generation order.
pub fn order_moves(board: &Board, moves: &mut [Move], side: Side, rules: &RulesConfig) {
    moves.sort_by_cached_key(|&mv| Reverse(move_score(board, mv, side, rules)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::all_legal_moves;

    #[test]
    fn test_capture_first_then_centre() {
        let mut board = Board::new();
        board.place(Pos::new(3, 3), Side::Black);
        board.place(Pos::new(3, 4), Side::White);
        board.place(Pos::new(8, 5), Side::Black);
        board.place(Pos::new(0, 8), Side::White);
        let rules = RulesConfig::default();

        let mut moves = all_legal_moves(&board, Side::Black);
        order_moves(&board, &mut moves, Side::Black, &rules);

        assert_eq!(moves[0], Move::new(Pos::new(8, 5), Pos::new(3, 5)));
        let first_quiet = moves
            .iter()
            .position(|&m| move_score(&board, m, Side::Black, &rules).0 == 0)
            .unwrap();
        // Every central quiet move precedes every non-central one
        let tail = &moves[first_quiet..];
        let first_edge = tail.iter().position(|m| !m.to.is_central()).unwrap();
        assert!(tail[first_edge..].iter().all(|m| !m.to.is_central()));
    }

    #[test]
    fn test_ordering_is_a_permutation() {
        let board = Board::initial();
        let rules = RulesConfig::default();
        let original = all_legal_moves(&board, Side::White);
        let mut ordered = original.clone();
        order_moves(&board, &mut ordered, Side::White, &rules);

        let mut a = original;
        let mut b = ordered;
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
