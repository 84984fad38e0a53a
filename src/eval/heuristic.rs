//! Heuristic evaluation functions for Hasami Shogi positions
//!
//! Scores are `f64` from the perspective of `side`: positive values mean
//! `side` stands better. The two functions are not antisymmetric
//! (`baseline(b, Black)` need not equal `-baseline(b, White)`), only the
//! sign convention is guaranteed.

use crate::board::{Board, Pos, Side};
use crate::rules::moves::ORTHOGONAL;
use crate::rules::count_legal_moves;

use super::weights::{AdvancedWeights, BaselineWeights};

/// Bound of [`evaluate_balance`].
const BALANCE_CLAMP: f64 = 10.0;

/// Cheap evaluation: material, centre and adjacency threats.
#[must_use]
pub fn baseline(board: &Board, side: Side, w: &BaselineWeights) -> f64 {
    let opponent = side.opponent();

    let material = f64::from(board.count(side)) - f64::from(board.count(opponent));
    let centre = f64::from(core_count(board, side)) - f64::from(core_count(board, opponent));
    let threats = f64::from(threatened_pieces(board, opponent))
        - f64::from(threatened_pieces(board, side));

    w.material * material + w.centrality * centre + w.threat * threats
}

/// Full evaluation. Mobility needs a move count for both sides, which makes
/// this several times more expensive than [`baseline`].
#[must_use]
pub fn advanced(board: &Board, side: Side, w: &AdvancedWeights) -> f64 {
    let opponent = side.opponent();

    let material = f64::from(board.count(side)) - f64::from(board.count(opponent));
    let centre = f64::from(core_count(board, side)) - f64::from(core_count(board, opponent));
    let mobility =
        count_legal_moves(board, side) as f64 - count_legal_moves(board, opponent) as f64;
    let threats = f64::from(threatened_pieces(board, opponent))
        - f64::from(threatened_pieces(board, side));
    let grouping =
        f64::from(grouping_pairs(board, side)) - f64::from(grouping_pairs(board, opponent));
    let corners = f64::from(corner_count(board, side)) - f64::from(corner_count(board, opponent));

    w.material * material
        + w.centrality * centre
        + w.mobility * mobility
        + w.threat * threats
        + w.grouping * grouping
        + w.corner * corners
}

/// Who stands better, from black's side: advanced score for black minus
/// advanced score for white, clamped to [-10, 10].
#[must_use]
pub fn evaluate_balance(board: &Board) -> f64 {
    let w = AdvancedWeights::default();
    let raw = advanced(board, Side::Black, &w) - advanced(board, Side::White, &w);
    raw.clamp(-BALANCE_CLAMP, BALANCE_CLAMP)
}

/// Pieces of `side` inside the central 3x3 block.
#[must_use]
pub fn core_count(board: &Board, side: Side) -> u32 {
    board.pieces(side).iter_ones().filter(|p| p.is_core()).count() as u32
}

/// Pieces of `side` with at least one orthogonal neighbour held by the
/// opponent, i.e. already half of a possible sandwich.
#[must_use]
pub fn threatened_pieces(board: &Board, side: Side) -> u32 {
    let opponent = side.opponent();
    board
        .pieces(side)
        .iter_ones()
        .filter(|&p| has_neighbour(board, p, opponent))
        .count() as u32
}

/// Orthogonally adjacent pairs of `side`, each pair counted once.
#[must_use]
pub fn grouping_pairs(board: &Board, side: Side) -> u32 {
    let mut pairs = 0;
    for p in board.pieces(side).iter_ones() {
        // Right and down only
        for (dr, dc) in [(0, 1), (1, 0)] {
            if p.offset(dr, dc).is_some_and(|q| board.get(q) == Some(side)) {
                pairs += 1;
            }
        }
    }
    pairs
}

fn corner_count(board: &Board, side: Side) -> u32 {
    board.pieces(side).iter_ones().filter(|p| p.is_corner()).count() as u32
}

#[inline]
fn has_neighbour(board: &Board, pos: Pos, side: Side) -> bool {
    ORTHOGONAL
        .iter()
        .any(|&(dr, dc)| pos.offset(dr, dc).is_some_and(|q| board.get(q) == Some(side)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_initial_position_is_level() {
        let board = Board::initial();
        assert!(approx(baseline(&board, Side::Black, &BaselineWeights::default()), 0.0));
        assert!(approx(advanced(&board, Side::White, &AdvancedWeights::default()), 0.0));
        assert!(approx(evaluate_balance(&board), 0.0));
    }

    #[test]
    fn test_baseline_terms() {
        let mut board = Board::new();
        board.place(Pos::new(4, 4), Side::Black);
        board.place(Pos::new(4, 5), Side::White);
        board.place(Pos::new(0, 0), Side::Black);

        // material +1, centre 1-1, threats 1-1
        let w = BaselineWeights::default();
        assert!(approx(baseline(&board, Side::Black, &w), 1.0));
        assert!(approx(baseline(&board, Side::White, &w), -1.0));
    }

    #[test]
    fn test_baseline_weights_are_applied() {
        let mut board = Board::new();
        board.place(Pos::new(4, 4), Side::Black);
        let w = BaselineWeights {
            material: 0.0,
            centrality: 2.0,
            threat: 0.0,
        };
        assert!(approx(baseline(&board, Side::Black, &w), 2.0));
    }

    #[test]
    fn test_threat_counts_pieces_not_neighbours() {
        let mut board = Board::new();
        // White piece flanked by two blacks counts once
        board.place(Pos::new(4, 3), Side::Black);
        board.place(Pos::new(4, 4), Side::White);
        board.place(Pos::new(4, 5), Side::Black);
        assert_eq!(threatened_pieces(&board, Side::White), 1);
        assert_eq!(threatened_pieces(&board, Side::Black), 2);
    }

    #[test]
    fn test_grouping_pairs() {
        let board = Board::initial();
        assert_eq!(grouping_pairs(&board, Side::Black), 8);

        let mut board = Board::new();
        board.place(Pos::new(2, 2), Side::White);
        board.place(Pos::new(2, 3), Side::White);
        board.place(Pos::new(3, 2), Side::White);
        assert_eq!(grouping_pairs(&board, Side::White), 2);
    }

    #[test]
    fn test_advanced_corner_and_mobility() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Side::Black);
        board.place(Pos::new(8, 4), Side::White);
        let w = AdvancedWeights {
            material: 0.0,
            centrality: 0.0,
            mobility: 0.0,
            threat: 0.0,
            grouping: 0.0,
            corner: 1.0,
        };
        assert!(approx(advanced(&board, Side::Black, &w), 1.0));

        let w = AdvancedWeights {
            mobility: 1.0,
            corner: 0.0,
            ..w
        };
        // Corner piece: 16 slides; edge piece on row 8: 8 + 8 = 16
        assert!(approx(advanced(&board, Side::Black, &w), 0.0));
    }

    #[test]
    fn test_balance_is_clamped() {
        let mut board = Board::new();
        for c in 0..9 {
            board.place(Pos::new(0, c), Side::Black);
            board.place(Pos::new(1, c), Side::Black);
        }
        board.place(Pos::new(8, 8), Side::White);
        assert!(approx(evaluate_balance(&board), 10.0));
    }
}
