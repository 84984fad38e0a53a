//! Capture rules (sandwich capture)
//!
//! After a piece lands, each ray from the destination is scanned outward.
//! A contiguous run of opposing pieces closed off by a friendly piece is
//! captured; a run that ends on an empty cell or the board edge is not.
//! Diagonal rays are scanned only with `diagonal_capture` enabled.
//!
//! With `corner_capture` enabled, an opposing piece sitting on a corner is
//! also removed when both of its orthogonal neighbours belong to the mover.
//! This check looks at the whole board, not just the destination, and takes
//! at most one corner per move.

use crate::board::{Board, Move, Pos, Side, BOARD_SIZE};
use crate::config::RulesConfig;
use crate::error::{HasamiError, Result};

use super::moves::{is_legal, ORTHOGONAL};

/// Diagonal rays, scanned only when diagonal capture is enabled.
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const LAST: u8 = BOARD_SIZE as u8 - 1;

/// Corners with their two orthogonal neighbours.
const CORNERS: [(Pos, Pos, Pos); 4] = [
    (Pos { row: 0, col: 0 }, Pos { row: 0, col: 1 }, Pos { row: 1, col: 0 }),
    (Pos { row: 0, col: LAST }, Pos { row: 0, col: LAST - 1 }, Pos { row: 1, col: LAST }),
    (Pos { row: LAST, col: 0 }, Pos { row: LAST - 1, col: 0 }, Pos { row: LAST, col: 1 }),
    (
        Pos { row: LAST, col: LAST },
        Pos { row: LAST - 1, col: LAST },
        Pos { row: LAST, col: LAST - 1 },
    ),
];

/// Result of applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Board after the slide and all captures
    pub board: Board,
    /// Side that made the move
    pub side: Side,
    /// Cells cleared by the move
    pub captured: Vec<Pos>,
}

impl Applied {
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

/// Find positions captured by `side` having just landed on `to`.
///
/// `board` must already show the moved piece on `to`.
pub fn captured_positions(board: &Board, to: Pos, side: Side, rules: &RulesConfig) -> Vec<Pos> {
    let mut captured = Vec::new();

    scan_rays(board, to, side, &ORTHOGONAL, &mut captured);
    if rules.diagonal_capture {
        scan_rays(board, to, side, &DIAGONAL, &mut captured);
    }

    if rules.corner_capture {
        if let Some(corner) = corner_capture(board, side) {
            captured.push(corner);
        }
    }

    captured
}

fn scan_rays(board: &Board, to: Pos, side: Side, rays: &[(i32, i32)], captured: &mut Vec<Pos>) {
    let opponent = side.opponent();
    for &(dr, dc) in rays {
        let mut run = Vec::new();
        let mut cur = to.offset(dr, dc);
        while let Some(p) = cur {
            match board.get(p) {
                Some(s) if s == opponent => run.push(p),
                Some(_) => {
                    // Closed by a friendly piece
                    captured.extend(run);
                    break;
                }
                None => break,
            }
            cur = p.offset(dr, dc);
        }
    }
}

/// First opposing corner piece flanked on both orthogonal sides by `side`.
fn corner_capture(board: &Board, side: Side) -> Option<Pos> {
    let opponent = side.opponent();
    CORNERS
        .iter()
        .find(|(corner, n1, n2)| {
            board.get(*corner) == Some(opponent)
                && board.get(*n1) == Some(side)
                && board.get(*n2) == Some(side)
        })
        .map(|(corner, _, _)| *corner)
}

/// Apply a move for whichever side owns `mv.from`.
///
/// Copies the board, slides the piece, then clears every captured cell.
/// The input board is never modified.
///
/// # Errors
///
/// [`HasamiError::IllegalMove`] when either cell is off the board, `mv.from`
/// is empty, or `mv.to` is not a clear orthogonal slide away.
///
/// # Example
///
/// ```
/// use hasami::board::{Board, Move, Pos, Side};
/// use hasami::config::RulesConfig;
/// use hasami::rules::apply_move;
///
/// let board = Board::initial();
/// let mv = Move::new(Pos::new(0, 4), Pos::new(4, 4));
/// let applied = apply_move(&board, mv, &RulesConfig::default()).unwrap();
/// assert_eq!(applied.board.get(Pos::new(4, 4)), Some(Side::Black));
/// assert!(!applied.is_capture());
/// ```
pub fn apply_move(board: &Board, mv: Move, rules: &RulesConfig) -> Result<Applied> {
    if !mv.from.is_on_board() || !mv.to.is_on_board() {
        return Err(HasamiError::IllegalMove {
            mv,
            reason: "cell off the board",
        });
    }
    let side = board.get(mv.from).ok_or(HasamiError::IllegalMove {
        mv,
        reason: "origin cell is empty",
    })?;
    if !is_legal(board, mv) {
        return Err(HasamiError::IllegalMove {
            mv,
            reason: "destination is not a clear orthogonal slide",
        });
    }

    let mut next = *board;
    next.remove(mv.from);
    next.place(mv.to, side);
    let captured = captured_positions(&next, mv.to, side, rules);
    for &pos in &captured {
        next.remove(pos);
    }

    Ok(Applied {
        board: next,
        side,
        captured,
    })
}

/// Apply a generated move without validation. Used on the search path where
/// moves come straight from the generator.
#[inline]
pub fn simulate(board: &Board, mv: Move, side: Side, rules: &RulesConfig) -> Board {
    let mut next = *board;
    next.remove(mv.from);
    next.place(mv.to, side);
    for pos in captured_positions(&next, mv.to, side, rules) {
        next.remove(pos);
    }
    next
}

/// Pieces removed if `side` plays `mv`, measured by diffing piece counts.
#[inline]
pub fn count_captures(board: &Board, mv: Move, side: Side, rules: &RulesConfig) -> u32 {
    board.piece_count() - simulate(board, mv, side, rules).piece_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(r1: u8, c1: u8, r2: u8, c2: u8) -> Move {
        Move::new(Pos::new(r1, c1), Pos::new(r2, c2))
    }

    #[test]
    fn test_capture_horizontal_single() {
        let mut board = Board::new();
        // B W _  ← B slides into the gap from below
        board.place(Pos::new(3, 3), Side::Black);
        board.place(Pos::new(3, 4), Side::White);
        board.place(Pos::new(6, 5), Side::Black);

        let applied = apply_move(&board, mv(6, 5, 3, 5), &RulesConfig::default()).unwrap();
        assert_eq!(applied.captured, vec![Pos::new(3, 4)]);
        assert!(applied.board.is_empty(Pos::new(3, 4)));
        assert!(applied.is_capture());
    }

    #[test]
    fn test_capture_long_run_vertical() {
        let mut board = Board::new();
        board.place(Pos::new(1, 2), Side::White);
        board.place(Pos::new(2, 2), Side::Black);
        board.place(Pos::new(3, 2), Side::Black);
        board.place(Pos::new(4, 2), Side::Black);
        board.place(Pos::new(5, 7), Side::White);

        let applied = apply_move(&board, mv(5, 7, 5, 2), &RulesConfig::default()).unwrap();
        let mut captured = applied.captured.clone();
        captured.sort();
        assert_eq!(captured, vec![Pos::new(2, 2), Pos::new(3, 2), Pos::new(4, 2)]);
        assert_eq!(applied.board.count(Side::Black), 0);
    }

    #[test]
    fn test_no_capture_run_ends_at_edge() {
        let mut board = Board::new();
        board.place(Pos::new(4, 7), Side::White);
        board.place(Pos::new(4, 8), Side::White);
        board.place(Pos::new(0, 6), Side::Black);

        let applied = apply_move(&board, mv(0, 6, 4, 6), &RulesConfig::default()).unwrap();
        assert!(applied.captured.is_empty());
    }

    #[test]
    fn test_no_capture_run_ends_at_empty() {
        let mut board = Board::new();
        board.place(Pos::new(4, 4), Side::White);
        board.place(Pos::new(4, 5), Side::White);
        // (4,6) empty, (4,7) black: gap breaks the sandwich
        board.place(Pos::new(4, 7), Side::Black);
        board.place(Pos::new(0, 3), Side::Black);

        let applied = apply_move(&board, mv(0, 3, 4, 3), &RulesConfig::default()).unwrap();
        assert!(applied.captured.is_empty());
    }

    #[test]
    fn test_moving_between_two_enemies_is_safe() {
        let mut board = Board::new();
        board.place(Pos::new(4, 3), Side::White);
        board.place(Pos::new(4, 5), Side::White);
        board.place(Pos::new(0, 4), Side::Black);

        let applied = apply_move(&board, mv(0, 4, 4, 4), &RulesConfig::default()).unwrap();
        assert!(applied.captured.is_empty());
        assert_eq!(applied.board.get(Pos::new(4, 4)), Some(Side::Black));
    }

    #[test]
    fn test_cross_capture() {
        let mut board = Board::new();
        //     B
        //     W
        // B W _ W B
        //     W
        //     B
        for (r, c, s) in [
            (2, 4, Side::Black),
            (3, 4, Side::White),
            (4, 2, Side::Black),
            (4, 3, Side::White),
            (4, 5, Side::White),
            (4, 6, Side::Black),
            (5, 4, Side::White),
            (6, 4, Side::Black),
            (4, 4, Side::Black),
        ] {
            board.place(Pos::new(r, c), s);
        }
        let rules = RulesConfig::default();
        let captured = captured_positions(&board, Pos::new(4, 4), Side::Black, &rules);
        assert_eq!(captured.len(), 4);
    }

    #[test]
    fn test_diagonal_capture_only_when_enabled() {
        let mut board = Board::new();
        board.place(Pos::new(2, 2), Side::Black);
        board.place(Pos::new(3, 3), Side::White);
        board.place(Pos::new(0, 4), Side::Black);

        let plain = apply_move(&board, mv(0, 4, 4, 4), &RulesConfig::default()).unwrap();
        assert!(plain.captured.is_empty());

        let rules = RulesConfig::default().with_diagonal_capture(true);
        let diag = apply_move(&board, mv(0, 4, 4, 4), &rules).unwrap();
        assert_eq!(diag.captured, vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_corner_capture() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Side::White);
        board.place(Pos::new(0, 1), Side::Black);
        board.place(Pos::new(4, 0), Side::Black);

        let applied = apply_move(&board, mv(4, 0, 1, 0), &RulesConfig::default()).unwrap();
        assert_eq!(applied.captured, vec![Pos::new(0, 0)]);

        let rules = RulesConfig::default().with_corner_capture(false);
        let applied = apply_move(&board, mv(4, 0, 1, 0), &rules).unwrap();
        assert!(applied.captured.is_empty());
    }

    #[test]
    fn test_corner_needs_both_neighbours() {
        let mut board = Board::new();
        board.place(Pos::new(8, 8), Side::White);
        board.place(Pos::new(7, 8), Side::Black);
        board.place(Pos::new(4, 7), Side::Black);

        // Lands on (8,7)? No: slide to (6,7) leaves (8,7) empty.
        let applied = apply_move(&board, mv(4, 7, 6, 7), &RulesConfig::default()).unwrap();
        assert!(applied.captured.is_empty());

        let applied = apply_move(&board, mv(4, 7, 8, 7), &RulesConfig::default()).unwrap();
        assert_eq!(applied.captured, vec![Pos::new(8, 8)]);
    }

    #[test]
    fn test_at_most_one_corner_per_move() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Side::White);
        board.place(Pos::new(0, 1), Side::Black);
        board.place(Pos::new(1, 0), Side::Black);
        board.place(Pos::new(0, 8), Side::White);
        board.place(Pos::new(0, 7), Side::Black);
        board.place(Pos::new(1, 8), Side::Black);
        board.place(Pos::new(5, 5), Side::Black);

        let applied = apply_move(&board, mv(5, 5, 5, 4), &RulesConfig::default()).unwrap();
        assert_eq!(applied.captured.len(), 1);
        assert_eq!(applied.board.count(Side::White), 1);
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let board = Board::initial();
        let rules = RulesConfig::default();
        assert!(matches!(
            apply_move(&board, mv(4, 4, 5, 4), &rules),
            Err(HasamiError::IllegalMove { .. })
        ));
        assert!(matches!(
            apply_move(&board, mv(0, 0, 8, 0), &rules),
            Err(HasamiError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_apply_move_rejects_off_board_cells() {
        let board = Board::initial();
        let rules = RulesConfig::default();
        let from_outside = Move::new(Pos { row: 20, col: 0 }, Pos::new(4, 0));
        let to_outside = Move::new(Pos::new(0, 8), Pos { row: 0, col: 200 });
        for mv in [from_outside, to_outside] {
            match apply_move(&board, mv, &rules) {
                Err(HasamiError::IllegalMove { reason, .. }) => {
                    assert_eq!(reason, "cell off the board")
                }
                other => panic!("expected an illegal move, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = Board::initial();
        let before = board;
        let _ = apply_move(&board, mv(0, 4, 4, 4), &RulesConfig::default()).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_count_captures_matches_apply() {
        let mut board = Board::new();
        board.place(Pos::new(3, 3), Side::Black);
        board.place(Pos::new(3, 4), Side::White);
        board.place(Pos::new(6, 5), Side::Black);
        let rules = RulesConfig::default();
        assert_eq!(count_captures(&board, mv(6, 5, 3, 5), Side::Black, &rules), 1);
        assert_eq!(count_captures(&board, mv(6, 5, 4, 5), Side::Black, &rules), 0);
    }
}
