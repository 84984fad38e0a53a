//! Move generation
//!
//! Every piece slides like a rook: any number of empty cells along one of
//! the four orthogonal rays, stopping before the first occupied cell or the
//! board edge. Nothing jumps.

use crate::board::{Board, Move, Pos, Side};

/// Orthogonal rays (4 directions)
pub(crate) const ORTHOGONAL: [(i32, i32); 4] = [
    (0, 1),  // →
    (1, 0),  // ↓
    (0, -1), // ←
    (-1, 0), // ↑
];

/// Every slide available to the piece on `origin`.
///
/// Returns an empty list when `origin` is empty or off the board. Ownership
/// is not checked here; [`crate::game::GameRecord::legal_moves`] filters by
/// side to move.
pub fn legal_moves(board: &Board, origin: Pos) -> Vec<Move> {
    let mut moves = Vec::new();
    if !origin.is_on_board() || board.is_empty(origin) {
        return moves;
    }
    push_slides(board, origin, &mut moves);
    moves
}

/// Union of [`legal_moves`] over every piece of `side`, origins in
/// row-major order.
pub fn all_legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for origin in board.pieces(side).iter_ones() {
        push_slides(board, origin, &mut moves);
    }
    moves
}

/// Number of moves `all_legal_moves` would return, without allocating.
pub fn count_legal_moves(board: &Board, side: Side) -> usize {
    let mut count = 0;
    for origin in board.pieces(side).iter_ones() {
        for &(dr, dc) in &ORTHOGONAL {
            let mut cur = origin.offset(dr, dc);
            while let Some(p) = cur {
                if !board.is_empty(p) {
                    break;
                }
                count += 1;
                cur = p.offset(dr, dc);
            }
        }
    }
    count
}

/// Whether `side` has at least one move.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.pieces(side).iter_ones().any(|origin| {
        ORTHOGONAL
            .iter()
            .any(|&(dr, dc)| origin.offset(dr, dc).is_some_and(|p| board.is_empty(p)))
    })
}

/// Whether `mv` is a clear orthogonal slide for the piece on `mv.from`.
pub fn is_legal(board: &Board, mv: Move) -> bool {
    let (from, to) = (mv.from, mv.to);
    if !from.is_on_board() || !to.is_on_board() || board.is_empty(from) || from == to {
        return false;
    }
    let (dr, dc) = if from.row == to.row {
        (0, if to.col > from.col { 1 } else { -1 })
    } else if from.col == to.col {
        (if to.row > from.row { 1 } else { -1 }, 0)
    } else {
        return false;
    };
    let mut cur = from.offset(dr, dc);
    while let Some(p) = cur {
        if !board.is_empty(p) {
            return false;
        }
        if p == to {
            return true;
        }
        cur = p.offset(dr, dc);
    }
    false
}

fn push_slides(board: &Board, origin: Pos, moves: &mut Vec<Move>) {
    for &(dr, dc) in &ORTHOGONAL {
        let mut cur = origin.offset(dr, dc);
        while let Some(p) = cur {
            if !board.is_empty(p) {
                break;
            }
            moves.push(Move::new(origin, p));
            cur = p.offset(dr, dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_piece_reaches_sixteen_cells() {
        let mut board = Board::new();
        board.place(Pos::new(4, 4), Side::Black);
        assert_eq!(legal_moves(&board, Pos::new(4, 4)).len(), 16);
    }

    #[test]
    fn test_slide_stops_before_blocker() {
        let mut board = Board::new();
        board.place(Pos::new(4, 4), Side::Black);
        board.place(Pos::new(4, 7), Side::White);
        let moves = legal_moves(&board, Pos::new(4, 4));
        let right: Vec<Pos> = moves
            .iter()
            .filter(|m| m.to.row == 4 && m.to.col > 4)
            .map(|m| m.to)
            .collect();
        assert_eq!(right, vec![Pos::new(4, 5), Pos::new(4, 6)]);
        assert!(!moves.iter().any(|m| m.to == Pos::new(4, 8)));
    }

    #[test]
    fn test_empty_origin_has_no_moves() {
        let board = Board::initial();
        assert!(legal_moves(&board, Pos::new(4, 4)).is_empty());
    }

    #[test]
    fn test_off_board_cells_have_no_moves() {
        let board = Board::initial();
        assert!(legal_moves(&board, Pos { row: 0, col: 200 }).is_empty());
        // Row 1, col 10 would alias the index of (2, 1)
        assert!(legal_moves(&board, Pos { row: 1, col: 10 }).is_empty());
        assert!(!is_legal(&board, Move::new(Pos { row: 20, col: 0 }, Pos::new(4, 0))));
        assert!(!is_legal(&board, Move::new(Pos::new(0, 0), Pos { row: 9, col: 0 })));
    }

    #[test]
    fn test_initial_position_move_count() {
        let board = Board::initial();
        // Each back-rank piece can only slide 1..=7 cells forward.
        assert_eq!(all_legal_moves(&board, Side::Black).len(), 63);
        assert_eq!(count_legal_moves(&board, Side::White), 63);
        assert!(has_legal_move(&board, Side::Black));
    }

    #[test]
    fn test_all_legal_moves_row_major_origins() {
        let board = Board::initial();
        let moves = all_legal_moves(&board, Side::Black);
        assert!(moves.windows(2).all(|w| w[0].from <= w[1].from));
    }

    #[test]
    fn test_boxed_in_piece_has_no_moves() {
        let mut board = Board::new();
        board.place(Pos::new(0, 0), Side::Black);
        board.place(Pos::new(0, 1), Side::White);
        board.place(Pos::new(1, 0), Side::White);
        assert!(legal_moves(&board, Pos::new(0, 0)).is_empty());
        assert!(!has_legal_move(&board, Side::Black));
        assert_eq!(count_legal_moves(&board, Side::Black), 0);
    }

    #[test]
    fn test_is_legal() {
        let mut board = Board::new();
        board.place(Pos::new(2, 2), Side::Black);
        board.place(Pos::new(2, 5), Side::White);
        assert!(is_legal(&board, Move::new(Pos::new(2, 2), Pos::new(2, 4))));
        assert!(is_legal(&board, Move::new(Pos::new(2, 2), Pos::new(8, 2))));
        // Onto or past a piece
        assert!(!is_legal(&board, Move::new(Pos::new(2, 2), Pos::new(2, 5))));
        assert!(!is_legal(&board, Move::new(Pos::new(2, 2), Pos::new(2, 7))));
        // Diagonal, null, empty origin
        assert!(!is_legal(&board, Move::new(Pos::new(2, 2), Pos::new(3, 3))));
        assert!(!is_legal(&board, Move::new(Pos::new(2, 2), Pos::new(2, 2))));
        assert!(!is_legal(&board, Move::new(Pos::new(0, 0), Pos::new(0, 1))));
    }
}
