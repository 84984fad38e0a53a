//! Search properties through the public API: pruning never changes the root
//! value, and seeded move selection is reproducible.

use hasami::board::{Board, Pos, Side};
use hasami::config::RulesConfig;
use hasami::engine::{choose_move, AIEngine, Difficulty};
use hasami::eval::Evaluator;
use hasami::rules::{check_terminal, is_legal};
use hasami::search::{Algorithm, Searcher, TranspositionCache};

/// Random non-terminal position with `per_side` pieces each.
fn random_position(rng: &mut fastrand::Rng, per_side: usize, rules: &RulesConfig) -> Board {
    loop {
        let mut board = Board::new();
        for side in [Side::Black, Side::White] {
            let mut placed = 0;
            while placed < per_side {
                let pos = Pos::new(rng.u8(..9), rng.u8(..9));
                if board.is_empty(pos) {
                    board.place(pos, side);
                    placed += 1;
                }
            }
        }
        if check_terminal(&board, rules).is_none() {
            return board;
        }
    }
}

fn root_scores(board: &Board, side: Side, depth: u8, evaluator: Evaluator) -> (f64, f64) {
    let rules = RulesConfig::default();
    let mut c1 = TranspositionCache::default();
    let mut c2 = TranspositionCache::default();
    let mm = Searcher::new(&mut c1, rules, evaluator, Algorithm::Minimax)
        .search_root(board, side, depth);
    let ab = Searcher::new(&mut c2, rules, evaluator, Algorithm::AlphaBeta)
        .search_root(board, side, depth);
    (mm.score, ab.score)
}

#[test]
fn pruning_preserves_root_value_baseline() {
    let rules = RulesConfig::default();
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..6 {
        let board = random_position(&mut rng, 4, &rules);
        for side in [Side::Black, Side::White] {
            let (mm, ab) = root_scores(&board, side, 3, Evaluator::baseline());
            assert_eq!(mm, ab, "\n{board}");
        }
    }
}

#[test]
fn pruning_preserves_root_value_advanced() {
    let rules = RulesConfig::default();
    let mut rng = fastrand::Rng::with_seed(11);
    for _ in 0..6 {
        let board = random_position(&mut rng, 5, &rules);
        let (mm, ab) = root_scores(&board, Side::White, 2, Evaluator::advanced());
        assert_eq!(mm, ab, "\n{board}");
    }
}

#[test]
fn same_seed_same_move() {
    let rules = RulesConfig::default();
    let mut rng = fastrand::Rng::with_seed(3);
    let board = random_position(&mut rng, 6, &rules);
    for tier in 1..=4u8 {
        let a = choose_move(&board, Side::Black, tier, 1234, &rules).unwrap();
        let b = choose_move(&board, Side::Black, tier, 1234, &rules).unwrap();
        assert_eq!(a, b, "tier {tier}");
        assert!(is_legal(&board, a.unwrap()));
    }
}

#[test]
fn engine_moves_are_always_legal() {
    let rules = RulesConfig::default();
    let mut rng = fastrand::Rng::with_seed(99);
    let mut engine = AIEngine::new(Difficulty::Intermediate, rules, 5);
    for _ in 0..5 {
        let board = random_position(&mut rng, 5, &rules);
        if let Some(mv) = engine.choose_move(&board, Side::White).unwrap() {
            assert_eq!(board.get(mv.from), Some(Side::White));
            assert!(is_legal(&board, mv));
        }
    }
}

#[test]
fn unknown_tier_is_an_error() {
    let board = Board::initial();
    let rules = RulesConfig::default();
    assert!(choose_move(&board, Side::Black, 0, 0, &rules).is_err());
    assert!(choose_move(&board, Side::Black, 5, 0, &rules).is_err());
}
