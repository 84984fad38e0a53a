//! Minimax and alpha-beta search with a transposition cache
//!
//! Both algorithms run through one recursive function. A node is a MAX node
//! when the searching side is to move and a MIN node otherwise. Plain
//! minimax visits every child; alpha-beta orders children and returns as
//! soon as the window closes (fail-soft: the returned value may lie outside
//! `(alpha, beta)`).
//!
//! Every node, in both modes, goes through the same steps before expanding:
//! 1. Piece-count victory check, returning +inf/-inf for a win/loss
//! 2. Leaves (no depth left) return the static evaluation
//! 3. Cache probe on (position key, remaining depth)
//! 4. Forfeit check: a side with no legal move loses
//!
//! # Example
//!
//! ```
//! use hasami::board::{Board, Side};
//! use hasami::config::RulesConfig;
//! use hasami::eval::Evaluator;
//! use hasami::search::{Algorithm, Searcher, TranspositionCache};
//!
//! let mut cache = TranspositionCache::default();
//! let rules = RulesConfig::default();
//! let evaluator = Evaluator::baseline();
//! let mut searcher = Searcher::new(&mut cache, rules, evaluator, Algorithm::AlphaBeta);
//!
//! let result = searcher.search_root(&Board::initial(), Side::Black, 2);
//! assert!(!result.best_moves.is_empty());
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Move, Side};
use crate::config::RulesConfig;
use crate::eval::Evaluator;
use crate::rules::{all_legal_moves, check_terminal, simulate};

use super::ordering::order_moves;
use super::tt::{CacheKey, EntryType, TranspositionCache};
use super::zobrist::position_key;

const INF: f64 = f64::INFINITY;
const NEG_INF: f64 = f64::NEG_INFINITY;

/// Tree search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Full-width minimax, no pruning
    Minimax,
    /// Fail-soft alpha-beta with move ordering
    AlphaBeta,
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered (root children and below)
    pub nodes: u64,
    /// Alpha or beta cutoffs
    pub cutoffs: u64,
    /// Cache probes
    pub cache_probes: u64,
    /// Probes that answered with a usable score
    pub cache_hits: u64,
}

impl SearchStats {
    /// Cache hit rate in percent
    pub fn cache_hit_rate(&self) -> f64 {
        if self.cache_probes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.cache_probes as f64 * 100.0
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// Every root move that reached the best score. Empty when the side to
    /// move has no legal move.
    pub best_moves: Vec<Move>,
    /// Best score from the searching side's point of view
    pub score: f64,
    /// Depth searched, root ply included
    pub depth: u8,
    pub stats: SearchStats,
}

/// One search over a borrowed cache.
pub struct Searcher<'a> {
    cache: &'a mut TranspositionCache,
    rules: RulesConfig,
    evaluator: Evaluator,
    algorithm: Algorithm,
    perspective: Side,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(
        cache: &'a mut TranspositionCache,
        rules: RulesConfig,
        evaluator: Evaluator,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            cache,
            rules,
            evaluator,
            algorithm,
            perspective: Side::Black,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score every root move of `side` to `depth` plies (root ply included,
    /// minimum 1) and collect all moves tying the best score.
    pub fn search_root(&mut self, board: &Board, side: Side, depth: u8) -> RootResult {
        let depth = depth.max(1);
        self.perspective = side;
        self.stats = SearchStats::default();

        let mut moves = all_legal_moves(board, side);
        order_moves(board, &mut moves, side, &self.rules);

        let mut best_score = NEG_INF;
        let mut best_moves = Vec::new();

        for mv in moves {
            let child = simulate(board, mv, side, &self.rules);
            // Full window for every root move so tied scores are exact
            let score = self.value(&child, side.opponent(), depth - 1, NEG_INF, INF);
            trace!(%mv, score, "root move");

            if score > best_score || best_moves.is_empty() {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        debug!(
            algorithm = ?self.algorithm,
            depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            cache_hit_rate = self.stats.cache_hit_rate(),
            score = best_score,
            tied = best_moves.len(),
            "root search complete"
        );

        RootResult {
            best_moves,
            score: best_score,
            depth,
            stats: self.stats,
        }
    }

    /// One-ply greedy search: the moves maximising the static evaluation of
    /// the position they produce.
    pub fn search_greedy(&mut self, board: &Board, side: Side) -> RootResult {
        self.perspective = side;
        self.stats = SearchStats::default();

        let mut best_score = NEG_INF;
        let mut best_moves = Vec::new();
        for mv in all_legal_moves(board, side) {
            self.stats.nodes += 1;
            let child = simulate(board, mv, side, &self.rules);
            let score = self.evaluator.evaluate(&child, side);
            if score > best_score || best_moves.is_empty() {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        RootResult {
            best_moves,
            score: best_score,
            depth: 1,
            stats: self.stats,
        }
    }

    /// Value of `board` with `to_move` to play and `depth` plies left, from
    /// the searching side's point of view.
    fn value(
        &mut self,
        board: &Board,
        to_move: Side,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.stats.nodes += 1;
        let prune = self.algorithm == Algorithm::AlphaBeta;

        if let Some(winner) = check_terminal(board, &self.rules) {
            return if winner == self.perspective { INF } else { NEG_INF };
        }

        // Leaves are scored statically and never cached, so they skip the cache
        // and the forfeit check alike
        if depth == 0 {
            return self.evaluator.evaluate(board, self.perspective);
        }

        let key = CacheKey::new(
            position_key(board, to_move),
            depth,
            self.perspective,
            self.evaluator.kind(),
        );
        let (probe_alpha, probe_beta) = if prune { (alpha, beta) } else { (NEG_INF, INF) };
        self.stats.cache_probes += 1;
        if let Some(score) = self.cache.probe(key, probe_alpha, probe_beta) {
            self.stats.cache_hits += 1;
            return score;
        }

        let mut moves = all_legal_moves(board, to_move);
        if moves.is_empty() {
            // Forfeit: the side to move loses
            return if to_move == self.perspective { NEG_INF } else { INF };
        }
        if prune {
            order_moves(board, &mut moves, to_move, &self.rules);
        }

        let maximizing = to_move == self.perspective;
        let (alpha0, beta0) = (alpha, beta);
        let mut best = if maximizing { NEG_INF } else { INF };

        for mv in moves {
            let child = simulate(board, mv, to_move, &self.rules);
            let score = self.value(&child, to_move.opponent(), depth - 1, alpha, beta);

            if maximizing {
                best = best.max(score);
                if prune {
                    if best >= beta {
                        self.stats.cutoffs += 1;
                        self.cache.store(key, best, EntryType::LowerBound);
                        return best;
                    }
                    alpha = alpha.max(best);
                }
            } else {
                best = best.min(score);
                if prune {
                    if best <= alpha {
                        self.stats.cutoffs += 1;
                        self.cache.store(key, best, EntryType::UpperBound);
                        return best;
                    }
                    beta = beta.min(best);
                }
            }
        }

        let entry_type = if !prune {
            EntryType::Exact
        } else if best <= alpha0 {
            EntryType::UpperBound
        } else if best >= beta0 {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.cache.store(key, best, entry_type);
        best
    }
}
