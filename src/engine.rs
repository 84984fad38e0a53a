//! AI engine: difficulty tiers on top of the search
//!
//! Move selection follows this order:
//!
//! 1. **Emergency** (tiers with an emergency threshold): when the static
//!    evaluation is far below zero, play the best one-ply greedy move
//! 2. **Opening**: on a nearly empty board, play a random legal move that
//!    lands in the central zone
//! 3. **Search**: minimax or alpha-beta to the tier's depth, ties broken by
//!    the engine's seeded random generator
//!
//! # Example
//!
//! ```
//! use hasami::board::{Board, Side};
//! use hasami::config::RulesConfig;
//! use hasami::engine::{AIEngine, Difficulty};
//!
//! let mut engine = AIEngine::new(Difficulty::Beginner, RulesConfig::default(), 7);
//! let board = Board::initial();
//!
//! let result = engine.choose_move_with_stats(&board, Side::Black).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Move, Side};
use crate::config::RulesConfig;
use crate::error::{HasamiError, Result};
use crate::eval::Evaluator;
use crate::rules::all_legal_moves;
use crate::search::{
    shared_cache, Algorithm, RootResult, SearchStats, Searcher, SharedCache, DEFAULT_CAPACITY,
};

/// More empty cells than this switches on the opening heuristic.
pub const OPENING_EMPTY_CELLS: u32 = 70;

/// Named skill tiers, numbered 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    #[must_use]
    pub fn tier(self) -> u8 {
        self as u8
    }

    /// Search settings for this tier.
    #[must_use]
    pub fn policy(self) -> TierPolicy {
        match self {
            Difficulty::Beginner => TierPolicy {
                algorithm: Algorithm::Minimax,
                max_depth: 2,
                evaluator: Evaluator::baseline(),
                adaptive_depth: None,
                emergency_threshold: None,
                opening_book: true,
            },
            Difficulty::Intermediate => TierPolicy {
                algorithm: Algorithm::AlphaBeta,
                max_depth: 3,
                evaluator: Evaluator::baseline(),
                adaptive_depth: None,
                emergency_threshold: None,
                opening_book: true,
            },
            Difficulty::Advanced => TierPolicy {
                algorithm: Algorithm::AlphaBeta,
                max_depth: 3,
                evaluator: Evaluator::advanced(),
                adaptive_depth: None,
                emergency_threshold: None,
                opening_book: true,
            },
            Difficulty::Expert => TierPolicy {
                algorithm: Algorithm::AlphaBeta,
                max_depth: 3,
                evaluator: Evaluator::advanced(),
                adaptive_depth: Some(AdaptiveDepth::default()),
                emergency_threshold: Some(5.0),
                opening_book: true,
            },
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = HasamiError;

    fn try_from(tier: u8) -> Result<Self> {
        match tier {
            1 => Ok(Difficulty::Beginner),
            2 => Ok(Difficulty::Intermediate),
            3 => Ok(Difficulty::Advanced),
            4 => Ok(Difficulty::Expert),
            other => Err(HasamiError::UnknownTier(other)),
        }
    }
}

/// Depth reduction away from the piece-count thresholds.
///
/// The full depth is used once either side is within `endgame_window`
/// pieces of the minimum, or the count difference is within one piece of the
/// winning margin. Otherwise the search runs at `early_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveDepth {
    pub early_depth: u8,
    pub endgame_window: u32,
}

impl Default for AdaptiveDepth {
    fn default() -> Self {
        Self {
            early_depth: 2,
            endgame_window: 2,
        }
    }
}

impl AdaptiveDepth {
    /// Whether `board` is close enough to a victory threshold for full depth.
    #[must_use]
    pub fn near_threshold(&self, board: &Board, rules: &RulesConfig) -> bool {
        let black = board.count(Side::Black);
        let white = board.count(Side::White);
        black.min(white) <= rules.min_pieces.saturating_add(self.endgame_window)
            || black.abs_diff(white).saturating_add(1) >= rules.winning_margin
    }
}

/// Algorithm, depth and evaluator of a tier, plus its overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierPolicy {
    pub algorithm: Algorithm,
    pub max_depth: u8,
    pub evaluator: Evaluator,
    pub adaptive_depth: Option<AdaptiveDepth>,
    /// Switch to a greedy move when the static evaluation is below the
    /// negation of this value.
    pub emergency_threshold: Option<f64>,
    pub opening_book: bool,
}

impl TierPolicy {
    /// Depth to search `board` at.
    #[must_use]
    pub fn depth_for(&self, board: &Board, rules: &RulesConfig) -> u8 {
        match self.adaptive_depth {
            Some(adaptive) if !adaptive.near_threshold(board, rules) => {
                adaptive.early_depth.min(self.max_depth)
            }
            _ => self.max_depth,
        }
    }
}

/// Which step of move selection produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Random central move on a nearly empty board
    Opening,
    /// One-ply greedy move in a lost-looking position
    Emergency,
    Minimax,
    AlphaBeta,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen move; `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of the chosen move from the mover's point of view
    pub score: f64,
    pub search_type: SearchType,
    /// Depth searched (0 for the opening heuristic)
    pub depth: u8,
    /// Number of moves that tied for the best score
    pub candidates: usize,
    pub stats: SearchStats,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn opening(mv: Move, candidates: usize, time_ms: u64) -> Self {
        Self {
            best_move: Some(mv),
            score: 0.0,
            search_type: SearchType::Opening,
            depth: 0,
            candidates,
            stats: SearchStats::default(),
            time_ms,
        }
    }

    #[inline]
    fn from_search(
        best_move: Option<Move>,
        result: &RootResult,
        search_type: SearchType,
        time_ms: u64,
    ) -> Self {
        Self {
            best_move,
            score: result.score,
            search_type,
            depth: result.depth,
            candidates: result.best_moves.len(),
            stats: result.stats,
            time_ms,
        }
    }
}

/// Computer player for one tier.
///
/// The transposition cache lives behind a [`SharedCache`] handle. Engines
/// built with [`AIEngine::with_shared_cache`] pool their entries; entries
/// are keyed by perspective and evaluator, so engines sharing a cache must
/// agree on the rules and evaluator weights.
pub struct AIEngine {
    policy: TierPolicy,
    rules: RulesConfig,
    rng: fastrand::Rng,
    cache: SharedCache,
}

impl AIEngine {
    /// Engine for `difficulty` with its own cache and a seeded generator.
    #[must_use]
    pub fn new(difficulty: Difficulty, rules: RulesConfig, seed: u64) -> Self {
        Self::with_policy(difficulty.policy(), rules, seed)
    }

    /// Engine with a custom policy.
    #[must_use]
    pub fn with_policy(policy: TierPolicy, rules: RulesConfig, seed: u64) -> Self {
        Self {
            policy,
            rules,
            rng: fastrand::Rng::with_seed(seed),
            cache: shared_cache(DEFAULT_CAPACITY),
        }
    }

    /// Replace this engine's cache with a shared one.
    #[must_use]
    pub fn with_shared_cache(mut self, cache: SharedCache) -> Self {
        self.cache = cache;
        self
    }

    /// Handle to this engine's cache, for sharing with another engine.
    #[must_use]
    pub fn cache(&self) -> SharedCache {
        Arc::clone(&self.cache)
    }

    #[must_use]
    pub fn policy(&self) -> &TierPolicy {
        &self.policy
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Empty the cache.
    pub fn clear_cache(&self) -> Result<()> {
        self.cache
            .lock()
            .map_err(|_| HasamiError::CachePoisoned)?
            .clear();
        Ok(())
    }

    /// Best move for `side`, or `None` when it has no legal move.
    pub fn choose_move(&mut self, board: &Board, side: Side) -> Result<Option<Move>> {
        Ok(self.choose_move_with_stats(board, side)?.best_move)
    }

    /// Best move for `side` with search statistics.
    ///
    /// # Errors
    ///
    /// [`HasamiError::CachePoisoned`] if another holder of the shared cache
    /// panicked while holding it.
    pub fn choose_move_with_stats(&mut self, board: &Board, side: Side) -> Result<MoveResult> {
        let start = Instant::now();
        let elapsed = |start: Instant| start.elapsed().as_millis() as u64;

        // 1. Emergency override
        if let Some(threshold) = self.policy.emergency_threshold {
            let standing = self.policy.evaluator.evaluate(board, side);
            if standing < -threshold {
                debug!(%side, standing, "emergency greedy move");
                let mut cache = self.cache.lock().map_err(|_| HasamiError::CachePoisoned)?;
                let mut searcher = Searcher::new(
                    &mut cache,
                    self.rules,
                    self.policy.evaluator,
                    self.policy.algorithm,
                );
                let result = searcher.search_greedy(board, side);
                drop(cache);
                let best = self.pick(&result.best_moves);
                let result =
                    MoveResult::from_search(best, &result, SearchType::Emergency, elapsed(start));
                return Ok(self.finish(side, result));
            }
        }

        // 2. Opening heuristic
        if self.policy.opening_book && board.empty_count() > OPENING_EMPTY_CELLS {
            let central: Vec<Move> = all_legal_moves(board, side)
                .into_iter()
                .filter(|mv| mv.to.is_central())
                .collect();
            if let Some(mv) = self.pick(&central) {
                debug!(%side, %mv, "opening move");
                let result = MoveResult::opening(mv, central.len(), elapsed(start));
                return Ok(self.finish(side, result));
            }
        }

        // 3. Search
        let depth = self.policy.depth_for(board, &self.rules);
        let mut cache = self.cache.lock().map_err(|_| HasamiError::CachePoisoned)?;
        let mut searcher = Searcher::new(
            &mut cache,
            self.rules,
            self.policy.evaluator,
            self.policy.algorithm,
        );
        let result = searcher.search_root(board, side, depth);
        drop(cache);

        let search_type = match self.policy.algorithm {
            Algorithm::Minimax => SearchType::Minimax,
            Algorithm::AlphaBeta => SearchType::AlphaBeta,
        };
        let best = self.pick(&result.best_moves);
        let result = MoveResult::from_search(best, &result, search_type, elapsed(start));
        Ok(self.finish(side, result))
    }

    /// Uniform choice among `moves`.
    fn pick(&mut self, moves: &[Move]) -> Option<Move> {
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.usize(..moves.len())])
        }
    }

    fn finish(&self, side: Side, result: MoveResult) -> MoveResult {
        debug!(
            %side,
            best_move = ?result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            depth = result.depth,
            candidates = result.candidates,
            nodes = result.stats.nodes,
            time_ms = result.time_ms,
            "move chosen"
        );
        result
    }
}

/// One-shot move selection: build an engine for `tier` seeded with
/// `rng_seed` and ask it for a move.
///
/// The same arguments always produce the same move.
///
/// # Errors
///
/// [`HasamiError::UnknownTier`] when `tier` is outside 1..=4.
///
/// # Example
///
/// ```
/// use hasami::board::{Board, Side};
/// use hasami::config::RulesConfig;
/// use hasami::engine::choose_move;
///
/// let board = Board::initial();
/// let mv = choose_move(&board, Side::Black, 2, 42, &RulesConfig::default()).unwrap();
/// assert!(mv.is_some());
/// assert!(choose_move(&board, Side::Black, 9, 42, &RulesConfig::default()).is_err());
/// ```
pub fn choose_move(
    board: &Board,
    side: Side,
    tier: u8,
    rng_seed: u64,
    rules: &RulesConfig,
) -> Result<Option<Move>> {
    let difficulty = Difficulty::try_from(tier)?;
    AIEngine::new(difficulty, *rules, rng_seed).choose_move(board, side)
}
