//! Evaluation module for Hasami Shogi positions
//!
//! Two tiers of static evaluation, both scoring a board from one side's
//! point of view (positive favours that side):
//! - Baseline: material, centre control, adjacency threats
//! - Advanced: adds mobility, grouping and corners, with heavier threat and
//!   centre weights

pub mod heuristic;
pub mod weights;

pub use heuristic::{
    advanced, baseline, core_count, evaluate_balance, grouping_pairs, threatened_pieces,
};
pub use weights::{AdvancedWeights, BaselineWeights};

use crate::board::{Board, Side};

/// Which evaluator tier a score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalKind {
    Baseline,
    Advanced,
}

/// An evaluator tier with its weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluator {
    Baseline(BaselineWeights),
    Advanced(AdvancedWeights),
}

impl Evaluator {
    /// Baseline tier with default weights.
    #[must_use]
    pub fn baseline() -> Self {
        Evaluator::Baseline(BaselineWeights::default())
    }

    /// Advanced tier with default weights.
    #[must_use]
    pub fn advanced() -> Self {
        Evaluator::Advanced(AdvancedWeights::default())
    }

    #[must_use]
    pub fn kind(&self) -> EvalKind {
        match self {
            Evaluator::Baseline(_) => EvalKind::Baseline,
            Evaluator::Advanced(_) => EvalKind::Advanced,
        }
    }

    /// Score `board` for `side`.
    #[must_use]
    pub fn evaluate(&self, board: &Board, side: Side) -> f64 {
        match self {
            Evaluator::Baseline(w) => baseline(board, side, w),
            Evaluator::Advanced(w) => advanced(board, side, w),
        }
    }
}

impl From<EvalKind> for Evaluator {
    fn from(kind: EvalKind) -> Self {
        match kind {
            EvalKind::Baseline => Evaluator::baseline(),
            EvalKind::Advanced => Evaluator::advanced(),
        }
    }
}

