//! Hand-tuned evaluation weights
//!
//! Each term of each evaluator has a named weight so it can be tuned and
//! tested on its own. Defaults are the tuned constants.

/// Weights for the baseline evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineWeights {
    /// Per piece of material difference
    pub material: f64,
    /// Per piece inside the central 3x3 block
    pub centrality: f64,
    /// Per opposing piece with one of our pieces orthogonally adjacent
    pub threat: f64,
}

impl Default for BaselineWeights {
    fn default() -> Self {
        Self {
            material: 1.0,
            centrality: 0.3,
            threat: 0.5,
        }
    }
}

/// Weights for the advanced evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvancedWeights {
    pub material: f64,
    pub centrality: f64,
    /// Per legal move of difference
    pub mobility: f64,
    pub threat: f64,
    /// Per orthogonally adjacent friendly pair
    pub grouping: f64,
    /// Per occupied corner
    pub corner: f64,
}

impl Default for AdvancedWeights {
    fn default() -> Self {
        Self {
            material: 1.0,
            centrality: 0.5,
            mobility: 0.1,
            threat: 1.0,
            grouping: 0.2,
            corner: 0.3,
        }
    }
}
