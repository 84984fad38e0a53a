//! Rule options and thresholds
//!
//! Every option is a named, always-present field. The defaults are the
//! standard game: corner capture on, diagonal capture off, a side with two
//! or fewer pieces loses, a lead of three pieces wins, third repetition or
//! sixty quiet half-moves is a draw.

/// Capture toggles, victory thresholds and draw thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    /// Also scan the four diagonals from the destination when capturing.
    pub diagonal_capture: bool,
    /// Capture a lone opposing corner piece flanked on both orthogonal sides.
    pub corner_capture: bool,
    /// A side holding this many pieces or fewer has lost.
    pub min_pieces: u32,
    /// A piece-count lead of at least this much wins.
    pub winning_margin: u32,
    /// Occurrences of the same position (after a move) that end in a draw.
    pub repetition_limit: u32,
    /// Consecutive half-moves without a capture that end in a draw.
    pub quiet_move_limit: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            diagonal_capture: false,
            corner_capture: true,
            min_pieces: 2,
            winning_margin: 3,
            repetition_limit: 3,
            quiet_move_limit: 60,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn with_diagonal_capture(mut self, enabled: bool) -> Self {
        self.diagonal_capture = enabled;
        self
    }

    #[must_use]
    pub fn with_corner_capture(mut self, enabled: bool) -> Self {
        self.corner_capture = enabled;
        self
    }
}
