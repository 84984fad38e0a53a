//! Game record: the board plus everything needed to end a game
//!
//! After every move the record checks, in order:
//! 1. Piece-count victory (minimum pieces, winning margin)
//! 2. Quiet-move draw: `quiet_move_limit` half-moves in a row without a
//!    capture, whatever the material balance
//! 3. Repetition draw: the position just produced (board and side to move)
//!    has now occurred `repetition_limit` times
//! 4. Forfeit: the side now to move has no legal move and loses
//!
//! The starting position counts as one occurrence.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::board::{Board, Move, Pos, Side};
use crate::config::RulesConfig;
use crate::error::{HasamiError, Result};
use crate::rules::{apply_move, check_victory, has_legal_move, legal_moves, Applied, WinReason};
use crate::search::{position_key, ZOBRIST};

/// Why a game was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// Same position occurred the configured number of times
    Repetition,
    /// Too many half-moves without a capture
    QuietMoves,
    /// Stopped by an external ply cap
    MoveLimit,
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Side, reason: WinReason },
    Draw(DrawReason),
}

impl Outcome {
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw(_) => None,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win { winner, reason } => write!(f, "{winner} wins ({reason:?})"),
            Outcome::Draw(reason) => write!(f, "draw ({reason:?})"),
        }
    }
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct GameRecord {
    board: Board,
    to_move: Side,
    rules: RulesConfig,
    key: u64,
    occurrences: FxHashMap<u64, u32>,
    quiet_plies: u32,
    history: Vec<Move>,
    outcome: Option<Outcome>,
}

impl GameRecord {
    /// Standard opening position, black to move.
    #[must_use]
    pub fn new(rules: RulesConfig) -> Self {
        Self::from_position(Board::initial(), Side::Black, rules)
    }

    /// Start from an arbitrary position. A position that is already won, or
    /// where `to_move` cannot move, starts with its outcome set.
    #[must_use]
    pub fn from_position(board: Board, to_move: Side, rules: RulesConfig) -> Self {
        let key = position_key(&board, to_move);
        let mut occurrences = FxHashMap::default();
        occurrences.insert(key, 1);

        let outcome = if let Some((winner, reason)) = check_victory(&board, &rules) {
            Some(Outcome::Win { winner, reason })
        } else if !has_legal_move(&board, to_move) {
            Some(Outcome::Win {
                winner: to_move.opponent(),
                reason: WinReason::NoLegalMoves,
            })
        } else {
            None
        };

        Self {
            board,
            to_move,
            rules,
            key,
            occurrences,
            quiet_plies: 0,
            history: Vec::new(),
            outcome,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Key of the current position, side to move included.
    #[must_use]
    pub fn position_key(&self) -> u64 {
        self.key
    }

    /// Times the current position has occurred.
    #[must_use]
    pub fn occurrences(&self) -> u32 {
        self.occurrences.get(&self.key).copied().unwrap_or(0)
    }

    /// Consecutive half-moves without a capture.
    #[must_use]
    pub fn quiet_plies(&self) -> u32 {
        self.quiet_plies
    }

    #[must_use]
    pub fn plies(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal moves from `origin` for the side to move. Empty when the cell
    /// holds no piece of that side or the game is over.
    #[must_use]
    pub fn legal_moves(&self, origin: Pos) -> Vec<Move> {
        if self.is_over() || self.board.get(origin) != Some(self.to_move) {
            return Vec::new();
        }
        legal_moves(&self.board, origin)
    }

    /// Play `mv` for the side to move and update the outcome.
    ///
    /// # Errors
    ///
    /// - [`HasamiError::GameOver`] if the game already has an outcome
    /// - [`HasamiError::IllegalMove`] if either cell is off the board, the
    ///   origin is not a piece of the side to move or the slide is not legal
    pub fn play(&mut self, mv: Move) -> Result<Applied> {
        if self.is_over() {
            return Err(HasamiError::GameOver);
        }
        if !mv.from.is_on_board() || !mv.to.is_on_board() {
            return Err(HasamiError::IllegalMove {
                mv,
                reason: "cell off the board",
            });
        }
        if self.board.get(mv.from) != Some(self.to_move) {
            return Err(HasamiError::IllegalMove {
                mv,
                reason: "origin is not a piece of the side to move",
            });
        }

        let applied = apply_move(&self.board, mv, &self.rules)?;
        let mover = self.to_move;
        let opponent = mover.opponent();

        let mut key = ZOBRIST.update_slide(self.key, mv.from, mv.to, mover);
        for &pos in &applied.captured {
            key = ZOBRIST.update_capture(key, pos, opponent);
        }
        debug_assert_eq!(key, position_key(&applied.board, opponent));

        self.board = applied.board;
        self.to_move = opponent;
        self.key = key;
        self.history.push(mv);
        self.quiet_plies = if applied.is_capture() { 0 } else { self.quiet_plies + 1 };
        let seen = self.occurrences.entry(key).or_insert(0);
        *seen += 1;
        let seen = *seen;

        if applied.is_capture() {
            debug!(%mv, captured = applied.captured.len(), "capture");
        }

        self.outcome = if let Some((winner, reason)) = check_victory(&self.board, &self.rules) {
            Some(Outcome::Win { winner, reason })
        } else if self.quiet_plies >= self.rules.quiet_move_limit {
            Some(Outcome::Draw(DrawReason::QuietMoves))
        } else if seen >= self.rules.repetition_limit {
            Some(Outcome::Draw(DrawReason::Repetition))
        } else if !has_legal_move(&self.board, opponent) {
            Some(Outcome::Win {
                winner: mover,
                reason: WinReason::NoLegalMoves,
            })
        } else {
            None
        };

        if let Some(outcome) = self.outcome {
            debug!(%outcome, plies = self.plies(), "game over");
        }

        Ok(applied)
    }

    /// End the game as a forfeit by the side to move. Used when a player
    /// reports it has no move to make.
    pub fn forfeit(&mut self) -> Result<Outcome> {
        if self.is_over() {
            return Err(HasamiError::GameOver);
        }
        let outcome = Outcome::Win {
            winner: self.to_move.opponent(),
            reason: WinReason::NoLegalMoves,
        };
        self.outcome = Some(outcome);
        Ok(outcome)
    }
}
