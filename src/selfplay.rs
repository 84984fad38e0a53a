//! Engine-versus-engine games and match tallies

use tracing::{debug, info};

use crate::board::Side;
use crate::config::RulesConfig;
use crate::engine::AIEngine;
use crate::error::Result;
use crate::game::{DrawReason, GameRecord, Outcome};

/// Default ply cap for a self-play game.
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// How one game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub plies: u32,
}

/// Play one game from the standard opening, `black` moving first.
///
/// A game still running after `max_plies` half-moves is scored as a
/// [`DrawReason::MoveLimit`] draw.
pub fn play_game(
    black: &mut AIEngine,
    white: &mut AIEngine,
    rules: &RulesConfig,
    max_plies: u32,
) -> Result<GameSummary> {
    let mut game = GameRecord::new(*rules);

    while !game.is_over() && game.plies() < max_plies {
        let side = game.to_move();
        let engine = match side {
            Side::Black => &mut *black,
            Side::White => &mut *white,
        };
        match engine.choose_move(game.board(), side)? {
            Some(mv) => {
                debug!(ply = game.plies() + 1, %side, %mv, "self-play move");
                game.play(mv)?;
            }
            None => {
                game.forfeit()?;
            }
        }
    }

    let summary = GameSummary {
        outcome: game
            .outcome()
            .unwrap_or(Outcome::Draw(DrawReason::MoveLimit)),
        plies: game.plies(),
    };
    info!(outcome = %summary.outcome, plies = summary.plies, "self-play game finished");
    Ok(summary)
}

/// Running results over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchTally {
    pub games: u32,
    pub black_wins: u32,
    pub white_wins: u32,
    pub draws: u32,
    pub total_plies: u64,
}

impl MatchTally {
    pub fn record(&mut self, summary: &GameSummary) {
        self.games += 1;
        self.total_plies += u64::from(summary.plies);
        match summary.outcome.winner() {
            Some(Side::Black) => self.black_wins += 1,
            Some(Side::White) => self.white_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Mean game length in plies.
    #[must_use]
    pub fn average_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        }
    }

    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black_wins,
            Side::White => self.white_wins,
        }
    }
}
