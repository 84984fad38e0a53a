//! Hasami Shogi engine command line
//!
//! ## Usage
//!
//! - `hasami` - Show a demo
//! - `hasami selfplay --black 2 --white 4 --games 10` - Engine matches
//! - `hasami bestmove position.txt --side white --tier 3` - Analyse a diagram
//!
//! Logging goes through `tracing` at `info` by default; set
//! `RUST_LOG=hasami=debug` for search details.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use hasami::board::{Board, Side};
use hasami::config::RulesConfig;
use hasami::engine::{AIEngine, Difficulty};
use hasami::eval::evaluate_balance;
use hasami::game::GameRecord;
use hasami::selfplay::{play_game, MatchTally, DEFAULT_MAX_PLIES};

/// Hasami Shogi rules and search engine
#[derive(Parser)]
#[command(name = "hasami")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    rules: RulesArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Play engine-versus-engine games and print the tally
    Selfplay {
        /// Difficulty tier (1-4) for black
        #[arg(long, default_value_t = 2)]
        black: u8,
        /// Difficulty tier (1-4) for white
        #[arg(long, default_value_t = 2)]
        white: u8,
        #[arg(long, default_value_t = 1)]
        games: u32,
        /// Seed of the first game; later games use consecutive seeds
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
        max_plies: u32,
        /// Let both engines use one transposition cache
        #[arg(long)]
        shared_cache: bool,
    },
    /// Pick a move for a position read from a board diagram file
    Bestmove {
        /// Nine lines of `.`, `b` and `w`
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = SideArg::Black)]
        side: SideArg,
        #[arg(long, default_value_t = 3)]
        tier: u8,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Play a short game between two tiers and print each position
    Demo,
}

#[derive(Args)]
struct RulesArgs {
    /// Also capture along diagonals
    #[arg(long, global = true)]
    diagonal: bool,
    /// Disable corner captures
    #[arg(long, global = true)]
    no_corner: bool,
    /// A side with this many pieces or fewer loses
    #[arg(long, global = true, default_value_t = 2)]
    min_pieces: u32,
    /// Piece-count lead that wins
    #[arg(long, global = true, default_value_t = 3)]
    margin: u32,
    /// Occurrences of a position that draw
    #[arg(long, global = true, default_value_t = 3)]
    repetitions: u32,
    /// Half-moves without a capture that draw
    #[arg(long, global = true, default_value_t = 60)]
    quiet_limit: u32,
}

impl RulesArgs {
    fn to_rules(&self) -> RulesConfig {
        RulesConfig {
            min_pieces: self.min_pieces,
            winning_margin: self.margin,
            repetition_limit: self.repetitions,
            quiet_move_limit: self.quiet_limit,
            ..RulesConfig::default()
        }
        .with_diagonal_capture(self.diagonal)
        .with_corner_capture(!self.no_corner)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Black,
    White,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Black => Side::Black,
            SideArg::White => Side::White,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let rules = cli.rules.to_rules();

    match cli.command {
        Some(Commands::Selfplay {
            black,
            white,
            games,
            seed,
            max_plies,
            shared_cache,
        }) => run_selfplay(black, white, games, seed, max_plies, shared_cache, &rules),
        Some(Commands::Bestmove {
            file,
            side,
            tier,
            seed,
        }) => run_bestmove(&file, side.into(), tier, seed, &rules),
        Some(Commands::Demo) | None => run_demo(&rules),
    }
}

fn run_selfplay(
    black: u8,
    white: u8,
    games: u32,
    seed: u64,
    max_plies: u32,
    shared_cache: bool,
    rules: &RulesConfig,
) -> Result<()> {
    let black_tier = Difficulty::try_from(black)?;
    let white_tier = Difficulty::try_from(white)?;
    let mut tally = MatchTally::default();

    for game in 0..games {
        let game_seed = seed.wrapping_add(u64::from(game));
        let mut black_engine = AIEngine::new(black_tier, *rules, game_seed);
        let mut white_engine = AIEngine::new(white_tier, *rules, game_seed.wrapping_add(1));
        if shared_cache {
            white_engine = white_engine.with_shared_cache(black_engine.cache());
        }
        let summary = play_game(&mut black_engine, &mut white_engine, rules, max_plies)?;
        println!("game {:>3}: {} after {} plies", game + 1, summary.outcome, summary.plies);
        tally.record(&summary);
    }

    println!();
    println!("black (tier {black}) wins: {}", tally.black_wins);
    println!("white (tier {white}) wins: {}", tally.white_wins);
    println!("draws: {}", tally.draws);
    println!("average length: {:.1} plies", tally.average_plies());
    Ok(())
}

fn run_bestmove(file: &Path, side: Side, tier: u8, seed: u64, rules: &RulesConfig) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("reading board diagram {}", file.display()))?;
    let board: Board = text
        .parse()
        .with_context(|| format!("parsing board diagram {}", file.display()))?;

    let difficulty = Difficulty::try_from(tier)?;
    let mut engine = AIEngine::new(difficulty, *rules, seed);
    let result = engine.choose_move_with_stats(&board, side)?;

    print!("{board}");
    println!("balance (black's view): {:+.2}", evaluate_balance(&board));
    match result.best_move {
        Some(mv) => {
            println!("{side} plays {mv}");
            println!(
                "score {:.2}, {:?} depth {}, {} tied, {} nodes, {} ms",
                result.score,
                result.search_type,
                result.depth,
                result.candidates,
                result.stats.nodes,
                result.time_ms
            );
        }
        None => println!("{side} has no legal move and forfeits"),
    }
    Ok(())
}

fn run_demo(rules: &RulesConfig) -> Result<()> {
    println!("Hasami Shogi: tier 1 (black) against tier 3 (white)\n");

    let mut game = GameRecord::new(*rules);
    let mut black = AIEngine::new(Difficulty::Beginner, *rules, 1);
    let mut white = AIEngine::new(Difficulty::Advanced, *rules, 2);
    print!("{}", game.board());

    while !game.is_over() && game.plies() < 40 {
        let side = game.to_move();
        let engine = match side {
            Side::Black => &mut black,
            Side::White => &mut white,
        };
        let Some(mv) = engine.choose_move(game.board(), side)? else {
            bail!("{side} has no legal move");
        };
        let applied = game.play(mv)?;
        println!(
            "\n{:>2}. {side} {mv}{}",
            game.plies(),
            if applied.is_capture() {
                format!(" captures {}", applied.captured.len())
            } else {
                String::new()
            }
        );
        print!("{}", game.board());
    }

    match game.outcome() {
        Some(outcome) => println!("\n{outcome}"),
        None => println!("\nstopped after {} plies", game.plies()),
    }
    Ok(())
}
