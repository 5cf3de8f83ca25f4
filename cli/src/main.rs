use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mineclear_core::{Difficulty, Game};

use crate::session::Session;

mod config;
mod render;
mod session;

/// Terminal minesweeper: reveal cells by typing `row col`, avoid the mines.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Mine density preset: easy, medium or hard
    #[arg(short, long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// TOML file overriding the board size and per-difficulty densities
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible first board
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let settings = config::load_settings(args.config.as_deref())?;
    let game = match args.seed {
        Some(seed) => Game::with_seed(
            &settings.board_config(args.difficulty)?,
            args.difficulty,
            seed,
        ),
        None => Game::with_settings(&settings, args.difficulty)?,
    };
    log::info!(
        "Starting {} game, seed {:?}",
        game.difficulty(),
        game.seed()
    );

    let mut session = Session::new(settings, game);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    let board = session.game().board();
    log::info!(
        "Session ended with {}/{} cells discovered, running: {}",
        board.discovered_count(),
        board.total_cells(),
        session.game().is_running()
    );
    Ok(())
}
