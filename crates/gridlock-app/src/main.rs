//! Gridlock command line interface.
//!
//! Loads a puzzle file and runs an interactive Sudoku session in the
//! terminal. The board itself lives in `gridlock-board`; this binary is the
//! thin glue around it: file loading, rendering, and error reporting.

use std::{io, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use gridlock_board::Board;

mod loader;
mod play;
mod render;

/// Interactive Sudoku board session.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the puzzle file: a JSON array of nine rows of nine integers
    /// in 0-9, where 0 denotes an empty cell.
    puzzle: PathBuf,
}

fn main() -> anyhow::Result<()> {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let givens = loader::load_puzzle(&args.puzzle)
        .with_context(|| format!("failed to load puzzle from {}", args.puzzle.display()))?;
    let mut board =
        Board::from_givens(givens).context("the puzzle file does not describe a legal board")?;
    log::info!("loaded puzzle with {} empty cells", board.empty_count());

    play::run(&mut board, io::stdin().lock(), io::stdout())
}
