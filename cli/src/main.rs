use std::io::{self, BufRead};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use petardo_core::{BoardEngine, GameConfig, MinefieldGenerator, RandomMinefieldGenerator};

mod input;
mod play;
mod render;

/// Terminal Minesweeper: reveal every safe cell without stepping on a mine.
///
/// Moves are read from standard input as `column row` pairs. Board size and
/// mine count are also read from standard input (one integer per line, size
/// first) whenever the matching options are absent.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board side length
    #[arg(long)]
    size: Option<u8>,

    /// Number of mines
    #[arg(long)]
    mines: Option<u16>,

    /// Mine placement seed; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print mine locations on a closed board before the game starts
    #[arg(long)]
    show_mines: bool,

    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let size = match args.size {
        Some(size) => size,
        None => input::read_integer(&mut lines).context("reading board size")?,
    };
    let mines = match args.mines {
        Some(mines) => mines,
        None => input::read_integer(&mut lines).context("reading mine count")?,
    };
    let config = GameConfig::new(size, mines)
        .with_context(|| format!("a {size}x{size} board cannot hold {mines} mines"))?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let layout = RandomMinefieldGenerator::new(seed).generate(config);
    let mut engine = BoardEngine::new(layout);
    log::debug!(
        "board ready: {} mines on {}x{}, seed {}",
        engine.total_mines(),
        engine.side(),
        engine.side(),
        seed
    );

    if args.show_mines {
        print!("{}", render::mines_only(&engine));
    }

    play::run(&mut engine, &mut lines)
}

/// Clock-derived seed for casual play; `--seed` replaces it for reproducible
/// boards.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
