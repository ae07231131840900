use std::io;

use petardo_core::{BoardEngine, RevealOutcome};

use crate::input::{self, Move};
use crate::render;

/// Drives one game to completion: render, read a move, reveal, repeat until
/// the player wins, loses, or input runs out.
///
/// Bounds are checked here, before the engine is called, so an off-board
/// move costs a re-prompt instead of a turn.
pub fn run<L>(engine: &mut BoardEngine, lines: &mut L) -> anyhow::Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("{}", render::board(engine));

        let Some(Move { col, row }) = input::read_move(lines)? else {
            log::info!("input closed, game abandoned");
            return Ok(());
        };

        let side = engine.side();
        if col >= side || row >= side {
            println!("column and row must be less than {side}");
            continue;
        }

        match engine.reveal((row, col))? {
            RevealOutcome::HitMine => {
                print!("{}", render::board(engine));
                let (row, col) = engine.triggered_mine().unwrap_or((row, col));
                println!("boom: mine at column {col}, row {row} - you lose");
                return Ok(());
            }
            RevealOutcome::Won => {
                print!("{}", render::board(engine));
                println!("all safe cells revealed - you win");
                return Ok(());
            }
            RevealOutcome::Revealed | RevealOutcome::NoChange => {}
        }
    }
}
