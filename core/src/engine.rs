use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of a single game; the two finished states are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game: a fixed mine layout plus the player's reveal progress.
///
/// Cells move from [`Cell::Hidden`] to [`Cell::Open`] (or, on defeat, to
/// [`Cell::Mine`]) and never back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    mine_layout: MineLayout,
    board: Array2<Cell>,
    revealed_count: Saturating<CellCount>,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl BoardEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let side = mine_layout.side() as usize;
        Self {
            mine_layout,
            board: Array2::default((side, side)),
            revealed_count: Saturating(0),
            state: GameState::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn side(&self) -> Coord {
        self.mine_layout.side()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, pos: Coord2) -> Cell {
        self.board[nd(pos)]
    }

    pub fn has_mine_at(&self, pos: Coord2) -> bool {
        self.mine_layout.contains_mine(pos)
    }

    /// Victory condition: every safe cell is open. Mine cells never count.
    pub fn is_complete(&self) -> bool {
        self.revealed_count == Saturating(self.mine_layout.safe_cell_count())
    }

    /// Player-initiated reveal, the only operation that can end the game.
    ///
    /// Bounds are re-checked here even though frontends validate first, so
    /// the engine stays safe for callers that skip that step.
    pub fn reveal(&mut self, pos: Coord2) -> Result<RevealOutcome> {
        let pos = self.mine_layout.validate_coords(pos)?;
        self.check_not_finished()?;

        if !self.board[nd(pos)].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.mine_layout[pos] {
            self.triggered_mine = Some(pos);
            self.disclose_mines();
            self.state = GameState::Lost;
            log::debug!("mine hit at {:?}, game lost", pos);
            return Ok(RevealOutcome::HitMine);
        }

        self.open_cell(pos);
        if self.mine_layout.adjacent_mine_count(pos) == 0 {
            self.expand_clearing(pos);
        }

        if self.is_complete() {
            self.state = GameState::Won;
            log::debug!("all safe cells open, game won");
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Opens one safe cell. Callers have already checked that it is hidden
    /// and mine-free.
    fn open_cell(&mut self, pos: Coord2) {
        self.board[nd(pos)] = Cell::Open(self.mine_layout.adjacent_mine_count(pos));
        self.revealed_count += 1;
    }

    /// Worklist expansion of a zero-adjacency clearing and its numbered
    /// border.
    ///
    /// A zero cell's neighbors cannot be mines, but the mine guard is kept
    /// explicit instead of re-deriving that invariant: the cascade only
    /// ever opens safe cells and can never end the game.
    fn expand_clearing(&mut self, origin: Coord2) {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<Coord2> = self.mine_layout.iter_neighbors(origin).collect();

        while let Some(pos) = to_visit.pop_front() {
            if !visited.insert(pos) {
                continue;
            }
            if !self.board[nd(pos)].is_hidden() || self.mine_layout[pos] {
                continue;
            }

            self.open_cell(pos);
            if self.mine_layout.adjacent_mine_count(pos) == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(pos)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    /// Discloses the full minefield on defeat. Safe cells are untouched and
    /// a second call changes nothing.
    fn disclose_mines(&mut self) {
        for pos in self.mine_layout.iter_mines() {
            self.board[nd(pos)] = Cell::Mine;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
