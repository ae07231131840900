#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
mod types;

/// Validated board parameters: a `size`×`size` grid holding `mines` mines.
///
/// Construction is the only place the `mines < size²` rule is checked;
/// everything downstream can rely on at least one safe cell existing.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Rejects empty boards and boards without at least one safe cell.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines >= area(size) {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self { size, mines })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Immutable mine placement plus the adjacency counts derived from it.
///
/// Both grids are fixed when the layout is built; gameplay only ever reads
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mines: Array2<bool>,
    counts: Array2<u8>,
    mine_count: CellCount,
}

impl MineLayout {
    /// Derives adjacency counts from a square mine mask.
    ///
    /// Each mine increments every in-bounds safe neighbor. The accumulation
    /// is commutative, so placement order cannot affect the counts.
    pub fn from_mine_mask(mines: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mines.dim();
        if rows != cols || rows == 0 || rows > Coord::MAX as usize {
            return Err(GameError::InvalidConfig);
        }
        let side = rows as Coord;

        let mut counts: Array2<u8> = Array2::default(mines.dim());
        let mut mine_count: CellCount = 0;
        for row in 0..side {
            for col in 0..side {
                if !mines[nd((row, col))] {
                    continue;
                }
                mine_count += 1;
                for pos in neighbors((row, col), side) {
                    if !mines[nd(pos)] {
                        counts[nd(pos)] += 1;
                    }
                }
            }
        }

        if mine_count >= area(side) {
            return Err(GameError::InvalidConfig);
        }

        Ok(Self {
            mines,
            counts,
            mine_count,
        })
    }

    /// Builds a layout from explicit mine positions, for deterministic
    /// setups.
    pub fn from_mine_coords(side: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default((side as usize, side as usize));
        for &(row, col) in mine_coords {
            if row >= side || col >= side {
                return Err(GameError::OutOfBounds);
            }
            mines[nd((row, col))] = true;
        }
        Self::from_mine_mask(mines)
    }

    pub fn side(&self) -> Coord {
        self.mines.dim().0 as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        area(self.side())
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub const fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, pos: Coord2) -> bool {
        self[pos]
    }

    /// Number of mined neighbors of a cell, fixed at construction. Zero for
    /// mined cells themselves.
    pub fn adjacent_mine_count(&self, pos: Coord2) -> u8 {
        self.counts[nd(pos)]
    }

    pub fn validate_coords(&self, pos: Coord2) -> Result<Coord2> {
        let side = self.side();
        if pos.0 < side && pos.1 < side {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Positions of every mine, in row-major order.
    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mines
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub(crate) fn iter_neighbors(&self, pos: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(pos, self.side())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, pos: Coord2) -> &Self::Output {
        &self.mines[nd(pos)]
    }
}

/// Outcome of a player-initiated reveal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// The move hit an already-open cell; nothing changed.
    NoChange,
    /// One or more safe cells were opened; the game continues.
    Revealed,
    /// The move hit a mine; the minefield was disclosed and the game is lost.
    HitMine,
    /// The move opened the last safe cell; the game is won.
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn config_rejects_zero_size() {
        assert_eq!(GameConfig::new(0, 0), Err(GameError::InvalidConfig));
    }

    #[test]
    fn config_rejects_fully_mined_board() {
        assert_eq!(GameConfig::new(2, 4), Err(GameError::InvalidConfig));
    }

    #[test]
    fn config_accepts_zero_mines_and_near_full_boards() {
        assert!(GameConfig::new(3, 0).is_ok());
        let config = GameConfig::new(2, 3).unwrap();
        assert_eq!(config.safe_cells(), 1);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::OutOfBounds)
        );
    }

    #[test]
    fn layout_tracks_injected_mines_exactly() {
        let placed = [(0, 0), (2, 1), (3, 3)];
        let layout = MineLayout::from_mine_coords(4, &placed).unwrap();

        assert_eq!(layout.mine_count(), 3);
        assert_eq!(layout.safe_cell_count(), 13);
        let found: Vec<_> = layout.iter_mines().collect();
        assert_eq!(found, placed);
    }

    #[test]
    fn adjacency_counts_match_brute_force_recount() {
        let placed = [(0, 0), (0, 1), (1, 2), (3, 0), (3, 3)];
        let layout = MineLayout::from_mine_coords(4, &placed).unwrap();

        for row in 0..4 {
            for col in 0..4 {
                if layout.contains_mine((row, col)) {
                    continue;
                }
                let expected = neighbors((row, col), 4)
                    .filter(|&pos| layout.contains_mine(pos))
                    .count() as u8;
                assert_eq!(layout.adjacent_mine_count((row, col)), expected);
            }
        }
    }

    #[test]
    fn adjacency_counts_ignore_placement_order() {
        let forward = MineLayout::from_mine_coords(4, &[(0, 0), (1, 1), (2, 2)]).unwrap();
        let backward = MineLayout::from_mine_coords(4, &[(2, 2), (1, 1), (0, 0)]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn layout_rejects_fully_mined_mask() {
        let mines = Array2::from_elem((2, 2), true);
        assert_eq!(
            MineLayout::from_mine_mask(mines),
            Err(GameError::InvalidConfig)
        );
    }
}
