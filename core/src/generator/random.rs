use super::*;
use ndarray::Array2;

/// Uniform random placement by sampling-with-rejection: draw a coordinate,
/// retry if that cell already holds a mine, stop once the requested number
/// of distinct mines is placed.
///
/// Rejection is cheap while the board is sparse; the config guarantees at
/// least one safe cell, so the loop always terminates. The same seed always
/// yields the same layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::prelude::*;

        let side = config.size();
        let mut mines: Array2<bool> = Array2::default((side as usize, side as usize));
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut placed: CellCount = 0;
        let mut draws: u32 = 0;
        while placed < config.mines() {
            let pos: Coord2 = (rng.random_range(0..side), rng.random_range(0..side));
            draws += 1;
            if !mines[nd(pos)] {
                mines[nd(pos)] = true;
                placed += 1;
            }
        }
        log::trace!(
            "placed {} mines in {} draws (seed {})",
            placed,
            draws,
            self.seed
        );

        MineLayout::from_mine_mask(mines).expect("generated mask obeys config invariants")
    }
}
