use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::state::Cell;

/// Random food placement
///
/// Each coordinate is drawn independently and uniformly from `[1, N]`. The
/// spawner never looks at the snake, so food can land under the body; eating
/// such a cell grows the snake straight into a self-collision.
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Spawner with a fixed seed, for deterministic tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a food cell somewhere on the grid
    pub fn spawn(&mut self, grid_size: usize) -> Cell {
        let n = grid_size as i32;
        Cell::new(self.rng.gen_range(1..=n), self.rng.gen_range(1..=n))
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
