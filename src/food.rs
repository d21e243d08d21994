use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::snake::Snake;
use crate::{Coords, GridInt};

/// Picks food cells in the grid interior, never on top of the snake.
/// Owns its RNG so placement is reproducible under a fixed seed.
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        FoodSpawner { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        FoodSpawner { rng: StdRng::seed_from_u64(seed) }
    }

    /// Samples uniform interior cells until one misses the snake. Random
    /// attempts are capped at the interior cell count, after which a scan
    /// takes over, so a crowded board still terminates. `None` means the
    /// interior holds no free cell at all.
    pub fn place(&mut self, snake: &Snake, height: GridInt, width: GridInt) -> Option<Coords> {
        let rows = (height as i64 - 2).max(0);
        let cols = (width as i64 - 2).max(0);

        for _ in 0..rows * cols {
            let pos = (
                self.rng.gen_range(1..height - 1),
                self.rng.gen_range(1..width - 1),
            );
            if !snake.collides_with(pos) {
                return Some(pos);
            }
        }

        for row in 1..height - 1 {
            for col in 1..width - 1 {
                if !snake.collides_with((row, col)) {
                    return Some((row, col));
                }
            }
        }

        None
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
