//! Food placement policies.
//!
//! The engine asks a [`FoodSource`] for a new cell every time food is eaten.
//! The default policy draws uniformly over the whole grid and does not avoid
//! the organism, so food can land under a body segment.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::state::{Cell, GridSize};

pub trait FoodSource {
    fn next_food(&mut self, grid: GridSize) -> Cell;
}

/// Uniform draw over `[0, cols) x [0, rows)`
#[derive(Debug, Clone)]
pub struct RandomFood {
    rng: ChaCha8Rng,
}

impl RandomFood {
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl FoodSource for RandomFood {
    fn next_food(&mut self, grid: GridSize) -> Cell {
        let x = self.rng.gen_range(0..grid.cols) as i32;
        let y = self.rng.gen_range(0..grid.rows) as i32;
        Cell::new(x, y)
    }
}

/// Hands out a fixed sequence of cells, then keeps repeating the last one.
#[derive(Debug, Clone)]
pub struct ScriptedFood {
    queue: VecDeque<Cell>,
    last: Cell,
}

impl ScriptedFood {
    /// `fallback` is served when the script is empty from the start.
    pub fn new(cells: impl IntoIterator<Item = Cell>, fallback: Cell) -> Self {
        Self {
            queue: cells.into_iter().collect(),
            last: fallback,
        }
    }
}

impl FoodSource for ScriptedFood {
    fn next_food(&mut self, _grid: GridSize) -> Cell {
        if let Some(cell) = self.queue.pop_front() {
            self.last = cell;
        }
        self.last
    }
}
