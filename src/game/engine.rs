use tracing::{debug, info};

use super::{
    action::Direction,
    config::GameConfig,
    error::EngineError,
    food::{FoodSource, RandomFood},
    state::{Cell, CollisionKind, GameStatus, GridSize, Organism, Snapshot},
};

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the organism ate food this step
    pub ate_food: bool,
    /// Check that ended the game on this step, if any
    pub collision: Option<CollisionKind>,
    /// State after the step
    pub snapshot: Snapshot,
}

impl StepResult {
    /// Whether the game is over after this step
    pub fn terminated(&self) -> bool {
        self.snapshot.is_over()
    }
}

/// Owns one game from its first tick until game over.
///
/// The engine keeps no timers. A driver calls [`tick`](Self::tick) on its own
/// cadence and forwards input through [`set_heading`](Self::set_heading); only
/// the heading in place when `tick` runs affects that move.
pub struct SimulationEngine<F: FoodSource = RandomFood> {
    grid: GridSize,
    organism: Organism,
    heading: Direction,
    food: Cell,
    score: u32,
    status: GameStatus,
    ticks: u64,
    food_source: F,
}

impl SimulationEngine<RandomFood> {
    /// Create an engine that draws food uniformly at random
    pub fn new(config: &GameConfig) -> Result<Self, EngineError> {
        let food_source = match config.seed {
            Some(seed) => RandomFood::seeded(seed),
            None => RandomFood::from_entropy(),
        };
        Self::with_food_source(config, food_source)
    }
}

impl<F: FoodSource> SimulationEngine<F> {
    /// Create an engine that takes new food cells from `food_source`
    pub fn with_food_source(config: &GameConfig, food_source: F) -> Result<Self, EngineError> {
        config.validate()?;
        let organism = Organism::new(config.initial_organism.clone())?;

        debug!(
            cols = config.cols,
            rows = config.rows,
            length = organism.len(),
            heading = ?config.initial_heading,
            "engine created"
        );

        Ok(Self {
            grid: config.grid(),
            organism,
            heading: config.initial_heading,
            food: config.initial_food,
            score: 0,
            status: GameStatus::Running,
            ticks: 0,
            food_source,
        })
    }

    /// Request a new heading. Reversals and calls after game over are ignored.
    pub fn set_heading(&mut self, requested: Direction) {
        if self.is_over() || self.heading.is_opposite(requested) {
            return;
        }
        self.heading = requested;
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> StepResult {
        if self.is_over() {
            return StepResult {
                ate_food: false,
                collision: None,
                snapshot: self.snapshot(),
            };
        }

        let new_head = self.organism.head().stepped(self.heading, self.grid);

        let ate_food = new_head == self.food;
        if ate_food {
            self.score += 1;
            self.food = self.food_source.next_food(self.grid);
            debug!(score = self.score, next_food = ?self.food, "food eaten");
        }

        let bites = self.organism.would_bite(new_head);
        let next = self.organism.advanced(new_head, ate_food);

        let collision = if bites {
            Some(CollisionKind::SelfBite)
        } else if next.has_overlap() {
            Some(CollisionKind::Overlap)
        } else {
            None
        };

        if let Some(kind) = collision {
            self.status = GameStatus::Over;
            info!(
                score = self.score,
                length = next.len(),
                ticks = self.ticks + 1,
                ?kind,
                "game over"
            );
        }

        // The fatal frame is committed too so the renderer can show it.
        self.organism = next;
        self.ticks += 1;

        StepResult {
            ate_food,
            collision,
            snapshot: self.snapshot(),
        }
    }

    /// Copy out the current state for a renderer or a report
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            organism: self.organism.cells().to_vec(),
            heading: self.heading,
            food: self.food,
            score: self.score,
            status: self.status,
            ticks: self.ticks,
        }
    }

    /// Grid dimensions fixed at construction
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Current body, head first
    pub fn organism(&self) -> &Organism {
        &self.organism
    }

    /// Direction the next tick moves in
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Cell holding the food
    pub fn food(&self) -> Cell {
        self.food
    }

    /// Food eaten so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Running until the first collision, then Over for good
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Number of committed steps
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
