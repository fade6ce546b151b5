use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::EngineError;
use super::state::{Cell, GridSize};

/// Configuration for one game. Fixed once the engine is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of columns (x axis)
    pub cols: usize,
    /// Number of rows (y axis)
    pub rows: usize,
    /// Starting organism, head first
    pub initial_organism: Vec<Cell>,
    pub initial_heading: Direction,
    pub initial_food: Cell,
    /// Time between ticks. Read by drivers, never by the engine.
    pub tick_interval_ms: u64,
    /// Seed for the food draw; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 70,
            rows: 20,
            initial_organism: vec![Cell::new(10, 10), Cell::new(10, 9), Cell::new(10, 8)],
            initial_heading: Direction::Right,
            initial_food: Cell::new(5, 5),
            tick_interval_ms: 200,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size and the default layout
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            ..Default::default()
        }
    }

    pub fn grid(&self) -> GridSize {
        GridSize::new(self.cols, self.rows)
    }

    /// Check the setup can start a game
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(EngineError::EmptyGrid {
                cols: self.cols,
                rows: self.rows,
            });
        }
        // Cells use i32 coordinates; larger sides would not wrap correctly
        let max = i32::MAX as usize;
        if self.cols > max || self.rows > max {
            return Err(EngineError::GridTooLarge {
                cols: self.cols,
                rows: self.rows,
                max,
            });
        }
        if self.initial_organism.is_empty() {
            return Err(EngineError::EmptyOrganism);
        }

        let grid = self.grid();
        let out_of_bounds = |what: &'static str, cell: Cell| EngineError::CellOutOfBounds {
            what,
            x: cell.x,
            y: cell.y,
            cols: self.cols,
            rows: self.rows,
        };
        if let Some(cell) = self.initial_organism.iter().find(|c| !grid.contains(**c)) {
            return Err(out_of_bounds("organism", *cell));
        }
        if !grid.contains(self.initial_food) {
            return Err(out_of_bounds("food", self.initial_food));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }
}
