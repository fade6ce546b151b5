//! Core game logic module for Snake on a wraparound grid
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Drivers feed headings and ticks in and read [`Snapshot`]s out.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{SimulationEngine, StepResult};
pub use error::EngineError;
pub use food::{FoodSource, RandomFood, ScriptedFood};
pub use state::{Cell, CellKind, CollisionKind, GameStatus, GridSize, Organism, Snapshot};
