//! Torus Snake - Snake on a wraparound grid
//!
//! This library provides:
//! - Core simulation engine (game module), free of I/O
//! - Keyboard mapping (input module)
//! - TUI and plain-text rendering (render module)
//! - Session metrics (metrics module)
//! - Drivers that own the tick cadence (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod telemetry;
