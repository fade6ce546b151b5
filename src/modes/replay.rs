//! Headless replay of a move script
//!
//! A script is a string of steps read left to right:
//!
//! - `U`, `D`, `L`, `R`: request a heading (same rules as a key press)
//! - `.`: advance one tick
//!
//! Whitespace is ignored. Replay stops at the first tick that ends the game,
//! so trailing steps after a collision are reported as unused.
//!
//! # Example
//!
//! ```rust
//! use torus_snake::game::GameConfig;
//! use torus_snake::modes::ReplayMode;
//!
//! let config = GameConfig { seed: Some(7), ..Default::default() };
//! let report = ReplayMode::new(config).run("..D..").unwrap();
//! assert_eq!(report.ticks_run, 4);
//! ```

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::debug;

use crate::game::{Direction, GameConfig, SimulationEngine, Snapshot};
use crate::render::render_ascii;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    Steer(Direction),
    Tick,
}

/// Parse a move script into steps
pub fn parse_script(script: &str) -> Result<Vec<ReplayStep>> {
    script
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| -> Result<ReplayStep> {
            match c {
                '.' => Ok(ReplayStep::Tick),
                _ => match Direction::from_char(c) {
                    Some(dir) => Ok(ReplayStep::Steer(dir)),
                    None => bail!("Unexpected character {c:?} at position {i} in move script"),
                },
            }
        })
        .collect()
}

/// Outcome of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub ticks_run: u64,
    /// Steps left unread because the game ended first
    pub steps_unused: usize,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Ascii,
}

pub struct ReplayMode {
    config: GameConfig,
}

impl ReplayMode {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, script: &str) -> Result<ReplayReport> {
        let steps = parse_script(script)?;
        let mut engine =
            SimulationEngine::new(&self.config).context("Invalid game configuration")?;

        let mut consumed = 0;
        for step in &steps {
            consumed += 1;
            match *step {
                ReplayStep::Steer(dir) => engine.set_heading(dir),
                ReplayStep::Tick => {
                    if engine.tick().terminated() {
                        break;
                    }
                }
            }
        }

        debug!(
            steps = steps.len(),
            consumed,
            score = engine.score(),
            "replay finished"
        );

        Ok(ReplayReport {
            ticks_run: engine.ticks(),
            steps_unused: steps.len() - consumed,
            snapshot: engine.snapshot(),
        })
    }

    /// Run and format the report for printing
    pub fn run_to_string(&self, script: &str, format: OutputFormat) -> Result<String> {
        let report = self.run(script)?;
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(&report).context("Failed to serialize replay report")
            }
            OutputFormat::Ascii => Ok(format!(
                "{}score: {}  length: {}  ticks: {}  status: {:?}\n",
                render_ascii(&report.snapshot),
                report.snapshot.score,
                report.snapshot.organism.len(),
                report.ticks_run,
                report.snapshot.status,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameStatus};

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_script() {
        let steps = parse_script("u . r\n..").unwrap();
        assert_eq!(
            steps,
            vec![
                ReplayStep::Steer(Direction::Up),
                ReplayStep::Tick,
                ReplayStep::Steer(Direction::Right),
                ReplayStep::Tick,
                ReplayStep::Tick,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = parse_script("..x").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }

    #[test]
    fn test_replay_moves() {
        let report = ReplayMode::new(config()).run("..D.").unwrap();
        assert_eq!(report.ticks_run, 3);
        assert_eq!(report.steps_unused, 0);
        assert_eq!(report.snapshot.head(), Cell::new(12, 11));
        assert_eq!(report.snapshot.status, GameStatus::Running);
    }

    #[test]
    fn test_replay_stops_on_game_over() {
        let doomed = GameConfig {
            initial_organism: vec![Cell::new(10, 10), Cell::new(11, 10), Cell::new(10, 10)],
            ..config()
        };
        let report = ReplayMode::new(doomed).run(".U...").unwrap();
        assert_eq!(report.ticks_run, 1);
        assert_eq!(report.steps_unused, 4);
        assert!(report.snapshot.is_over());
    }

    #[test]
    fn test_json_output() {
        let out = ReplayMode::new(config())
            .run_to_string(".", OutputFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ticks_run"], 1);
        assert_eq!(value["snapshot"]["status"], "running");
        assert_eq!(value["snapshot"]["organism"][0]["x"], 11);
    }

    #[test]
    fn test_ascii_output() {
        let out = ReplayMode::new(config())
            .run_to_string("", OutputFormat::Ascii)
            .unwrap();
        assert_eq!(out.lines().count(), 21);
        assert!(out.ends_with("status: Running\n"));
    }
}
