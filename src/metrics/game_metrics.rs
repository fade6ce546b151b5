use std::time::{Duration, Instant};

use crate::game::Snapshot;

/// In-memory stats for one terminal session. Nothing is written to disk.
pub struct GameMetrics {
    /// Set while the clock runs; `None` while paused or after game over
    running_since: Option<Instant>,
    /// Time banked before the current running stretch
    banked: Duration,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub longest_organism: usize,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            running_since: Some(Instant::now()),
            banked: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            longest_organism: 0,
            games_played: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked
            + self
                .running_since
                .map(|since| since.elapsed())
                .unwrap_or(Duration::ZERO);
    }

    pub fn pause(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.banked += since.elapsed();
        }
        self.update();
    }

    pub fn resume(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    pub fn on_game_start(&mut self) {
        self.running_since = Some(Instant::now());
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
    }

    /// Record a finished game and stop the clock on its final time
    pub fn on_game_over(&mut self, last: &Snapshot) {
        self.pause();
        self.games_played += 1;
        self.high_score = self.high_score.max(last.score);
        self.longest_organism = self.longest_organism.max(last.organism.len());
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Direction, GameStatus, GridSize};

    fn finished(score: u32, length: usize) -> Snapshot {
        Snapshot {
            grid: GridSize::new(70, 20),
            organism: (0..length as i32).map(|x| Cell::new(x, 0)).collect(),
            heading: Direction::Left,
            food: Cell::new(5, 5),
            score,
            status: GameStatus::Over,
            ticks: 10,
        }
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(&finished(10, 13));
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.longest_organism, 13);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(&finished(5, 8));
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.longest_organism, 13);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(&finished(15, 18));
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_paused_clock_stands_still() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.pause();
        let frozen = metrics.elapsed_time;

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.resume();
        std::thread::sleep(Duration::from_millis(10));
        metrics.update();
        assert!(metrics.elapsed_time > frozen);
    }
}
