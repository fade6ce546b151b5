use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::game::{GameConfig, SimulationEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

pub struct HumanMode {
    config: GameConfig,
    engine: SimulationEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    paused: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = SimulationEngine::new(&config).context("Invalid game configuration")?;

        Ok(Self {
            config,
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            paused: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            cols = self.config.cols,
            rows = self.config.rows,
            tick_ms = self.config.tick_interval_ms,
            "starting interactive game"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.config.tick_interval_ms.max(1));
        let mut tick_timer = interval(tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            let err = anyhow::Error::new(err);
                            return Err(err.context("Failed to read terminal event"));
                        }
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics, self.paused);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(
            games = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "session ended"
        );

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            // The engine keeps only the latest heading before the next tick
            KeyAction::Steer(dir) if !self.paused => self.engine.set_heading(dir),
            KeyAction::Steer(_) => {}
            KeyAction::TogglePause => self.toggle_pause(),
            KeyAction::Restart => self.reset_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if self.paused || self.engine.is_over() {
            return;
        }

        let result = self.engine.tick();

        if result.terminated() {
            self.metrics.on_game_over(&result.snapshot);
        }
    }

    fn toggle_pause(&mut self) {
        if self.engine.is_over() {
            return;
        }
        self.paused = !self.paused;
        if self.paused {
            self.metrics.pause();
        } else {
            self.metrics.resume();
        }
    }

    /// Start over with a fresh engine; a finished engine is never revived.
    fn reset_game(&mut self) {
        match SimulationEngine::new(&self.config) {
            Ok(engine) => {
                self.engine = engine;
                self.paused = false;
                self.metrics.on_game_start();
            }
            // The config was validated when the mode was built
            Err(err) => tracing::error!(%err, "failed to restart game"),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
