use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, CellKind, Direction, Snapshot};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &Snapshot,
        metrics: &GameMetrics,
        paused: bool,
    ) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics, paused), chunks[0]);

        // The terminal frame stays on screen after game over
        frame.render_widget(self.render_grid(snapshot), chunks[1]);

        frame.render_widget(self.render_controls(snapshot), chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(snapshot.grid.rows);

        for y in 0..snapshot.grid.rows {
            let mut spans = Vec::with_capacity(snapshot.grid.cols);

            for x in 0..snapshot.grid.cols {
                let cell = Cell::new(x as i32, y as i32);

                let span = match snapshot.cell_kind(cell) {
                    CellKind::Head => {
                        let color = if snapshot.is_over() {
                            Color::Red
                        } else {
                            Color::Cyan
                        };
                        Span::styled(
                            head_glyph(snapshot.heading).to_string(),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        )
                    }
                    CellKind::Body => Span::styled("█", Style::default().fg(Color::Green)),
                    CellKind::Food => Span::styled(
                        "●",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    CellKind::Empty => Span::styled("·", Style::default().fg(Color::DarkGray)),
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let border_color = if snapshot.is_over() {
            Color::Red
        } else {
            Color::White
        };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        snapshot: &Snapshot,
        metrics: &GameMetrics,
        paused: bool,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let mut spans = vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.organism.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Longest: ", label),
            Span::styled(metrics.longest_organism.to_string(), value),
        ];

        if snapshot.is_over() {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        } else if paused {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "PAUSED",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    fn render_controls(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let text = if snapshot.is_over() {
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ])
        } else {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Space", Style::default().fg(Color::Cyan)),
                Span::raw(" to pause | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Head glyph facing the direction of travel
fn head_glyph(heading: Direction) -> char {
    match heading {
        Direction::Up => '▲',
        Direction::Down => '▼',
        Direction::Left => '◀',
        Direction::Right => '▶',
    }
}

/// Plain-text grid, one character per cell and one line per row.
///
/// Head is drawn as `^ v < >` by heading, body as `o`, food as `*`, empty as `.`.
pub fn render_ascii(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity((snapshot.grid.cols + 1) * snapshot.grid.rows);

    for y in 0..snapshot.grid.rows {
        for x in 0..snapshot.grid.cols {
            let ch = match snapshot.cell_kind(Cell::new(x as i32, y as i32)) {
                CellKind::Head => match snapshot.heading {
                    Direction::Up => '^',
                    Direction::Down => 'v',
                    Direction::Left => '<',
                    Direction::Right => '>',
                },
                CellKind::Body => 'o',
                CellKind::Food => '*',
                CellKind::Empty => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, GridSize};
    use ratatui::{Terminal, backend::TestBackend};

    fn snapshot() -> Snapshot {
        Snapshot {
            grid: GridSize::new(5, 3),
            organism: vec![Cell::new(2, 1), Cell::new(1, 1), Cell::new(0, 1)],
            heading: Direction::Right,
            food: Cell::new(4, 0),
            score: 0,
            status: GameStatus::Running,
            ticks: 0,
        }
    }

    #[test]
    fn test_ascii_grid() {
        assert_eq!(render_ascii(&snapshot()), "....*\noo>..\n.....\n");
    }

    #[test]
    fn test_ascii_hides_food_under_body() {
        let mut snap = snapshot();
        snap.food = Cell::new(1, 1);
        snap.heading = Direction::Up;
        assert_eq!(render_ascii(&snap), ".....\noo^..\n.....\n");
    }

    #[test]
    fn test_head_glyphs_distinct() {
        let glyphs: std::collections::HashSet<char> =
            Direction::ALL.iter().map(|d| head_glyph(*d)).collect();
        assert_eq!(glyphs.len(), 4);
    }

    #[test]
    fn test_header_shows_session_bests() {
        let mut finished = snapshot();
        finished.status = GameStatus::Over;
        finished.score = 4;
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(&finished);

        let mut terminal = Terminal::new(TestBackend::new(120, 12)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &snapshot(), &metrics, false))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Best: 4"));
        assert!(text.contains("Longest: 3"));
    }
}
