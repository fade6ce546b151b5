use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::EngineError;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a cell at column `x`, row `y`
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move one cell in a direction, wrapping both axes around the grid
    pub fn stepped(&self, direction: Direction, grid: GridSize) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(grid.cols as i32),
            y: (self.y + dy).rem_euclid(grid.rows as i32),
        }
    }
}

/// Dimensions of the toroidal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Check if a cell lies on the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.cols as i32 && cell.y >= 0 && cell.y < self.rows as i32
    }

    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// The player-controlled organism, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organism {
    body: Vec<Cell>,
}

impl Organism {
    /// Create an organism from its cells, head first. Fails on an empty body.
    pub fn new(body: Vec<Cell>) -> Result<Self, EngineError> {
        if body.is_empty() {
            return Err(EngineError::EmptyOrganism);
        }
        Ok(Self { body })
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    /// Get the length of the organism
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; an organism has at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Build the next body: `new_head` prepended, tail kept only when growing.
    pub fn advanced(&self, new_head: Cell, grow: bool) -> Organism {
        let keep = if grow { self.body.len() } else { self.body.len() - 1 };
        let mut body = Vec::with_capacity(keep + 1);
        body.push(new_head);
        body.extend_from_slice(&self.body[..keep]);
        Organism { body }
    }

    /// `new_head` lands on a segment behind the current head, tail included.
    ///
    /// Checked before the move, so stepping into the cell the tail is about
    /// to leave still counts.
    pub fn would_bite(&self, new_head: Cell) -> bool {
        self.body[1..].contains(&new_head)
    }

    /// Any two segments share a cell
    pub fn has_overlap(&self) -> bool {
        let unique: HashSet<Cell> = self.body.iter().copied().collect();
        unique.len() < self.body.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Running,
    Over,
}

/// Which check ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionKind {
    /// The new head landed on a segment of the body before the move
    SelfBite,
    /// The committed body repeats a cell the bite check did not catch
    Overlap,
}

/// What a renderer should draw in a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Head,
    Body,
    Food,
}

/// Immutable copy of the engine state handed to drivers after every call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: GridSize,
    pub organism: Vec<Cell>,
    pub heading: Direction,
    pub food: Cell,
    pub score: u32,
    pub status: GameStatus,
    pub ticks: u64,
}

impl Snapshot {
    /// Get the head position
    pub fn head(&self) -> Cell {
        self.organism[0]
    }

    /// Check if this is the final frame of a game
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Head wins over body, body wins over food.
    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if cell == self.head() {
            CellKind::Head
        } else if self.organism[1..].contains(&cell) {
            CellKind::Body
        } else if cell == self.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridSize {
        GridSize::new(70, 20)
    }

    fn organism(cells: &[(i32, i32)]) -> Organism {
        Organism::new(cells.iter().map(|&(x, y)| Cell::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn test_step_without_wrap() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.stepped(Direction::Right, grid()), Cell::new(6, 5));
        assert_eq!(cell.stepped(Direction::Left, grid()), Cell::new(4, 5));
        assert_eq!(cell.stepped(Direction::Down, grid()), Cell::new(5, 6));
        assert_eq!(cell.stepped(Direction::Up, grid()), Cell::new(5, 4));
    }

    #[test]
    fn test_step_wraps_every_edge() {
        assert_eq!(Cell::new(0, 3).stepped(Direction::Left, grid()), Cell::new(69, 3));
        assert_eq!(Cell::new(69, 3).stepped(Direction::Right, grid()), Cell::new(0, 3));
        assert_eq!(Cell::new(4, 0).stepped(Direction::Up, grid()), Cell::new(4, 19));
        assert_eq!(Cell::new(4, 19).stepped(Direction::Down, grid()), Cell::new(4, 0));
    }

    #[test]
    fn test_step_on_single_cell_grid() {
        let tiny = GridSize::new(1, 1);
        for dir in Direction::ALL {
            assert_eq!(Cell::new(0, 0).stepped(dir, tiny), Cell::new(0, 0));
        }
    }

    #[test]
    fn test_grid_contains() {
        let g = grid();
        assert!(g.contains(Cell::new(0, 0)));
        assert!(g.contains(Cell::new(69, 19)));
        assert!(!g.contains(Cell::new(-1, 0)));
        assert!(!g.contains(Cell::new(70, 0)));
        assert!(!g.contains(Cell::new(0, 20)));
        assert_eq!(g.cell_count(), 1400);
    }

    #[test]
    fn test_empty_organism_rejected() {
        assert_eq!(Organism::new(Vec::new()), Err(EngineError::EmptyOrganism));
    }

    #[test]
    fn test_advance_keeps_length() {
        let snake = organism(&[(10, 10), (10, 9), (10, 8)]);
        let next = snake.advanced(Cell::new(11, 10), false);
        assert_eq!(next.cells(), &[Cell::new(11, 10), Cell::new(10, 10), Cell::new(10, 9)]);
        // original untouched
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(10, 10));
    }

    #[test]
    fn test_advance_grows() {
        let snake = organism(&[(10, 10), (10, 9)]);
        let next = snake.advanced(Cell::new(11, 10), true);
        assert_eq!(next.len(), 3);
        assert_eq!(next.tail(), Cell::new(10, 9));
    }

    #[test]
    fn test_single_segment_advance() {
        let snake = organism(&[(3, 3)]);
        let next = snake.advanced(Cell::new(4, 3), false);
        assert_eq!(next.cells(), &[Cell::new(4, 3)]);
    }

    #[test]
    fn test_bite_checks_body_before_move() {
        let snake = organism(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        // (1, 0) is the tail, still occupied when the head arrives
        assert!(snake.would_bite(Cell::new(1, 0)));
        assert!(snake.would_bite(Cell::new(0, 1)));
        assert!(!snake.would_bite(Cell::new(0, 0)));
        assert!(!snake.would_bite(Cell::new(5, 5)));
    }

    #[test]
    fn test_overlap() {
        let tail_overlap = organism(&[(1, 1), (2, 2), (3, 3), (2, 2)]);
        assert!(tail_overlap.has_overlap());

        let clean = organism(&[(1, 1), (2, 1), (3, 1)]);
        assert!(!clean.has_overlap());
    }

    #[test]
    fn test_cell_kind_precedence() {
        let snapshot = Snapshot {
            grid: grid(),
            organism: vec![Cell::new(2, 2), Cell::new(1, 2), Cell::new(0, 2)],
            heading: Direction::Right,
            food: Cell::new(1, 2),
            score: 0,
            status: GameStatus::Running,
            ticks: 0,
        };
        assert_eq!(snapshot.cell_kind(Cell::new(2, 2)), CellKind::Head);
        assert_eq!(snapshot.cell_kind(Cell::new(1, 2)), CellKind::Body);
        assert_eq!(snapshot.cell_kind(Cell::new(9, 9)), CellKind::Empty);

        let mut visible_food = snapshot.clone();
        visible_food.food = Cell::new(5, 5);
        assert_eq!(visible_food.cell_kind(Cell::new(5, 5)), CellKind::Food);
    }
}
