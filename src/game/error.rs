use thiserror::Error;

/// Rejected game setups. Running games never produce these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("grid must be at least 1x1, got {cols}x{rows}")]
    EmptyGrid { cols: usize, rows: usize },

    #[error("grid {cols}x{rows} is too large, each side may be at most {max}")]
    GridTooLarge { cols: usize, rows: usize, max: usize },

    #[error("organism needs at least one cell")]
    EmptyOrganism,

    #[error("{what} cell ({x}, {y}) lies outside the {cols}x{rows} grid")]
    CellOutOfBounds {
        what: &'static str,
        x: i32,
        y: i32,
        cols: usize,
        rows: usize,
    },
}
