use thiserror::Error;

/// Failures surfaced by the simulation core.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifeError {
    /// Grid dimensions must both be at least 1 and their product must fit in a usize
    #[error("invalid grid dimensions {height}x{width}: need at least 1x1 and an addressable cell count")]
    InvalidDimensions { height: usize, width: usize },

    /// Direct addressing never wraps; the coordinate must lie inside the grid
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfRange {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },
}

pub type Result<T> = std::result::Result<T, LifeError>;
