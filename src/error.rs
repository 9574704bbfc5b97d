//! Error types for tower_grid

use crate::grid::Position;
use thiserror::Error;

/// Errors raised while building grids, loading configuration or searching
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid dimensions: {rows}x{cols} (rows and cols must both be at least 1)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Cell count mismatch: expected {expected}, got {actual}")]
    CellCount { expected: usize, actual: usize },

    #[error("Position {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("Invalid obstruction probability: {0} (must be within 0.0..=1.0)")]
    InvalidProbability(f64),

    #[error("Grid parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<toml::de::Error> for GridError {
    fn from(e: toml::de::Error) -> Self {
        GridError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
