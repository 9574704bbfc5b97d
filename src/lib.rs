pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod network;
pub mod placement;
pub mod report;

pub use error::{GridError, Result};
pub use grid::{CellState, Grid, Position};
pub use network::TowerNetwork;
pub use placement::{place_tower, place_towers_optimized, TowerSet};
