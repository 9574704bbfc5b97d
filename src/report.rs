use crate::error::Result;
use crate::grid::{CellState, Grid, Position};
use crate::placement::TowerSet;
use serde::Serialize;

/// Result of one placement + search run, handed to whatever draws it
#[derive(Debug, Serialize)]
pub struct NetworkReport {
    pub rows: usize,
    pub cols: usize,
    pub tower_range: usize,
    /// Grid rows in the text grid format
    pub grid: Vec<String>,
    pub towers: TowerSet,
    /// `null` when no path was found
    pub path: Option<Vec<Position>>,
    /// Open cells no tower reached
    pub uncovered: usize,
}

impl NetworkReport {
    pub fn new(grid: &Grid, towers: &TowerSet, tower_range: usize, path: Option<&[Position]>) -> Self {
        NetworkReport {
            rows: grid.rows(),
            cols: grid.cols(),
            tower_range,
            grid: grid.to_lines(),
            towers: towers.clone(),
            path: path.map(<[Position]>::to_vec),
            uncovered: grid.count(CellState::Open),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format path for display
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Format tower positions for display
pub fn format_towers(towers: &TowerSet) -> String {
    let listed: Vec<String> = towers.iter().map(Position::to_string).collect();
    format!("{} towers: [{}]", towers.len(), listed.join(", "))
}
