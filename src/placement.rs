//! Greedy tower placement over the city grid.
//!
//! Towers cover a Chebyshev square: a tower at (r, c) with radius R reaches
//! every cell (i, j) with |i - r| <= R and |j - c| <= R.

use crate::grid::{CellState, Grid, Position};
use log::{debug, info, trace};
use serde::Serialize;

/// Tower positions in the order they were placed. Never holds duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TowerSet {
    towers: Vec<Position>,
}

impl TowerSet {
    pub fn new() -> Self {
        TowerSet { towers: Vec::new() }
    }

    /// Add a tower; returns false if one already stands at `pos`
    pub fn insert(&mut self, pos: Position) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.towers.push(pos);
        true
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.towers.contains(&pos)
    }

    /// Check whether any tower reaches `pos` (linear scan)
    pub fn covers(&self, pos: Position, radius: usize) -> bool {
        self.towers.iter().any(|tower| tower.within(&pos, radius))
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.towers.iter()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.towers
    }
}

impl<'a> IntoIterator for &'a TowerSet {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.towers.iter()
    }
}

/// Mark every cell within `radius` of `tower` as covered, clipped to the grid.
///
/// Obstructed cells inside the square are overwritten too; coverage is a
/// radio footprint, not a statement about the block being usable.
pub fn place_tower(grid: &mut Grid, tower: Position, radius: usize) {
    let window: Vec<Position> = grid.cells_within(tower, radius).collect();
    for pos in window {
        grid.write(pos, CellState::Covered);
    }
    trace!("[place_tower] {} radius {} -> revision {}", tower, radius, grid.get_revision());
}

/// Greedy placement: scan row-major, and put a tower on every open cell that no
/// earlier tower reaches.
///
/// The result is deterministic for a given grid and radius but is not a
/// minimum cover.
pub fn place_towers_optimized(grid: &mut Grid, radius: usize) -> TowerSet {
    let mut towers = TowerSet::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            if grid.get_cell(pos) != Some(CellState::Open) {
                continue;
            }

            if towers.covers(pos, radius) {
                trace!("[placement] {} already covered", pos);
                continue;
            }

            place_tower(grid, pos, radius);
            towers.insert(pos);
            debug!("[placement] tower #{} at {}", towers.len(), pos);
        }
    }

    info!(
        "Placed {} towers (radius {}) on {}x{} grid",
        towers.len(),
        radius,
        grid.rows(),
        grid.cols()
    );

    towers
}
