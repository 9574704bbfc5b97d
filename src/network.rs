//! Hop search over the tower coverage graph.
//!
//! Two cells are adjacent when both are covered and each lies within the
//! tower range of the other. The search is a depth-first walk with a single
//! visited set for the whole run: a cell expanded once is never expanded from
//! a fresh neighbor list again, even if the branch that reached it failed.

use crate::error::Result;
use crate::grid::{Grid, Position};
use log::{debug, trace};
use std::collections::HashSet;

/// One level of the depth-first search
#[derive(Debug)]
struct Frame {
    position: Position,
    /// Unvisited neighbors at the time this frame was expanded
    neighbors: Vec<Position>,
    next: usize,
}

/// Coverage graph over a grid after tower placement
pub struct TowerNetwork<'a> {
    grid: &'a Grid,
    tower_range: usize,
}

impl<'a> TowerNetwork<'a> {
    pub fn new(grid: &'a Grid, tower_range: usize) -> Self {
        TowerNetwork { grid, tower_range }
    }

    pub fn tower_range(&self) -> usize {
        self.tower_range
    }

    /// Covered cells within tower range of `position`, in row-major order.
    /// Includes `position` itself when it is covered.
    pub fn valid_neighbors(&self, position: Position) -> Vec<Position> {
        self.grid
            .cells_within(position, self.tower_range)
            .filter(|&pos| self.grid.is_covered(pos))
            .collect()
    }

    /// Find a hop path from `start` to `end`, both inclusive.
    ///
    /// Returns `Ok(None)` when the search runs out of cells. The path is not
    /// necessarily the shortest one. Neighbors are tried in discovery order,
    /// and the frame stack lives on the heap so the depth can reach
    /// rows x cols.
    pub fn find_reliable_path(&self, start: Position, end: Position) -> Result<Option<Vec<Position>>> {
        self.grid.check_bounds(start)?;
        self.grid.check_bounds(end)?;

        debug!("[find_reliable_path] START: {} -> {}, range {}", start, end, self.tower_range);

        if start == end {
            return Ok(Some(vec![start]));
        }

        let mut visited: HashSet<Position> = HashSet::new();
        let mut stack: Vec<Frame> = Vec::new();

        match self.expand(start, &mut visited) {
            Some(frame) => stack.push(frame),
            None => {
                debug!("[find_reliable_path] {} has no covered neighbors", start);
                return Ok(None);
            }
        }

        while let Some(frame) = stack.last_mut() {
            if frame.next >= frame.neighbors.len() {
                // Branch exhausted; its cell stays visited
                trace!("[dfs] backtrack from {}", frame.position);
                stack.pop();
                continue;
            }

            let neighbor = frame.neighbors[frame.next];
            frame.next += 1;

            if neighbor == end {
                let mut path: Vec<Position> = stack.iter().map(|f| f.position).collect();
                path.push(end);
                debug!(
                    "[find_reliable_path] FOUND PATH: {} hops, {} cells visited",
                    path.len() - 1,
                    visited.len()
                );
                return Ok(Some(path));
            }

            if let Some(child) = self.expand(neighbor, &mut visited) {
                stack.push(child);
            }
        }

        debug!("[find_reliable_path] NO PATH FOUND after visiting {} cells", visited.len());
        Ok(None)
    }

    /// Mark `position` visited and snapshot its unvisited neighbors.
    /// Returns `None` for a dead end.
    fn expand(&self, position: Position, visited: &mut HashSet<Position>) -> Option<Frame> {
        visited.insert(position);

        let neighbors: Vec<Position> = self
            .valid_neighbors(position)
            .into_iter()
            .filter(|n| !visited.contains(n))
            .collect();

        trace!("[dfs] expand {} -> {} neighbors", position, neighbors.len());

        if neighbors.is_empty() {
            return None;
        }

        Some(Frame {
            position,
            neighbors,
            next: 0,
        })
    }
}
