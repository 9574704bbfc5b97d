use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single city block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Unusable block - never a placement target
    Obstructed,
    /// Unobstructed block not yet reached by any tower
    Open,
    /// Block inside some tower's coverage square
    Covered,
}

impl CellState {
    /// Character used by the text grid format
    pub fn to_char(self) -> char {
        match self {
            CellState::Obstructed => '■',
            CellState::Open => '□',
            CellState::Covered => '▣',
        }
    }

    /// Parse a text grid character. ASCII aliases are accepted so fixtures
    /// can be typed without box-drawing glyphs.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '■' | '#' => Some(CellState::Obstructed),
            '□' | '.' => Some(CellState::Open),
            '▣' | '+' => Some(CellState::Covered),
            _ => None,
        }
    }
}

/// A (row, col) position on the grid, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Chebyshev distance: max(|Δrow|, |Δcol|)
    pub fn chebyshev_distance(&self, other: &Position) -> usize {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }

    /// True when `other` lies inside the square of `radius` around `self`
    pub fn within(&self, other: &Position, radius: usize) -> bool {
        self.chebyshev_distance(other) <= radius
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Grid of city blocks stored in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    /// Revision number - incremented whenever a cell changes state
    revision: u64,
}

impl Grid {
    /// Create a new grid with every cell `Open`
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, CellState::Open)
    }

    /// Create a grid with every cell set to `state`
    pub fn filled(rows: usize, cols: usize, state: CellState) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Grid {
            rows,
            cols,
            cells: vec![state; rows * cols],
            revision: 0,
        })
    }

    /// Create an open grid with specific obstructed cells
    pub fn with_obstructed(rows: usize, cols: usize, obstructed: &[Position]) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for &pos in obstructed {
            grid.set_cell(pos, CellState::Obstructed)?;
        }
        grid.revision = 0;
        Ok(grid)
    }

    /// Build a grid from row-major cell states
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<CellState>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        if cells.len() != rows * cols {
            return Err(GridError::CellCount {
                expected: rows * cols,
                actual: cells.len(),
            });
        }
        Ok(Grid {
            rows,
            cols,
            cells,
            revision: 0,
        })
    }

    /// Parse the text grid format: one line per row, blank lines skipped.
    ///
    /// ```text
    /// ■□□
    /// □▣□
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(GridError::Parse("No grid rows found".to_string()));
        }

        let cols = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len() * cols);

        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != cols {
                return Err(GridError::Parse(format!(
                    "Row {} has {} cells, expected {}",
                    row, width, cols
                )));
            }
            for (col, c) in line.chars().enumerate() {
                let state = CellState::from_char(c).ok_or_else(|| {
                    GridError::Parse(format!("Unknown cell '{}' at ({},{})", c, row, col))
                })?;
                cells.push(state);
            }
        }

        Self::from_cells(lines.len(), cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Fail with `OutOfBounds` unless `pos` lies inside the grid
    pub fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Convert a position to its row-major cell ID
    pub fn get_id(&self, pos: Position) -> usize {
        pos.col + pos.row * self.cols
    }

    /// Convert a cell ID back to a position
    pub fn get_coords(&self, id: usize) -> Position {
        Position::new(id / self.cols, id % self.cols)
    }

    /// Get cell state, `None` when out of bounds
    pub fn get_cell(&self, pos: Position) -> Option<CellState> {
        if self.contains(pos) {
            Some(self.cells[self.get_id(pos)])
        } else {
            None
        }
    }

    pub fn is_covered(&self, pos: Position) -> bool {
        self.get_cell(pos) == Some(CellState::Covered)
    }

    /// Set cell state at `pos`
    pub fn set_cell(&mut self, pos: Position, state: CellState) -> Result<()> {
        self.check_bounds(pos)?;
        self.write(pos, state);
        Ok(())
    }

    /// Write a cell already known to be in bounds
    pub(crate) fn write(&mut self, pos: Position, state: CellState) {
        let id = self.get_id(pos);
        if self.cells[id] != state {
            self.cells[id] = state;
            self.revision += 1;
        }
    }

    /// Get current grid revision number
    pub fn get_revision(&self) -> u64 {
        self.revision
    }

    /// Number of cells in `state`
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Positions inside the square of `radius` around `center`, clipped to the
    /// grid, in row-major order. The center itself may lie outside the grid.
    pub fn cells_within(&self, center: Position, radius: usize) -> impl Iterator<Item = Position> {
        let row_lo = center.row.saturating_sub(radius);
        let row_hi = center.row.saturating_add(radius).min(self.rows - 1);
        let col_lo = center.col.saturating_sub(radius);
        let col_hi = center.col.saturating_add(radius).min(self.cols - 1);

        (row_lo..=row_hi).flat_map(move |row| (col_lo..=col_hi).map(move |col| Position::new(row, col)))
    }

    /// Cells still `Open`, i.e. not reached by any tower
    pub fn uncovered_cells(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.get_cell(pos) == Some(CellState::Open))
            .collect()
    }

    /// Render each row in the text grid format
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.to_char()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
