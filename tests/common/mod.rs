#![allow(dead_code)]

use tower_grid::generator::GridGenerator;
use tower_grid::{CellState, Grid, Position};

/// Build a grid from text rows ('#' obstructed, '.' open, '+' covered)
pub fn grid_from_rows(rows: &[&str]) -> Grid {
    Grid::parse(&rows.join("\n")).expect("fixture grid should parse")
}

/// Seeded random grid
pub fn random_grid(rows: usize, cols: usize, obstructed_prob: f64, seed: u64) -> Grid {
    GridGenerator::new(obstructed_prob, Some(seed))
        .and_then(|mut generator| generator.generate(rows, cols))
        .expect("generator input should be valid")
}

pub fn positions(pairs: &[(usize, usize)]) -> Vec<Position> {
    pairs.iter().copied().map(Position::from).collect()
}

/// Check that `path` runs from `start` to `end` and that every hop links two
/// covered cells within `range` of each other. The start cell may be
/// uncovered.
pub fn assert_valid_path(grid: &Grid, range: usize, path: &[Position], start: Position, end: Position) {
    assert_eq!(path.first(), Some(&start), "path should begin at start");
    assert_eq!(path.last(), Some(&end), "path should finish at end");

    for (i, hop) in path.windows(2).enumerate() {
        let (from, to) = (hop[0], hop[1]);
        assert!(
            from.within(&to, range),
            "hop {} {} -> {} exceeds range {}",
            i, from, to, range
        );
        assert_eq!(grid.get_cell(to), Some(CellState::Covered), "hop {} lands on uncovered {}", i, to);
        if i > 0 {
            assert_eq!(grid.get_cell(from), Some(CellState::Covered), "hop {} leaves uncovered {}", i, from);
        }
    }

    let mut seen = std::collections::HashSet::new();
    for pos in path {
        assert!(seen.insert(*pos), "path revisits {}", pos);
    }
}

/// Print a grid with the path overlaid, for failing-test diagnostics
pub fn visualize_path(grid: &Grid, path: &[Position]) -> String {
    let mut result = String::new();
    for (row, line) in grid.to_lines().iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            let pos = Position::new(row, col);
            if path.first() == Some(&pos) {
                result.push('S');
            } else if path.last() == Some(&pos) {
                result.push('D');
            } else if path.contains(&pos) {
                result.push('*');
            } else {
                result.push(c);
            }
        }
        result.push('\n');
    }
    result
}
