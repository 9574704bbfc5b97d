use crate::error::{GridError, Result};
use crate::grid::{CellState, Grid};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default chance that a generated block is obstructed
pub const DEFAULT_OBSTRUCTED_PROB: f64 = 0.3;

/// Random city grid source. Each cell is obstructed independently with
/// probability `obstructed_prob`, open otherwise.
pub struct GridGenerator {
    obstructed_prob: f64,
    rng: StdRng,
}

impl GridGenerator {
    /// Create a generator; `seed = None` draws the seed from the OS
    pub fn new(obstructed_prob: f64, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&obstructed_prob) {
            return Err(GridError::InvalidProbability(obstructed_prob));
        }

        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };

        Ok(GridGenerator {
            obstructed_prob,
            rng,
        })
    }

    pub fn obstructed_prob(&self) -> f64 {
        self.obstructed_prob
    }

    /// Generate a fresh `rows` x `cols` grid
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Grid> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let cells: Vec<CellState> = (0..rows * cols)
            .map(|_| {
                if self.rng.random_bool(self.obstructed_prob) {
                    CellState::Obstructed
                } else {
                    CellState::Open
                }
            })
            .collect();

        let grid = Grid::from_cells(rows, cols, cells)?;
        debug!(
            "Generated {}x{} grid: {} obstructed, {} open",
            rows,
            cols,
            grid.count(CellState::Obstructed),
            grid.count(CellState::Open)
        );
        Ok(grid)
    }
}
