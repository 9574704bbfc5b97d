use crate::error::{GridError, Result};
use crate::generator::DEFAULT_OBSTRUCTED_PROB;
use crate::grid::Position;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(default = "default_obstructed_prob")]
    pub obstructed_prob: f64,
    /// Fixed RNG seed; omitted means a fresh grid every run
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_tower_range")]
    pub tower_range: usize,
    #[serde(default = "default_start")]
    pub start: Position,
    #[serde(default = "default_end")]
    pub end: Position,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_rows() -> usize { 10 }
fn default_cols() -> usize { 10 }
fn default_obstructed_prob() -> f64 { DEFAULT_OBSTRUCTED_PROB }
fn default_tower_range() -> usize { 2 }
fn default_start() -> Position { Position::new(0, 0) }
fn default_end() -> Position { Position::new(9, 9) }
fn default_log_level() -> String { "info".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            obstructed_prob: default_obstructed_prob(),
            seed: None,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            tower_range: default_tower_range(),
            start: default_start(),
            end: default_end(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            network: NetworkConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text. Missing sections and keys fall back
    /// to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from `path`, or use defaults if the file doesn't
    /// exist. A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Reject settings the generator or search would refuse later
    pub fn validate(&self) -> Result<()> {
        let grid = &self.grid;
        if grid.rows == 0 || grid.cols == 0 {
            return Err(GridError::InvalidDimensions {
                rows: grid.rows,
                cols: grid.cols,
            });
        }
        if !(0.0..=1.0).contains(&grid.obstructed_prob) {
            return Err(GridError::InvalidProbability(grid.obstructed_prob));
        }
        for (name, pos) in [("start", self.network.start), ("end", self.network.end)] {
            if pos.row >= grid.rows || pos.col >= grid.cols {
                return Err(GridError::Config(format!(
                    "network.{} {} is outside the {}x{} grid",
                    name, pos, grid.rows, grid.cols
                )));
            }
        }
        Ok(())
    }
}
