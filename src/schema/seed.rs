//! Seed types for initializing Life grids.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::compute::{DEFAULT_GLIDER_SPACING, Grid, GridError, LifeEngine};

/// Complete seed specification for grid initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random {
                density: 0.2,
                seed: None,
            },
        }
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells dead.
    Empty,
    /// Each cell alive with probability `density`.
    Random {
        /// Probability of a live cell (0.0-1.0).
        density: f64,
        /// Random seed. None draws from entropy.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Gliders tiled across the grid.
    Gliders {
        /// Rows/columns between glider origins.
        #[serde(default = "default_spacing")]
        spacing: usize,
    },
    /// Explicit live cells as (row, col), wrapped onto the grid.
    Cells { cells: Vec<(i64, i64)> },
}

fn default_spacing() -> usize {
    DEFAULT_GLIDER_SPACING
}

impl Seed {
    /// Generate a new grid of the given size from this seed.
    pub fn generate(&self, rows: usize, cols: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        self.apply(&mut grid)?;
        Ok(grid)
    }

    /// Overwrite `grid` with this seed's pattern.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        match &self.pattern {
            Pattern::Empty => grid.clear(),
            Pattern::Random { density, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                grid.fill_random(*density, &mut rng)?;
            }
            Pattern::Gliders { spacing } => {
                if *spacing == 0 {
                    return Err(GridError::InvalidSpacing);
                }
                LifeEngine::new().seed_gliders_with_spacing(grid, *spacing);
            }
            Pattern::Cells { cells } => {
                grid.clear();
                for &(r, c) in cells {
                    grid.set(r, c, true);
                }
            }
        }
        Ok(())
    }
}
