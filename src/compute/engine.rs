//! Life engine - B3/S23 transition rule and pattern seeding.
//!
//! The engine holds no grid. `step` reads one grid and writes a fresh one, so
//! every neighbor count sees the previous generation only.

use super::Grid;

/// Relative (row, col) offsets of the 8 neighbors.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, 0),  // N
    (1, 0),   // S
    (0, 1),   // E
    (0, -1),  // W
    (-1, 1),  // NE
    (-1, -1), // NW
    (1, 1),   // SE
    (1, -1),  // SW
];

/// Glider cells relative to its origin. Travels one cell towards +row/+col
/// every 4 generations.
pub const GLIDER: [(i64, i64); 5] = [(0, 0), (1, 1), (1, 2), (2, 1), (0, 2)];

/// Default distance between tiled gliders.
pub const DEFAULT_GLIDER_SPACING: usize = 10;

/// Conway's Game of Life on a torus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifeEngine;

impl LifeEngine {
    /// Neighbor counts that keep a live cell alive.
    pub const SURVIVE: [u8; 2] = [2, 3];
    /// Neighbor counts that bring a dead cell to life.
    pub const BIRTH: [u8; 1] = [3];

    pub fn new() -> Self {
        Self
    }

    /// Count live cells among the 8 wrapped neighbors of (r, c).
    pub fn neighbor_count(&self, grid: &Grid, r: i64, c: i64) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dr, dc)| grid.get(r + dr, c + dc))
            .count() as u8
    }

    /// Next state of a cell given its current state and neighbor count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            Self::SURVIVE.contains(&neighbors)
        } else {
            Self::BIRTH.contains(&neighbors)
        }
    }

    /// Compute the next generation. The input grid is not modified.
    pub fn step(&self, grid: &Grid) -> Grid {
        let (rows, cols) = grid.dimensions();
        let mut next = grid.clone();
        next.clear();

        for r in 0..rows as i64 {
            for c in 0..cols as i64 {
                let neighbors = self.neighbor_count(grid, r, c);
                if self.next_state(grid.get(r, c), neighbors) {
                    next.set(r, c, true);
                }
            }
        }

        next
    }

    /// Apply `step` the given number of times.
    pub fn advance(&self, grid: &Grid, generations: u64) -> Grid {
        let mut current = grid.clone();
        for _ in 0..generations {
            current = self.step(&current);
        }
        current
    }

    /// Draw a glider with its origin at (r, c). Other cells are left alone.
    pub fn stamp_glider(&self, grid: &mut Grid, origin: (i64, i64)) {
        let (r, c) = origin;
        for (dr, dc) in GLIDER {
            grid.set(r + dr, c + dc, true);
        }
    }

    /// Clear the grid and tile gliders every 10 rows and columns.
    pub fn seed_gliders(&self, grid: &mut Grid) {
        self.seed_gliders_with_spacing(grid, DEFAULT_GLIDER_SPACING);
    }

    /// Clear the grid and tile gliders every `spacing` rows and columns,
    /// starting at (1, 1). At least one glider is always placed.
    pub fn seed_gliders_with_spacing(&self, grid: &mut Grid, spacing: usize) {
        let spacing = spacing.max(1);
        let (rows, cols) = grid.dimensions();
        let tiles_down = (rows / spacing).max(1);
        let tiles_across = (cols / spacing).max(1);

        grid.clear();
        for i in 0..tiles_down {
            for j in 0..tiles_across {
                let origin = (1 + (i * spacing) as i64, 1 + (j * spacing) as i64);
                self.stamp_glider(grid, origin);
            }
        }
        log::debug!(
            "Seeded {} gliders on {}x{} grid",
            tiles_down * tiles_across,
            rows,
            cols
        );
    }
}
