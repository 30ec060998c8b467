//! Toroidal boolean grid.
//!
//! Cells are stored row-major in a flat vector. Every coordinate passed in is
//! wrapped modulo the grid dimensions, so negative and overflowing indices
//! address the opposite edge.

use std::fmt;

use rand::Rng;

/// Errors raised when constructing or seeding a grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be positive (got {rows}x{cols})")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("Parameter `{name}` out of range: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
    #[error("Glider spacing must be non-zero")]
    InvalidSpacing,
}

/// Fixed-size toroidal grid of live/dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Cell states [row * cols + col].
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let size = match rows.checked_mul(cols) {
            Some(size) if size > 0 => size,
            _ => return Err(GridError::InvalidDimension { rows, cols }),
        };
        Ok(Self {
            rows,
            cols,
            cells: vec![false; size],
        })
    }

    /// Create a grid with the given cells alive.
    pub fn with_live_cells(
        rows: usize,
        cols: usize,
        live: &[(i64, i64)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        for &(r, c) in live {
            grid.set(r, c, true);
        }
        Ok(grid)
    }

    /// Grid dimensions as (rows, cols).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Flat index of the wrapped coordinate.
    #[inline]
    fn idx(&self, r: i64, c: i64) -> usize {
        let row = r.rem_euclid(self.rows as i64) as usize;
        let col = c.rem_euclid(self.cols as i64) as usize;
        row * self.cols + col
    }

    /// Cell state at the wrapped coordinate.
    #[inline]
    pub fn get(&self, r: i64, c: i64) -> bool {
        self.cells[self.idx(r, c)]
    }

    /// Write cell state at the wrapped coordinate.
    #[inline]
    pub fn set(&mut self, r: i64, c: i64, value: bool) {
        let idx = self.idx(r, c);
        self.cells[idx] = value;
    }

    /// Flip the cell at the wrapped coordinate.
    pub fn toggle(&mut self, r: i64, c: i64) {
        let idx = self.idx(r, c);
        self.cells[idx] = !self.cells[idx];
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Set each cell alive independently with probability `density`.
    ///
    /// The grid is left untouched when `density` is outside [0, 1].
    pub fn fill_random<R: Rng + ?Sized>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidParameter {
                name: "density",
                value: density,
            });
        }
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(density);
        }
        Ok(())
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over live cell coordinates in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.cols) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.dimensions(), (7, 3));
        assert_eq!(grid.population(), 0);
        for r in 0..7 {
            for c in 0..3 {
                assert!(!grid.get(r, c));
            }
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimension { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(GridError::InvalidDimension { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(GridError::InvalidDimension {
                rows: usize::MAX,
                cols: 2,
            })
        );
    }

    #[test]
    fn test_wrapping_is_per_axis() {
        // Non-square so a transposed wrap would land elsewhere
        let mut grid = Grid::new(3, 5).unwrap();
        grid.set(-1, -1, true);
        assert!(grid.get(2, 4));
        assert!(grid.get(5, 9));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(2, 4)]);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.toggle(1, 2);
        assert!(grid.get(1, 2));
        grid.toggle(5, 6);
        assert!(!grid.get(1, 2));

        grid.set(0, 0, true);
        grid.set(3, 3, true);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_fill_random_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(6, 9).unwrap();

        grid.fill_random(1.0, &mut rng).unwrap();
        assert_eq!(grid.population(), 54);

        grid.fill_random(0.0, &mut rng).unwrap();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_fill_random_rejects_bad_density() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(0, 0, true);

        for density in [-0.1, 1.5, f64::NAN] {
            let err = grid.fill_random(density, &mut rng).unwrap_err();
            assert!(matches!(
                err,
                GridError::InvalidParameter {
                    name: "density",
                    ..
                }
            ));
        }
        // Failed calls leave the grid alone
        assert!(grid.get(0, 0));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_fill_random_is_reproducible() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        a.fill_random(0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        b.fill_random(0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let population = a.population();
        assert!(population > 60 && population < 180, "got {}", population);
    }

    #[test]
    fn test_display() {
        let grid = Grid::with_live_cells(2, 3, &[(0, 0), (1, 2)]).unwrap();
        assert_eq!(grid.to_string(), "#..\n..#\n");
    }

    proptest! {
        #[test]
        fn prop_wrap_is_periodic(
            rows in 1usize..12,
            cols in 1usize..12,
            r in -50i64..50,
            c in -50i64..50,
            k in -4i64..4,
            seed in any::<u64>(),
        ) {
            let mut grid = Grid::new(rows, cols).unwrap();
            grid.fill_random(0.5, &mut StdRng::seed_from_u64(seed)).unwrap();

            let value = grid.get(r, c);
            prop_assert_eq!(grid.get(r + k * rows as i64, c), value);
            prop_assert_eq!(grid.get(r, c + k * cols as i64), value);
        }

        #[test]
        fn prop_set_then_get(
            rows in 1usize..12,
            cols in 1usize..12,
            r in -50i64..50,
            c in -50i64..50,
        ) {
            let mut grid = Grid::new(rows, cols).unwrap();
            grid.set(r, c, true);
            prop_assert!(grid.get(r, c));
            prop_assert_eq!(grid.population(), 1);
        }
    }
}
