//! Random obstacle layouts.
//!
//! [`MazeGen`] scatters blocked cells over a fresh [`Grid`], each cell
//! independently blocked with a fixed probability, while a caller-chosen set
//! of cells (typically the start and goal) is always left open.

use std::fmt;

use log::debug;
use pathgrid_core::{Cell, Grid, GridError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default share of blocked cells.
pub const DEFAULT_DENSITY: f64 = 0.25;

/// Settings for [`MazeGen::from_config`].
#[derive(Debug, Clone, PartialEq)]
pub struct MazeConfig {
    /// Probability that any one cell is blocked, in `[0, 1]`.
    pub density: f64,
    /// Fixed seed for reproducible layouts; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

/// Obstacle generator driven by `rng`.
pub struct MazeGen<R: Rng> {
    rng: R,
    density: f64,
}

impl MazeGen<StdRng> {
    /// Create a generator from `config`, seeding a [`StdRng`].
    pub fn from_config(config: &MazeConfig) -> Result<Self, MazeError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(rng, config.density)
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator blocking cells with probability `density`.
    pub fn new(rng: R, density: f64) -> Result<Self, MazeError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(MazeError::InvalidDensity(density));
        }
        Ok(Self { rng, density })
    }

    /// Build a `rows × cols` grid with randomly blocked cells.
    ///
    /// Cells listed in `keep_open` stay passable; entries outside the grid
    /// are ignored.
    pub fn scatter(&mut self, rows: i32, cols: i32, keep_open: &[Cell]) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(rows, cols)?;
        let cells: Vec<Cell> = grid.cells().collect();
        for c in cells {
            if keep_open.contains(&c) {
                continue;
            }
            if self.rng.random_bool(self.density) {
                grid.set_blocked(c, true)?;
            }
        }
        debug!(
            "scattered {} obstacles over {rows}x{cols} at density {}",
            grid.len() - grid.passable_count(),
            self.density
        );
        Ok(grid)
    }
}

/// Errors that can occur when generating a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The density is not a probability.
    InvalidDensity(f64),
    /// The requested grid shape was rejected.
    Grid(GridError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity(d) => write!(f, "maze density must be within [0, 1], got {d}"),
            Self::Grid(e) => write!(f, "maze: {e}"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDensity(_) => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for MazeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(density: f64) -> MazeGen<StdRng> {
        MazeGen::from_config(&MazeConfig {
            density,
            seed: Some(7),
        })
        .unwrap()
    }

    #[test]
    fn same_seed_same_layout() {
        let a = seeded(0.3).scatter(12, 17, &[]).unwrap();
        let b = seeded(0.3).scatter(12, 17, &[]).unwrap();
        assert_eq!(a.to_markers(), b.to_markers());
    }

    #[test]
    fn density_extremes() {
        let open = seeded(0.0).scatter(6, 6, &[]).unwrap();
        assert_eq!(open.passable_count(), 36);

        let keep = [Cell::new(0, 0), Cell::new(5, 5), Cell::new(40, 40)];
        let walled = seeded(1.0).scatter(6, 6, &keep).unwrap();
        assert_eq!(walled.passable_count(), 2);
        assert!(walled.in_bounds(Cell::new(0, 0)));
        assert!(walled.in_bounds(Cell::new(5, 5)));
    }

    #[test]
    fn density_is_roughly_respected() {
        let g = seeded(DEFAULT_DENSITY).scatter(100, 100, &[]).unwrap();
        let blocked = (g.len() - g.passable_count()) as f64 / g.len() as f64;
        assert!((0.2..0.3).contains(&blocked), "blocked share {blocked}");
    }

    #[test]
    fn rejects_invalid_density() {
        for d in [-0.1, 1.5, f64::NAN] {
            let err = MazeGen::new(StdRng::seed_from_u64(1), d).err();
            assert!(matches!(err, Some(MazeError::InvalidDensity(_))), "{d}");
        }
    }

    #[test]
    fn rejects_invalid_shape() {
        let err = seeded(0.5).scatter(0, 4, &[]).unwrap_err();
        assert_eq!(
            err,
            MazeError::Grid(GridError::InvalidDimensions { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn default_config() {
        let cfg = MazeConfig::default();
        assert_eq!(cfg.density, 0.25);
        assert_eq!(cfg.seed, None);
    }
}
