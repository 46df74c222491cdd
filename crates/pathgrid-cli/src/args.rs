//! Command-line arguments.

use clap::Parser;
use pathgrid_core::Cell;
use pathgrid_maze::{MazeConfig, MazeGen, MazeError};

#[derive(Parser, Debug)]
#[command(name = "pathgrid", about = "Search a grid and print the visit order and path as JSON")]
pub struct Cli {
    /// bfs, dijkstra or astar; any other name runs astar.
    #[arg(long, short = 'a', default_value = "astar")]
    pub algorithm: String,

    /// Start cell as ROW,COL.
    #[arg(long, value_parser = parse_cell)]
    pub start: Cell,

    /// Goal cell as ROW,COL.
    #[arg(long, value_parser = parse_cell)]
    pub goal: Cell,

    #[arg(long)]
    pub rows: i32,

    #[arg(long)]
    pub cols: i32,

    /// Row-major obstacle markers, '1' for blocked.
    #[arg(long, conflicts_with = "maze_density")]
    pub obstacles: Option<String>,

    /// Generate obstacles instead, blocking each cell with this probability.
    #[arg(long)]
    pub maze_density: Option<f64>,

    /// Seed for --maze-density.
    #[arg(long, requires = "maze_density")]
    pub seed: Option<u64>,

    #[arg(long, help = "Also draw the grid on stderr")]
    pub print_grid: bool,
}

impl Cli {
    /// The obstacle marker string for this run, generating one if asked.
    pub fn markers(&self) -> Result<String, MazeError> {
        match self.maze_density {
            Some(density) => {
                let config = MazeConfig {
                    density,
                    seed: self.seed,
                };
                let grid = MazeGen::from_config(&config)?.scatter(
                    self.rows,
                    self.cols,
                    &[self.start, self.goal],
                )?;
                Ok(grid.to_markers())
            }
            None => Ok(self.obstacles.clone().unwrap_or_default()),
        }
    }
}

/// Parse `ROW,COL`.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row: i32 = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col: i32 = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok(Cell::new(row, col))
}
