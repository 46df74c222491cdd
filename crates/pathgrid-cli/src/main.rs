//! `pathgrid`: run one search and print `{"visited": ..., "path": ...}`.
//!
//! ```text
//! pathgrid --algorithm dijkstra --start 0,0 --goal 2,2 --rows 3 --cols 3 --obstacles 010000000
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

mod args;

use clap::Parser;
use log::info;
use pathgrid_core::Grid;
use pathgrid_paths::run_search;
use tracing_subscriber::{EnvFilter, fmt};

use crate::args::Cli;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // The fmt subscriber also installs the `log` bridge for the library crates.
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("logging disabled: {e}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let markers = cli.markers()?;
    if cli.print_grid {
        eprint!("{}", Grid::build(&markers, cli.rows, cli.cols)?);
    }

    let result = run_search(
        &cli.algorithm,
        cli.start.row,
        cli.start.col,
        cli.goal.row,
        cli.goal.col,
        &markers,
        cli.rows,
        cli.cols,
    )?;
    info!(
        "visited {} cells, path of {} steps",
        result.visited.len(),
        result.cost()
    );

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
