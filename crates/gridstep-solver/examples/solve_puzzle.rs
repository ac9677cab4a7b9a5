//! Example demonstrating a headless solve with step tracing.
//!
//! This example shows how to:
//! - Parse a puzzle from an 81-character string
//! - Run the backtracking solver with a [`LogObserver`]
//! - Print the solved grid, or report that the puzzle is unsolvable
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79
//! ```
//!
//! Trace every placement and undo:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example solve_puzzle -- <puzzle>
//! ```

use std::process;

use clap::Parser;
use gridstep_core::DigitGrid;
use gridstep_solver::{Backtracker, LogObserver, SearchGrid};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle cells in row-major order: digits 1-9, or `.`/`_`/`0` for
    /// empty cells. Whitespace is ignored.
    puzzle: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid: DigitGrid = match args.puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };
    let search = match SearchGrid::new(grid) {
        Ok(search) => search,
        Err(err) => {
            eprintln!("Invalid puzzle: {err}");
            process::exit(2);
        }
    };

    let mut solver = Backtracker::with_observer(search, LogObserver::new());
    if solver.solve() {
        println!("{}", solver.search_grid().snapshot());
        eprintln!(
            "Solved in {} steps ({} undone).",
            solver.observer().steps(),
            solver.observer().backtracks()
        );
    } else {
        eprintln!(
            "No solution exists ({} steps explored).",
            solver.observer().steps()
        );
        process::exit(1);
    }
}
