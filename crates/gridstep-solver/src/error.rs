//! Solver error types.

use derive_more::{Display, Error};
use gridstep_core::{Digit, Position};

/// Error returned when a puzzle cannot be accepted by the solver.
///
/// "Unsolvable" is not an error: a puzzle with no completion makes
/// [`Backtracker::solve`] return `false` and [`solve_grid`] return
/// `Ok(None)`. `SolverError` only covers input that violates the sudoku
/// constraints before the search even starts.
///
/// [`Backtracker::solve`]: crate::Backtracker::solve
/// [`solve_grid`]: crate::solve_grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolverError {
    /// A given clue repeats a digit already present in its row, column or
    /// box.
    #[display("clue {digit} at {pos} duplicates a digit in its row, column or box")]
    DuplicateClue {
        /// Position of the offending clue.
        pos: Position,
        /// The duplicated digit.
        digit: Digit,
    },
}
