//! Backtracking solver for 9×9 sudoku puzzles.
//!
//! The solver performs a depth-first search over the empty cells of a puzzle,
//! trying candidate digits in ascending order and undoing placements that
//! cannot be extended to a full solution (chronological backtracking). After
//! every tentative placement and every undo it notifies a [`StepObserver`],
//! so visualizers and loggers can follow the search without the solver
//! knowing anything about rendering or timing.
//!
//! # Overview
//!
//! - [`SearchGrid`]: the board plus per-row/column/box used-digit sets and
//!   the fixed list of originally-empty cells
//! - [`Backtracker`]: the recursive try/undo search engine
//! - [`StepObserver`]: the capability implemented by step consumers
//! - [`solve_grid`]: one-call convenience entry point
//!
//! # Examples
//!
//! ```
//! use gridstep_core::DigitGrid;
//! use gridstep_solver::solve_grid;
//!
//! let puzzle: DigitGrid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let solution = solve_grid(&puzzle)?.expect("puzzle is solvable");
//! assert!(solution.is_full());
//! # Ok::<(), gridstep_solver::SolverError>(())
//! ```

pub use self::{backtrack::*, error::*, observer::*, search_grid::*};

mod backtrack;
mod error;
mod observer;
mod search_grid;
