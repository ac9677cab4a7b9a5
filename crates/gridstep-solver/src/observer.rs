//! The step observer capability.
//!
//! The backtracking engine reports every tentative placement and every undo
//! through [`StepObserver`]. The engine knows nothing about what consumers
//! do with the notifications; a renderer can draw the board, a logger can
//! trace the search, a watchdog can abort it.

use derive_more::{Display, IsVariant};
use gridstep_core::{DigitGrid, Position};

/// What kind of search step just happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum StepKind {
    /// A digit was tentatively placed in a cell.
    #[display("placement")]
    Placement,
    /// A placement was undone because it could not be extended to a
    /// solution.
    #[display("backtrack")]
    Backtrack,
}

/// Whether the search should keep going after a step.
///
/// Returning [`Abort`] from an observer makes the engine unwind immediately
/// and report failure, without undoing the placements made so far. This is
/// the hook for cancellation: a caller that wants a timeout or a stop button
/// checks its condition inside the observer.
///
/// [`Abort`]: SolveControl::Abort
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum SolveControl {
    /// Continue the search.
    Continue,
    /// Stop the search immediately; `solve` reports failure.
    Abort,
}

/// A consumer of search steps.
///
/// `on_step` is called after every placement and every undo. `grid` is the
/// board as it looks after the step: on a [`StepKind::Placement`] the cell
/// at `pos` holds the tried digit, on a [`StepKind::Backtrack`] it is empty
/// again. Observers receive a shared snapshot and cannot mutate the board.
///
/// Closures with the matching signature implement this trait:
///
/// ```
/// use gridstep_core::{DigitGrid, Position};
/// use gridstep_solver::{Backtracker, SearchGrid, SolveControl, StepKind};
///
/// let grid = SearchGrid::new(DigitGrid::new())?;
/// let mut steps = 0u64;
/// let observer = |_: &DigitGrid, _: Position, _: StepKind| {
///     steps += 1;
///     SolveControl::Continue
/// };
/// let mut solver = Backtracker::with_observer(grid, observer);
/// assert!(solver.solve());
/// # Ok::<(), gridstep_solver::SolverError>(())
/// ```
pub trait StepObserver {
    /// Called after every placement and every undo.
    fn on_step(&mut self, grid: &DigitGrid, pos: Position, kind: StepKind) -> SolveControl;
}

impl<F> StepObserver for F
where
    F: FnMut(&DigitGrid, Position, StepKind) -> SolveControl,
{
    fn on_step(&mut self, grid: &DigitGrid, pos: Position, kind: StepKind) -> SolveControl {
        self(grid, pos, kind)
    }
}

/// An observer that ignores every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopObserver;

impl StepObserver for NopObserver {
    fn on_step(&mut self, _grid: &DigitGrid, _pos: Position, _kind: StepKind) -> SolveControl {
        SolveControl::Continue
    }
}

/// An observer that counts steps and traces them through the [`log`] facade.
///
/// Each step is emitted at `trace` level, so a headless run stays quiet
/// unless tracing is switched on (e.g. `RUST_LOG=trace` with `env_logger`).
///
/// # Examples
///
/// ```
/// use gridstep_core::DigitGrid;
/// use gridstep_solver::{Backtracker, LogObserver, SearchGrid};
///
/// let grid = SearchGrid::new(DigitGrid::new())?;
/// let mut solver = Backtracker::with_observer(grid, LogObserver::new());
/// solver.solve();
/// println!("{} steps", solver.observer().steps());
/// # Ok::<(), gridstep_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct LogObserver {
    steps: u64,
    backtracks: u64,
}

impl LogObserver {
    /// Creates a new observer with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of steps seen (placements plus undos).
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of undo steps seen.
    #[must_use]
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }
}

impl StepObserver for LogObserver {
    fn on_step(&mut self, grid: &DigitGrid, pos: Position, kind: StepKind) -> SolveControl {
        self.steps += 1;
        match kind {
            StepKind::Placement => {
                if let Some(digit) = grid.get(pos) {
                    log::trace!("step {}: try {digit} at {pos}", self.steps);
                }
            }
            StepKind::Backtrack => {
                self.backtracks += 1;
                log::trace!("step {}: undo at {pos}", self.steps);
            }
        }
        SolveControl::Continue
    }
}
