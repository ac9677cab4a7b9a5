//! The recursive try/undo search engine.

use gridstep_core::{Digit, DigitGrid, Position};

use crate::{NopObserver, SearchGrid, SolveControl, SolverError, StepKind, StepObserver};

/// Internal result of one recursion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    /// Every empty cell is assigned; the board is solved.
    Solved,
    /// All nine candidates failed at this level; the caller must undo.
    Exhausted,
    /// The observer requested cancellation; unwind without further undo.
    Aborted,
}

/// A chronological backtracking solver over a [`SearchGrid`].
///
/// The engine iterates the grid's empty-cell list in its fixed order. At
/// each cell it tries the digits 1-9 in ascending order, skipping candidates
/// that fail the direct legality check, and recurses after each successful
/// placement. A placement whose subtree fails is undone before the next
/// candidate is tried, so on overall failure the grid is returned to its
/// pre-solve state. There is no constraint propagation and no variable
/// ordering heuristic; the legality check is the only pruning.
///
/// The observer is notified after every placement and every undo.
///
/// # Examples
///
/// ```
/// use gridstep_core::DigitGrid;
/// use gridstep_solver::{Backtracker, SearchGrid};
///
/// let puzzle: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// let mut solver = Backtracker::new(SearchGrid::new(puzzle)?);
/// assert!(solver.solve());
/// assert!(solver.search_grid().snapshot().is_full());
/// # Ok::<(), gridstep_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Backtracker<O = NopObserver> {
    grid: SearchGrid,
    observer: O,
    outcome: Option<bool>,
}

impl Backtracker<NopObserver> {
    /// Creates a solver with no observer.
    #[must_use]
    pub fn new(grid: SearchGrid) -> Self {
        Self::with_observer(grid, NopObserver)
    }
}

impl<O> Backtracker<O>
where
    O: StepObserver,
{
    /// Creates a solver that reports every step to `observer`.
    #[must_use]
    pub fn with_observer(grid: SearchGrid, observer: O) -> Self {
        Self {
            grid,
            observer,
            outcome: None,
        }
    }

    /// Runs the search and returns `true` if a solution was found.
    ///
    /// On success the grid holds the completed board; every placement along
    /// the successful branch is permanent. On failure (no completion exists,
    /// or the observer aborted) `false` is returned; if no abort occurred
    /// the grid is bit-for-bit equal to its pre-solve state, since every
    /// tentative placement was undone on the way out.
    ///
    /// The search runs at most once: repeated calls return the memoized
    /// first outcome without touching the grid again.
    pub fn solve(&mut self) -> bool {
        if let Some(solved) = self.outcome {
            return solved;
        }
        let solved = self.search(0) == Search::Solved;
        self.outcome = Some(solved);
        solved
    }

    fn search(&mut self, index: usize) -> Search {
        let Some(&pos) = self.grid.empty_cells().get(index) else {
            return Search::Solved;
        };
        for digit in Digit::ALL {
            if !self.grid.is_legal(pos, digit) {
                continue;
            }
            self.grid.place(pos, digit);
            if self.notify(pos, StepKind::Placement).is_abort() {
                return Search::Aborted;
            }
            match self.search(index + 1) {
                Search::Solved => return Search::Solved,
                Search::Aborted => return Search::Aborted,
                Search::Exhausted => {
                    self.grid.remove(pos, digit);
                    if self.notify(pos, StepKind::Backtrack).is_abort() {
                        return Search::Aborted;
                    }
                }
            }
        }
        Search::Exhausted
    }

    fn notify(&mut self, pos: Position, kind: StepKind) -> SolveControl {
        self.observer.on_step(self.grid.snapshot(), pos, kind)
    }

    /// The search state, including the current board.
    #[must_use]
    pub fn search_grid(&self) -> &SearchGrid {
        &self.grid
    }

    /// The observer passed to [`with_observer`].
    ///
    /// [`with_observer`]: Backtracker::with_observer
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the solver and returns the search state.
    #[must_use]
    pub fn into_search_grid(self) -> SearchGrid {
        self.grid
    }
}

/// Solves a puzzle in one call.
///
/// Returns `Ok(Some(solution))` for a solvable puzzle, `Ok(None)` for a
/// valid puzzle with no completion.
///
/// # Errors
///
/// Returns [`SolverError::DuplicateClue`] if the input board already
/// violates a uniqueness constraint.
///
/// # Examples
///
/// ```
/// use gridstep_core::DigitGrid;
/// use gridstep_solver::solve_grid;
///
/// let empty = DigitGrid::new();
/// let solution = solve_grid(&empty)?.expect("empty board is solvable");
/// assert!(solution.is_full());
/// # Ok::<(), gridstep_solver::SolverError>(())
/// ```
pub fn solve_grid(grid: &DigitGrid) -> Result<Option<DigitGrid>, SolverError> {
    let mut solver = Backtracker::new(SearchGrid::new(*grid)?);
    if solver.solve() {
        Ok(Some(solver.into_search_grid().into_grid()))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use gridstep_core::DigitSet;

    use super::*;
    use crate::LogObserver;

    const CLASSIC: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    const CLASSIC_SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    /// Row 0 filled with 1-8, and a 9 below the last cell: the first empty
    /// cell has no legal candidate, so the board is valid but unsolvable.
    const UNSOLVABLE: &str = "
        123 456 78_
        ___ ___ __9
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
        ___ ___ ___
    ";

    fn grid(s: &str) -> DigitGrid {
        DigitGrid::from_str(s).unwrap()
    }

    fn assert_valid_solution(puzzle: &DigitGrid, solution: &DigitGrid) {
        assert!(solution.is_full());
        for i in 0..9 {
            assert_eq!(solution.row_digits(i), DigitSet::FULL, "row {i}");
            assert_eq!(solution.col_digits(i), DigitSet::FULL, "col {i}");
            assert_eq!(solution.box_digits(i), DigitSet::FULL, "box {i}");
        }
        // clues are never overwritten
        for (pos, cell) in puzzle.cells() {
            if let Some(digit) = cell {
                assert_eq!(solution.get(pos), Some(digit), "clue at {pos}");
            }
        }
    }

    #[test]
    fn test_solves_classic_puzzle() {
        let puzzle = grid(CLASSIC);
        let solution = solve_grid(&puzzle).unwrap().expect("classic is solvable");
        assert_valid_solution(&puzzle, &solution);
        assert_eq!(solution, grid(CLASSIC_SOLUTION));
    }

    #[test]
    fn test_solves_empty_board() {
        let puzzle = DigitGrid::new();
        let solution = solve_grid(&puzzle).unwrap().expect("empty is solvable");
        assert_valid_solution(&puzzle, &solution);
    }

    #[test]
    fn test_unsolvable_returns_false_and_restores_grid() {
        let search = SearchGrid::new(grid(UNSOLVABLE)).unwrap();
        let before = search.clone();

        let mut solver = Backtracker::new(search);
        assert!(!solver.solve());
        assert_eq!(*solver.search_grid(), before);

        assert_eq!(solve_grid(&grid(UNSOLVABLE)).unwrap(), None);
    }

    #[test]
    fn test_full_board_succeeds_with_zero_steps() {
        let puzzle = grid(CLASSIC_SOLUTION);
        let search = SearchGrid::new(puzzle).unwrap();
        assert!(search.empty_cells().is_empty());

        let mut solver = Backtracker::with_observer(search, LogObserver::new());
        assert!(solver.solve());
        assert_eq!(solver.observer().steps(), 0);
        assert_eq!(*solver.search_grid().snapshot(), puzzle);
    }

    #[test]
    fn test_observer_sees_placements_and_undos() {
        let search = SearchGrid::new(grid(CLASSIC)).unwrap();
        let first_empty = search.empty_cells()[0];

        let mut steps: Vec<(Position, StepKind, bool)> = Vec::new();
        let mut solver = Backtracker::with_observer(
            search,
            |snapshot: &DigitGrid, pos: Position, kind: StepKind| {
                steps.push((pos, kind, snapshot.get(pos).is_some()));
                SolveControl::Continue
            },
        );
        assert!(solver.solve());
        drop(solver);

        // the first step is a tentative placement at the first empty cell
        let &(pos, kind, filled) = steps.first().unwrap();
        assert_eq!(pos, first_empty);
        assert_eq!(kind, StepKind::Placement);
        assert!(filled);

        // after a placement the cell is filled, after an undo it is empty
        for &(_, kind, filled) in &steps {
            match kind {
                StepKind::Placement => assert!(filled),
                StepKind::Backtrack => assert!(!filled),
            }
        }

        // placements outnumber undos by exactly the number of empty cells
        let placements = steps
            .iter()
            .filter(|(_, kind, _)| kind.is_placement())
            .count();
        let undos = steps.len() - placements;
        assert_eq!(placements - undos, 51);
    }

    #[test]
    fn test_observer_abort_stops_search() {
        let search = SearchGrid::new(grid(CLASSIC)).unwrap();

        let mut seen = 0u32;
        let mut solver = Backtracker::with_observer(
            search,
            move |_: &DigitGrid, _: Position, _: StepKind| {
                seen += 1;
                if seen >= 5 {
                    SolveControl::Abort
                } else {
                    SolveControl::Continue
                }
            },
        );
        assert!(!solver.solve());
        // aborted mid-search: the grid is not restored and not solved
        assert!(!solver.search_grid().snapshot().is_full());
    }

    #[test]
    fn test_solve_is_memoized() {
        let mut solver = Backtracker::new(SearchGrid::new(grid(CLASSIC)).unwrap());
        assert!(solver.solve());
        let after_first = solver.search_grid().clone();
        assert!(solver.solve());
        assert_eq!(*solver.search_grid(), after_first);
    }

    #[test]
    fn test_duplicate_clue_is_rejected() {
        let board = format!("55{}", ".".repeat(79));
        let err = solve_grid(&grid(&board)).unwrap_err();
        assert!(matches!(err, SolverError::DuplicateClue { .. }));
    }
}
