//! Search state for backtracking: the board plus used-digit bookkeeping.

use gridstep_core::{Digit, DigitGrid, DigitSet, Position};
use tinyvec::ArrayVec;

use crate::SolverError;

/// The mutable state of a backtracking search.
///
/// `SearchGrid` owns the board and keeps three families of used-digit sets
/// (one [`DigitSet`] per row, column and 3×3 box) in sync with every cell
/// assignment, so legality checks are O(1). It also records the list of
/// originally-empty cells in row-major scan order; that list is fixed for
/// the lifetime of the search and defines the variable order of the
/// backtracking engine.
///
/// # Invariant
///
/// After every [`place`] and [`remove`], a digit is in a row/column/box set
/// if and only if it is currently placed in a cell of that unit. [`place`]
/// and [`remove`] are exact inverses.
///
/// [`place`]: SearchGrid::place
/// [`remove`]: SearchGrid::remove
///
/// # Examples
///
/// ```
/// use gridstep_core::{Digit, DigitGrid, Position};
/// use gridstep_solver::SearchGrid;
///
/// let mut grid = SearchGrid::new(DigitGrid::new())?;
/// let pos = Position::new(0, 0);
///
/// assert!(grid.is_legal(pos, Digit::D5));
/// grid.place(pos, Digit::D5);
///
/// // 5 is now used up in row 0, column 0 and box 0
/// assert!(!grid.is_legal(Position::new(8, 0), Digit::D5));
/// assert!(!grid.is_legal(Position::new(0, 8), Digit::D5));
/// assert!(!grid.is_legal(Position::new(2, 2), Digit::D5));
/// # Ok::<(), gridstep_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGrid {
    grid: DigitGrid,
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    boxes: [DigitSet; 9],
    empty_cells: ArrayVec<[Position; 81]>,
}

impl SearchGrid {
    /// Builds the search state from an initial board.
    ///
    /// Every given clue is entered into its row, column and box set, and the
    /// remaining cells are collected into the empty-cell list in row-major
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::DuplicateClue`] if the input board already
    /// violates a uniqueness constraint. The reported position is the later
    /// of the two clashing clues in scan order.
    pub fn new(grid: DigitGrid) -> Result<Self, SolverError> {
        let mut state = Self {
            grid,
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
            empty_cells: ArrayVec::new(),
        };
        for (pos, cell) in grid.cells() {
            match cell {
                Some(digit) => {
                    if !state.is_legal(pos, digit) {
                        return Err(SolverError::DuplicateClue { pos, digit });
                    }
                    state.insert_into_units(pos, digit);
                }
                None => state.empty_cells.push(pos),
            }
        }
        Ok(state)
    }

    fn insert_into_units(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())].insert(digit);
        self.cols[usize::from(pos.x())].insert(digit);
        self.boxes[usize::from(pos.box_index())].insert(digit);
    }

    fn remove_from_units(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())].remove(digit);
        self.cols[usize::from(pos.x())].remove(digit);
        self.boxes[usize::from(pos.box_index())].remove(digit);
    }

    /// Returns `true` if the digit is absent from the position's row, column
    /// and box.
    ///
    /// Pure and O(1); repeated calls without an intervening [`place`] or
    /// [`remove`] return the same result.
    ///
    /// [`place`]: SearchGrid::place
    /// [`remove`]: SearchGrid::remove
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        !self.rows[usize::from(pos.y())].contains(digit)
            && !self.cols[usize::from(pos.x())].contains(digit)
            && !self.boxes[usize::from(pos.box_index())].contains(digit)
    }

    /// Places a digit in an empty cell and records it in the three unit
    /// sets.
    ///
    /// The cell must be empty and the placement must satisfy
    /// [`is_legal`]; both preconditions are checked with `debug_assert!`
    /// only, since the backtracking engine establishes them before every
    /// call.
    ///
    /// [`is_legal`]: SearchGrid::is_legal
    pub fn place(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.grid.get(pos).is_none(), "cell {pos} is not empty");
        debug_assert!(self.is_legal(pos, digit), "{digit} is not legal at {pos}");
        self.grid.set(pos, Some(digit));
        self.insert_into_units(pos, digit);
    }

    /// Clears a cell and removes its digit from the three unit sets.
    ///
    /// The cell must currently hold `digit` (checked with `debug_assert!`).
    /// This is the exact inverse of [`place`].
    ///
    /// [`place`]: SearchGrid::place
    pub fn remove(&mut self, pos: Position, digit: Digit) {
        debug_assert_eq!(self.grid.get(pos), Some(digit), "cell {pos} mismatch");
        self.grid.set(pos, None);
        self.remove_from_units(pos, digit);
    }

    /// Read-only access to the current board.
    #[must_use]
    pub fn snapshot(&self) -> &DigitGrid {
        &self.grid
    }

    /// The originally-empty cells, in row-major scan order.
    #[must_use]
    pub fn empty_cells(&self) -> &[Position] {
        &self.empty_cells
    }

    /// Consumes the search state and returns the board.
    #[must_use]
    pub fn into_grid(self) -> DigitGrid {
        self.grid
    }
}
