//! Board position (x, y) coordinate types.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, leftmost is 0) and `y` is the row (0-8, topmost
/// is 0). Positions display in standard sudoku notation, `r{row}c{col}` with
/// 1-based indices.
///
/// # Examples
///
/// ```
/// use gridstep_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.box_index(), 1);
/// assert_eq!(pos.to_string(), "r3c5");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 box containing this position.
    ///
    /// Boxes are numbered 0-8, left to right, top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstep_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(8, 0).box_index(), 2);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(8, 8).box_index(), 8);
    /// ```
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn cell_index(self) -> u8 {
        self.y * 9 + self.x
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_cell_index(index: u8) -> Self {
        assert!(index < 81);
        Self {
            x: index % 9,
            y: index / 9,
        }
    }

    /// Returns an iterator over all 81 positions in row-major order.
    ///
    /// This is the scan order used to build the solver's empty-cell list.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridstep_core::Position;
    ///
    /// let all: Vec<_> = Position::all().collect();
    /// assert_eq!(all.len(), 81);
    /// assert_eq!(all[0], Position::new(0, 0));
    /// assert_eq!(all[9], Position::new(0, 1));
    /// assert_eq!(all[80], Position::new(8, 8));
    /// ```
    #[must_use]
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_cell_index)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.y + 1, self.x + 1)
    }
}
