//! The 9×9 grid of optional digits, with parsing and formatting.
//!
//! # Text format
//!
//! [`DigitGrid`] parses from text containing exactly 81 significant
//! characters: digits `1`-`9` for filled cells and `.`, `_` or `0` for empty
//! cells. All whitespace is ignored, so puzzles can be written as a single
//! line or laid out block by block:
//!
//! ```
//! use gridstep_core::DigitGrid;
//!
//! let grid: DigitGrid = "
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
//! assert_eq!(grid.filled_count(), 30);
//! ```

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9×9 grid of cells, each either a digit 1-9 or empty.
///
/// Cells are stored in row-major order and addressed by [`Position`]. The
/// grid is a plain value type; solving state (used-digit sets, search order)
/// lives in the solver crate.
///
/// # Examples
///
/// ```
/// use gridstep_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert!(grid.get(Position::new(0, 0)).is_none());
///
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.cell_index())]
    }

    /// Sets or clears the cell at a position.
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[usize::from(pos.cell_index())] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Digit>)> {
        Position::all().map(|pos| (pos, self.get(pos)))
    }

    /// Returns the set of digits present in a row.
    ///
    /// Duplicates collapse, so a set of 9 digits does not by itself prove the
    /// row is valid.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not in the range 0-8.
    #[must_use]
    pub fn row_digits(&self, y: u8) -> DigitSet {
        (0..9)
            .filter_map(|x| self.get(Position::new(x, y)))
            .collect()
    }

    /// Returns the set of digits present in a column.
    ///
    /// # Panics
    ///
    /// Panics if `x` is not in the range 0-8.
    #[must_use]
    pub fn col_digits(&self, x: u8) -> DigitSet {
        (0..9)
            .filter_map(|y| self.get(Position::new(x, y)))
            .collect()
    }

    /// Returns the set of digits present in a 3×3 box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn box_digits(&self, box_index: u8) -> DigitSet {
        assert!(box_index < 9);
        let x0 = (box_index % 3) * 3;
        let y0 = (box_index / 3) * 3;
        (0..9)
            .filter_map(|i| self.get(Position::new(x0 + i % 3, y0 + i / 3)))
            .collect()
    }
}

/// Error returned when parsing a [`DigitGrid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A significant character was neither a digit nor an empty-cell marker.
    #[display("cell {cell} contains invalid character {found:?}")]
    InvalidCharacter {
        /// Row-major index (0-80) of the offending cell.
        cell: u8,
        /// The character that was found.
        found: char,
    },
    /// The input ended before 81 cells were read.
    #[display("expected 81 cells, found {found}")]
    NotEnoughCells {
        /// Number of cells that were read.
        found: u8,
    },
    /// The input contains more than 81 significant characters.
    #[display("expected 81 cells, found more")]
    TooManyCells,
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut index: u8 = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if index >= 81 {
                return Err(ParseGridError::TooManyCells);
            }
            let cell = match ch {
                '.' | '_' | '0' => None,
                _ => match Digit::from_char(ch) {
                    Some(digit) => Some(digit),
                    None => {
                        return Err(ParseGridError::InvalidCharacter {
                            cell: index,
                            found: ch,
                        });
                    }
                },
            };
            grid.set(Position::from_cell_index(index), cell);
            index += 1;
        }
        if index < 81 {
            return Err(ParseGridError::NotEnoughCells { found: index });
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    /// Formats the grid in the same block layout the parser accepts: one row
    /// per line, columns separated into groups of three.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x == 3 || x == 6 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
            if y < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

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

    #[test]
    fn test_parse_block_format() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(1, 0)), Some(Digit::D3));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_parse_line_format() {
        let line = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
        let grid: DigitGrid = line.parse().unwrap();
        assert_eq!(grid, CLASSIC.parse().unwrap());

        // '.' and '_' are interchangeable empty markers
        let dotted = line.replace('0', ".");
        let grid2: DigitGrid = dotted.parse().unwrap();
        assert_eq!(grid2, grid);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter {
                cell: 0,
                found: 'x'
            })
        );
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::NotEnoughCells { found: 3 })
        );
        assert_eq!(
            ".".repeat(82).parse::<DigitGrid>(),
            Err(ParseGridError::TooManyCells)
        );
    }

    #[test]
    fn test_unit_digit_sets() {
        let grid: DigitGrid = CLASSIC.parse().unwrap();
        assert_eq!(
            grid.row_digits(0),
            DigitSet::from_iter([Digit::D5, Digit::D3, Digit::D7])
        );
        assert_eq!(
            grid.col_digits(0),
            DigitSet::from_iter([Digit::D5, Digit::D6, Digit::D8, Digit::D4, Digit::D7])
        );
        assert_eq!(
            grid.box_digits(0),
            DigitSet::from_iter([Digit::D5, Digit::D3, Digit::D6, Digit::D9, Digit::D8])
        );
    }

    fn grid_strategy() -> impl Strategy<Value = DigitGrid> {
        proptest::collection::vec(proptest::option::of(1u8..=9), 81).prop_map(|cells| {
            let mut grid = DigitGrid::new();
            for (i, cell) in (0..).zip(cells) {
                grid.set(Position::from_cell_index(i), cell.map(Digit::from_value));
            }
            grid
        })
    }

    proptest! {
        #[test]
        fn prop_display_round_trips(grid in grid_strategy()) {
            let formatted = grid.to_string();
            let reparsed: DigitGrid = formatted.parse().unwrap();
            prop_assert_eq!(reparsed, grid);
        }
    }
}
