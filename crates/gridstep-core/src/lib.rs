//! Core data structures for the gridstep sudoku solver.
//!
//! This crate provides the board-level data model shared by the solver and
//! any presentation layer built on top of it.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A set of digits backed by a 16-bit mask
//! - [`position`]: Board position (x, y) coordinates
//! - [`grid`]: The 9×9 grid of optional digits, with parsing and formatting
//!
//! # Examples
//!
//! ```
//! use gridstep_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(4, 4), Some(Digit::D5));
//!
//! assert_eq!(grid.get(Position::new(4, 4)), Some(Digit::D5));
//! assert!(!grid.is_full());
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    position::Position,
};
