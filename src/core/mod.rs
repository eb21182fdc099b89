//! Core domain types for crossword layouts
//!
//! Catalog records, placed entries, dense grids and the finished layout.
//! Nothing in here draws random numbers; the generator owns all of that.

mod entry;
mod grid;
mod layout;

pub use entry::{Direction, PlacedEntry, WordEntry};
pub use grid::Grid;
pub use layout::{BLOCK, LayoutError, PuzzleLayout};
