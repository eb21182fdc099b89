//! Catalog records and placed entries
//!
//! A [`WordEntry`] is what the catalog supplies; a [`PlacedEntry`] is a word that
//! made it onto a grid, with its orientation and start cell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog record: an uppercase answer, its clue and the category it was listed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub clue: String,
    pub category: String,
}

impl WordEntry {
    /// Create a catalog record, uppercasing the answer
    ///
    /// # Examples
    /// ```
    /// use crossword_gen::core::WordEntry;
    ///
    /// let entry = WordEntry::new("cat", "Feline pet", "ANIMALS");
    /// assert_eq!(entry.word, "CAT");
    /// ```
    pub fn new(
        word: impl Into<String>,
        clue: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into().to_uppercase(),
            clue: clue.into(),
            category: category.into(),
        }
    }

    /// Whether the answer can be written into grid cells
    ///
    /// Only non-empty ASCII uppercase answers are placeable.
    #[must_use]
    pub fn is_placeable(&self) -> bool {
        !self.word.is_empty() && self.word.bytes().all(|b| b.is_ascii_uppercase())
    }
}

/// Orientation of a word on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Unit step `(row, col)` along this orientation
    #[inline]
    #[must_use]
    pub const fn step(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// The perpendicular orientation
    #[inline]
    #[must_use]
    pub const fn crossing(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Across => "across",
            Self::Down => "down",
        })
    }
}

/// A word committed to a grid
///
/// `start` is `(row, col)` and serializes as a two-element array.
/// `location_index` is the 1-based rank in placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedEntry {
    pub word: String,
    pub clue: String,
    pub category: String,
    pub direction: Direction,
    pub start: (usize, usize),
    pub location_index: usize,
}

impl PlacedEntry {
    pub(crate) fn from_catalog(
        entry: &WordEntry,
        direction: Direction,
        start: (usize, usize),
        location_index: usize,
    ) -> Self {
        Self {
            word: entry.word.clone(),
            clue: entry.clue.clone(),
            category: entry.category.clone(),
            direction,
            start,
            location_index,
        }
    }

    /// Number of cells the entry covers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells covered by the entry, paired with the letter expected there
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), u8)> + '_ {
        let (dr, dc) = self.direction.step();
        let (row, col) = self.start;
        self.word
            .bytes()
            .enumerate()
            .map(move |(i, letter)| ((row + dr * i, col + dc * i), letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_entry_uppercases_answer() {
        let entry = WordEntry::new("Crane", "Bird or machine", "EASY WORDS");
        assert_eq!(entry.word, "CRANE");
        assert_eq!(entry.clue, "Bird or machine");
        assert_eq!(entry.category, "EASY WORDS");
    }

    #[test]
    fn placeable_requires_ascii_letters() {
        assert!(WordEntry::new("crane", "", "").is_placeable());
        assert!(!WordEntry::new("", "", "").is_placeable());
        assert!(!WordEntry::new("ice cream", "", "").is_placeable());
        assert!(!WordEntry::new("r2d2", "", "").is_placeable());
        assert!(!WordEntry::new("café", "", "").is_placeable());
    }

    #[test]
    fn direction_steps_and_crossing() {
        assert_eq!(Direction::Across.step(), (0, 1));
        assert_eq!(Direction::Down.step(), (1, 0));
        assert_eq!(Direction::Across.crossing(), Direction::Down);
        assert_eq!(Direction::Down.crossing(), Direction::Across);
    }

    #[test]
    fn placed_entry_cells_follow_direction() {
        let source = WordEntry::new("CAT", "", "");
        let across = PlacedEntry::from_catalog(&source, Direction::Across, (2, 1), 1);
        let cells: Vec<_> = across.cells().collect();
        assert_eq!(cells, vec![((2, 1), b'C'), ((2, 2), b'A'), ((2, 3), b'T')]);

        let down = PlacedEntry::from_catalog(&source, Direction::Down, (0, 4), 2);
        let cells: Vec<_> = down.cells().map(|(cell, _)| cell).collect();
        assert_eq!(cells, vec![(0, 4), (1, 4), (2, 4)]);
    }

    #[test]
    fn placed_entry_serializes_wire_shape() {
        let source = WordEntry::new("ART", "Painting, e.g.", "A");
        let entry = PlacedEntry::from_catalog(&source, Direction::Down, (3, 0), 2);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["direction"], "down");
        assert_eq!(json["start"], serde_json::json!([3, 0]));
        assert_eq!(json["location_index"], 2);
        assert_eq!(json["word"], "ART");
    }
}
