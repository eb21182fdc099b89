//! Finished crossword layout
//!
//! A [`PuzzleLayout`] is the immutable result of a successful attempt: the
//! trimmed board, its playable mask and the placed entries in placement order.
//! It serializes to the shape the host integration consumes.

use super::entry::{Direction, PlacedEntry};
use super::grid::Grid;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Marker for cells that hold no letter
pub const BLOCK: char = '#';

/// Mask character for a playable cell
const OPEN: char = '.';

/// A trimmed, block-masked crossword layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleLayout {
    board: Vec<Vec<char>>,
    mask: Vec<String>,
    entries: Vec<PlacedEntry>,
}

/// First property a layout was found to violate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Empty,
    Ragged { row: usize },
    MaskMismatch { row: usize },
    DuplicateWord(String),
    OutOfBounds(String),
    LetterMismatch { word: String, cell: (usize, usize) },
    SameOrientationOverlap { word: String, cell: (usize, usize) },
    UncoveredCell { cell: (usize, usize) },
    Disconnected(String),
    LooseBorder,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Layout has no cells or no entries"),
            Self::Ragged { row } => write!(f, "Board row {row} has a different width"),
            Self::MaskMismatch { row } => write!(f, "Mask row {row} does not match the board"),
            Self::DuplicateWord(word) => write!(f, "Word {word} appears more than once"),
            Self::OutOfBounds(word) => write!(f, "Word {word} runs off the board"),
            Self::LetterMismatch { word, cell } => {
                write!(f, "Word {word} disagrees with the board at {cell:?}")
            }
            Self::SameOrientationOverlap { word, cell } => {
                write!(f, "Word {word} overlaps a parallel word at {cell:?}")
            }
            Self::UncoveredCell { cell } => {
                write!(f, "Letter at {cell:?} belongs to no entry")
            }
            Self::Disconnected(word) => write!(f, "Word {word} crosses no other entry"),
            Self::LooseBorder => write!(f, "Board has a fully blocked border row or column"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl PuzzleLayout {
    /// Build a layout from a trimmed board; the mask is derived from the board
    pub(crate) fn from_parts(board: Vec<Vec<char>>, entries: Vec<PlacedEntry>) -> Self {
        let mask = board
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&cell| if cell == BLOCK { BLOCK } else { OPEN })
                    .collect()
            })
            .collect();
        Self {
            board,
            mask,
            entries,
        }
    }

    #[must_use]
    pub fn board(&self) -> &[Vec<char>] {
        &self.board
    }

    #[must_use]
    pub fn mask(&self) -> &[String] {
        &self.mask
    }

    #[must_use]
    pub fn entries(&self) -> &[PlacedEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.board.first().map_or(0, Vec::len)
    }

    /// Number of letter cells
    #[must_use]
    pub fn letter_cells(&self) -> usize {
        self.board
            .iter()
            .flatten()
            .filter(|&&cell| cell != BLOCK)
            .count()
    }

    /// Check the structural crossword rules
    ///
    /// Verifies that the board is rectangular with a matching mask, no word is
    /// repeated, every entry spells its word on the board, no two parallel
    /// entries share a cell, every letter belongs to an entry, the entries form
    /// one connected crossing graph and the bounding box is tight.
    ///
    /// # Errors
    /// Returns the first [`LayoutError`] found.
    pub fn verify(&self) -> Result<(), LayoutError> {
        let rows = self.rows();
        let cols = self.cols();
        if rows == 0 || cols == 0 || self.entries.is_empty() {
            return Err(LayoutError::Empty);
        }
        self.verify_shape(cols)?;

        let mut seen = FxHashSet::default();
        let mut across = Grid::new(rows, cols, false);
        let mut down = Grid::new(rows, cols, false);
        // Owner entry per cell and orientation, for the crossing graph
        let mut owners: Grid<[Option<usize>; 2]> = Grid::new(rows, cols, [None, None]);

        for (id, entry) in self.entries.iter().enumerate() {
            if !seen.insert(entry.word.as_str()) {
                return Err(LayoutError::DuplicateWord(entry.word.clone()));
            }
            let mask = match entry.direction {
                Direction::Across => &mut across,
                Direction::Down => &mut down,
            };
            let slot = usize::from(entry.direction == Direction::Down);
            for (cell, letter) in entry.cells() {
                let Some(&found) = self.board.get(cell.0).and_then(|row| row.get(cell.1)) else {
                    return Err(LayoutError::OutOfBounds(entry.word.clone()));
                };
                if found != char::from(letter) {
                    return Err(LayoutError::LetterMismatch {
                        word: entry.word.clone(),
                        cell,
                    });
                }
                if mask[cell] {
                    return Err(LayoutError::SameOrientationOverlap {
                        word: entry.word.clone(),
                        cell,
                    });
                }
                mask[cell] = true;
                owners[cell][slot] = Some(id);
            }
        }

        for (r, row) in self.board.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell != BLOCK && !across[(r, c)] && !down[(r, c)] {
                    return Err(LayoutError::UncoveredCell { cell: (r, c) });
                }
            }
        }

        self.verify_connected(&owners)?;
        self.verify_tight(rows, cols)
    }

    fn verify_shape(&self, cols: usize) -> Result<(), LayoutError> {
        if self.mask.len() != self.board.len() {
            return Err(LayoutError::MaskMismatch {
                row: self.mask.len().min(self.board.len()),
            });
        }
        for (r, (row, mask_row)) in self.board.iter().zip(&self.mask).enumerate() {
            if row.len() != cols {
                return Err(LayoutError::Ragged { row: r });
            }
            let consistent = mask_row.chars().count() == cols
                && row
                    .iter()
                    .zip(mask_row.chars())
                    .all(|(&cell, m)| (cell == BLOCK) == (m == BLOCK) && (m == BLOCK || m == OPEN));
            if !consistent {
                return Err(LayoutError::MaskMismatch { row: r });
            }
        }
        Ok(())
    }

    fn verify_connected(&self, owners: &Grid<[Option<usize>; 2]>) -> Result<(), LayoutError> {
        let count = self.entries.len();
        let mut neighbors: Vec<Vec<usize>> = vec![Vec::new(); count];
        for row in owners.iter_rows() {
            for pair in row {
                if let [Some(a), Some(b)] = *pair {
                    neighbors[a].push(b);
                    neighbors[b].push(a);
                }
            }
        }

        let mut visited = vec![false; count];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        while let Some(id) = queue.pop_front() {
            for &next in &neighbors[id] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        match visited.iter().position(|&v| !v) {
            Some(id) => Err(LayoutError::Disconnected(self.entries[id].word.clone())),
            None => Ok(()),
        }
    }

    fn verify_tight(&self, rows: usize, cols: usize) -> Result<(), LayoutError> {
        let open = |r: usize, c: usize| self.board[r][c] != BLOCK;
        let top = (0..cols).any(|c| open(0, c));
        let bottom = (0..cols).any(|c| open(rows - 1, c));
        let left = (0..rows).any(|r| open(r, 0));
        let right = (0..rows).any(|r| open(r, cols - 1));
        if top && bottom && left && right {
            Ok(())
        } else {
            Err(LayoutError::LooseBorder)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn board(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|row| row.chars().collect()).collect()
    }

    fn placed(word: &str, direction: Direction, start: (usize, usize), index: usize) -> PlacedEntry {
        PlacedEntry::from_catalog(&WordEntry::new(word, "", "A"), direction, start, index)
    }

    /// CAT across, TAR down from its T, CAR across ending on the R
    fn sample() -> PuzzleLayout {
        PuzzleLayout::from_parts(
            board(&["CAT", "##A", "CAR"]),
            vec![
                placed("CAT", Direction::Across, (0, 0), 1),
                placed("TAR", Direction::Down, (0, 2), 2),
                placed("CAR", Direction::Across, (2, 0), 3),
            ],
        )
    }

    #[test]
    fn mask_is_derived_from_board() {
        let layout = sample();
        assert_eq!(layout.mask(), &["...", "##.", "..."]);
        assert_eq!(layout.rows(), 3);
        assert_eq!(layout.cols(), 3);
        assert_eq!(layout.letter_cells(), 7);
    }

    #[test]
    fn valid_layout_verifies() {
        assert_eq!(sample().verify(), Ok(()));
    }

    #[test]
    fn letter_mismatch_detected() {
        let layout = PuzzleLayout::from_parts(
            board(&["CAT", "A##", "ART"]),
            vec![
                placed("CAT", Direction::Across, (0, 0), 1),
                placed("COR", Direction::Down, (0, 0), 2),
            ],
        );
        assert!(matches!(
            layout.verify(),
            Err(LayoutError::LetterMismatch { cell: (1, 0), .. })
        ));
    }

    #[test]
    fn duplicate_word_detected() {
        let layout = PuzzleLayout::from_parts(
            board(&["CAT", "A##", "T##"]),
            vec![
                placed("CAT", Direction::Across, (0, 0), 1),
                placed("CAT", Direction::Down, (0, 0), 2),
            ],
        );
        assert_eq!(
            layout.verify(),
            Err(LayoutError::DuplicateWord("CAT".to_string()))
        );
    }

    #[test]
    fn parallel_overlap_detected() {
        let layout = PuzzleLayout::from_parts(
            board(&["CATS"]),
            vec![
                placed("CAT", Direction::Across, (0, 0), 1),
                placed("ATS", Direction::Across, (0, 1), 2),
            ],
        );
        assert!(matches!(
            layout.verify(),
            Err(LayoutError::SameOrientationOverlap { .. })
        ));
    }

    #[test]
    fn disconnected_entry_detected() {
        let layout = PuzzleLayout::from_parts(
            board(&["CAT", "###", "DOG"]),
            vec![
                placed("CAT", Direction::Across, (0, 0), 1),
                placed("DOG", Direction::Across, (2, 0), 2),
            ],
        );
        assert_eq!(
            layout.verify(),
            Err(LayoutError::Disconnected("DOG".to_string()))
        );
    }

    #[test]
    fn loose_border_detected() {
        let layout = PuzzleLayout::from_parts(
            board(&["CAT#", "A###", "R###"]),
            vec![
                placed("CAT", Direction::Across, (0, 0), 1),
                placed("CAR", Direction::Down, (0, 0), 2),
            ],
        );
        assert_eq!(layout.verify(), Err(LayoutError::LooseBorder));
    }

    #[test]
    fn stray_letter_detected() {
        let layout = PuzzleLayout::from_parts(
            board(&["CAT", "A#X", "R##"]),
            vec![
                placed("CAT", Direction::Across, (0, 0), 1),
                placed("CAR", Direction::Down, (0, 0), 2),
            ],
        );
        assert_eq!(
            layout.verify(),
            Err(LayoutError::UncoveredCell { cell: (1, 2) })
        );
    }

    #[test]
    fn out_of_bounds_entry_detected() {
        let layout = PuzzleLayout::from_parts(
            board(&["CA"]),
            vec![placed("CAT", Direction::Across, (0, 0), 1)],
        );
        assert_eq!(
            layout.verify(),
            Err(LayoutError::OutOfBounds("CAT".to_string()))
        );
    }

    #[test]
    fn empty_layout_rejected() {
        let layout = PuzzleLayout::from_parts(Vec::new(), Vec::new());
        assert_eq!(layout.verify(), Err(LayoutError::Empty));
    }

    #[test]
    fn serializes_host_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["board"][1], serde_json::json!(["#", "#", "A"]));
        assert_eq!(json["mask"][0], "...");
        assert_eq!(json["entries"][2]["start"], serde_json::json!([2, 0]));
        assert_eq!(json["entries"][1]["direction"], "down");
    }

    #[test]
    fn deserialized_layout_round_trips() {
        let layout = sample();
        let text = serde_json::to_string(&layout).unwrap();
        let parsed: PuzzleLayout = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, layout);
        assert_eq!(parsed.verify(), Ok(()));
    }
}
