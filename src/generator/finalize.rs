//! Trim a raw placement into a [`PuzzleLayout`]

use super::placer::Placement;
use crate::core::{BLOCK, Grid, PlacedEntry, PuzzleLayout};

/// Inclusive bounding box of the letter cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min_row: usize,
    max_row: usize,
    min_col: usize,
    max_col: usize,
}

/// Block out empty cells, crop to the letters and shift entry starts
///
/// Returns `None` if the board holds no letters.
#[must_use]
pub fn finalize(placement: Placement) -> Option<PuzzleLayout> {
    let Placement { board, entries } = placement;
    let bounds = letter_bounds(&board)?;

    let trimmed: Vec<Vec<char>> = (bounds.min_row..=bounds.max_row)
        .map(|row| {
            board.row(row)[bounds.min_col..=bounds.max_col]
                .iter()
                .map(|cell| cell.map_or(BLOCK, char::from))
                .collect()
        })
        .collect();

    let entries = entries
        .into_iter()
        .map(|entry| {
            let (row, col) = entry.start;
            PlacedEntry {
                start: (row - bounds.min_row, col - bounds.min_col),
                ..entry
            }
        })
        .collect();

    Some(PuzzleLayout::from_parts(trimmed, entries))
}

fn letter_bounds(board: &Grid<Option<u8>>) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    for (r, row) in board.iter_rows().enumerate() {
        for (c, _) in row.iter().enumerate().filter(|(_, cell)| cell.is_some()) {
            bounds = Some(match bounds {
                None => Bounds {
                    min_row: r,
                    max_row: r,
                    min_col: c,
                    max_col: c,
                },
                Some(b) => Bounds {
                    min_row: b.min_row.min(r),
                    max_row: b.max_row.max(r),
                    min_col: b.min_col.min(c),
                    max_col: b.max_col.max(c),
                },
            });
        }
    }
    bounds
}
