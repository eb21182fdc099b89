//! Formatting utilities for terminal output

use crate::core::{BLOCK, PlacedEntry, PuzzleLayout};

/// Render the board as text rows, one character per cell separated by spaces
#[must_use]
pub fn render_board(layout: &PuzzleLayout) -> Vec<String> {
    layout
        .board()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| if cell == BLOCK { '·' } else { cell })
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// One-line description of an entry
#[must_use]
pub fn format_entry(entry: &PlacedEntry) -> String {
    let (row, col) = entry.start;
    format!(
        "{:>2}. {:<12} {:<6} ({row},{col})  {}",
        entry.location_index, entry.word, entry.direction, entry.clue
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Fill ratio of the layout's bounding box as a bar
#[must_use]
pub fn density_bar(layout: &PuzzleLayout, width: usize) -> String {
    let area = (layout.rows() * layout.cols()) as f64;
    create_progress_bar(layout.letter_cells() as f64, area, width)
}
