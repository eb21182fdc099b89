//! Layout check command
//!
//! Reads a serialized layout (bare, or wrapped in slot data) and verifies the
//! crossword rules on it.

use crate::core::{LayoutError, PuzzleLayout};
use crate::slot::SlotData;

/// Result of checking a layout
pub struct CheckReport {
    pub rows: usize,
    pub cols: usize,
    pub entries: usize,
    pub letter_cells: usize,
    pub verdict: Result<(), LayoutError>,
}

impl CheckReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Parse a layout from JSON and verify it
///
/// Accepts either a bare layout or a slot payload with a `puzzle_layout` field.
///
/// # Errors
///
/// Returns an error if the text is not a layout in either shape.
pub fn check_layout_json(text: &str) -> Result<CheckReport, String> {
    let layout = match serde_json::from_str::<PuzzleLayout>(text) {
        Ok(layout) => layout,
        Err(layout_err) => serde_json::from_str::<SlotData>(text)
            .map(|slot| slot.puzzle_layout)
            .map_err(|_| format!("Invalid layout JSON: {layout_err}"))?,
    };
    Ok(check_layout(&layout))
}

/// Verify an in-memory layout
#[must_use]
pub fn check_layout(layout: &PuzzleLayout) -> CheckReport {
    CheckReport {
        rows: layout.rows(),
        cols: layout.cols(),
        entries: layout.entry_count(),
        letter_cells: layout.letter_cells(),
        verdict: layout.verify(),
    }
}
