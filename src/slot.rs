//! Host slot contract
//!
//! Turns player-facing options into a generated layout plus the summary fields
//! the host integration stores alongside it.

use crate::core::{PuzzleLayout, WordEntry};
use crate::generator::{CategoryWeights, GenerateError, Generator, SearchSchedule, search};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fewest words a puzzle may be asked for
pub const MIN_WORDS: usize = 10;
/// Most words a puzzle may be asked for
pub const MAX_WORDS: usize = 30;
/// Most clues that may be revealed up front
pub const MAX_INITIAL_CLUES: usize = 40;

/// Player options as received from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotOptions {
    pub total_words: usize,
    pub initial_clues: usize,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            total_words: 25,
            initial_clues: 6,
        }
    }
}

impl SlotOptions {
    /// Requested word count clamped to [`MIN_WORDS`]..=[`MAX_WORDS`]
    #[must_use]
    pub fn target_words(&self) -> usize {
        self.total_words.clamp(MIN_WORDS, MAX_WORDS)
    }

    /// Up-front clue count clamped to [`MAX_INITIAL_CLUES`]
    #[must_use]
    pub fn initial_clues(&self) -> usize {
        self.initial_clues.min(MAX_INITIAL_CLUES)
    }
}

/// Payload handed to the host for one generated puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotData {
    /// Entries actually placed, which may differ from the request
    pub total_words: usize,
    pub initial_clues: usize,
    pub puzzle_layout: PuzzleLayout,
    pub puzzle_seed: u32,
    pub entry_count: usize,
}

/// Generate a puzzle for the given options and package it for the host
///
/// Uses the stock category weights and the default schedule.
///
/// # Errors
///
/// Returns [`GenerateError::Exhausted`] if the catalog cannot support a puzzle.
pub fn build_slot_data<R: Rng + ?Sized>(
    options: &SlotOptions,
    catalog: &[WordEntry],
    rng: &mut R,
) -> Result<SlotData, GenerateError> {
    let generator = Generator::new(catalog).with_weights(CategoryWeights::default_table());
    build_slot_data_with(options, &generator, &SearchSchedule::default(), rng)
}

/// [`build_slot_data`] with an explicit generator and schedule
///
/// # Errors
///
/// Returns [`GenerateError::Exhausted`] if no attempt was viable.
pub fn build_slot_data_with<R: Rng + ?Sized>(
    options: &SlotOptions,
    generator: &Generator<'_>,
    schedule: &SearchSchedule,
    rng: &mut R,
) -> Result<SlotData, GenerateError> {
    let generated = search(generator, schedule, options.target_words(), rng)?;
    let entry_count = generated.layout.entry_count();

    Ok(SlotData {
        total_words: entry_count,
        initial_clues: entry_count.min(options.initial_clues()),
        puzzle_layout: generated.layout,
        puzzle_seed: generated.seed,
        entry_count,
    })
}
