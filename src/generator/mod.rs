//! Crossword layout generation
//!
//! One attempt runs the pipeline
//! [`filter_candidates`] → [`weighted_shuffle`] → [`GridPlacer`] → [`finalize`]
//! against a single seeded RNG. [`search`] repeats attempts over a
//! [`SearchSchedule`] of grid sizes and keeps the layout closest to the target
//! entry count.

mod finalize;
mod orchestrator;
mod placer;
mod weights;

pub use finalize::finalize;
pub use orchestrator::{GenerateError, Generated, SearchSchedule, root_rng, search};
pub use placer::{
    AttemptSpec, GridPlacer, Placement, StarterDenylist, failure_budget, filter_candidates,
};
pub use weights::{CategoryWeights, DEFAULT_KEY, weighted_shuffle};

use crate::core::{PuzzleLayout, WordEntry};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Catalog plus the tunables shared by every attempt
///
/// # Examples
/// ```
/// use crossword_gen::core::WordEntry;
/// use crossword_gen::generator::{AttemptSpec, Generator};
///
/// let catalog = vec![
///     WordEntry::new("CAT", "Feline", "A"),
///     WordEntry::new("CAR", "Vehicle", "A"),
/// ];
/// let generator = Generator::new(&catalog);
/// if let Some(layout) = generator.attempt_seeded(&AttemptSpec::new(5, 5, 3, 2), 42) {
///     assert!(layout.verify().is_ok());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    catalog: &'a [WordEntry],
    weights: CategoryWeights,
    denylist: StarterDenylist,
}

impl<'a> Generator<'a> {
    /// Generator with neutral weights and the default starter denylist
    #[must_use]
    pub fn new(catalog: &'a [WordEntry]) -> Self {
        Self {
            catalog,
            weights: CategoryWeights::default(),
            denylist: StarterDenylist::default(),
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_denylist(mut self, denylist: StarterDenylist) -> Self {
        self.denylist = denylist;
        self
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a [WordEntry] {
        self.catalog
    }

    #[must_use]
    pub const fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Run one attempt, consuming randomness from `rng`
    ///
    /// Returns `None` when the attempt is not viable.
    pub fn attempt<R: Rng + ?Sized>(&self, spec: &AttemptSpec, rng: &mut R) -> Option<PuzzleLayout> {
        if spec.rows == 0 || spec.cols == 0 || self.catalog.is_empty() {
            return None;
        }

        let candidates = filter_candidates(self.catalog, spec);
        if candidates.is_empty() {
            debug!(
                "No catalog words fit a {}x{} grid with min length {}",
                spec.rows, spec.cols, spec.min_length
            );
            return None;
        }

        let ordered = weighted_shuffle(candidates, &self.weights, rng);
        if ordered.is_empty() {
            debug!("Every candidate has zero category weight");
            return None;
        }

        let placement = GridPlacer::new(*spec, &self.denylist).place(&ordered, rng)?;
        finalize(placement)
    }

    /// Run one attempt from its own seed
    #[must_use]
    pub fn attempt_seeded(&self, spec: &AttemptSpec, seed: u64) -> Option<PuzzleLayout> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.attempt(spec, &mut rng)
    }
}
