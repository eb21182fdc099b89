//! Multi-attempt search over escalating grid sizes
//!
//! Every attempt draws its own 32-bit sub-seed from the root RNG, so a whole
//! search replays exactly from one root seed.

use super::Generator;
use super::placer::AttemptSpec;
use crate::core::PuzzleLayout;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Grid sizes and attempt budget for [`search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSchedule {
    /// Square grid sizes, tried in order
    pub sizes: Vec<usize>,
    pub attempts_per_size: usize,
    pub min_length: usize,
}

impl SearchSchedule {
    #[must_use]
    pub const fn new(sizes: Vec<usize>, attempts_per_size: usize, min_length: usize) -> Self {
        Self {
            sizes,
            attempts_per_size,
            min_length,
        }
    }

    /// Total number of attempts the schedule allows
    #[must_use]
    pub fn budget(&self) -> usize {
        self.sizes.len() * self.attempts_per_size
    }
}

impl Default for SearchSchedule {
    fn default() -> Self {
        Self::new(vec![15, 17, 19, 21, 23], 120, 3)
    }
}

/// The layout a search settled on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub layout: PuzzleLayout,
    /// Sub-seed of the attempt that produced the layout
    pub seed: u32,
    /// Grid size of that attempt
    pub size: usize,
    /// Attempts run before the search stopped
    pub attempts: usize,
}

impl Generated {
    /// Whether the layout hit the requested entry count exactly
    #[must_use]
    pub fn is_exact(&self, target: usize) -> bool {
        self.layout.entry_count() == target
    }
}

/// Errors from a full search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No attempt at any size produced a viable layout
    Exhausted { sizes: Vec<usize>, attempts: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { sizes, attempts } => write!(
                f,
                "No viable crossword after {attempts} attempts at sizes {sizes:?}; \
                 the catalog cannot support a puzzle"
            ),
        }
    }
}

impl std::error::Error for GenerateError {}

/// Root RNG for a search, drawing a fresh seed when none is given
///
/// Returns the seed actually used so the run can be replayed.
#[must_use]
pub fn root_rng(seed: Option<u64>) -> (u64, StdRng) {
    let seed = seed.unwrap_or_else(|| {
        let drawn = rand::rng().random();
        info!("No root seed given, using {drawn}");
        drawn
    });
    (seed, StdRng::seed_from_u64(seed))
}

/// Search for a layout with exactly `target` entries
///
/// Returns the first exact hit, otherwise the viable layout whose entry count
/// is closest to `target` (earliest wins ties).
///
/// # Errors
///
/// Returns [`GenerateError::Exhausted`] if no attempt was viable.
pub fn search<R: Rng + ?Sized>(
    generator: &Generator<'_>,
    schedule: &SearchSchedule,
    target: usize,
    rng: &mut R,
) -> Result<Generated, GenerateError> {
    let mut best: Option<(usize, Generated)> = None;
    let mut attempts = 0;

    for &size in &schedule.sizes {
        let spec = AttemptSpec::new(size, size, schedule.min_length, target);
        let mut viable = 0;

        for _ in 0..schedule.attempts_per_size {
            let seed: u32 = rng.random();
            attempts += 1;

            let Some(layout) = generator.attempt_seeded(&spec, u64::from(seed)) else {
                continue;
            };
            viable += 1;

            let difference = layout.entry_count().abs_diff(target);
            if difference == 0 {
                info!("Exact {target}-word layout at size {size} after {attempts} attempts");
                return Ok(Generated {
                    layout,
                    seed,
                    size,
                    attempts,
                });
            }
            if best.as_ref().is_none_or(|(d, _)| difference < *d) {
                best = Some((
                    difference,
                    Generated {
                        layout,
                        seed,
                        size,
                        attempts,
                    },
                ));
            }
        }

        debug!(
            "Size {size}: {viable}/{} viable attempts, best difference {:?}",
            schedule.attempts_per_size,
            best.as_ref().map(|(d, _)| *d)
        );
    }

    match best {
        Some((difference, mut generated)) => {
            generated.attempts = attempts;
            info!(
                "Settled on {} words (off by {difference}) after {attempts} attempts",
                generated.layout.entry_count()
            );
            Ok(generated)
        }
        None => Err(GenerateError::Exhausted {
            sizes: schedule.sizes.clone(),
            attempts,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|w| WordEntry::new(*w, format!("clue {w}"), "A"))
            .collect()
    }

    #[test]
    fn default_schedule() {
        let schedule = SearchSchedule::default();
        assert_eq!(schedule.sizes, vec![15, 17, 19, 21, 23]);
        assert_eq!(schedule.attempts_per_size, 120);
        assert_eq!(schedule.min_length, 3);
        assert_eq!(schedule.budget(), 600);
    }

    #[test]
    fn three_word_scenario_hits_target() {
        let catalog = entries(&["CAT", "CAR", "ART"]);
        let generator = Generator::new(&catalog);
        let schedule = SearchSchedule::new(vec![5], 120, 3);
        let (_, mut rng) = root_rng(Some(42));

        let generated = search(&generator, &schedule, 3, &mut rng).unwrap();
        assert_eq!(generated.layout.entry_count(), 3);
        assert!(generated.is_exact(3));
        assert!(generated.layout.rows() <= 5 && generated.layout.cols() <= 5);
        assert_eq!(generated.layout.verify(), Ok(()));
        assert_eq!(generated.size, 5);
    }

    #[test]
    fn empty_catalog_is_exhausted() {
        let catalog: Vec<WordEntry> = Vec::new();
        let generator = Generator::new(&catalog);
        let schedule = SearchSchedule::new(vec![10], 5, 3);
        let (_, mut rng) = root_rng(Some(1));

        let err = search(&generator, &schedule, 10, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerateError::Exhausted {
                sizes: vec![10],
                attempts: 5,
            }
        );
    }

    #[test]
    fn tiny_grid_is_exhausted() {
        let catalog = entries(&["CAT", "CAR", "ART"]);
        let generator = Generator::new(&catalog);
        let schedule = SearchSchedule::new(vec![1, 2], 10, 3);
        let (_, mut rng) = root_rng(Some(9));

        assert!(matches!(
            search(&generator, &schedule, 3, &mut rng),
            Err(GenerateError::Exhausted { attempts: 20, .. })
        ));
    }

    #[test]
    fn unreachable_target_returns_closest() {
        // Two words can cross at most once, so a target of 10 is never exact
        let catalog = entries(&["CAT", "CAR"]);
        let generator = Generator::new(&catalog);
        let schedule = SearchSchedule::new(vec![5, 7], 10, 3);
        let (_, mut rng) = root_rng(Some(3));

        let generated = search(&generator, &schedule, 10, &mut rng).unwrap();
        assert_eq!(generated.layout.entry_count(), 2);
        assert!(!generated.is_exact(10));
        assert_eq!(generated.attempts, schedule.budget());
    }

    #[test]
    fn same_root_seed_replays() {
        let catalog = entries(&[
            "CRANE", "SLATE", "TRACE", "CRATE", "REACT", "HEART", "EARTH", "STARE", "TEARS",
            "RATES", "ASTER", "CATER", "LATER", "ALERT", "ALTER", "NEST", "SENT", "CART",
        ]);
        let generator = Generator::new(&catalog);
        let schedule = SearchSchedule::new(vec![9, 11], 15, 3);

        let (_, mut first_rng) = root_rng(Some(2024));
        let (_, mut second_rng) = root_rng(Some(2024));
        let first = search(&generator, &schedule, 8, &mut first_rng).unwrap();
        let second = search(&generator, &schedule, 8, &mut second_rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sub_seed_reproduces_layout() {
        let catalog = entries(&["CAT", "CAR", "ART", "RAT", "TAR", "ARC", "ACT"]);
        let generator = Generator::new(&catalog);
        let schedule = SearchSchedule::new(vec![7], 30, 3);
        let (_, mut rng) = root_rng(Some(77));

        let generated = search(&generator, &schedule, 4, &mut rng).unwrap();
        let spec = AttemptSpec::new(generated.size, generated.size, 3, 4);
        assert_eq!(
            generator.attempt_seeded(&spec, u64::from(generated.seed)),
            Some(generated.layout)
        );
    }

    #[test]
    fn exhausted_error_message() {
        let err = GenerateError::Exhausted {
            sizes: vec![15, 17],
            attempts: 240,
        };
        let message = err.to_string();
        assert!(message.contains("240 attempts"));
        assert!(message.contains("[15, 17]"));
    }
}
