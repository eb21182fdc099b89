//! Layout generation command
//!
//! Runs either one attempt on an explicit grid or a full search over the
//! schedule, and reports the seeds needed to replay the result.

use crate::core::PuzzleLayout;
use crate::generator::{AttemptSpec, Generator, SearchSchedule, root_rng, search};
use log::{debug, info};
use std::time::{Duration, Instant};

/// Configuration for generating a layout
pub struct GenerateConfig {
    /// Requested entry count
    pub target: usize,
    /// Root seed; drawn from entropy when absent
    pub seed: Option<u64>,
    /// Explicit `(rows, cols)` for a single attempt instead of a search
    pub grid: Option<(usize, usize)>,
    pub schedule: SearchSchedule,
}

impl GenerateConfig {
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self {
            target,
            seed: None,
            grid: None,
            schedule: SearchSchedule::default(),
        }
    }
}

/// Result of generating a layout
pub struct GenerateResult {
    pub layout: PuzzleLayout,
    pub target: usize,
    pub root_seed: u64,
    /// Sub-seed of the winning attempt (searches only)
    pub sub_seed: Option<u32>,
    pub rows: usize,
    pub cols: usize,
    pub attempts: usize,
    pub duration: Duration,
}

impl GenerateResult {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.layout.entry_count() == self.target
    }
}

/// Generate a layout according to `config`
///
/// # Errors
///
/// Returns an error if:
/// - A single attempt on an explicit grid is not viable
/// - A search exhausts its schedule without any viable attempt
pub fn generate_layout(
    config: GenerateConfig,
    generator: &Generator<'_>,
) -> Result<GenerateResult, String> {
    let start = Instant::now();
    let (root_seed, mut rng) = root_rng(config.seed);

    let mut weights: Vec<_> = generator.weights().iter().collect();
    weights.sort_unstable_by(|a, b| a.0.cmp(b.0));
    debug!(
        "Catalog of {} entries, category weights {weights:?}",
        generator.catalog().len()
    );

    if let Some((rows, cols)) = config.grid {
        let spec = AttemptSpec::new(rows, cols, config.schedule.min_length, config.target);
        info!("Single attempt on a {rows}x{cols} grid with seed {root_seed}");
        let layout = generator.attempt(&spec, &mut rng).ok_or_else(|| {
            format!("No viable layout on a {rows}x{cols} grid with seed {root_seed}")
        })?;

        return Ok(GenerateResult {
            layout,
            target: config.target,
            root_seed,
            sub_seed: None,
            rows,
            cols,
            attempts: 1,
            duration: start.elapsed(),
        });
    }

    let generated =
        search(generator, &config.schedule, config.target, &mut rng).map_err(|e| e.to_string())?;

    Ok(GenerateResult {
        target: config.target,
        root_seed,
        sub_seed: Some(generated.seed),
        rows: generated.size,
        cols: generated.size,
        attempts: generated.attempts,
        duration: start.elapsed(),
        layout: generated.layout,
    })
}
