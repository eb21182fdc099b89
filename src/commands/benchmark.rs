//! Benchmark command
//!
//! Runs full searches for a range of root seeds and summarizes how close they
//! land to the target entry count.

use crate::generator::{Generator, SearchSchedule, search};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_runs: usize,
    pub target: usize,
    pub exact_hits: usize,
    /// Searches that ended with no viable layout at all
    pub exhausted: usize,
    pub average_entries: f64,
    pub min_entries: usize,
    pub max_entries: usize,
    pub average_attempts: f64,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub runs_per_second: f64,
}

/// Outcome of one benchmarked search
struct RunOutcome {
    entries: usize,
    attempts: usize,
}

/// Run one search per root seed in `base_seed..base_seed + count`
///
/// Searches are independent and each owns its RNG, so results per seed match a
/// sequential run.
pub fn run_benchmark(
    generator: &Generator<'_>,
    schedule: &SearchSchedule,
    target: usize,
    base_seed: u64,
    count: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let outcomes: Vec<Option<RunOutcome>> = (0..count as u64)
        .into_par_iter()
        .map(|offset| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(offset));
            let outcome = search(generator, schedule, target, &mut rng)
                .ok()
                .map(|generated| RunOutcome {
                    entries: generated.layout.entry_count(),
                    attempts: generated.attempts,
                });
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let completed: Vec<&RunOutcome> = outcomes.iter().flatten().collect();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for outcome in &completed {
        *distribution.entry(outcome.entries).or_insert(0) += 1;
    }

    let total_entries: usize = completed.iter().map(|o| o.entries).sum();
    let total_attempts: usize = completed.iter().map(|o| o.attempts).sum();
    let average = |total: usize| {
        if completed.is_empty() {
            0.0
        } else {
            total as f64 / completed.len() as f64
        }
    };

    BenchmarkResult {
        total_runs: count,
        target,
        exact_hits: completed.iter().filter(|o| o.entries == target).count(),
        exhausted: count - completed.len(),
        average_entries: average(total_entries),
        min_entries: completed.iter().map(|o| o.entries).min().unwrap_or(0),
        max_entries: completed.iter().map(|o| o.entries).max().unwrap_or(0),
        average_attempts: average(total_attempts),
        distribution,
        duration,
        runs_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
