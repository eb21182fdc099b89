//! Display functions for command results

use super::formatters::{create_progress_bar, density_bar, format_entry, render_board};
use crate::commands::{BenchmarkResult, CheckReport, GenerateResult};
use crate::core::Direction;
use colored::Colorize;

/// Print a generated layout with its clues
pub fn print_generate_result(result: &GenerateResult, verbose: bool) {
    let layout = &result.layout;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Crossword: {} words on {}x{} (grid {}x{})",
        layout.entry_count().to_string().bright_yellow().bold(),
        layout.rows(),
        layout.cols(),
        result.rows,
        result.cols
    );
    println!("{}", "─".repeat(60).cyan());
    println!();

    for row in render_board(layout) {
        println!("   {}", row.bold());
    }

    for direction in [Direction::Across, Direction::Down] {
        println!(
            "\n{}",
            direction.to_string().to_uppercase().bright_cyan().bold()
        );
        for entry in layout.entries().iter().filter(|e| e.direction == direction) {
            println!("  {}", format_entry(entry));
        }
    }

    if verbose {
        println!("\n📊 {}", "Search:".bright_cyan().bold());
        println!("   Root seed:    {}", result.root_seed);
        if let Some(seed) = result.sub_seed {
            println!("   Attempt seed: {seed}");
        }
        println!("   Attempts:     {}", result.attempts);
        println!("   Density:      [{}]", density_bar(layout, 30).green());
        println!("   Time taken:   {:.3}s", result.duration.as_secs_f64());
    }

    println!();
    if result.is_exact() {
        println!(
            "{}",
            format!("✅ Hit the target of {} words", result.target)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "⚠️  Closest layout has {} words (target {})",
                layout.entry_count(),
                result.target
            )
            .yellow()
            .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let exact_pct = if result.total_runs > 0 {
        result.exact_hits as f64 / result.total_runs as f64 * 100.0
    } else {
        0.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Searches run:     {}", result.total_runs);
    println!("   Target words:     {}", result.target);
    println!(
        "   Exact hits:       {}",
        format!("{} ({exact_pct:.1}%)", result.exact_hits)
            .bright_yellow()
            .bold()
    );
    println!("   Average words:    {:.2}", result.average_entries);
    println!(
        "   Fewest words:     {}",
        format!("{}", result.min_entries).yellow()
    );
    println!(
        "   Most words:       {}",
        format!("{}", result.max_entries).green()
    );
    println!("   Avg attempts:     {:.1}", result.average_attempts);
    if result.exhausted > 0 {
        println!(
            "   Exhausted:        {}",
            result.exhausted.to_string().red().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.runs_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (&words, &count) in counts {
        let pct = (count as f64 / result.total_runs as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {words:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of checking a layout
pub fn print_check_report(report: &CheckReport) {
    println!(
        "Layout: {}x{}, {} entries, {} letter cells",
        report.rows, report.cols, report.entries, report.letter_cells
    );
    match &report.verdict {
        Ok(()) => println!("{}", "✅ Layout is valid".green().bold()),
        Err(e) => println!("{}", format!("❌ {e}").red().bold()),
    }
}
