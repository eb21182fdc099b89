//! Crossword Generator - CLI
//!
//! Generates, benchmarks and checks crossword layouts built from a word catalog.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use crossword_gen::{
    catalog::{embedded_entries, load_from_file},
    commands::{GenerateConfig, check_layout_json, generate_layout, run_benchmark},
    core::WordEntry,
    generator::{CategoryWeights, Generator, SearchSchedule, root_rng},
    output::{print_benchmark_result, print_check_report, print_generate_result},
    slot::{SlotOptions, build_slot_data_with},
};
use std::fs;

#[derive(Parser)]
#[command(
    name = "crossword_gen",
    about = "Crossword layout generator using weighted randomized placement search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog: 'all' (default, embedded catalog) or path to a catalog file
    #[arg(short, long, global = true, default_value = "all")]
    catalog: String,

    /// Ignore category weights and treat every category equally
    #[arg(long, global = true)]
    uniform: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a crossword layout
    Generate {
        /// Number of words to aim for
        #[arg(short, long, default_value = "25")]
        target: usize,

        /// Root seed (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Run a single attempt on this many rows (requires --cols)
        #[arg(long, requires = "cols")]
        rows: Option<usize>,

        /// Run a single attempt on this many columns (requires --rows)
        #[arg(long, requires = "rows")]
        cols: Option<usize>,

        /// Minimum word length
        #[arg(long, default_value = "3")]
        min_length: usize,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,

        /// Print the host slot payload as JSON (uses --target and --initial-clues)
        #[arg(long, conflicts_with_all = ["rows", "cols"])]
        slot: bool,

        /// Clues revealed up front, for --slot
        #[arg(long, default_value = "6")]
        initial_clues: usize,
    },

    /// Benchmark searches over a range of root seeds
    Benchmark {
        /// Number of searches to run
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// First root seed
        #[arg(short, long, default_value = "0")]
        seed: u64,

        /// Number of words to aim for
        #[arg(short, long, default_value = "25")]
        target: usize,
    },

    /// Verify a layout JSON file (bare layout or slot payload)
    Check {
        /// Path to the JSON file
        file: String,
    },
}

/// Load the catalog based on the -c flag
fn load_catalog(mode: &str) -> Result<Vec<WordEntry>> {
    let entries = match mode {
        "all" => embedded_entries(),
        path => load_from_file(path).with_context(|| format!("Failed to read catalog {path}"))?,
    };
    if entries.is_empty() {
        bail!("Catalog '{mode}' contains no entries");
    }
    Ok(entries)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let weights = if cli.uniform {
        CategoryWeights::default()
    } else {
        CategoryWeights::default_table()
    };

    match cli.command {
        Commands::Generate {
            target,
            seed,
            rows,
            cols,
            min_length,
            json,
            slot,
            initial_clues,
        } => {
            let catalog = load_catalog(&cli.catalog)?;
            let generator = Generator::new(&catalog).with_weights(weights);
            if slot {
                let options = SlotOptions {
                    total_words: target,
                    initial_clues,
                };
                run_slot_command(&options, seed, min_length, &generator)
            } else {
                let mut config = GenerateConfig::new(target);
                config.seed = seed;
                config.grid = rows.zip(cols);
                config.schedule.min_length = min_length;
                run_generate_command(config, json, cli.verbose > 0, &generator)
            }
        }
        Commands::Benchmark {
            count,
            seed,
            target,
        } => {
            let catalog = load_catalog(&cli.catalog)?;
            let generator = Generator::new(&catalog).with_weights(weights);
            run_benchmark_command(count, seed, target, &generator);
            Ok(())
        }
        Commands::Check { file } => run_check_command(&file),
    }
}

fn run_generate_command(
    config: GenerateConfig,
    json: bool,
    verbose: bool,
    generator: &Generator<'_>,
) -> Result<()> {
    let result = generate_layout(config, generator).map_err(|e| anyhow::anyhow!(e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.layout)?);
    } else {
        print_generate_result(&result, verbose);
    }
    Ok(())
}

fn run_slot_command(
    options: &SlotOptions,
    seed: Option<u64>,
    min_length: usize,
    generator: &Generator<'_>,
) -> Result<()> {
    let (_, mut rng) = root_rng(seed);
    let mut schedule = SearchSchedule::default();
    schedule.min_length = min_length;

    let data = build_slot_data_with(options, generator, &schedule, &mut rng)?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64, target: usize, generator: &Generator<'_>) {
    println!("Running {count} searches from root seed {seed} aiming for {target} words...");
    let result = run_benchmark(
        generator,
        &SearchSchedule::default(),
        target,
        seed,
        count,
        true,
    );
    print_benchmark_result(&result);
}

fn run_check_command(file: &str) -> Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?;
    let report = check_layout_json(&text).map_err(|e| anyhow::anyhow!(e))?;
    print_check_report(&report);
    if !report.is_valid() {
        bail!("Layout in {file} is invalid");
    }
    Ok(())
}
