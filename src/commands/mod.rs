//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckReport, check_layout, check_layout_json};
pub use generate::{GenerateConfig, GenerateResult, generate_layout};
