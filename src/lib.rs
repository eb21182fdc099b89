//! Crossword Generator
//!
//! Builds crossing word layouts from a catalog of (word, clue, category) records
//! using a weighted, randomized placement search that replays exactly from one seed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use crossword_gen::catalog::embedded_entries;
//! use crossword_gen::generator::{Generator, SearchSchedule, root_rng, search};
//!
//! let catalog = embedded_entries();
//! let generator = Generator::new(&catalog);
//! let (_, mut rng) = root_rng(Some(42));
//!
//! let generated = search(&generator, &SearchSchedule::default(), 20, &mut rng).unwrap();
//! println!("Placed {} words", generated.layout.entry_count());
//! ```

// Core domain types
pub mod core;

// Placement search
pub mod generator;

// Word and clue catalogs
pub mod catalog;

// Host payload
pub mod slot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
