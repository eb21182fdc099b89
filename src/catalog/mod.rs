//! Word and clue catalogs
//!
//! Provides the catalog embedded at build time and a parser for catalog files.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED_CATALOG, EMBEDDED_CATALOG_LINES};
pub use loader::{embedded_entries, load_from_file, parse_catalog};
