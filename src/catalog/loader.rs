//! Catalog parsing and loading
//!
//! The catalog format is line oriented. A line without a `:` (or with nothing
//! after it) starts a category; a `WORD: clue text` line adds an entry to the
//! current category. Blank lines are ignored.

use crate::core::WordEntry;
use std::fs;
use std::io;
use std::path::Path;

/// Parse catalog lines into entries
///
/// # Examples
/// ```
/// use crossword_gen::catalog::loader::parse_lines;
///
/// let entries = parse_lines(["ANIMALS", "cat: Feline pet", "dog: Loyal companion"]);
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].word, "CAT");
/// assert_eq!(entries[1].category, "ANIMALS");
/// ```
pub fn parse_lines<'a, I>(lines: I) -> Vec<WordEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries = Vec::new();
    let mut category = String::new();

    for raw in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((lhs, rhs)) = line.split_once(':') else {
            category = line.to_string();
            continue;
        };

        let (lhs, rhs) = (lhs.trim(), rhs.trim());
        if rhs.is_empty() {
            category = lhs.to_string();
            continue;
        }

        entries.push(WordEntry::new(lhs, rhs, category.as_str()));
    }

    entries
}

/// Parse a whole catalog text
#[must_use]
pub fn parse_catalog(text: &str) -> Vec<WordEntry> {
    parse_lines(text.lines())
}

/// Load and parse a catalog file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use crossword_gen::catalog::loader::load_from_file;
///
/// let entries = load_from_file("data/catalog.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<WordEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_catalog(&content))
}

/// Parse the catalog embedded at build time
#[must_use]
pub fn embedded_entries() -> Vec<WordEntry> {
    parse_lines(super::EMBEDDED_CATALOG.iter().copied())
}
