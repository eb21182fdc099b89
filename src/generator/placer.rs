//! Single-attempt word placement
//!
//! A [`GridPlacer`] owns the board, the two orientation masks and the letter
//! index for one attempt. It drops a seed word somewhere on the grid, then walks
//! the weighted candidate order and commits the first legal crossing it finds for
//! each word.

use crate::core::{Direction, Grid, PlacedEntry, WordEntry};
use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Consecutive failures tolerated before an attempt gives up, at minimum
const MIN_FAILURE_BUDGET: usize = 200;

/// Consecutive failed placements allowed for an entry cap
#[inline]
#[must_use]
pub const fn failure_budget(max_entries: usize) -> usize {
    let scaled = max_entries.saturating_mul(10);
    if scaled > MIN_FAILURE_BUDGET {
        scaled
    } else {
        MIN_FAILURE_BUDGET
    }
}

/// Words never chosen as the seed placement
///
/// Any word may still be placed later as a crossing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarterDenylist {
    words: FxHashSet<String>,
}

impl StarterDenylist {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(|w| w.into().to_uppercase()).collect(),
        }
    }

    /// A denylist that allows every starter
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Default for StarterDenylist {
    fn default() -> Self {
        Self::new(["ACOUSTICS"])
    }
}

/// Grid shape and budgets for one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptSpec {
    pub rows: usize,
    pub cols: usize,
    pub min_length: usize,
    pub max_entries: usize,
}

impl AttemptSpec {
    #[must_use]
    pub const fn new(rows: usize, cols: usize, min_length: usize, max_entries: usize) -> Self {
        Self {
            rows,
            cols,
            min_length,
            max_entries,
        }
    }

    /// Longest word that can appear in either orientation
    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        if self.rows > self.cols {
            self.rows
        } else {
            self.cols
        }
    }

    /// Whether a word of `len` letters is within the length window
    #[inline]
    #[must_use]
    pub const fn fits(&self, len: usize) -> bool {
        len > 0 && len >= self.min_length && len <= self.max_length()
    }
}

/// Keep placeable entries whose length fits the attempt
pub fn filter_candidates<'a>(catalog: &'a [WordEntry], spec: &AttemptSpec) -> Vec<&'a WordEntry> {
    catalog
        .iter()
        .filter(|entry| entry.is_placeable() && spec.fits(entry.word.len()))
        .collect()
}

/// Raw result of one attempt, before trimming
#[derive(Debug, Clone)]
pub struct Placement {
    pub board: Grid<Option<u8>>,
    pub entries: Vec<PlacedEntry>,
}

/// Board state for a single attempt
pub struct GridPlacer<'a> {
    spec: AttemptSpec,
    denylist: &'a StarterDenylist,
    board: Grid<Option<u8>>,
    horizontal: Grid<bool>,
    vertical: Grid<bool>,
    letters: FxHashMap<u8, Vec<(usize, usize)>>,
    placed: Vec<PlacedEntry>,
    used: FxHashSet<&'a str>,
}

impl<'a> GridPlacer<'a> {
    #[must_use]
    pub fn new(spec: AttemptSpec, denylist: &'a StarterDenylist) -> Self {
        Self {
            spec,
            denylist,
            board: Grid::new(spec.rows, spec.cols, None),
            horizontal: Grid::new(spec.rows, spec.cols, false),
            vertical: Grid::new(spec.rows, spec.cols, false),
            letters: FxHashMap::default(),
            placed: Vec::new(),
            used: FxHashSet::default(),
        }
    }

    /// Run the attempt over `candidates` in the given order
    ///
    /// Returns `None` if the grid is degenerate, no seed word fits, or fewer
    /// than two entries end up placed.
    pub fn place<R: Rng + ?Sized>(
        mut self,
        candidates: &[&'a WordEntry],
        rng: &mut R,
    ) -> Option<Placement> {
        if self.spec.rows == 0 || self.spec.cols == 0 || self.spec.max_entries == 0 {
            return None;
        }

        let seed = self.select_seed(candidates, rng)?;
        self.place_seed(seed, rng);

        let max_failures = failure_budget(self.spec.max_entries);
        let mut failures = 0;

        for &entry in candidates {
            if self.placed.len() >= self.spec.max_entries {
                break;
            }
            if self.used.contains(entry.word.as_str()) || !self.spec.fits(entry.word.len()) {
                continue;
            }

            if let Some((direction, start)) = self.extend(entry.word.as_bytes(), rng) {
                self.record(entry, direction, start);
                failures = 0;
            } else {
                failures += 1;
                if failures >= max_failures {
                    trace!("Failure budget of {max_failures} exhausted");
                    break;
                }
            }
        }

        if self.placed.len() < 2 {
            return None;
        }

        Some(Placement {
            board: self.board,
            entries: self.placed,
        })
    }

    /// Pick a seed word that fits across, preferring words off the denylist
    fn select_seed<R: Rng + ?Sized>(
        &self,
        candidates: &[&'a WordEntry],
        rng: &mut R,
    ) -> Option<&'a WordEntry> {
        let mut options: Vec<&WordEntry> = candidates
            .iter()
            .copied()
            .filter(|entry| {
                let len = entry.word.len();
                len >= self.spec.min_length && len <= self.spec.cols
            })
            .collect();
        options.shuffle(rng);

        options
            .iter()
            .copied()
            .find(|entry| !self.denylist.contains(&entry.word))
            .or_else(|| options.first().copied())
    }

    fn place_seed<R: Rng + ?Sized>(&mut self, entry: &'a WordEntry, rng: &mut R) {
        let word = entry.word.as_bytes();
        let len = word.len();
        let AttemptSpec { rows, cols, .. } = self.spec;

        // The coin is always flipped; words longer than the grid is tall go across
        let across = (rng.random_bool(0.5) && len <= cols) || len > rows;
        let (direction, start) = if across {
            let row = rng.random_range(0..rows);
            let col = rng.random_range(0..=cols - len);
            (Direction::Across, (row, col))
        } else {
            let row = rng.random_range(0..=rows - len);
            let col = rng.random_range(0..cols);
            (Direction::Down, (row, col))
        };

        self.commit(word, direction, start);
        self.record(entry, direction, start);
    }

    /// Find and commit the first legal crossing for `word`
    fn extend<R: Rng + ?Sized>(
        &mut self,
        word: &[u8],
        rng: &mut R,
    ) -> Option<(Direction, (usize, usize))> {
        let mut indices: Vec<usize> = (0..word.len())
            .filter(|&i| self.letters.get(&word[i]).is_some_and(|p| !p.is_empty()))
            .collect();
        indices.shuffle(rng);

        for index in indices {
            let mut positions = self.letters.get(&word[index]).cloned().unwrap_or_default();
            positions.shuffle(rng);

            for (row, col) in positions {
                let mut directions = Vec::with_capacity(2);
                if self.horizontal[(row, col)] {
                    directions.push(Direction::Across.crossing());
                }
                if self.vertical[(row, col)] {
                    directions.push(Direction::Down.crossing());
                }
                directions.shuffle(rng);

                for direction in directions {
                    let (start_row, start_col) = match direction {
                        Direction::Across => (row as isize, col as isize - index as isize),
                        Direction::Down => (row as isize - index as isize, col as isize),
                    };
                    if let Some(start) = self.check(word, direction, start_row, start_col) {
                        self.commit(word, direction, start);
                        return Some((direction, start));
                    }
                }
            }
        }
        None
    }

    /// Validate a placement; returns the start cell if it is legal
    fn check(
        &self,
        word: &[u8],
        direction: Direction,
        row: isize,
        col: isize,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = direction.step();
        let (dr, dc) = (dr as isize, dc as isize);
        let last = word.len() as isize - 1;
        let (end_row, end_col) = (row + dr * last, col + dc * last);

        if row < 0
            || col < 0
            || end_row >= self.spec.rows as isize
            || end_col >= self.spec.cols as isize
        {
            return None;
        }

        // Ends must not touch another word along the same axis
        if self.letter_at(row - dr, col - dc).is_some()
            || self.letter_at(end_row + dr, end_col + dc).is_some()
        {
            return None;
        }

        let (same, opposite) = match direction {
            Direction::Across => (&self.horizontal, &self.vertical),
            Direction::Down => (&self.vertical, &self.horizontal),
        };

        let mut intersects = false;
        for (i, &letter) in word.iter().enumerate() {
            let (r, c) = (row + dr * i as isize, col + dc * i as isize);
            let cell = (r as usize, c as usize);
            if same[cell] {
                return None;
            }
            match self.board[cell] {
                Some(existing) => {
                    if existing != letter || !opposite[cell] {
                        return None;
                    }
                    intersects = true;
                }
                None => {
                    // Fresh cells need clear neighbors across the axis
                    if self.letter_at(r - dc, c - dr).is_some()
                        || self.letter_at(r + dc, c + dr).is_some()
                    {
                        return None;
                    }
                }
            }
        }

        intersects.then_some((row as usize, col as usize))
    }

    fn commit(&mut self, word: &[u8], direction: Direction, (row, col): (usize, usize)) {
        let (dr, dc) = direction.step();
        for (i, &letter) in word.iter().enumerate() {
            let cell = (row + dr * i, col + dc * i);
            if self.board[cell].is_none() {
                self.board[cell] = Some(letter);
                self.letters.entry(letter).or_default().push(cell);
            }
            match direction {
                Direction::Across => self.horizontal[cell] = true,
                Direction::Down => self.vertical[cell] = true,
            }
        }
    }

    fn record(&mut self, entry: &'a WordEntry, direction: Direction, start: (usize, usize)) {
        let location_index = self.placed.len() + 1;
        trace!(
            "Placed {} {direction} at {start:?} (#{location_index})",
            entry.word
        );
        self.placed
            .push(PlacedEntry::from_catalog(entry, direction, start, location_index));
        self.used.insert(entry.word.as_str());
    }

    #[inline]
    fn letter_at(&self, row: isize, col: isize) -> Option<u8> {
        self.board.get(row, col).copied().flatten()
    }
}
