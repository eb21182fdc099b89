//! Category weighting and weighted random permutation
//!
//! Each retained entry gets the key `u^(1/w)` for a uniform draw `u` and its
//! category weight `w`; sorting by descending key yields a weighted random
//! permutation in one pass.

use crate::core::WordEntry;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Weight-table key used for categories that are not listed
pub const DEFAULT_KEY: &str = "_default";

/// Smallest uniform draw used as a key base
const MIN_DRAW: f64 = 1e-6;

/// Sanitized category → weight table
///
/// Only constructible through [`CategoryWeights::sanitize`], so every weight is
/// non-negative and the [`DEFAULT_KEY`] entry is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeights {
    weights: FxHashMap<String, f64>,
}

impl CategoryWeights {
    /// Clamp a raw weight table
    ///
    /// Negative and NaN weights become 0. A missing `_default` becomes 1.0; an
    /// explicit non-positive `_default` stays 0.
    ///
    /// # Examples
    /// ```
    /// use crossword_gen::generator::CategoryWeights;
    ///
    /// let weights = CategoryWeights::sanitize([("HARD WORDS", -2.0)]);
    /// assert_eq!(weights.weight_for("HARD WORDS"), 0.0);
    /// assert_eq!(weights.weight_for("ANYTHING ELSE"), 1.0);
    /// ```
    pub fn sanitize<I, K>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        // f64::max ignores NaN, so NaN clamps to 0 as well
        let mut weights: FxHashMap<String, f64> = raw
            .into_iter()
            .map(|(key, value)| (key.into(), value.max(0.0)))
            .collect();
        weights.entry(DEFAULT_KEY.to_string()).or_insert(1.0);
        Self { weights }
    }

    /// Stock weighting favoring medium-difficulty words
    #[must_use]
    pub fn default_table() -> Self {
        Self::sanitize([
            ("EASY WORDS", 0.7),
            ("MEDIUM WORDS", 1.2),
            ("HARD WORDS", 0.7),
            (DEFAULT_KEY, 1.0),
        ])
    }

    /// Weight for a category, falling back to the `_default` weight
    ///
    /// The fallback may itself be 0, which excludes the category.
    #[must_use]
    pub fn weight_for(&self, category: &str) -> f64 {
        self.weights
            .get(category)
            .or_else(|| self.weights.get(DEFAULT_KEY))
            .copied()
            .unwrap_or(1.0)
    }

    /// Iterate the sanitized table
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(key, &value)| (key.as_str(), value))
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::sanitize(std::iter::empty::<(String, f64)>())
    }
}

/// Order entries by weighted random key, dropping zero-weight entries
///
/// Draws one uniform number per retained entry, in input order. The sort is
/// stable, so the result depends only on the RNG state and the input.
pub fn weighted_shuffle<'a, I, R>(
    entries: I,
    weights: &CategoryWeights,
    rng: &mut R,
) -> Vec<&'a WordEntry>
where
    I: IntoIterator<Item = &'a WordEntry>,
    R: Rng + ?Sized,
{
    let mut keyed: Vec<(f64, &WordEntry)> = entries
        .into_iter()
        .filter_map(|entry| {
            let weight = weights.weight_for(&entry.category);
            if weight <= 0.0 {
                return None;
            }
            let mut draw: f64 = rng.random();
            if draw <= 0.0 {
                draw = MIN_DRAW;
            }
            Some((draw.powf(weight.recip()), entry))
        })
        .collect();

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn catalog() -> Vec<WordEntry> {
        vec![
            WordEntry::new("apple", "", "EASY WORDS"),
            WordEntry::new("banana", "", "EASY WORDS"),
            WordEntry::new("cherry", "", "MEDIUM WORDS"),
            WordEntry::new("damson", "", "HARD WORDS"),
            WordEntry::new("elder", "", "HARD WORDS"),
            WordEntry::new("fig", "", "OTHER"),
        ]
    }

    #[test]
    fn sanitize_inserts_default() {
        let weights = CategoryWeights::sanitize([("EASY WORDS", 2.0)]);
        assert_eq!(weights.weight_for(DEFAULT_KEY), 1.0);
        assert_eq!(weights.weight_for("EASY WORDS"), 2.0);
        assert_eq!(weights.weight_for("UNKNOWN"), 1.0);
    }

    #[test]
    fn sanitize_clamps_negative_and_nan() {
        let weights = CategoryWeights::sanitize([("A", -1.5), ("B", f64::NAN)]);
        assert_eq!(weights.weight_for("A"), 0.0);
        assert_eq!(weights.weight_for("B"), 0.0);
    }

    #[test]
    fn explicit_zero_default_stays_zero() {
        let weights = CategoryWeights::sanitize([(DEFAULT_KEY, -3.0), ("A", 1.0)]);
        assert_eq!(weights.weight_for(DEFAULT_KEY), 0.0);
        // Unlisted categories fall back to the zero default
        assert_eq!(weights.weight_for("B"), 0.0);
        assert_eq!(weights.weight_for("A"), 1.0);
    }

    #[test]
    fn default_table_values() {
        let weights = CategoryWeights::default_table();
        assert_eq!(weights.weight_for("MEDIUM WORDS"), 1.2);
        assert_eq!(weights.weight_for("EASY WORDS"), 0.7);
        assert_eq!(weights.weight_for("OTHER"), 1.0);
        assert_eq!(weights.iter().count(), 4);
    }

    #[test]
    fn equal_weights_produce_a_permutation() {
        let entries = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = weighted_shuffle(&entries, &CategoryWeights::default(), &mut rng);

        assert_eq!(shuffled.len(), entries.len());
        let mut words: Vec<&str> = shuffled.iter().map(|e| e.word.as_str()).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["APPLE", "BANANA", "CHERRY", "DAMSON", "ELDER", "FIG"]);
    }

    #[test]
    fn equal_weights_lead_uniformly() {
        let entries = catalog()[..5].to_vec();
        let weights = CategoryWeights::default();
        let runs = 5000;

        let mut leads: FxHashMap<&str, usize> = FxHashMap::default();
        for seed in 0..runs {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = weighted_shuffle(&entries, &weights, &mut rng);
            *leads.entry(shuffled[0].word.as_str()).or_default() += 1;
        }

        // Expected 1000 each; the standard deviation is about 28
        assert_eq!(leads.len(), 5);
        for (word, count) in leads {
            assert!((850..=1150).contains(&count), "{word} led {count} times");
        }
    }

    /// Always yields zero, so every uniform draw is 0.0
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn zero_draw_still_respects_weight() {
        // Raw zero keys would tie and keep input order; lifted draws favor weight
        let entries = vec![
            WordEntry::new("light", "", "LIGHT"),
            WordEntry::new("heavy", "", "HEAVY"),
        ];
        let weights = CategoryWeights::sanitize([("LIGHT", 1.0), ("HEAVY", 2.0)]);

        let shuffled = weighted_shuffle(&entries, &weights, &mut ZeroRng);
        let words: Vec<&str> = shuffled.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["HEAVY", "LIGHT"]);
    }

    #[test]
    fn zero_weight_category_never_appears() {
        let entries = catalog();
        let weights = CategoryWeights::sanitize([("HARD WORDS", 0.0)]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = weighted_shuffle(&entries, &weights, &mut rng);
            assert_eq!(shuffled.len(), 4);
            assert!(shuffled.iter().all(|e| e.category != "HARD WORDS"));
        }
    }

    #[test]
    fn zero_default_drops_unlisted_categories() {
        let entries = catalog();
        let weights = CategoryWeights::sanitize([(DEFAULT_KEY, 0.0), ("EASY WORDS", 1.0)]);
        let mut rng = StdRng::seed_from_u64(3);

        let shuffled = weighted_shuffle(&entries, &weights, &mut rng);
        assert_eq!(shuffled.len(), 2);
        assert!(shuffled.iter().all(|e| e.category == "EASY WORDS"));
    }

    #[test]
    fn same_seed_same_order() {
        let entries = catalog();
        let weights = CategoryWeights::default_table();

        let first = weighted_shuffle(&entries, &weights, &mut StdRng::seed_from_u64(99));
        let second = weighted_shuffle(&entries, &weights, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn heavy_category_tends_to_lead() {
        let entries: Vec<WordEntry> = (0..20)
            .map(|i| {
                let category = if i < 10 { "HEAVY" } else { "LIGHT" };
                WordEntry::new(format!("WORD{i}"), "", category)
            })
            .collect();
        let weights = CategoryWeights::sanitize([("HEAVY", 50.0), ("LIGHT", 0.05)]);

        let mut heavy_first = 0;
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let shuffled = weighted_shuffle(&entries, &weights, &mut rng);
            if shuffled[0].category == "HEAVY" {
                heavy_first += 1;
            }
        }
        assert!(heavy_first > 90, "heavy category led only {heavy_first} times");
    }

    #[test]
    fn empty_input_is_empty() {
        let entries: Vec<WordEntry> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(weighted_shuffle(&entries, &CategoryWeights::default(), &mut rng).is_empty());
    }
}
