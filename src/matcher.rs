//! Pair matching for the teach-peace property.
//!
//! Two distinct words satisfy the property for a threshold `t` when some
//! split strips `i` characters from both ends of the first word and `j` from
//! both ends of the second, leaving identical middles of at least `t`
//! characters, while the stripped prefixes differ and the stripped suffixes
//! differ. `teach` and `peace` share `eac` with `t`/`p` and `h`/`e` around it.
//!
//! The [`PairMatcher`] applies the predicate to every ordered pair inside each
//! length bucket and records hits in an [`AdjacencyMap`].
//!
//! # Examples
//!
//! ```
//! use teach_peace::grouping::LengthBuckets;
//! use teach_peace::matcher::{MatchThreshold, PairMatcher};
//!
//! let buckets = LengthBuckets::from_words(["teach", "peace", "track", "crack"]);
//! let threshold = MatchThreshold::new(3).unwrap();
//! let outcome = PairMatcher::with_threshold(threshold).run(&buckets);
//!
//! assert_eq!(outcome.total_pairings, 2);
//! assert!(outcome.adjacency.contains_pair("teach", "peace"));
//! assert!(!outcome.adjacency.contains_pair("track", "crack"));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TeachPeaceError};
use crate::grouping::LengthBuckets;

/// Minimum length of the shared middle substring. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct MatchThreshold(usize);

impl MatchThreshold {
    /// Validate and wrap a threshold value.
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(TeachPeaceError::InvalidThreshold(value));
        }
        Ok(MatchThreshold(value))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for MatchThreshold {
    fn default() -> Self {
        MatchThreshold(2)
    }
}

impl TryFrom<usize> for MatchThreshold {
    type Error = TeachPeaceError;

    fn try_from(value: usize) -> Result<Self> {
        MatchThreshold::new(value)
    }
}

impl From<MatchThreshold> for usize {
    fn from(threshold: MatchThreshold) -> usize {
        threshold.0
    }
}

impl fmt::Display for MatchThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check whether two words satisfy the teach-peace property.
///
/// The words need not have equal length for the predicate itself; the
/// [`PairMatcher`] only ever compares words from the same length bucket.
pub fn is_teach_peace(a: &str, b: &str, threshold: MatchThreshold) -> bool {
    if a == b {
        return false;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    satisfies(&a, &b, threshold.get())
}

/// Strip `k` characters from both ends at once. Empty when `2k >= len`.
fn middle(chars: &[char], k: usize) -> &[char] {
    if 2 * k >= chars.len() {
        &[]
    } else {
        &chars[k..chars.len() - k]
    }
}

/// Row-major scan over `i` then `j`, returning on the first satisfying split.
fn satisfies(a: &[char], b: &[char], threshold: usize) -> bool {
    if a == b {
        return false;
    }

    for i in 1..a.len() {
        let middle_a = middle(a, i);
        if middle_a.len() < threshold {
            continue;
        }

        for j in 1..b.len() {
            if middle_a == middle(b, j)
                && a[..i] != b[..j]
                && a[a.len() - i..] != b[b.len() - j..]
            {
                return true;
            }
        }
    }

    false
}

/// Symmetric word-to-partners mapping built by a matcher run.
///
/// Words without partners are absent rather than mapped to an empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AdjacencyMap {
    partners: BTreeMap<String, BTreeSet<String>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `a` and `b` as partners of each other.
    ///
    /// Self-pairs are ignored. Returns `true` if the pair was new.
    pub fn link(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let forward = self
            .partners
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        let backward = self
            .partners
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
        forward || backward
    }

    /// Partners of a word, if it has any.
    pub fn partners(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.partners.get(word)
    }

    pub fn contains_pair(&self, a: &str, b: &str) -> bool {
        self.partners.get(a).is_some_and(|set| set.contains(b))
    }

    /// Number of words with at least one partner.
    pub fn total_pairings(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Iterate over `(word, partners)` in sorted word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.partners.iter().map(|(w, p)| (w.as_str(), p))
    }
}

/// How pairs inside a bucket are visited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairOrder {
    /// Test `(w1, w2)` and `(w2, w1)` independently.
    #[default]
    Exhaustive,
    /// Test each unordered pair once and mirror the hit.
    Mirrored,
}

/// Settings for a single matcher run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub threshold: MatchThreshold,
    pub pair_order: PairOrder,
}

/// Result of one matcher run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchOutcome {
    pub threshold: MatchThreshold,
    pub total_pairings: usize,
    #[serde(rename = "pairs")]
    pub adjacency: AdjacencyMap,
}

/// Finds all teach-peace pairs among grouped words.
#[derive(Clone, Debug, Default)]
pub struct PairMatcher {
    config: MatchConfig,
}

impl PairMatcher {
    pub fn new(config: MatchConfig) -> Self {
        PairMatcher { config }
    }

    /// Matcher with the given threshold and exhaustive pair order.
    pub fn with_threshold(threshold: MatchThreshold) -> Self {
        Self::new(MatchConfig {
            threshold,
            ..MatchConfig::default()
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run the matcher over every bucket long enough for the threshold.
    pub fn run(&self, buckets: &LengthBuckets) -> MatchOutcome {
        let threshold = self.config.threshold.get();
        let mut adjacency = AdjacencyMap::new();

        for (length, bucket) in buckets.iter() {
            if length < threshold {
                continue;
            }

            // Decode each word once for the whole bucket.
            let words: Vec<(&str, Vec<char>)> = bucket
                .iter()
                .map(|w| (w.as_str(), w.chars().collect()))
                .collect();

            let before = adjacency.total_pairings();
            match self.config.pair_order {
                PairOrder::Exhaustive => {
                    for (w1, c1) in &words {
                        for (w2, c2) in &words {
                            if satisfies(c1, c2, threshold) {
                                adjacency.link(w1, w2);
                            }
                        }
                    }
                }
                PairOrder::Mirrored => {
                    for (idx, (w1, c1)) in words.iter().enumerate() {
                        for (w2, c2) in &words[idx + 1..] {
                            if satisfies(c1, c2, threshold) {
                                adjacency.link(w1, w2);
                            }
                        }
                    }
                }
            }

            debug!(
                "bucket {length}: {} words, {} newly paired",
                words.len(),
                adjacency.total_pairings() - before
            );
        }

        MatchOutcome {
            threshold: self.config.threshold,
            total_pairings: adjacency.total_pairings(),
            adjacency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: usize) -> MatchThreshold {
        MatchThreshold::new(value).unwrap()
    }

    fn run(words: &[&str], threshold: usize) -> MatchOutcome {
        let buckets = LengthBuckets::from_words(words.iter().copied());
        PairMatcher::with_threshold(t(threshold)).run(&buckets)
    }

    const SAMPLE: &[&str] = &[
        "teach", "peace", "track", "crack", "beach", "reach", "leash", "least", "feast", "beast",
        "abcde", "xbcdy", "stone", "atoms", "other", "tithe", "be", "me", "a", "planet", "planes",
        "clanks", "blanket",
    ];

    #[test]
    fn test_threshold_rejects_zero() {
        assert!(matches!(
            MatchThreshold::new(0),
            Err(TeachPeaceError::InvalidThreshold(0))
        ));
        assert_eq!(t(3).get(), 3);
        assert_eq!(MatchThreshold::default().get(), 2);
    }

    #[test]
    fn test_threshold_serde() {
        let threshold: MatchThreshold = serde_json::from_str("4").unwrap();
        assert_eq!(threshold.get(), 4);
        assert!(serde_json::from_str::<MatchThreshold>("0").is_err());
    }

    #[test]
    fn test_middle_strip() {
        let chars: Vec<char> = "abcde".chars().collect();
        assert_eq!(middle(&chars, 1), &['b', 'c', 'd']);
        assert_eq!(middle(&chars, 2), &['c']);
        assert!(middle(&chars, 3).is_empty());
        assert!(middle(&chars, 4).is_empty());

        let even: Vec<char> = "abcd".chars().collect();
        assert!(middle(&even, 2).is_empty());
    }

    #[test]
    fn test_teach_peace() {
        assert!(is_teach_peace("teach", "peace", t(1)));
        assert!(is_teach_peace("teach", "peace", t(3)));
        assert!(!is_teach_peace("teach", "peace", t(4)));
        assert!(is_teach_peace("peace", "teach", t(3)));
    }

    #[test]
    fn test_shared_suffix_never_matches() {
        // Every split with a shared middle also shares the suffix "k"/"ck".
        for threshold in 1..=5 {
            assert!(!is_teach_peace("track", "crack", t(threshold)));
        }
    }

    #[test]
    fn test_same_word_never_matches() {
        assert!(!is_teach_peace("teach", "teach", t(1)));
    }

    #[test]
    fn test_predicate_across_lengths() {
        // "ab" is the middle of both, framed by x/y and qq/qq.
        assert!(is_teach_peace("xaby", "qqabqq", t(2)));
        assert!(!is_teach_peace("xaby", "qqabqq", t(3)));
    }

    #[test]
    fn test_short_words_never_match() {
        assert!(!is_teach_peace("ab", "cd", t(1)));
        assert!(!is_teach_peace("a", "b", t(1)));
        assert!(!is_teach_peace("", "", t(1)));
    }

    #[test]
    fn test_adjacency_link() {
        let mut adjacency = AdjacencyMap::new();
        assert!(adjacency.link("teach", "peace"));
        assert!(!adjacency.link("peace", "teach"));
        assert!(!adjacency.link("teach", "teach"));

        assert!(adjacency.contains_pair("peace", "teach"));
        assert!(!adjacency.contains_pair("teach", "teach"));
        assert_eq!(adjacency.total_pairings(), 2);
    }

    #[test]
    fn test_symmetry_and_no_self_pairs() {
        for threshold in 1..=4 {
            let outcome = run(SAMPLE, threshold);
            for (word, partners) in outcome.adjacency.iter() {
                assert!(!partners.contains(word));
                assert!(!partners.is_empty());
                for partner in partners {
                    assert!(outcome.adjacency.contains_pair(partner, word));
                }
            }
        }
    }

    #[test]
    fn test_length_gating() {
        let outcome = run(SAMPLE, 1);
        for (word, partners) in outcome.adjacency.iter() {
            for partner in partners {
                assert_eq!(word.chars().count(), partner.chars().count());
            }
        }
    }

    #[test]
    fn test_total_pairings_non_increasing() {
        let totals: Vec<usize> = (1..=7).map(|th| run(SAMPLE, th).total_pairings).collect();
        assert!(totals.windows(2).all(|w| w[0] >= w[1]), "{totals:?}");
        assert!(totals[0] > 0);
        assert_eq!(totals[6], 0);
    }

    #[test]
    fn test_pairs_at_higher_threshold_hold_at_lower() {
        let strict = run(SAMPLE, 3);
        let loose = run(SAMPLE, 2);
        for (word, partners) in strict.adjacency.iter() {
            for partner in partners {
                assert!(loose.adjacency.contains_pair(word, partner));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(run(SAMPLE, 2), run(SAMPLE, 2));
    }

    #[test]
    fn test_mirrored_matches_exhaustive() {
        let buckets = LengthBuckets::from_words(SAMPLE.iter().copied());
        for threshold in 1..=5 {
            let exhaustive = PairMatcher::with_threshold(t(threshold)).run(&buckets);
            let mirrored = PairMatcher::new(MatchConfig {
                threshold: t(threshold),
                pair_order: PairOrder::Mirrored,
            })
            .run(&buckets);
            assert_eq!(exhaustive, mirrored);
        }
    }

    #[test]
    fn test_teach_peace_threshold_cutoff() {
        for threshold in 1..=3 {
            assert!(run(&["teach", "peace"], threshold).adjacency.contains_pair("teach", "peace"));
        }
        assert_eq!(run(&["teach", "peace"], 4).total_pairings, 0);
    }

    #[test]
    fn test_empty_single_and_duplicate_inputs() {
        assert_eq!(run(&[], 1).total_pairings, 0);
        assert!(run(&[], 1).adjacency.is_empty());

        for threshold in 1..=7 {
            assert_eq!(run(&["teach"], threshold).total_pairings, 0);
        }

        assert_eq!(run(&["peace", "peace"], 1).total_pairings, 0);
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = run(&["teach", "peace"], 2);
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["threshold"], 2);
        assert_eq!(value["total_pairings"], 2);
        assert_eq!(value["pairs"]["teach"][0], "peace");
    }
}
