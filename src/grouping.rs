//! Word grouping by length.
//!
//! The teach-peace property is only ever checked between words of equal
//! length, so the word list is partitioned into [`LengthBuckets`] once and
//! every matcher run reads from that partition.
//!
//! # Examples
//!
//! ```
//! use teach_peace::grouping::LengthBuckets;
//!
//! let buckets = LengthBuckets::from_words(["teach", "peace", "tea", "teach"]);
//!
//! assert_eq!(buckets.len(), 2);
//! assert_eq!(buckets.word_count(), 3);
//! assert_eq!(buckets.bucket(5).map(|b| b.len()), Some(2));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Words grouped by their length in characters.
///
/// Every word in bucket `k` has exactly `k` characters, and a word appears
/// in exactly one bucket. Buckets and their members iterate in sorted order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LengthBuckets {
    buckets: BTreeMap<usize, BTreeSet<String>>,
}

impl LengthBuckets {
    /// Create an empty grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a collection of words. Duplicates collapse into one entry.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets = Self::new();
        for word in words {
            buckets.insert(word.as_ref());
        }
        buckets
    }

    /// Add a single word to the bucket for its length.
    ///
    /// Returns `false` if the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.buckets
            .entry(word.chars().count())
            .or_default()
            .insert(word.to_string())
    }

    /// Words of the given length, if any.
    pub fn bucket(&self, length: usize) -> Option<&BTreeSet<String>> {
        self.buckets.get(&length)
    }

    /// All word lengths present, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    /// Iterate over `(length, words)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BTreeSet<String>)> {
        self.buckets.iter().map(|(len, words)| (*len, words))
    }

    /// Number of distinct lengths.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of distinct words across all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }
}

impl<S: AsRef<str>> FromIterator<S> for LengthBuckets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
