//! Word-list loading and writing.
//!
//! A word list is a plain text file with one word per line. Loading trims
//! surrounding whitespace, lowercases, skips blank lines and collapses
//! duplicates; writing emits the words sorted, one per line.
//!
//! # Examples
//!
//! ```
//! use teach_peace::lexicon::WordList;
//!
//! let words = WordList::from_reader("Teach\n  peace \n\nteach\n".as_bytes()).unwrap();
//! assert_eq!(words.len(), 2);
//! assert!(words.contains("teach"));
//! ```

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::grouping::LengthBuckets;

/// A sorted set of lowercase words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList {
    words: BTreeSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one word per line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut list = WordList::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            list.insert(word.to_lowercase());
        }
        Ok(list)
    }

    /// Load a word list file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let list = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} words from {}", list.len(), path.display());
        Ok(list)
    }

    /// Write the words sorted, one per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        for word in &self.words {
            writeln!(writer, "{word}")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Save the list to a file, replacing any existing content.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))
    }

    pub fn insert<S: Into<String>>(&mut self, word: S) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Group the words by length for matching.
    pub fn to_buckets(&self) -> LengthBuckets {
        LengthBuckets::from_words(self.iter())
    }
}

impl<S: Into<String>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = WordList::new();
        list.extend(iter);
        list
    }
}
