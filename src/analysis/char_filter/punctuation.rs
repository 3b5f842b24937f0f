use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{Result, TeachPeaceError};

/// Symbols that separate words in free text.
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "\n", "\t", ",", ".", "-", "!", "?", "'", ":", "_", "[", "]", "\"", "`", "(", ")", ";",
];

/// Replaces every occurrence of a fixed symbol set with a single space.
pub struct PunctuationCharFilter {
    ac: AhoCorasick,
    symbols: Vec<String>,
}

impl PunctuationCharFilter {
    /// Filter over [`DEFAULT_SYMBOLS`].
    pub fn new() -> Result<Self> {
        Self::with_symbols(DEFAULT_SYMBOLS.iter().copied())
    }

    /// Filter over a custom symbol set. Empty symbols are ignored.
    pub fn with_symbols<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut symbols: Vec<String> = symbols
            .into_iter()
            .map(Into::into)
            .filter(|s: &String| !s.is_empty())
            .collect();
        symbols.sort();
        symbols.dedup();

        if symbols.is_empty() {
            return Err(TeachPeaceError::analysis(
                "punctuation filter needs at least one symbol",
            ));
        }

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&symbols)
            .map_err(|e| TeachPeaceError::Anyhow(anyhow::Error::from(e)))?;

        Ok(Self { ac, symbols })
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push(' ');
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        output
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
