//! Corpus extraction: free text in, unique word list out.
//!
//! # Examples
//!
//! ```
//! use teach_peace::analysis::corpus::{CorpusConfig, CorpusExtractor};
//!
//! let extractor = CorpusExtractor::new(CorpusConfig::default()).unwrap();
//! let words = extractor.extract("Teach peace; teach it (now)!").unwrap();
//!
//! assert_eq!(words.iter().collect::<Vec<_>>(), vec!["it", "now", "peace", "teach"]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::info;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::char_filter::PunctuationCharFilter;
use crate::analysis::token_filter::{AlphabeticFilter, LowercaseFilter};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;
use crate::lexicon::WordList;

/// Settings for corpus extraction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Drop tokens containing digits or other non-alphabetic characters.
    pub alphabetic_only: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            alphabetic_only: true,
        }
    }
}

/// Builds word lists from raw text.
pub struct CorpusExtractor {
    analyzer: PipelineAnalyzer,
}

impl CorpusExtractor {
    pub fn new(config: CorpusConfig) -> Result<Self> {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PunctuationCharFilter::new()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("corpus");
        if config.alphabetic_only {
            analyzer = analyzer.add_filter(Arc::new(AlphabeticFilter::new()));
        }
        Ok(CorpusExtractor { analyzer })
    }

    pub fn analyzer(&self) -> &PipelineAnalyzer {
        &self.analyzer
    }

    /// Unique words of a piece of text.
    pub fn extract(&self, text: &str) -> Result<WordList> {
        let mut words = WordList::new();
        words.extend(self.analyzer.analyze(text)?);
        Ok(words)
    }

    /// Unique words of a line-oriented text source.
    pub fn extract_reader<R: BufRead>(&self, reader: R) -> Result<WordList> {
        let mut words = WordList::new();
        for line in reader.lines() {
            words.extend(self.analyzer.analyze(&line?)?);
        }
        Ok(words)
    }

    /// Read `input`, write its sorted unique words to `output` one per line.
    ///
    /// Returns the number of words written.
    pub fn extract_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<usize> {
        let input = input.as_ref();
        let output = output.as_ref();

        let words = self.extract_reader(BufReader::new(File::open(input)?))?;
        words.save(output)?;

        info!(
            "extracted {} words from {} into {}",
            words.len(),
            input.display(),
            output.display()
        );
        Ok(words.len())
    }
}
