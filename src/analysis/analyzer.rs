//! Pipeline analyzer that combines char filters, a tokenizer and filters.
//!
//! Processing order:
//! 1. Char Filters: normalize raw text
//! 2. Tokenizer: split text into tokens
//! 3. Token Filters: applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use teach_peace::analysis::analyzer::PipelineAnalyzer;
//! use teach_peace::analysis::char_filter::PunctuationCharFilter;
//! use teach_peace::analysis::token_filter::LowercaseFilter;
//! use teach_peace::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_char_filter(Arc::new(PunctuationCharFilter::new().unwrap()))
//!     .add_filter(Arc::new(LowercaseFilter::new()));
//!
//! let tokens: Vec<_> = analyzer.analyze("Teach, PEACE!").unwrap().collect();
//! assert_eq!(tokens, vec!["teach", "peace"]);
//! ```

use std::sync::Arc;

use crate::analysis::TokenStream;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    char_filters: Vec<Arc<dyn CharFilter>>,
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            char_filters: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Add a char filter to the pipeline.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of every stage, in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.char_filters
            .iter()
            .map(|f| f.name())
            .chain(std::iter::once(self.tokenizer.name()))
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }

    /// Run the full pipeline over a piece of text.
    pub fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut filtered_text = text.to_string();
        for char_filter in &self.char_filters {
            filtered_text = char_filter.filter(&filtered_text);
        }

        let mut tokens = self.tokenizer.tokenize(&filtered_text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::PunctuationCharFilter;
    use crate::analysis::token_filter::{AlphabeticFilter, LowercaseFilter};
    use crate::analysis::tokenizer::WhitespaceTokenizer;

    fn analyzer() -> PipelineAnalyzer {
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PunctuationCharFilter::new().unwrap()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphabeticFilter::new()))
    }

    #[test]
    fn test_pipeline_order() {
        let tokens: Vec<String> = analyzer()
            .analyze("\"Teach\" (peace) -- it's 2019; [Reach]!")
            .unwrap()
            .collect();

        assert_eq!(tokens, vec!["teach", "peace", "it", "s", "reach"]);
    }

    #[test]
    fn test_without_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        let tokens: Vec<String> = analyzer.analyze("Keep, Case").unwrap().collect();
        assert_eq!(tokens, vec!["Keep,", "Case"]);
    }

    #[test]
    fn test_names() {
        let analyzer = analyzer().with_name("corpus");
        assert_eq!(analyzer.name(), "corpus");
        assert_eq!(
            analyzer.stage_names(),
            vec!["punctuation", "whitespace", "lowercase", "alphabetic"]
        );
        assert_eq!(
            PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new())).name(),
            "pipeline_whitespace"
        );
    }
}
