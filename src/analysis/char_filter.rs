//! Char filters that pre-process text before it reaches the tokenizer.
//!
//! # Available Filters
//!
//! - [`punctuation::PunctuationCharFilter`] - Replaces punctuation with spaces

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod punctuation;

pub use punctuation::PunctuationCharFilter;
