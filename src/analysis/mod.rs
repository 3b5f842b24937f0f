//! Text analysis for corpus extraction.
//!
//! Raw text is turned into candidate words by a small pipeline: char filters
//! normalize the text, a tokenizer splits it, and token filters rewrite or
//! drop the resulting tokens. The [`analyzer::PipelineAnalyzer`] wires the
//! stages together; [`corpus::CorpusExtractor`] builds word lists with it.

pub mod analyzer;
pub mod char_filter;
pub mod corpus;
pub mod token_filter;
pub mod tokenizer;

/// A stream of tokens flowing between pipeline stages.
pub type TokenStream = Box<dyn Iterator<Item = String> + Send>;

// Re-export commonly used types
pub use analyzer::PipelineAnalyzer;
pub use char_filter::{CharFilter, PunctuationCharFilter};
pub use corpus::{CorpusConfig, CorpusExtractor};
pub use token_filter::{AlphabeticFilter, Filter, LowercaseFilter};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
