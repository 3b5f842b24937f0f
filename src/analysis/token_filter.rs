//! Token filters applied after tokenization.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`alphabetic::AlphabeticFilter`] - Drops empty and non-alphabetic tokens
//!
//! # Examples
//!
//! ```
//! use teach_peace::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec!["Hello".to_string(), "WORLD".to_string()];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered, vec!["hello", "world"]);
//! ```

use crate::analysis::TokenStream;
use crate::error::Result;

/// Trait for filters that transform a token stream.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter.
    fn name(&self) -> &'static str;
}

pub mod alphabetic;
pub mod lowercase;

pub use alphabetic::AlphabeticFilter;
pub use lowercase::LowercaseFilter;
