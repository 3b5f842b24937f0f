//! Filter that keeps only purely alphabetic tokens.

use crate::analysis::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Drops empty tokens and tokens containing any non-alphabetic character.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticFilter;

impl AlphabeticFilter {
    pub fn new() -> Self {
        AlphabeticFilter
    }

    /// Whether a token survives this filter.
    pub fn accepts(token: &str) -> bool {
        !token.is_empty() && token.chars().all(char::is_alphabetic)
    }
}

impl Filter for AlphabeticFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| Self::accepts(token))))
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}
