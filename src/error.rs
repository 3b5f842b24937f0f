//! Error types for the teach-peace library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TeachPeaceError`] enum. The matching core itself never fails once its
//! inputs are constructed; errors come from the boundary (threshold and
//! config validation) and from the word-list and corpus I/O around it.
//!
//! # Examples
//!
//! ```
//! use teach_peace::error::{Result, TeachPeaceError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TeachPeaceError::invalid_config("max_threshold below min_threshold"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for teach-peace operations.
#[derive(Error, Debug)]
pub enum TeachPeaceError {
    /// I/O errors (word lists, corpus files, plots)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A match threshold outside the accepted range
    #[error("Invalid threshold: {0} (must be at least 1)")]
    InvalidThreshold(usize),

    /// Inconsistent configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Text analysis errors (char filters, tokenizers)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TeachPeaceError.
pub type Result<T> = std::result::Result<T, TeachPeaceError>;

impl TeachPeaceError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TeachPeaceError::InvalidConfig(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TeachPeaceError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TeachPeaceError::Other(msg.into())
    }
}
