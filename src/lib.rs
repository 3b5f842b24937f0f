//! # teach-peace
//!
//! Finds pairs of equal-length words that share a middle substring while
//! differing in both the part before it and the part after it, the way
//! **t**-eac-**h** and **p**-eac-**e** do.
//!
//! ## Pipeline
//!
//! - [`analysis`] - turn free text into a unique word list
//! - [`lexicon`] - load and save word lists
//! - [`grouping`] - bucket words by length
//! - [`matcher`] - the pairwise teach-peace test and adjacency map
//! - [`sweep`] - run the matcher across a threshold range
//! - [`render`] - pair listings and SVG plots
//!
//! ## Example
//!
//! ```
//! use teach_peace::prelude::*;
//!
//! let words: WordList = ["teach", "peace", "reach", "track", "crack"].into_iter().collect();
//! let outcome = PairMatcher::with_threshold(MatchThreshold::new(2)?).run(&words.to_buckets());
//!
//! assert!(outcome.adjacency.contains_pair("teach", "peace"));
//! assert_eq!(outcome.total_pairings, 3);
//! # Ok::<(), teach_peace::error::TeachPeaceError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod grouping;
pub mod lexicon;
pub mod matcher;
pub mod render;
pub mod sweep;

pub mod prelude {
    pub use crate::error::{Result, TeachPeaceError};
    pub use crate::grouping::LengthBuckets;
    pub use crate::lexicon::WordList;
    pub use crate::matcher::{
        AdjacencyMap, MatchConfig, MatchOutcome, MatchThreshold, PairMatcher, PairOrder,
        is_teach_peace,
    };
    pub use crate::sweep::{SweepConfig, SweepPoint, SweepReport, ThresholdSweep};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
