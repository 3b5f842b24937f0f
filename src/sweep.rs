//! Threshold sweeps.
//!
//! A sweep runs the [`PairMatcher`] once for every threshold in an inclusive
//! range over the same [`LengthBuckets`], yielding one [`MatchOutcome`] and
//! one `(threshold, total_pairings)` point per threshold. Thresholds are
//! independent, so the parallel mode spreads them over rayon's pool and
//! produces exactly the same report as the sequential mode.
//!
//! # Examples
//!
//! ```
//! use teach_peace::grouping::LengthBuckets;
//! use teach_peace::sweep::{SweepConfig, ThresholdSweep};
//!
//! let buckets = LengthBuckets::from_words(["teach", "peace"]);
//! let config = SweepConfig { min_threshold: 1, max_threshold: 5, ..SweepConfig::default() };
//! let report = ThresholdSweep::new(config).unwrap().run(&buckets);
//!
//! let totals: Vec<usize> = report.points().iter().map(|p| p.total_pairings).collect();
//! assert_eq!(totals, vec![2, 2, 2, 0, 0]);
//! ```

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TeachPeaceError};
use crate::grouping::LengthBuckets;
use crate::matcher::{MatchConfig, MatchOutcome, MatchThreshold, PairMatcher, PairOrder};

/// Settings for a threshold sweep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// First threshold, inclusive. At least 1.
    pub min_threshold: usize,
    /// Last threshold, inclusive.
    pub max_threshold: usize,
    /// Evaluate thresholds concurrently.
    pub parallel: bool,
    pub pair_order: PairOrder,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            min_threshold: 1,
            max_threshold: 7,
            parallel: false,
            pair_order: PairOrder::Exhaustive,
        }
    }
}

impl SweepConfig {
    /// Check the range and return the validated thresholds.
    pub fn thresholds(&self) -> Result<Vec<MatchThreshold>> {
        if self.min_threshold > self.max_threshold {
            return Err(TeachPeaceError::invalid_config(format!(
                "min_threshold ({}) is greater than max_threshold ({})",
                self.min_threshold, self.max_threshold
            )));
        }
        (self.min_threshold..=self.max_threshold)
            .map(MatchThreshold::new)
            .collect()
    }
}

/// One point of a sweep curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub threshold: usize,
    pub total_pairings: usize,
}

/// All outcomes of a sweep, ordered by threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub word_count: usize,
    pub outcomes: Vec<MatchOutcome>,
}

impl SweepReport {
    pub fn points(&self) -> Vec<SweepPoint> {
        self.outcomes
            .iter()
            .map(|outcome| SweepPoint {
                threshold: outcome.threshold.get(),
                total_pairings: outcome.total_pairings,
            })
            .collect()
    }

    pub fn outcome(&self, threshold: usize) -> Option<&MatchOutcome> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.threshold.get() == threshold)
    }
}

/// Runs the matcher across a range of thresholds.
#[derive(Clone, Debug)]
pub struct ThresholdSweep {
    config: SweepConfig,
    thresholds: Vec<MatchThreshold>,
}

impl ThresholdSweep {
    /// Validate the config and prepare the sweep.
    pub fn new(config: SweepConfig) -> Result<Self> {
        let thresholds = config.thresholds()?;
        Ok(ThresholdSweep { config, thresholds })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn run(&self, buckets: &LengthBuckets) -> SweepReport {
        let pair_order = self.config.pair_order;
        let run_one = |threshold: &MatchThreshold| {
            let outcome = PairMatcher::new(MatchConfig {
                threshold: *threshold,
                pair_order,
            })
            .run(buckets);
            info!(
                "threshold {}: {} words paired",
                outcome.threshold, outcome.total_pairings
            );
            outcome
        };

        let outcomes: Vec<MatchOutcome> = if self.config.parallel {
            self.thresholds.par_iter().map(run_one).collect()
        } else {
            self.thresholds.iter().map(run_one).collect()
        };

        SweepReport {
            word_count: buckets.word_count(),
            outcomes,
        }
    }
}
