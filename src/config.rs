//! File-based configuration.
//!
//! A JSON config file supplies defaults for the sweep and corpus settings.
//! Every field is optional; missing fields keep their defaults.
//!
//! ```json
//! {
//!   "sweep": { "min_threshold": 2, "max_threshold": 5, "parallel": true },
//!   "corpus": { "alphabetic_only": false }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::corpus::CorpusConfig;
use crate::error::Result;
use crate::sweep::SweepConfig;

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeachPeaceConfig {
    pub sweep: SweepConfig,
    pub corpus: CorpusConfig,
}

impl TeachPeaceConfig {
    /// Load a JSON config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: TeachPeaceConfig = serde_json::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
