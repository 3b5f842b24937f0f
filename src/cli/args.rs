//! Command line argument parsing for the teach-peace CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::matcher::PairOrder;
use crate::sweep::SweepConfig;

/// teach-peace - find word pairs like teach/peace in a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "teach-peace")]
#[command(about = "Find word pairs sharing a middle with differing prefixes and suffixes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TeachPeaceArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TeachPeaceArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a sorted unique word list from free text
    Extract(ExtractArgs),

    /// Find all pairs for a single threshold
    Match(MatchArgs),

    /// Count paired words across a range of thresholds
    Sweep(SweepArgs),
}

/// Arguments for corpus extraction
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// Text file to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Word list file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Keep tokens containing digits or other non-alphabetic characters
    #[arg(long)]
    pub keep_non_alphabetic: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}

/// Arguments for a single matcher run
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// Minimum length of the shared middle
    #[arg(short, long, default_value = "2")]
    pub threshold: usize,

    /// Test each unordered pair once and mirror the result
    #[arg(long)]
    pub mirrored: bool,

    /// Include every word with its partners in the output
    #[arg(long)]
    pub show_pairs: bool,
}

/// Arguments for a threshold sweep
#[derive(Parser, Debug, Clone)]
pub struct SweepArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORDS")]
    pub words: PathBuf,

    /// First threshold (default 1)
    #[arg(long)]
    pub min: Option<usize>,

    /// Last threshold, inclusive (default 7)
    #[arg(long)]
    pub max: Option<usize>,

    /// Evaluate thresholds in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Test each unordered pair once and mirror the result
    #[arg(long)]
    pub mirrored: bool,

    /// Write an SVG plot of the sweep to this file
    #[arg(long, value_name = "PLOT_FILE")]
    pub plot: Option<PathBuf>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,
}

impl SweepArgs {
    /// Overlay explicit flags on a base configuration.
    pub fn apply_to(&self, mut config: SweepConfig) -> SweepConfig {
        if let Some(min) = self.min {
            config.min_threshold = min;
        }
        if let Some(max) = self.max {
            config.max_threshold = max;
        }
        if self.parallel {
            config.parallel = true;
        }
        if self.mirrored {
            config.pair_order = PairOrder::Mirrored;
        }
        config
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sweep() {
        let args = TeachPeaceArgs::parse_from([
            "teach-peace",
            "-vv",
            "--format",
            "json",
            "sweep",
            "words.txt",
            "--max",
            "5",
            "--parallel",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Sweep(sweep) => {
                assert_eq!(sweep.words, PathBuf::from("words.txt"));
                let config = sweep.apply_to(SweepConfig::default());
                assert_eq!(config.min_threshold, 1);
                assert_eq!(config.max_threshold, 5);
                assert!(config.parallel);
                assert_eq!(config.pair_order, PairOrder::Exhaustive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_match_defaults() {
        let args = TeachPeaceArgs::parse_from(["teach-peace", "-q", "match", "words.txt"]);

        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.output_format, OutputFormat::Human);
        match args.command {
            Command::Match(m) => {
                assert_eq!(m.threshold, 2);
                assert!(!m.mirrored);
                assert!(!m.show_pairs);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let args = TeachPeaceArgs::parse_from([
            "teach-peace",
            "sweep",
            "words.txt",
            "--min",
            "3",
            "--mirrored",
        ]);
        let Command::Sweep(sweep) = args.command else {
            panic!("expected sweep");
        };
        let base = SweepConfig {
            min_threshold: 2,
            max_threshold: 4,
            parallel: true,
            pair_order: PairOrder::Exhaustive,
        };
        let config = sweep.apply_to(base);
        assert_eq!(config.min_threshold, 3);
        assert_eq!(config.max_threshold, 4);
        assert!(config.parallel);
        assert_eq!(config.pair_order, PairOrder::Mirrored);
    }
}
