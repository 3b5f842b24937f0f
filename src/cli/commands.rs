//! Command implementations for the teach-peace CLI.

use std::io;
use std::time::Instant;

use log::info;

use crate::analysis::corpus::CorpusExtractor;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::TeachPeaceConfig;
use crate::error::Result;
use crate::lexicon::WordList;
use crate::matcher::{MatchConfig, MatchThreshold, PairMatcher, PairOrder};
use crate::render::{PlotRenderer, write_pairs};
use crate::sweep::ThresholdSweep;

/// Execute a CLI command.
pub fn execute_command(args: TeachPeaceArgs) -> Result<()> {
    match &args.command {
        Command::Extract(extract_args) => extract_corpus(extract_args, &args),
        Command::Match(match_args) => match_words(match_args, &args),
        Command::Sweep(sweep_args) => run_sweep(sweep_args, &args),
    }
}

/// Turn free text into a word list file.
fn extract_corpus(args: &ExtractArgs, cli_args: &TeachPeaceArgs) -> Result<()> {
    let mut config = TeachPeaceConfig::load_or_default(args.config_file.as_ref())?.corpus;
    if args.keep_non_alphabetic {
        config.alphabetic_only = false;
    }

    let start_time = Instant::now();
    let extractor = CorpusExtractor::new(config)?;
    let words_written = extractor.extract_file(&args.input, &args.output)?;

    output_result(
        "Corpus extracted",
        &ExtractionResult {
            input: args.input.to_string_lossy().to_string(),
            output: args.output.to_string_lossy().to_string(),
            words_written,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Run the matcher for one threshold.
fn match_words(args: &MatchArgs, cli_args: &TeachPeaceArgs) -> Result<()> {
    let threshold = MatchThreshold::new(args.threshold)?;
    let words = WordList::load(&args.words)?;
    let buckets = words.to_buckets();
    info!(
        "matching {} words in {} length buckets at threshold {threshold}",
        buckets.word_count(),
        buckets.len()
    );

    let start_time = Instant::now();
    let matcher = PairMatcher::new(MatchConfig {
        threshold,
        pair_order: if args.mirrored {
            PairOrder::Mirrored
        } else {
            PairOrder::Exhaustive
        },
    });
    let outcome = matcher.run(&buckets);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    if args.show_pairs && cli_args.output_format == OutputFormat::Human {
        write_pairs(&outcome.adjacency, io::stdout().lock())?;
        println!();
    }

    output_result(
        "Matching completed",
        &MatchResult {
            words: words.len(),
            threshold: threshold.get(),
            total_pairings: outcome.total_pairings,
            duration_ms,
            pairs: args.show_pairs.then_some(outcome.adjacency),
        },
        cli_args,
    )
}

/// Run the matcher over a range of thresholds, optionally plotting the curve.
fn run_sweep(args: &SweepArgs, cli_args: &TeachPeaceArgs) -> Result<()> {
    let config = TeachPeaceConfig::load_or_default(args.config_file.as_ref())?;
    let sweep = ThresholdSweep::new(args.apply_to(config.sweep))?;

    let words = WordList::load(&args.words)?;
    let buckets = words.to_buckets();
    info!(
        "sweeping thresholds {}..={} over {} words",
        sweep.config().min_threshold,
        sweep.config().max_threshold,
        buckets.word_count()
    );

    let start_time = Instant::now();
    let report = sweep.run(&buckets);
    let duration_ms = start_time.elapsed().as_millis() as u64;
    let points = report.points();

    if let Some(plot_path) = &args.plot {
        PlotRenderer::new().save(&points, plot_path)?;
    }

    output_result(
        "Sweep completed",
        &SweepResult {
            words: words.len(),
            points,
            duration_ms,
            plot: args
                .plot
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        cli_args,
    )
}
