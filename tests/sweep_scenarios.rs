//! End-to-end scenarios: corpus file -> word list -> sweep -> plot.

use std::fs;

use tempfile::TempDir;
use teach_peace::analysis::corpus::{CorpusConfig, CorpusExtractor};
use teach_peace::config::TeachPeaceConfig;
use teach_peace::prelude::*;
use teach_peace::render::PlotRenderer;

const TEXT: &str = "\
Teach peace, not war! Reach the beach -- then (maybe) track the crack.
\"Planet\" and 'clanks'; stone, atoms... the other tithe: be me.
Teach peace again_and_again.
";

#[test]
fn test_extract_load_and_sweep() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("text.txt");
    let words_path = temp_dir.path().join("words.txt");
    fs::write(&text_path, TEXT)?;

    let extractor = CorpusExtractor::new(CorpusConfig::default())?;
    let written = extractor.extract_file(&text_path, &words_path)?;

    let content = fs::read_to_string(&words_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), written);
    assert!(lines.windows(2).all(|w| w[0] < w[1]), "sorted and unique");
    assert!(lines.contains(&"teach"));
    assert!(lines.contains(&"again"));
    assert!(!lines.iter().any(|w| w.chars().any(|c| !c.is_alphabetic())));

    let words = WordList::load(&words_path)?;
    assert_eq!(words.len(), written);

    let report = ThresholdSweep::new(SweepConfig::default())?.run(&words.to_buckets());
    let points = report.points();
    assert_eq!(points.len(), 7);
    assert!(
        points
            .windows(2)
            .all(|w| w[0].total_pairings >= w[1].total_pairings)
    );

    let at_three = report.outcome(3).unwrap();
    assert!(at_three.adjacency.contains_pair("teach", "peace"));
    assert!(!at_three.adjacency.contains_pair("track", "crack"));
    assert!(report.outcome(4).unwrap().adjacency.partners("teach").is_none());

    let plot_path = temp_dir.path().join("plot.svg");
    PlotRenderer::new().save(&points, &plot_path)?;
    let svg = fs::read_to_string(&plot_path)?;
    assert_eq!(svg.matches(r#"class="marker""#).count(), 7);

    Ok(())
}

#[test]
fn test_config_file_drives_sweep() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{"sweep": {"min_threshold": 2, "max_threshold": 4, "parallel": true}}"#,
    )?;

    let config = TeachPeaceConfig::load(&config_path)?;
    let buckets = LengthBuckets::from_words(["teach", "peace", "beach", "reach"]);
    let report = ThresholdSweep::new(config.sweep)?.run(&buckets);

    assert_eq!(
        report.points().iter().map(|p| p.threshold).collect::<Vec<_>>(),
        vec![2, 3, 4]
    );
    Ok(())
}

#[test]
fn test_malformed_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{"sweep": {"min_threshold": "one"}}"#).unwrap();

    let err = TeachPeaceConfig::load(&config_path).unwrap_err();
    assert!(matches!(err, TeachPeaceError::Json(_)));
}

#[test]
fn test_missing_word_list() {
    let temp_dir = TempDir::new().unwrap();
    let err = WordList::load(temp_dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, TeachPeaceError::Io(_)));
}

#[test]
fn test_degenerate_word_lists() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let sweep = ThresholdSweep::new(SweepConfig::default())?;

    for content in ["", "teach\n", "peace\npeace\nPEACE\n"] {
        let path = temp_dir.path().join("words.txt");
        fs::write(&path, content)?;
        let report = sweep.run(&WordList::load(&path)?.to_buckets());
        assert!(report.points().iter().all(|p| p.total_pairings == 0));
    }
    Ok(())
}
