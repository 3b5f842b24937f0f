//! Output formatting for CLI commands.

use serde::Serialize;

use crate::cli::args::{OutputFormat, TeachPeaceArgs};
use crate::error::Result;
use crate::matcher::AdjacencyMap;
use crate::sweep::SweepPoint;

/// Result structure for corpus extraction.
#[derive(Debug, Serialize)]
pub struct ExtractionResult {
    pub input: String,
    pub output: String,
    pub words_written: usize,
    pub duration_ms: u64,
}

/// Result structure for a single matcher run.
#[derive(Debug, Serialize)]
pub struct MatchResult {
    pub words: usize,
    pub threshold: usize,
    pub total_pairings: usize,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairs: Option<AdjacencyMap>,
}

/// Result structure for a threshold sweep.
#[derive(Debug, Serialize)]
pub struct SweepResult {
    pub words: usize,
    pub points: Vec<SweepPoint>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &TeachPeaceArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &TeachPeaceArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    let Some(obj) = value.as_object() else {
        println!("{}", format_value(&value));
        return Ok(());
    };

    for (key, val) in obj {
        match (key.as_str(), val) {
            ("points", serde_json::Value::Array(points)) => {
                println!("Threshold  Total pairings");
                println!("─────────  ──────────────");
                for point in points {
                    let threshold = point.get("threshold").and_then(|t| t.as_u64()).unwrap_or(0);
                    let total = point
                        .get("total_pairings")
                        .and_then(|t| t.as_u64())
                        .unwrap_or(0);
                    println!("{threshold:>9}  {total:>14}");
                }
            }
            // Pair listings are printed separately by the match command.
            ("pairs", _) => {}
            _ => println!("{key}: {}", format_value(val)),
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TeachPeaceArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: Serialize>(result: &T) -> Result<()> {
    let value = serde_json::to_value(result)?;
    for line in csv_lines(&value) {
        println!("{line}");
    }
    Ok(())
}

/// Flatten a value into CSV lines. Sweep points become one row each.
fn csv_lines(value: &serde_json::Value) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(points) = value.get("points").and_then(|p| p.as_array()) {
        lines.push("threshold,total_pairings".to_string());
        for point in points {
            lines.push(format!(
                "{},{}",
                format_csv_value(&point["threshold"]),
                format_csv_value(&point["total_pairings"])
            ));
        }
        return lines;
    }

    match value {
        serde_json::Value::Object(obj) => {
            lines.push("key,value".to_string());
            for (key, value) in obj {
                lines.push(format!("{key},{}", format_csv_value(value)));
            }
        }
        _ => {
            lines.push("value".to_string());
            lines.push(format_csv_value(value));
        }
    }
    lines
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

/// Format a JSON value for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => {
            if s.contains(',') || s.contains('"') || s.contains('\n') {
                let escaped = s.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                s.clone()
            }
        }
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("\"[{formatted_values}]\"")
        }
        serde_json::Value::Object(_) => "\"[object]\"".to_string(),
        serde_json::Value::Null => "".to_string(),
    }
}
