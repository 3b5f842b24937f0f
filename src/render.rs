//! Rendering of match results.
//!
//! [`write_pairs`] prints an adjacency map as a tab-indented listing followed
//! by the total pairings. [`PlotRenderer`] draws sweep points as an SVG line
//! chart with threshold on x and total pairings on y.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::{Result, TeachPeaceError};
use crate::matcher::AdjacencyMap;
use crate::sweep::SweepPoint;

/// Write every word with its partners, then the total pairings.
pub fn write_pairs<W: Write>(adjacency: &AdjacencyMap, mut writer: W) -> Result<()> {
    for (word, partners) in adjacency.iter() {
        let partners = partners
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(writer, "\t{word} {{{partners}}}")?;
    }
    writeln!(writer, "\tTotal pairings: {}", adjacency.total_pairings())?;
    Ok(())
}

/// SVG line chart of sweep points.
#[derive(Clone, Debug)]
pub struct PlotRenderer {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub x_label: String,
    pub y_label: String,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        PlotRenderer {
            width: 640,
            height: 480,
            margin: 60,
            x_label: "Middle Match Requirement".to_string(),
            y_label: "Num. Satisfying Pairs".to_string(),
        }
    }
}

impl PlotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the points as an SVG document.
    pub fn render(&self, points: &[SweepPoint]) -> Result<String> {
        if self.width <= 2 * self.margin || self.height <= 2 * self.margin {
            return Err(TeachPeaceError::invalid_config(format!(
                "plot of {}x{} leaves no room inside a margin of {}",
                self.width, self.height, self.margin
            )));
        }

        let left = self.margin as f64;
        let right = (self.width - self.margin) as f64;
        let top = self.margin as f64;
        let bottom = (self.height - self.margin) as f64;

        let x_min = points.iter().map(|p| p.threshold).min().unwrap_or(0) as f64;
        let x_max = points.iter().map(|p| p.threshold).max().unwrap_or(1) as f64;
        let y_max = points.iter().map(|p| p.total_pairings).max().unwrap_or(0).max(1) as f64;
        let x_span = if x_max > x_min { x_max - x_min } else { 1.0 };

        let sx = |x: usize| left + (x as f64 - x_min) / x_span * (right - left);
        let sy = |y: usize| bottom - y as f64 / y_max * (bottom - top);

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            svg,
            r#"<rect width="100%" height="100%" fill="white"/>"#
        );
        let _ = writeln!(
            svg,
            r#"<g class="axes" stroke="black"><line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}"/><line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}"/></g>"#
        );

        for point in points {
            let x = sx(point.threshold);
            let _ = writeln!(
                svg,
                r#"<text class="x-tick" x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
                bottom + 18.0,
                point.threshold
            );
        }
        for value in [0, y_max as usize / 2, y_max as usize] {
            let _ = writeln!(
                svg,
                r#"<text class="y-tick" x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{value}</text>"#,
                left - 8.0,
                sy(value) + 4.0
            );
        }

        if !points.is_empty() {
            let coords = points
                .iter()
                .map(|p| format!("{:.1},{:.1}", sx(p.threshold), sy(p.total_pairings)))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                svg,
                r#"<polyline class="series" fill="none" stroke="steelblue" stroke-width="2" points="{coords}"/>"#
            );
        }

        for point in points {
            let (x, y) = (sx(point.threshold), sy(point.total_pairings));
            let d = 5.0;
            let _ = writeln!(
                svg,
                r#"<g class="marker" stroke="steelblue" stroke-width="2"><line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/><line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/></g>"#,
                x - d,
                y - d,
                x + d,
                y + d,
                x - d,
                y + d,
                x + d,
                y - d
            );
        }

        let _ = writeln!(
            svg,
            r#"<text class="x-label" x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{}</text>"#,
            (left + right) / 2.0,
            self.height as f64 - 15.0,
            escape(&self.x_label)
        );
        let _ = writeln!(
            svg,
            r#"<text class="y-label" x="20" y="{mid:.1}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {mid:.1})">{}</text>"#,
            escape(&self.y_label),
            mid = (top + bottom) / 2.0
        );
        svg.push_str("</svg>\n");

        Ok(svg)
    }

    /// Render and write the chart to `path`.
    pub fn save<P: AsRef<Path>>(&self, points: &[SweepPoint], path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render(points)?)?;
        info!("wrote plot of {} points to {}", points.len(), path.display());
        Ok(())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
