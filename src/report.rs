//! # Report
//! Aggregates analyzed comments into per-label counts and percentages and
//! renders them as plain text (table, samples, horizontal bar chart).
//!
//! Labels with zero comments are left out. Rows are sorted by count
//! descending; equal counts keep the `Label` order (Positive, Negative, Neutral).

use serde::Serialize;
use std::fmt::Write as _;

use crate::engine::AnalyzedComment;
use crate::sentiment::Label;
use crate::wordcloud::{word_frequencies, Stopwords, WordCount};

/// Width of the longest bar in [`render_bar_chart`].
pub const BAR_WIDTH: usize = 40;

/// Labels whose sample comments appear in a [`BatchReport`].
pub const SAMPLE_LABELS: [Label; 2] = [Label::Positive, Label::Negative];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: Label,
    pub count: usize,
    /// Share of the batch in percent, rounded to 2 decimals (ties to even).
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub rows: Vec<SummaryRow>,
}

impl Summary {
    pub fn from_results(results: &[AnalyzedComment]) -> Self {
        let total = results.len();
        let mut rows: Vec<SummaryRow> = Label::ALL
            .iter()
            .map(|&label| {
                let count = results.iter().filter(|r| r.label() == label).count();
                SummaryRow {
                    label,
                    count,
                    percent: percent(count, total),
                }
            })
            .filter(|row| row.count > 0)
            .collect();
        // stable sort keeps Label order for ties
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Self { total, rows }
    }

    pub fn count(&self, label: Label) -> usize {
        self.row(label).map_or(0, |r| r.count)
    }

    pub fn percent(&self, label: Label) -> f64 {
        self.row(label).map_or(0.0, |r| r.percent)
    }

    fn row(&self, label: Label) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let p = count as f64 / total as f64 * 100.0;
    (p * 100.0).round_ties_even() / 100.0
}

/// First `n` comments carrying `label`, in input order.
pub fn samples(results: &[AnalyzedComment], label: Label, n: usize) -> Vec<&AnalyzedComment> {
    results.iter().filter(|r| r.label() == label).take(n).collect()
}

pub fn render_summary_table(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:>8} {:>11}", "Label", "Count", "Percent");
    for row in &summary.rows {
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>10.2}%",
            row.label.as_str(),
            row.count,
            row.percent
        );
    }
    let _ = writeln!(out, "{:<10} {:>8}", "Total", summary.total);
    out
}

pub fn render_samples(label: Label, rows: &[&AnalyzedComment]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- {} {} sample comment(s) ---", rows.len(), label);
    if rows.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for (i, r) in rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. [{:+}] {}", i + 1, r.score(), r.raw.trim());
    }
    out
}

/// One `#` bar per label, scaled so the largest share spans [`BAR_WIDTH`].
pub fn render_bar_chart(summary: &Summary) -> String {
    let max = summary.rows.iter().map(|r| r.percent).fold(0.0_f64, f64::max);
    let mut out = String::new();
    for row in &summary.rows {
        let len = if max > 0.0 {
            ((row.percent / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<10} |{:<width$}| {:.2}%",
            row.label.as_str(),
            "#".repeat(len),
            row.percent,
            width = BAR_WIDTH
        );
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelSamples {
    pub label: Label,
    pub comments: Vec<AnalyzedComment>,
}

/// Everything the console/JSON report shows for one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub summary: Summary,
    pub samples: Vec<LabelSamples>,
    pub top_words: Vec<WordCount>,
}

impl BatchReport {
    pub fn build(
        results: &[AnalyzedComment],
        sample_size: usize,
        stopwords: &Stopwords,
        top_words: usize,
    ) -> Self {
        let sampled = SAMPLE_LABELS
            .iter()
            .map(|&label| LabelSamples {
                label,
                comments: samples(results, label, sample_size)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect();
        let top_words = word_frequencies(
            results.iter().map(|r| r.normalized.as_str()),
            stopwords,
            top_words,
        );
        Self {
            summary: Summary::from_results(results),
            samples: sampled,
            top_words,
        }
    }

    pub fn render_text(&self) -> String {
        let rule = "=".repeat(47);
        let mut out = String::new();
        let _ = writeln!(out, "{rule}\nSENTIMENT OF ALL COMMENTS\n{rule}");
        out.push_str(&render_summary_table(&self.summary));
        out.push('\n');
        for s in &self.samples {
            let refs: Vec<&AnalyzedComment> = s.comments.iter().collect();
            out.push_str(&render_samples(s.label, &refs));
            out.push('\n');
        }
        let _ = writeln!(out, "--- Sentiment distribution ---");
        out.push_str(&render_bar_chart(&self.summary));
        if !self.top_words.is_empty() {
            let _ = writeln!(out, "\n--- Most frequent words ---");
            for w in &self.top_words {
                let _ = writeln!(out, "{:<20} {:>6}", w.word, w.count);
            }
        }
        out
    }
}
