//! # Batch Engine
//! Runs raw comments through normalize → score and keeps input order.
//! No I/O; the only side effect is metric counters (no-ops without a recorder).
//!
//! Policy: every comment is independent, so a batch can be split into
//! contiguous chunks and scored on scoped threads sharing one read-only
//! analyzer. Results are concatenated chunk by chunk, which restores the
//! original order.

use metrics::counter;
use serde::Serialize;
use std::thread;
use tracing::debug;

use crate::sentiment::{Label, SentimentAnalyzer, SentimentResult};

/// Minimum comments per worker before a batch is split.
const MIN_CHUNK: usize = 64;

/// One output row: the raw comment, its normalized form, and its sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedComment {
    pub raw: String,
    pub normalized: String,
    #[serde(flatten)]
    pub result: SentimentResult,
}

impl AnalyzedComment {
    pub fn label(&self) -> Label {
        self.result.label
    }

    pub fn score(&self) -> i32 {
        self.result.score
    }
}

/// Analyze a single comment.
pub fn analyze_comment(analyzer: &SentimentAnalyzer, raw: &str) -> AnalyzedComment {
    let (normalized, result) = analyzer.score_text(raw);
    counter!("comments_analyzed_total", "label" => result.label.as_str()).increment(1);
    AnalyzedComment {
        raw: raw.to_string(),
        normalized,
        result,
    }
}

/// Sequential batch; output has the same length and order as `comments`.
pub fn analyze_batch<S: AsRef<str>>(
    analyzer: &SentimentAnalyzer,
    comments: &[S],
) -> Vec<AnalyzedComment> {
    counter!("batches_analyzed_total").increment(1);
    comments
        .iter()
        .map(|c| analyze_comment(analyzer, c.as_ref()))
        .collect()
}

/// Same result as [`analyze_batch`], spread across up to `workers` threads.
pub fn analyze_batch_parallel<S: AsRef<str> + Sync>(
    analyzer: &SentimentAnalyzer,
    comments: &[S],
    workers: usize,
) -> Vec<AnalyzedComment> {
    let workers = workers.min(comments.len() / MIN_CHUNK).max(1);
    if workers == 1 {
        return analyze_batch(analyzer, comments);
    }

    counter!("batches_analyzed_total").increment(1);
    let chunk_len = comments.len().div_ceil(workers);
    debug!(workers, chunk_len, total = comments.len(), "parallel batch");

    thread::scope(|scope| {
        let handles: Vec<_> = comments
            .chunks(chunk_len)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|c| analyze_comment(analyzer, c.as_ref()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut out = Vec::with_capacity(comments.len());
        for h in handles {
            match h.join() {
                Ok(part) => out.extend(part),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        out
    })
}
