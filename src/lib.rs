// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod engine;
pub mod lexicon;
pub mod loader;
pub mod normalize;
pub mod report;
pub mod sentiment;
pub mod slang;
pub mod telemetry;
pub mod wordcloud;

// ---- Re-exports for stable public API ----
pub use crate::api::create_router;
pub use crate::engine::{analyze_batch, analyze_batch_parallel, analyze_comment, AnalyzedComment};
pub use crate::lexicon::Lexicon;
pub use crate::normalize::{normalize, Normalizer};
pub use crate::sentiment::{score, Label, SentimentAnalyzer, SentimentResult};
pub use crate::slang::SlangMap;
