use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::engine::{self, AnalyzedComment};
use crate::report::{Summary, SummaryRow};
use crate::sentiment::{Label, SentimentAnalyzer};

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<SentimentAnalyzer>,
    workers: usize,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer, workers: usize) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            workers: workers.max(1),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze))
        .route("/batch", post(analyze_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct AnalyzeReq {
    text: String,
}

#[derive(Serialize)]
struct AnalyzeResp {
    normalized: String,
    score: i32,
    label: Label,
}

#[derive(Serialize)]
struct BatchResp {
    results: Vec<AnalyzedComment>,
    summary: Vec<SummaryRow>,
}

async fn analyze(State(state): State<AppState>, Json(body): Json<AnalyzeReq>) -> Json<AnalyzeResp> {
    let row = engine::analyze_comment(&state.analyzer, &body.text);
    Json(AnalyzeResp {
        normalized: row.normalized,
        score: row.result.score,
        label: row.result.label,
    })
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(comments): Json<Vec<String>>,
) -> Result<Json<BatchResp>, StatusCode> {
    let analyzer = Arc::clone(&state.analyzer);
    let workers = state.workers;
    let results = tokio::task::spawn_blocking(move || {
        engine::analyze_batch_parallel(&analyzer, &comments, workers)
    })
    .await
    .map_err(|e| {
        warn!(error = %e, "batch worker failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let summary = Summary::from_results(&results);
    info!(total = summary.total, "batch analyzed");
    Ok(Json(BatchResp {
        results,
        summary: summary.rows,
    }))
}
