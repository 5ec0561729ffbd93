use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::batch::IntakeRecord;
use super::domain::CaseAnalysis;
use super::rules::RuleSetSummary;
use super::CaseAnalysisEngine;

/// Router builder exposing the analysis engine to the chat and intake collaborators.
pub fn analysis_router(engine: Arc<CaseAnalysisEngine>) -> Router {
    Router::new()
        .route("/api/v1/cases/analyze", post(analyze_handler))
        .route("/api/v1/cases/analyze/batch", post(batch_handler))
        .route("/api/v1/cases/rules", get(rules_handler))
        .with_state(engine)
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub report: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub rule_set_version: String,
    pub analyzed_at: DateTime<Utc>,
    pub summary: String,
    pub analysis: CaseAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub reports: Vec<IntakeRecord>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub rule_set_version: String,
    pub analyzed_at: DateTime<Utc>,
    pub results: Vec<BatchResultView>,
}

#[derive(Debug, Serialize)]
pub struct BatchResultView {
    pub case_id: String,
    pub summary: String,
    pub analysis: CaseAnalysis,
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<CaseAnalysisEngine>>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    let analysis = engine.analyze_case(&request.report);
    Json(AnalyzeResponse {
        rule_set_version: engine.version().to_string(),
        analyzed_at: Utc::now(),
        summary: analysis.summary(),
        analysis,
    })
}

pub(crate) async fn batch_handler(
    State(engine): State<Arc<CaseAnalysisEngine>>,
    Json(request): Json<BatchRequest>,
) -> Json<BatchResponse> {
    let results = engine
        .analyze_batch(&request.reports)
        .into_iter()
        .map(|outcome| BatchResultView {
            case_id: outcome.case_id,
            summary: outcome.analysis.summary(),
            analysis: outcome.analysis,
        })
        .collect();

    Json(BatchResponse {
        rule_set_version: engine.version().to_string(),
        analyzed_at: Utc::now(),
        results,
    })
}

pub(crate) async fn rules_handler(
    State(engine): State<Arc<CaseAnalysisEngine>>,
) -> Json<RuleSetSummary> {
    Json(engine.rules().summary())
}
