//! Axum route handlers for the guidance API.
//!
//! Every handler answers 200 with either the model result or its fallback.
//! Only a missing required input is an error (400), and in that case the
//! model is never called.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::guidance::models::{
    ChatRequest, GuidanceRequest, ProgressRequest, ResumeAnalysisRequest,
    ResumeComparisonRequest, RoadmapRequest,
};
use crate::guidance::pipeline;
use crate::progress::{ProgressDraft, ProgressEntry};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub current: Value,
    pub history: Vec<ProgressEntry>,
}

fn require(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

async fn respond(state: &AppState, request: GuidanceRequest) -> Json<Value> {
    let outcome = pipeline::run(state.llm.as_ref(), &state.interpreter, &request).await;
    Json(outcome.value)
}

/// POST /generate-roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    Ok(respond(&state, GuidanceRequest::Roadmap(request)).await)
}

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    require(&request.query, "No query provided")?;
    Ok(respond(&state, GuidanceRequest::Chat(request)).await)
}

/// POST /analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeAnalysisRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    require(&request.resume, "No resume text provided")?;
    Ok(respond(&state, GuidanceRequest::ResumeAnalysis(request)).await)
}

/// POST /compare-resumes
pub async fn handle_compare_resumes(
    State(state): State<AppState>,
    payload: Result<Json<ResumeComparisonRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let message = "Both user and peer resumes are required";
    require(&request.user_resume, message)?;
    require(&request.peer_resume, message)?;
    Ok(respond(&state, GuidanceRequest::ResumeComparison(request)).await)
}

/// POST /track-progress
///
/// Records the week's score (model or fallback) and returns it with the full
/// history. The returned `current.week` is the week actually recorded.
pub async fn handle_track_progress(
    State(state): State<AppState>,
    payload: Result<Json<ProgressRequest>, JsonRejection>,
) -> Result<Json<ProgressResponse>, AppError> {
    let Json(request) = payload?;
    require(&request.achievements, "No achievements provided")?;

    let outcome = pipeline::run(
        state.llm.as_ref(),
        &state.interpreter,
        &GuidanceRequest::Progress(request),
    )
    .await;

    let source = outcome.source;
    let mut current = outcome.value;
    let snapshot = state
        .progress
        .append(ProgressDraft::from_result(&current))
        .await;
    info!(
        "Recorded progress week {} ({:?} result), history length {}",
        snapshot.latest.week,
        source,
        snapshot.history.len()
    );

    if let Some(fields) = current.as_object_mut() {
        fields.insert("week".to_string(), snapshot.latest.week.into());
    }

    Ok(Json(ProgressResponse {
        current,
        history: snapshot.history,
    }))
}

/// GET /progress-history
pub async fn handle_progress_history(State(state): State<AppState>) -> Json<Vec<ProgressEntry>> {
    Json(state.progress.list().await)
}
