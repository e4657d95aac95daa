//! Axum route handlers for the coaching API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::coaching::analysis::AnalysisType;
use crate::coaching::composer::compose;
use crate::coaching::methodology::MethodologyRecord;
use crate::coaching::transcripts;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub conversation: String,
    /// Absent field defaults to "general"; an unrecognized value is rejected.
    pub analysis_type: Option<String>,
    /// Methodology id, or "none"/absent for no methodology.
    pub methodology: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct MethodologyListResponse {
    pub methodologies: BTreeMap<&'static str, &'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Composes the coaching prompt and relays it to the completion backend.
/// Validation happens entirely here: an empty conversation never reaches the
/// adapter, and an unknown methodology id degrades to "no methodology".
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.conversation.trim().is_empty() {
        return Err(AppError::Validation("No conversation provided".to_string()));
    }

    let analysis_type = match request.analysis_type.as_deref() {
        None => AnalysisType::General,
        Some(raw) => raw
            .parse::<AnalysisType>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
    };

    let methodology = selected_methodology(&state, request.methodology.as_deref());

    let prompt = compose(&request.conversation, analysis_type, methodology);

    let feedback = state
        .feedback
        .fetch_feedback(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(AnalyzeResponse { feedback }))
}

/// Resolves the requested methodology id against the catalog. "none", an
/// absent field, and a lookup miss all mean the same thing to the composer.
fn selected_methodology<'a>(
    state: &'a AppState,
    requested: Option<&str>,
) -> Option<&'a MethodologyRecord> {
    let id = requested?;
    if id.eq_ignore_ascii_case("none") {
        return None;
    }
    let record = state.methodologies.lookup(id);
    if record.is_none() {
        tracing::warn!("unknown methodology '{id}', analyzing without one");
    }
    record
}

/// GET /api/methodologies
///
/// Id-to-description summaries for populating a picker.
pub async fn handle_list_methodologies(
    State(state): State<AppState>,
) -> Json<MethodologyListResponse> {
    Json(MethodologyListResponse {
        methodologies: state.methodologies.summaries(),
    })
}

/// GET /api/methodologies/:id
///
/// Full structured record, example questions included. Case-insensitive.
pub async fn handle_get_methodology(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MethodologyRecord>, AppError> {
    state
        .methodologies
        .lookup(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("unknown methodology '{id}'")))
}

/// GET /api/examples/:id
///
/// Example transcript for pre-filling the conversation input. Unknown ids
/// serve the cold-call fallback; the returned `id` reflects what was served.
pub async fn handle_get_example(
    Path(id): Path<String>,
) -> Json<&'static transcripts::ExampleTranscript> {
    Json(transcripts::get(&id))
}
