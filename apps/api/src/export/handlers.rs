//! Axum route handlers for the Export API.

use std::path::PathBuf;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub resume_markdown: String,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// POST /api/v1/resumes/export
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Json<ExportResponse> {
    let outcome = state.exporter.export(&request.resume_markdown).await;
    Json(ExportResponse {
        message: outcome.message,
        file: outcome.file,
    })
}
