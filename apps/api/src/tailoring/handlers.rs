//! Axum route handlers for the Tailoring API.

use std::io::Write;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::parse_temperature;
use crate::errors::AppError;
use crate::llm_client::CompletionSettings;
use crate::state::AppState;
use crate::tailoring::pipeline::process_resume;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields collected from the multipart tailoring form.
#[derive(Debug, Default)]
struct TailorForm {
    resume: Option<Bytes>,
    jd_text: Option<String>,
    model: Option<String>,
    temperature: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub request_id: Uuid,
    pub resume_markdown: String,
    pub editable_markdown: String,
    pub suggestions_markdown: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/tailor
///
/// Multipart form: `resume` (markdown file), `jd_text`, and optional `model`
/// and `temperature` overrides. The upload is spooled to a temp file that
/// lives only for the duration of the request.
pub async fn handle_tailor(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TailorResponse>, AppError> {
    let form = read_form(multipart).await?;

    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let jd_text = form
        .jd_text
        .ok_or_else(|| AppError::Validation("jd_text is required".to_string()))?;
    let settings = resolve_settings(&state.config.completion, form.model, form.temperature)?;

    let request_id = Uuid::new_v4();
    info!(
        "Tailoring request {request_id}: resume {} bytes, model {}",
        resume.len(),
        settings.model
    );

    let upload = spool_upload(resume).await?;
    let tailored = process_resume(upload.path(), &jd_text, state.llm.as_ref(), &settings).await?;

    info!("Tailoring request {request_id} complete");

    let (resume_markdown, editable_markdown, suggestions_markdown) = tailored.into_parts();
    Ok(Json(TailorResponse {
        request_id,
        resume_markdown,
        editable_markdown,
        suggestions_markdown,
        model: settings.model,
        generated_at: Utc::now(),
    }))
}

async fn read_form(mut multipart: Multipart) -> Result<TailorForm, AppError> {
    let mut form = TailorForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let invalid = |e: axum::extract::multipart::MultipartError| {
            AppError::Validation(format!("invalid form field '{name}': {e}"))
        };

        match name.as_str() {
            "resume" => form.resume = Some(field.bytes().await.map_err(invalid)?),
            "jd_text" => form.jd_text = Some(field.text().await.map_err(invalid)?),
            "model" => form.model = Some(field.text().await.map_err(invalid)?),
            "temperature" => form.temperature = Some(field.text().await.map_err(invalid)?),
            other => debug!("Ignoring unknown form field '{other}'"),
        }
    }

    Ok(form)
}

/// Applies per-request overrides on top of the configured defaults.
/// Blank overrides fall back to the default.
fn resolve_settings(
    defaults: &CompletionSettings,
    model: Option<String>,
    temperature: Option<String>,
) -> Result<CompletionSettings, AppError> {
    let model = model
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| defaults.model.clone());

    let temperature = match temperature.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            parse_temperature(raw).map_err(|e| AppError::Validation(e.to_string()))?
        }
        _ => defaults.temperature,
    };

    Ok(CompletionSettings { model, temperature })
}

/// Writes the uploaded resume to a named temp file, deleted when dropped.
async fn spool_upload(resume: Bytes) -> Result<NamedTempFile, AppError> {
    tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".md")
            .tempfile()?;
        file.write_all(&resume)?;
        file.flush()?;
        Ok(file)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?
    .map_err(|e| {
        AppError::Internal(anyhow::Error::new(e).context("failed to spool resume upload"))
    })
}
