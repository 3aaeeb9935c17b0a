use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::ExtractionRequest;
use crate::feedback::{render_cover_letter, ResumeAnalysis};
use crate::models::resume::ResumeRecord;
use crate::resumes::intake::analyze_upload;
use crate::state::AppState;

/// Multipart field carrying the resume document.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub id: u64,
    pub skills: Vec<String>,
    pub analysis: ResumeAnalysis,
    pub cover_letter_text: String,
}

/// POST /resumes/
///
/// Accepts a PDF or DOCX in the `file` field, tags its skills and returns the
/// canned analysis plus a cover letter naming up to five of them.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let request = read_upload(&mut multipart).await?;
    info!(
        media_type = %request.media_type,
        bytes = request.bytes.len(),
        "Resume upload received"
    );

    let vocabulary = state.vocabulary.clone();
    let outcome = tokio::task::spawn_blocking(move || analyze_upload(&request, &vocabulary))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Resume analysis task failed: {e}")))??;

    let cover_letter_text = render_cover_letter(&outcome.skills);
    let skills = outcome.skills.into_vec();
    let record = state
        .store
        .insert_resume(outcome.document.text, skills.clone())
        .await;

    Ok(Json(ResumeUploadResponse {
        id: record.id,
        skills,
        analysis: ResumeAnalysis::standard(),
        cover_letter_text,
    }))
}

/// GET /resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = state
        .store
        .get_resume(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;
    Ok(Json(record))
}

/// Pulls the `file` part out of the form. The declared media type is the
/// part's `Content-Type`; a part without one is passed on as `""` and
/// rejected by the extractor.
async fn read_upload(multipart: &mut Multipart) -> Result<ExtractionRequest, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let media_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file upload: {e}")))?;
        return Ok(ExtractionRequest::new(bytes, media_type));
    }

    Err(AppError::Validation("No resume file provided".to_string()))
}
