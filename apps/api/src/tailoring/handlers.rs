//! Axum route handlers for the Tailoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::{ai_edit, extract_company_name, improve_resume, PromptOverrides};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ImproveResumeRequest {
    pub description: Option<String>,
    pub pre_prompt: Option<String>,
    pub post_prompt: Option<String>,
    pub additional_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImproveResumeResponse {
    pub original: Value,
    pub improved: Value,
    pub company_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AiEditRequest {
    pub instruction: Option<String>,
    pub current_data: Option<Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /improve-resume
///
/// Tailors the active profile's stored resume content to a job description
/// and returns both versions for comparison, plus the extracted company name.
pub async fn handle_improve_resume(
    State(state): State<AppState>,
    Json(request): Json<ImproveResumeRequest>,
) -> Result<Json<ImproveResumeResponse>, AppError> {
    let description = request
        .description
        .ok_or_else(|| AppError::Validation("Job description is required".to_string()))?;

    // The original is the content file as stored, passed through untyped.
    let original = state
        .store
        .read_json_value(&state.store.active_paths().resume_data)?;

    let overrides = PromptOverrides {
        pre_prompt: request.pre_prompt,
        post_prompt: request.post_prompt,
        additional_context: request.additional_context,
    };

    let improved = improve_resume(&state.llm, &description, &original, &overrides).await?;
    let company_name = extract_company_name(&state.llm, &description).await?;

    Ok(Json(ImproveResumeResponse {
        original,
        improved,
        company_name,
    }))
}

/// POST /ai-edit-resume
///
/// Applies a natural-language instruction to the supplied resume JSON and
/// returns the updated document.
pub async fn handle_ai_edit_resume(
    State(state): State<AppState>,
    Json(request): Json<AiEditRequest>,
) -> Result<Json<Value>, AppError> {
    let (Some(instruction), Some(current_data)) = (request.instruction, request.current_data)
    else {
        return Err(AppError::Validation(
            "Instruction and current data are required".to_string(),
        ));
    };

    let updated = ai_edit(&state.llm, &instruction, &current_data).await?;
    Ok(Json(updated))
}
