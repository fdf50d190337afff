//! Axum route handlers for PDF generation, the generation log, and downloads.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::render::history::{append_entry, find_entry, load_history, HistoryEntry};
use crate::render::render;
use crate::state::AppState;

const DEFAULT_COMPANY: &str = "default_company";

#[derive(Debug, Deserialize)]
pub struct GeneratePdfRequest {
    pub resume: Option<ResumeDocument>,
    pub company_name: Option<String>,
}

/// POST /generate-pdf
///
/// Renders the submitted resume (with the profile's stored personal info
/// overlaid) and returns the PDF. Side effects, in order: write
/// `generated/<uuid>/{resume.pdf, resume.json}`, append a history entry,
/// copy the PDF into a company-named subdirectory. The steps are not
/// transactional; a crash mid-way leaves orphaned files.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    Json(request): Json<GeneratePdfRequest>,
) -> Result<Response, AppError> {
    let mut resume = request
        .resume
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;
    let company_name = request
        .company_name
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_COMPANY.to_string());

    state.store.ensure_dirs(&state.store.active())?;
    resume.overlay_info(state.store.load_info()?);

    // Typst compilation is CPU-bound subprocess work; keep it off the
    // async runtime threads.
    let document = resume.clone();
    let pdf = tokio::task::spawn_blocking(move || render(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    let resume_id = Uuid::new_v4();
    let paths = state.store.active_paths();

    let resume_dir = paths.storage.join(resume_id.to_string());
    fs::create_dir_all(&resume_dir)?;

    let pdf_path = resume_dir.join("resume.pdf");
    fs::write(&pdf_path, &pdf)?;

    let json_path = resume_dir.join("resume.json");
    state.store.write_json(&json_path, &resume)?;

    append_entry(
        &state.store,
        HistoryEntry {
            id: resume_id,
            company_name: company_name.clone(),
            timestamp: Utc::now(),
            pdf_path: pdf_path.to_string_lossy().into_owned(),
            json_path: json_path.to_string_lossy().into_owned(),
        },
    )?;

    let company_dir = paths.base.join(&company_name);
    fs::create_dir_all(&company_dir)?;
    fs::copy(&pdf_path, company_dir.join("resume.pdf"))?;

    tracing::info!("Generated resume {resume_id} for '{company_name}'");

    Ok(pdf_response(Bytes::from(pdf)))
}

/// GET /history
pub async fn handle_get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    Ok(Json(load_history(&state.store)?))
}

/// GET /download/:resume_id/:file_type
pub async fn handle_download_file(
    State(state): State<AppState>,
    Path((resume_id, file_type)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let entry = find_entry(&state.store, &resume_id)?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    match file_type.as_str() {
        "pdf" => {
            let bytes = fs::read(&entry.pdf_path)?;
            Ok(pdf_response(Bytes::from(bytes)))
        }
        "json" => {
            let text = fs::read_to_string(&entry.json_path)?;
            let value: Value = serde_json::from_str(&text)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("corrupt resume.json: {e}")))?;
            Ok(Json(value).into_response())
        }
        _ => Err(AppError::Validation("Invalid file type".to_string())),
    }
}

fn pdf_response(bytes: Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/pdf")], bytes).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::profiles::store::ProfileStore;
    use serde_json::json;
    use std::process::Command;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    fn typst_available() -> bool {
        Command::new("typst").arg("--version").output().is_ok()
    }

    fn test_state() -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        let profiles_dir = dir.path().join("profiles");
        let state = AppState {
            store: Arc::new(ProfileStore::new(profiles_dir.clone())),
            llm: LlmClient::new("test-key".to_string()),
            config: Config {
                api_key: "test-key".to_string(),
                profiles_dir,
                port: 8080,
                rust_log: "info".to_string(),
            },
        };
        (dir, state)
    }

    fn resume() -> ResumeDocument {
        serde_json::from_value(json!({
            "basics": {"name": "Jane Doe"},
            "work": [{"company": "X", "position": "Eng", "startDate": "2020",
                      "endDate": "2021", "highlights": ["Did thing"]}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_pdf_requires_resume() {
        let (_dir, state) = test_state();

        let result = handle_generate_pdf(
            State(state),
            Json(GeneratePdfRequest {
                resume: None,
                company_name: None,
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_generate_pdf_scenario() {
        if !typst_available() {
            eprintln!("typst not on PATH; skipping");
            return;
        }
        let (_dir, state) = test_state();

        state.store.create("acme").unwrap();
        state.store.switch("acme").unwrap();

        let response = handle_generate_pdf(
            State(state.clone()),
            Json(GeneratePdfRequest {
                resume: Some(resume()),
                company_name: Some("Acme".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );

        let history = load_history(&state.store).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].company_name, "Acme");
        assert!(std::path::Path::new(&history[0].pdf_path).exists());
        assert!(std::path::Path::new(&history[0].json_path).exists());

        // Company-named copy next to the uuid-keyed original
        let company_copy = state.store.paths("acme").base.join("Acme/resume.pdf");
        assert!(company_copy.exists());
    }

    #[tokio::test]
    async fn test_download_unknown_id_is_not_found() {
        let (_dir, state) = test_state();

        let result = handle_download_file(
            State(state),
            Path(("no-such-id".to_string(), "pdf".to_string())),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_download_invalid_type_is_validation_error() {
        let (_dir, state) = test_state();

        // Seed a history entry pointing at real files
        let paths = state.store.active_paths();
        state.store.ensure_dirs(&state.store.active()).unwrap();
        let artifact_dir = paths.storage.join("artifact");
        fs::create_dir_all(&artifact_dir).unwrap();
        let pdf_path = artifact_dir.join("resume.pdf");
        let json_path = artifact_dir.join("resume.json");
        fs::write(&pdf_path, b"%PDF-fake").unwrap();
        fs::write(&json_path, "{}").unwrap();

        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            company_name: "Acme".to_string(),
            timestamp: Utc::now(),
            pdf_path: pdf_path.to_string_lossy().into_owned(),
            json_path: json_path.to_string_lossy().into_owned(),
        };
        let id = entry.id.to_string();
        append_entry(&state.store, entry).unwrap();

        let result = handle_download_file(
            State(state.clone()),
            Path((id.clone(), "xml".to_string())),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        // The valid types resolve
        let ok = handle_download_file(State(state.clone()), Path((id.clone(), "pdf".to_string())))
            .await
            .unwrap();
        assert_eq!(
            ok.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let ok = handle_download_file(State(state), Path((id, "json".to_string())))
            .await
            .unwrap();
        assert!(ok.status().is_success());
    }

    #[tokio::test]
    async fn test_history_starts_empty() {
        let (_dir, state) = test_state();
        let Json(history) = handle_get_history(State(state)).await.unwrap();
        assert!(history.is_empty());
    }
}
