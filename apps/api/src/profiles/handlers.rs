//! Axum route handlers for profile management and profile data.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::profiles::versioning::{append_version, load_versions, restore_version, VersionEntry};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ProfileNameRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileListResponse {
    pub profiles: Vec<String>,
    pub active: String,
}

#[derive(Debug, Serialize)]
pub struct CreateProfileResponse {
    pub status: &'static str,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SwitchProfileResponse {
    pub status: &'static str,
    pub active: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SaveProfileDataResponse {
    pub status: &'static str,
    pub history_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct RestoreVersionRequest {
    pub id: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile management
// ────────────────────────────────────────────────────────────────────────────

/// GET /profiles
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<ProfileListResponse>, AppError> {
    Ok(Json(ProfileListResponse {
        profiles: state.store.list()?,
        active: state.store.active(),
    }))
}

/// POST /profiles
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileNameRequest>,
) -> Result<Json<CreateProfileResponse>, AppError> {
    let name = request
        .name
        .ok_or_else(|| AppError::Validation("Profile name is required".to_string()))?;

    let name = state.store.create(&name)?;
    Ok(Json(CreateProfileResponse {
        status: "success",
        name,
    }))
}

/// POST /profiles/switch
pub async fn switch_profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileNameRequest>,
) -> Result<Json<SwitchProfileResponse>, AppError> {
    let name = request
        .name
        .ok_or_else(|| AppError::Validation("Profile name is required".to_string()))?;

    state.store.switch(&name)?;
    Ok(Json(SwitchProfileResponse {
        status: "success",
        active: name,
    }))
}

/// DELETE /profiles/:name
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    state.store.delete(&name)?;
    Ok(Json(StatusResponse { status: "success" }))
}

// ────────────────────────────────────────────────────────────────────────────
// Profile data (content + info) and its version history
// ────────────────────────────────────────────────────────────────────────────

/// GET /get-profile-data
///
/// Shallow merge of the content and info files.
pub async fn get_profile_data(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    let content = state.store.load_content()?;
    let info = state.store.load_info()?;
    Ok(Json(ResumeDocument::merge(content, info)))
}

/// POST /save-profile-data
///
/// Snapshots the previous merged document into the version log, then splits
/// the new document and overwrites both files.
pub async fn save_profile_data(
    State(state): State<AppState>,
    Json(new_data): Json<ResumeDocument>,
) -> Result<Json<SaveProfileDataResponse>, AppError> {
    state.store.ensure_dirs(&state.store.active())?;

    let current = ResumeDocument::merge(state.store.load_content()?, state.store.load_info()?);
    let history_id = append_version(&state.store, current)?;

    let (content, info) = new_data.split();
    state.store.save_content(&content)?;
    state.store.save_info(&info)?;

    Ok(Json(SaveProfileDataResponse {
        status: "success",
        history_id,
    }))
}

/// GET /get-profile-history
pub async fn get_profile_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<VersionEntry>>, AppError> {
    Ok(Json(load_versions(&state.store)?))
}

/// POST /restore-profile-version
pub async fn restore_profile_version(
    State(state): State<AppState>,
    Json(request): Json<RestoreVersionRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let id = request
        .id
        .ok_or_else(|| AppError::Validation("Version id is required".to_string()))?;

    restore_version(&state.store, &id)?;
    Ok(Json(StatusResponse { status: "success" }))
}

// ────────────────────────────────────────────────────────────────────────────
// Per-profile prompt templates (opaque blob)
// ────────────────────────────────────────────────────────────────────────────

/// GET /get-prompts
pub async fn get_prompts(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let prompts = state
        .store
        .read_json_value(&state.store.active_paths().prompts)?;
    Ok(Json(prompts))
}

/// POST /save-prompts
pub async fn save_prompts(
    State(state): State<AppState>,
    Json(data): Json<Value>,
) -> Result<Json<StatusResponse>, AppError> {
    state.store.ensure_dirs(&state.store.active())?;
    state
        .store
        .write_json(&state.store.active_paths().prompts, &data)?;
    Ok(Json(StatusResponse { status: "success" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use crate::profiles::store::ProfileStore;
    use serde_json::json;
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

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

    fn document() -> ResumeDocument {
        serde_json::from_value(json!({
            "basics": {"name": "Jane Doe", "email": "jane@example.com"},
            "professional_summary": "Engineer.",
            "skills": [{"name": "Languages", "keywords": ["Rust"]}],
            "work": [{"company": "X", "position": "Eng", "startDate": "2020", "endDate": "2021",
                      "highlights": ["Did thing"]}],
            "education": [{"institution": "State U", "studyType": "BSc", "area": "CS"}]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_then_get_round_trips_renderer_keys() {
        let (_dir, state) = test_state();

        save_profile_data(State(state.clone()), Json(document()))
            .await
            .unwrap();

        let Json(loaded) = get_profile_data(State(state)).await.unwrap();
        assert_eq!(loaded, document());
    }

    #[tokio::test]
    async fn test_save_snapshots_previous_state() {
        let (_dir, state) = test_state();

        save_profile_data(State(state.clone()), Json(document()))
            .await
            .unwrap();

        let mut second = document();
        second.professional_summary = Some("Rewritten.".to_string());
        let Json(response) = save_profile_data(State(state.clone()), Json(second))
            .await
            .unwrap();

        // The snapshot taken by the second save holds the first save's data
        let Json(history) = get_profile_history(State(state)).await.unwrap();
        assert_eq!(history.len(), 2);
        let snapshot = history.iter().find(|v| v.id == response.history_id).unwrap();
        assert_eq!(snapshot.data.professional_summary.as_deref(), Some("Engineer."));
    }

    #[tokio::test]
    async fn test_restore_version_round_trip() {
        let (_dir, state) = test_state();

        save_profile_data(State(state.clone()), Json(document()))
            .await
            .unwrap();
        let mut edited = document();
        edited.professional_summary = Some("Edited.".to_string());
        let Json(save) = save_profile_data(State(state.clone()), Json(edited))
            .await
            .unwrap();

        // The second save's snapshot is the original document; restore it
        restore_profile_version(
            State(state.clone()),
            Json(RestoreVersionRequest {
                id: Some(save.history_id.to_string()),
            }),
        )
        .await
        .unwrap();

        let Json(loaded) = get_profile_data(State(state)).await.unwrap();
        assert_eq!(loaded, document());
    }

    #[tokio::test]
    async fn test_restore_unknown_version_is_not_found() {
        let (_dir, state) = test_state();

        let result = restore_profile_version(
            State(state),
            Json(RestoreVersionRequest {
                id: Some("missing".to_string()),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let (_dir, state) = test_state();

        let result = create_profile(State(state), Json(ProfileNameRequest { name: None })).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_default_is_conflict() {
        let (_dir, state) = test_state();

        let result = delete_profile(State(state), Path("default".to_string())).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_profile_lifecycle() {
        let (_dir, state) = test_state();

        let Json(created) = create_profile(
            State(state.clone()),
            Json(ProfileNameRequest {
                name: Some("acme".to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(created.name, "acme");

        switch_profile(
            State(state.clone()),
            Json(ProfileNameRequest {
                name: Some("acme".to_string()),
            }),
        )
        .await
        .unwrap();

        let Json(listing) = list_profiles(State(state.clone())).await.unwrap();
        assert_eq!(listing.active, "acme");
        assert!(listing.profiles.contains(&"acme".to_string()));

        // Active profile cannot be deleted
        let result = delete_profile(State(state), Path("acme".to_string())).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_prompts_round_trip() {
        let (_dir, state) = test_state();

        let Json(empty) = get_prompts(State(state.clone())).await.unwrap();
        assert_eq!(empty, json!({}));

        let blob = json!({"pre_prompt": "be terse", "post_prompt": "json only"});
        save_prompts(State(state.clone()), Json(blob.clone()))
            .await
            .unwrap();

        let Json(loaded) = get_prompts(State(state)).await.unwrap();
        assert_eq!(loaded, blob);
    }
}
