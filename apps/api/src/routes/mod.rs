pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::profiles::handlers as profile_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring_handlers;

/// Route names are the compatibility contract with existing clients — do not
/// rename them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile management
        .route(
            "/profiles",
            get(profile_handlers::list_profiles).post(profile_handlers::create_profile),
        )
        .route("/profiles/switch", post(profile_handlers::switch_profile))
        .route("/profiles/:name", delete(profile_handlers::delete_profile))
        // Tailoring
        .route(
            "/improve-resume",
            post(tailoring_handlers::handle_improve_resume),
        )
        .route(
            "/ai-edit-resume",
            post(tailoring_handlers::handle_ai_edit_resume),
        )
        // PDF generation and the generation log
        .route("/generate-pdf", post(render_handlers::handle_generate_pdf))
        .route("/history", get(render_handlers::handle_get_history))
        .route(
            "/download/:resume_id/:file_type",
            get(render_handlers::handle_download_file),
        )
        // Profile data and its version history
        .route(
            "/get-profile-data",
            get(profile_handlers::get_profile_data),
        )
        .route(
            "/save-profile-data",
            post(profile_handlers::save_profile_data),
        )
        .route(
            "/get-profile-history",
            get(profile_handlers::get_profile_history),
        )
        .route(
            "/restore-profile-version",
            post(profile_handlers::restore_profile_version),
        )
        // Per-profile prompt templates
        .route("/get-prompts", get(profile_handlers::get_prompts))
        .route("/save-prompts", post(profile_handlers::save_prompts))
        .with_state(state)
}
