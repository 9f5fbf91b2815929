pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::intake::handlers as intake;
use crate::preferences::handlers as preferences;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Intake
        .route("/api/v1/upload", post(intake::handle_upload))
        .route("/api/v1/drop-zone/dragover", post(intake::handle_drag_over))
        .route("/api/v1/drop-zone/dragleave", post(intake::handle_drag_leave))
        .route("/api/v1/drop-zone/drop", post(intake::handle_drop))
        // Analysis
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/analysis", get(analysis::handle_get_analysis))
        .route("/api/v1/analysis/export", get(analysis::handle_export))
        // Preferences
        .route(
            "/api/v1/preferences/dark-mode",
            get(preferences::handle_get_dark_mode),
        )
        .route(
            "/api/v1/preferences/dark-mode/toggle",
            post(preferences::handle_toggle_dark_mode),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
