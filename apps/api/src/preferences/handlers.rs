use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::preferences::{toggle_dark_mode, DarkMode};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DarkModeResponse {
    pub enabled: bool,
    pub indicator: &'static str,
}

impl From<DarkMode> for DarkModeResponse {
    fn from(mode: DarkMode) -> Self {
        Self {
            enabled: mode.enabled,
            indicator: mode.indicator(),
        }
    }
}

/// GET /api/v1/preferences/dark-mode
pub async fn handle_get_dark_mode(State(state): State<AppState>) -> Json<DarkModeResponse> {
    Json(state.shell.read().await.dark_mode().into())
}

/// POST /api/v1/preferences/dark-mode/toggle
pub async fn handle_toggle_dark_mode(
    State(state): State<AppState>,
) -> Result<Json<DarkModeResponse>, AppError> {
    let mut shell = state.shell.write().await;
    let mode = toggle_dark_mode(&mut shell, state.preferences.as_ref()).await?;
    Ok(Json(mode.into()))
}
