//! Axum route handlers for file intake: manual selection and the drop zone.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::intake::upload::{UploadForm, UploadSummary};
use crate::shell::Shell;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub active_upload: Option<UploadSummary>,
    pub drag_over: bool,
}

impl IntakeResponse {
    fn from_shell(shell: &Shell) -> Self {
        Self {
            active_upload: shell.active_upload().map(UploadSummary::from),
            drag_over: shell.drop_zone().is_drag_over(),
        }
    }
}

/// POST /api/v1/upload
///
/// Manual file selection (multipart field `resume`).
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<IntakeResponse>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let mut shell = state.shell.write().await;
    shell.select_file(form.resume)?;
    Ok(Json(IntakeResponse::from_shell(&shell)))
}

/// POST /api/v1/drop-zone/dragover
pub async fn handle_drag_over(State(state): State<AppState>) -> Json<IntakeResponse> {
    let mut shell = state.shell.write().await;
    shell.drag_over();
    Json(IntakeResponse::from_shell(&shell))
}

/// POST /api/v1/drop-zone/dragleave
pub async fn handle_drag_leave(State(state): State<AppState>) -> Json<IntakeResponse> {
    let mut shell = state.shell.write().await;
    shell.drag_leave();
    Json(IntakeResponse::from_shell(&shell))
}

/// POST /api/v1/drop-zone/drop
///
/// Dropping no file is a silent no-op. An invalid file is rejected and the
/// active upload is kept.
pub async fn handle_drop(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<IntakeResponse>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;
    let mut shell = state.shell.write().await;
    shell.drop_file(form.resume)?;
    Ok(Json(IntakeResponse::from_shell(&shell)))
}
