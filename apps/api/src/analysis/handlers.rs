//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use crate::analysis::{AnalysisResult, ResultsView};
use crate::errors::AppError;
use crate::intake::upload::UploadForm;
use crate::shell::run_analysis;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
    pub view: ResultsView,
}

/// POST /api/v1/analyze
///
/// Multipart form with `keywords` and an optional `resume` file. Without a file the
/// active upload is analyzed. On success the result becomes the last analysis.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = UploadForm::from_multipart(multipart).await?;

    let upload = match form.resume {
        Some(upload) => Some(upload),
        None => state.shell.read().await.active_upload().cloned(),
    };

    // The read is awaited outside the lock; the commit below is a single write.
    let (upload, result) =
        run_analysis(state.matcher.as_ref(), upload, form.keywords.as_deref()).await?;

    let mut shell = state.shell.write().await;
    shell.record_analysis(upload, result.clone());

    Ok(Json(AnalyzeResponse {
        result,
        view: shell.view(),
    }))
}

/// GET /api/v1/analysis
pub async fn handle_get_analysis(State(state): State<AppState>) -> Json<ResultsView> {
    Json(state.shell.read().await.view())
}

/// GET /api/v1/analysis/export
///
/// Downloads the report for the last analysis. 204 with an empty body when there
/// is nothing to export.
pub async fn handle_export(State(state): State<AppState>) -> Response {
    let download = state
        .shell
        .read()
        .await
        .export(Utc::now(), &state.config.report_timestamp_format);

    match download {
        Some(download) => {
            debug!("Exporting {}", download.file_name);
            download.into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
