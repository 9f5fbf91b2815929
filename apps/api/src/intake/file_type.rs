use tracing::warn;

use crate::errors::AppError;
use crate::intake::upload::ResumeUpload;

/// Accepted by file name only. The bytes of `.doc`, `.docx` and `.pdf` are never
/// decoded and get read as text like any other upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".txt", ".doc", ".docx", ".pdf"];

pub fn has_allowed_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Runs a candidate upload through intake validation.
pub fn accept_upload(upload: Option<ResumeUpload>) -> Result<ResumeUpload, AppError> {
    let upload =
        upload.ok_or_else(|| AppError::MissingInput("no resume file provided".to_string()))?;

    if !has_allowed_extension(upload.file_name()) {
        warn!("Rejected upload '{}': extension not allowed", upload.file_name());
        return Err(AppError::InvalidFileType(upload.file_name().to_string()));
    }

    Ok(upload)
}
