//! Upload intake: pulls the resume file and keyword field out of a multipart form.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use serde::Serialize;

use crate::analysis::DocumentText;
use crate::errors::AppError;

pub const RESUME_FIELD: &str = "resume";
pub const KEYWORDS_FIELD: &str = "keywords";

/// A candidate resume file: name plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    file_name: String,
    bytes: Bytes,
}

impl ResumeUpload {
    pub fn new(file_name: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Single-shot read of the upload as text. Decoding runs on the blocking pool;
    /// the returned future resolves exactly once with the document or a read error.
    pub async fn read_text(&self) -> Result<DocumentText, AppError> {
        let bytes = self.bytes.clone();
        tokio::task::spawn_blocking(move || DocumentText::from_bytes(&bytes))
            .await
            .map_err(|e| AppError::FileRead(format!("reading '{}' failed: {e}", self.file_name)))
    }
}

/// Summary of the active upload returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSummary {
    pub file_name: String,
    pub size_bytes: usize,
}

impl From<&ResumeUpload> for UploadSummary {
    fn from(upload: &ResumeUpload) -> Self {
        Self {
            file_name: upload.file_name().to_string(),
            size_bytes: upload.size_bytes(),
        }
    }
}

/// Fields of an upload or analyze form. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub resume: Option<ResumeUpload>,
    pub keywords: Option<String>,
}

impl UploadForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| stream_error(e, AppError::Validation, "malformed multipart body"))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(RESUME_FIELD) => {
                    // Browsers send an empty, unnamed part when no file is picked.
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| stream_error(e, AppError::FileRead, "upload stream failed"))?;
                    if !file_name.is_empty() {
                        form.resume = Some(ResumeUpload::new(file_name, bytes));
                    }
                }
                Some(KEYWORDS_FIELD) => {
                    let text = field
                        .text()
                        .await
                        .map_err(|e| stream_error(e, AppError::Validation, "unreadable keywords"))?;
                    form.keywords = Some(text);
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// Body-limit rejections become `PayloadTooLarge`; anything else goes through `other`.
fn stream_error(e: MultipartError, other: fn(String) -> AppError, what: &str) -> AppError {
    let detail = format!("{what}: {}", e.body_text());
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(detail)
    } else {
        other(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_text_lowercases_content() {
        let upload = ResumeUpload::new("cv.txt", Bytes::from_static(b"Senior RUST Engineer"));
        let text = upload.read_text().await.unwrap();
        assert_eq!(text.as_str(), "senior rust engineer");
    }

    #[tokio::test]
    async fn test_binary_bytes_read_as_lossy_text() {
        let upload = ResumeUpload::new("cv.pdf", Bytes::from_static(b"%PDF-1.7 \xE2\x28 Rust"));
        let text = upload.read_text().await.unwrap();
        assert!(text.as_str().starts_with("%pdf-1.7"));
        assert!(text.as_str().contains("rust"));
    }

    #[test]
    fn test_summary_from_upload() {
        let upload = ResumeUpload::new("cv.docx", Bytes::from_static(b"12345"));
        let summary = UploadSummary::from(&upload);
        assert_eq!(summary.file_name, "cv.docx");
        assert_eq!(summary.size_bytes, 5);
    }
}
