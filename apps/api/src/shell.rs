//! Shell: owns the active upload, the last analysis, the drop zone and the
//! dark-mode flag, and runs the analyze pipeline against a `KeywordMatcher`.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::analysis::{
    AnalysisResult, KeywordList, KeywordMatcher, ReportDownload, ResultsView,
};
use crate::errors::AppError;
use crate::intake::drop_zone::DropZone;
use crate::intake::file_type::accept_upload;
use crate::intake::upload::ResumeUpload;
use crate::preferences::DarkMode;

/// Single-tenant UI state. `last_analysis` is a one-slot cache: replaced whole on
/// every successful analysis, never touched by a failed one.
#[derive(Debug, Default)]
pub struct Shell {
    active_upload: Option<ResumeUpload>,
    last_analysis: Option<AnalysisResult>,
    drop_zone: DropZone,
    dark_mode: DarkMode,
}

impl Shell {
    pub fn new(dark_mode: DarkMode) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    pub fn active_upload(&self) -> Option<&ResumeUpload> {
        self.active_upload.as_ref()
    }

    pub fn last_analysis(&self) -> Option<&AnalysisResult> {
        self.last_analysis.as_ref()
    }

    pub fn drop_zone(&self) -> DropZone {
        self.drop_zone
    }

    pub fn dark_mode(&self) -> DarkMode {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: DarkMode) {
        self.dark_mode = dark_mode;
    }

    /// Manual file selection. A rejected file leaves the active upload in place.
    pub fn select_file(&mut self, upload: Option<ResumeUpload>) -> Result<&ResumeUpload, AppError> {
        let upload = accept_upload(upload)?;
        Ok(&*self.active_upload.insert(upload))
    }

    pub fn drag_over(&mut self) {
        self.drop_zone.drag_over();
    }

    pub fn drag_leave(&mut self) {
        self.drop_zone.drag_leave();
    }

    /// Drop onto the drop zone. A valid file becomes the active upload.
    pub fn drop_file(
        &mut self,
        upload: Option<ResumeUpload>,
    ) -> Result<Option<&ResumeUpload>, AppError> {
        match self.drop_zone.drop(upload)? {
            Some(upload) => Ok(Some(&*self.active_upload.insert(upload))),
            None => Ok(None),
        }
    }

    /// Commits a finished analysis and the upload it was computed from.
    pub fn record_analysis(&mut self, upload: ResumeUpload, result: AnalysisResult) -> &AnalysisResult {
        self.active_upload = Some(upload);
        self.last_analysis.insert(result)
    }

    pub fn view(&self) -> ResultsView {
        ResultsView::render(self.last_analysis())
    }

    /// `None` when nothing has been analyzed yet.
    pub fn export(&self, now: DateTime<Utc>, timestamp_format: &str) -> Option<ReportDownload> {
        self.last_analysis
            .as_ref()
            .map(|result| ReportDownload::new(result, now, timestamp_format))
    }
}

/// Analyze pipeline, independent of shell state:
/// inputs present → file type → read → keyword list → match.
///
/// Returns the accepted upload alongside the result so the caller can commit both.
pub async fn run_analysis(
    matcher: &dyn KeywordMatcher,
    upload: Option<ResumeUpload>,
    raw_keywords: Option<&str>,
) -> Result<(ResumeUpload, AnalysisResult), AppError> {
    let raw_keywords = raw_keywords.unwrap_or_default();
    if upload.is_none() || raw_keywords.trim().is_empty() {
        return Err(AppError::MissingInput(
            "a resume file and keywords are both required".to_string(),
        ));
    }

    let upload = accept_upload(upload)?;
    let document = upload.read_text().await?;
    let keywords = KeywordList::parse(raw_keywords)?;

    let result = matcher.analyze(&document, &keywords);
    info!(
        file = upload.file_name(),
        keywords = keywords.as_slice().len(),
        matched = result.matches().len(),
        score = result.score(),
        "Resume analyzed"
    );

    Ok((upload, result))
}
