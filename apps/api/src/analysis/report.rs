//! Export: formats the last analysis as a plain-text, downloadable report.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Local, Utc};

use crate::analysis::matcher::AnalysisResult;
use crate::analysis::quality::quality_label;

pub const REPORT_MIME: &str = "text/plain; charset=utf-8";

/// A report ready to hand to the client as a file download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDownload {
    pub file_name: String,
    pub body: String,
}

impl ReportDownload {
    /// Builds the report for `result` stamped with `now`.
    pub fn new(result: &AnalysisResult, now: DateTime<Utc>, timestamp_format: &str) -> Self {
        let timestamp = now.with_timezone(&Local).format(timestamp_format).to_string();
        Self {
            file_name: report_file_name(now),
            body: format_report(result, &timestamp),
        }
    }
}

impl IntoResponse for ReportDownload {
    fn into_response(self) -> Response {
        let disposition = format!("attachment; filename=\"{}\"", self.file_name);
        (
            [
                (header::CONTENT_TYPE, REPORT_MIME.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            self.body,
        )
            .into_response()
    }
}

/// `resume-analysis-YYYY-MM-DD.txt`, dated in UTC.
pub fn report_file_name(now: DateTime<Utc>) -> String {
    format!("resume-analysis-{}.txt", now.format("%Y-%m-%d"))
}

/// Report body. Empty lists leave an empty line under their heading and the body
/// has no trailing newline.
pub fn format_report(result: &AnalysisResult, timestamp: &str) -> String {
    let matched = result
        .matches()
        .iter()
        .map(|k| format!("✓ {k}"))
        .collect::<Vec<_>>()
        .join("\n");
    let missing = result
        .missing()
        .iter()
        .map(|k| format!("+ {k}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Resume Analysis Report\n\
         {timestamp}\n\
         \n\
         Overall Score: {score}%\n\
         Quality: {label}\n\
         \n\
         Matched Keywords:\n\
         {matched}\n\
         \n\
         Missing Keywords:\n\
         {missing}",
        score = result.score(),
        label = quality_label(result.score() as i64),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::analyze;
    use chrono::TimeZone;

    fn sample() -> AnalysisResult {
        let keywords: Vec<String> = ["rust", "kafka", "axum"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        analyze("rust services built with axum", &keywords)
    }

    #[test]
    fn test_report_layout() {
        let report = format_report(&sample(), "10/16/2026, 3:04:05 PM");
        let expected = "Resume Analysis Report\n\
                        10/16/2026, 3:04:05 PM\n\
                        \n\
                        Overall Score: 67%\n\
                        Quality: Good\n\
                        \n\
                        Matched Keywords:\n\
                        ✓ rust\n\
                        ✓ axum\n\
                        \n\
                        Missing Keywords:\n\
                        + kafka";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_report_with_no_matches_keeps_blank_line() {
        let result = analyze("nothing relevant", &["go".to_string()]);
        let report = format_report(&result, "ts");
        assert!(report.contains("Matched Keywords:\n\n\nMissing Keywords:\n+ go"));
        assert!(report.contains("Quality: Needs Improvement"));
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn test_file_name_uses_iso_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 7, 23, 59, 0).unwrap();
        assert_eq!(report_file_name(now), "resume-analysis-2026-03-07.txt");
    }

    #[test]
    fn test_download_carries_name_and_body() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let download = ReportDownload::new(&sample(), now, "%Y");
        assert_eq!(download.file_name, "resume-analysis-2026-10-16.txt");
        assert!(download.body.starts_with("Resume Analysis Report\n2026\n"));
    }

    #[test]
    fn test_download_response_headers() {
        let download = ReportDownload {
            file_name: "resume-analysis-2026-10-16.txt".to_string(),
            body: "x".to_string(),
        };
        let response = download.into_response();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"resume-analysis-2026-10-16.txt\""
        );
    }
}
