use serde::Serialize;

use crate::analysis::matcher::AnalysisResult;
use crate::analysis::quality::quality_label;

/// Rendered projection of the last analysis. Result regions stay hidden
/// (`revealed == false`) until the first successful analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub revealed: bool,
    pub summary: String,
    /// CSS width of the score meter, e.g. `"67%"`.
    pub meter_width: String,
    pub matched_items: Vec<String>,
    pub missing_items: Vec<String>,
    pub export_available: bool,
}

impl ResultsView {
    pub fn render(last_analysis: Option<&AnalysisResult>) -> Self {
        let Some(result) = last_analysis else {
            return Self::default();
        };

        let score = result.score();
        Self {
            revealed: true,
            summary: format!(
                "Match Score: {score}% - {}",
                quality_label(score as i64)
            ),
            meter_width: format!("{score}%"),
            matched_items: result.matches().iter().map(|k| format!("✓ {k}")).collect(),
            missing_items: result.missing().iter().map(|k| format!("+ {k}")).collect(),
            export_available: true,
        }
    }
}
