//! Keyword intake: turns the raw comma-separated field into a `KeywordList`.

use serde::Serialize;

use crate::errors::AppError;

/// Ordered, lower-cased, trimmed, non-empty keywords. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordList(Vec<String>);

impl KeywordList {
    /// Splits `raw` on commas, trims and lower-cases each piece, drops empties.
    ///
    /// Blank input is `MissingInput`; input made only of separators is
    /// `EmptyKeywordList`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::MissingInput("keyword field is empty".to_string()));
        }

        let keywords: Vec<String> = raw
            .split(',')
            .map(|piece| piece.trim().to_lowercase())
            .filter(|piece| !piece.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(AppError::EmptyKeywordList);
        }

        Ok(Self(keywords))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
