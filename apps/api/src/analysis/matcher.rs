//! Keyword matcher: pluggable, trait-based scan of a resume for JD keywords.
//!
//! Default: `WholeWordMatcher` (case-insensitive, whole-word, literal keywords).
//!
//! `AppState` holds an `Arc<dyn KeywordMatcher>`, chosen at startup.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use crate::analysis::keywords::KeywordList;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Full text of an uploaded resume, lower-cased for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// Decodes raw upload bytes as UTF-8, replacing invalid sequences.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(&String::from_utf8_lossy(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of one analysis. `matches` and `missing` partition the input keywords,
/// each in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    matches: Vec<String>,
    missing: Vec<String>,
    score: u32, // 0 – 100
}

impl AnalysisResult {
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap matching backends without touching the shell or handlers.
pub trait KeywordMatcher: Send + Sync {
    fn analyze(&self, document: &DocumentText, keywords: &KeywordList) -> AnalysisResult;
}

/// Case-insensitive whole-word matcher. Deterministic, no side effects.
pub struct WholeWordMatcher;

impl KeywordMatcher for WholeWordMatcher {
    fn analyze(&self, document: &DocumentText, keywords: &KeywordList) -> AnalysisResult {
        analyze(document.as_str(), keywords.as_slice())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Partitions `keywords` into found / not found in `document_text` and scores the
/// share found, rounded half-up.
pub fn analyze(document_text: &str, keywords: &[String]) -> AnalysisResult {
    let (matches, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|keyword| contains_whole_word(document_text, keyword));

    let score = compute_score(matches.len(), keywords.len());
    debug!(
        matched = matches.len(),
        total = keywords.len(),
        score,
        "keyword scan complete"
    );

    AnalysisResult {
        matches,
        missing,
        score,
    }
}

/// True when `keyword` occurs in `text` ignoring case and not as a fragment of a
/// larger word. A word boundary is required only at an edge of the keyword that is
/// itself a word character, so `c++` and `.net` stay matchable.
pub fn contains_whole_word(text: &str, keyword: &str) -> bool {
    let (Some(first), Some(last)) = (keyword.chars().next(), keyword.chars().last()) else {
        return false;
    };

    let pattern = format!(
        "(?i){}{}{}",
        if is_word_char(first) { r"\b" } else { "" },
        regex::escape(keyword),
        if is_word_char(last) { r"\b" } else { "" },
    );

    match Regex::new(&pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            warn!("Keyword '{keyword}' could not be compiled, treating as missing: {e}");
            false
        }
    }
}

/// The engine's own `\w`, so edge classification agrees with what `\b` tests.
static WORD_CHAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w$").expect("word-character class is a valid pattern"));

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR_RE.is_match(c.encode_utf8(&mut buf))
}

/// `round(100 * matched / total)` with halves rounded up, in integer arithmetic.
fn compute_score(matched: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * matched + total) / (2 * total)) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
