/// Coarse three-band classification of a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityLabel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl QualityLabel {
    /// Total over all integers; anything below 50, including negatives, is the
    /// lowest band.
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            QualityLabel::Excellent
        } else if score >= 50 {
            QualityLabel::Good
        } else {
            QualityLabel::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLabel::Excellent => "Excellent",
            QualityLabel::Good => "Good",
            QualityLabel::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Label text for a score.
pub fn quality_label(score: i64) -> &'static str {
    QualityLabel::from_score(score).as_str()
}
