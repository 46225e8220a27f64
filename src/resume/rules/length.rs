//! Length band: 300-800 words reads as a full one-to-two page resume.

use super::{ResumeDoc, RuleOutcome, ScoringRule};

const MAX_POINTS: f64 = 15.0;
const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 800;
const SHORT_POINTS: f64 = 5.0;
const LONG_POINTS: f64 = 10.0;

/// Rule scoring the whitespace-token count against the optimal band
pub struct LengthRule;

impl LengthRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for LengthRule {
    fn name(&self) -> &'static str {
        "length"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn evaluate(&self, doc: &ResumeDoc) -> RuleOutcome {
        if (MIN_WORDS..=MAX_WORDS).contains(&doc.word_count) {
            RuleOutcome::new(MAX_POINTS).with_strength("Optimal resume length (300-800 words)")
        } else if doc.word_count < MIN_WORDS {
            RuleOutcome::new(SHORT_POINTS)
                .with_improvement("Resume is too short. Add more details about your experience")
        } else {
            RuleOutcome::new(LONG_POINTS)
                .with_improvement("Resume might be too long. Keep it concise (under 800 words)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_words(count: usize) -> ResumeDoc {
        ResumeDoc::new(&vec!["word"; count].join(" "))
    }

    #[test]
    fn test_optimal_band_full_points() {
        let outcome = LengthRule::new().evaluate(&doc_with_words(500));
        assert!((outcome.points - 15.0).abs() < f64::EPSILON);
        assert_eq!(outcome.strengths.len(), 1);
    }

    #[test]
    fn test_band_boundaries_inclusive() {
        for count in [300, 800] {
            let outcome = LengthRule::new().evaluate(&doc_with_words(count));
            assert!((outcome.points - 15.0).abs() < f64::EPSILON, "count={count}");
        }
    }

    #[test]
    fn test_short_resume_five_points() {
        let outcome = LengthRule::new().evaluate(&doc_with_words(299));
        assert!((outcome.points - 5.0).abs() < f64::EPSILON);
        assert!(outcome.improvements[0].contains("too short"));
    }

    #[test]
    fn test_long_resume_ten_points() {
        let outcome = LengthRule::new().evaluate(&doc_with_words(801));
        assert!((outcome.points - 10.0).abs() < f64::EPSILON);
        assert!(outcome.improvements[0].contains("too long"));
    }
}
