//! Contact info detection: email, phone, LinkedIn, GitHub.

use super::{ResumeDoc, RuleOutcome, ScoringRule};
use regex::Regex;

const POINTS_PER_PATTERN: f64 = 2.5;
const MAX_POINTS: f64 = 10.0;
/// Three of four patterns present counts as complete
const STRONG_THRESHOLD: f64 = 7.5;

/// The four contact patterns. Matched against original-case text; phone is
/// tolerant of an international prefix and common separators.
fn contact_patterns() -> Vec<Regex> {
    vec![
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap(),
        Regex::new(r"\b(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap(),
        Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap(),
        Regex::new(r"(?i)github\.com/[\w-]+").unwrap(),
    ]
}

/// Rule awarding 2.5 points per contact pattern present
pub struct ContactRule;

impl ContactRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContactRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for ContactRule {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn evaluate(&self, doc: &ResumeDoc) -> RuleOutcome {
        let hits = contact_patterns()
            .iter()
            .filter(|pattern| pattern.is_match(&doc.text))
            .count();

        let points = hits as f64 * POINTS_PER_PATTERN;
        let outcome = RuleOutcome::new(points);
        if points >= STRONG_THRESHOLD {
            outcome.with_strength("Complete contact information provided")
        } else {
            outcome.with_improvement("Add email, phone, LinkedIn, and GitHub links")
        }
    }
}
