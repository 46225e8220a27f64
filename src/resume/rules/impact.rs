//! Quantified impact: measurable results beat duty descriptions.

use super::{ResumeDoc, RuleOutcome, ScoringRule};
use regex::Regex;

const MAX_POINTS: f64 = 10.0;
const BASE_POINTS: f64 = 3.0;
const MIN_QUANTIFIERS: usize = 3;

/// Percentages, "N+", increase/reduction phrasing, dollar amounts, tenure
fn quantifier_pattern() -> Regex {
    Regex::new(
        r"(?i)(\b\d+%|\b\d+\+|\bincreased by\b|\breduced by\b|\bsaved \$|\bgenerated \$|\b\d+ years?\b)",
    )
    .unwrap()
}

/// Rule awarding full points when at least three quantified results appear
pub struct ImpactRule;

impl ImpactRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImpactRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for ImpactRule {
    fn name(&self) -> &'static str {
        "impact"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn evaluate(&self, doc: &ResumeDoc) -> RuleOutcome {
        let count = quantifier_pattern().find_iter(&doc.text).count();
        if count >= MIN_QUANTIFIERS {
            RuleOutcome::new(MAX_POINTS).with_strength("Includes quantifiable achievements")
        } else {
            RuleOutcome::new(BASE_POINTS)
                .with_improvement("Add measurable results (e.g., \"Increased sales by 30%\")")
        }
    }
}
