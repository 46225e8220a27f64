//! Section detection: the structural skeleton an ATS looks for first.

use super::{ResumeDoc, RuleOutcome, ScoringRule};
use regex::Regex;

const POINTS_PER_SECTION: f64 = 5.0;
const MAX_POINTS: f64 = 25.0;
const STRONG_SECTION_COUNT: usize = 4;

/// Synonym patterns per section, in reporting order
fn section_patterns() -> Vec<(&'static str, Regex)> {
    vec![
        (
            "Experience",
            Regex::new(r"\b(experience|work history|employment|professional experience)\b").unwrap(),
        ),
        (
            "Education",
            Regex::new(r"\b(education|academic|qualification|degree)\b").unwrap(),
        ),
        (
            "Skills",
            Regex::new(r"\b(skills|technical skills|core competencies|expertise)\b").unwrap(),
        ),
        (
            "Summary",
            Regex::new(r"\b(summary|profile|objective|about me)\b").unwrap(),
        ),
        (
            "Projects",
            Regex::new(r"\b(projects|portfolio|work samples)\b").unwrap(),
        ),
        (
            "Certifications",
            Regex::new(r"\b(certifications|certificates|licenses)\b").unwrap(),
        ),
    ]
}

/// Rule that detects the six standard resume sections. Each hit is worth 5
/// points; the total is capped at 25 even though all six would sum to 30.
pub struct SectionsRule;

impl SectionsRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for SectionsRule {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn evaluate(&self, doc: &ResumeDoc) -> RuleOutcome {
        let mut found = Vec::new();
        for (name, pattern) in section_patterns() {
            if pattern.is_match(&doc.lower) {
                found.push(name.to_string());
            }
        }

        let points = (found.len() as f64 * POINTS_PER_SECTION).min(MAX_POINTS);
        let mut outcome = RuleOutcome::new(points);
        if found.len() >= STRONG_SECTION_COUNT {
            outcome = outcome.with_strength("Well-structured resume with key sections");
        } else {
            outcome = outcome
                .with_improvement("Add missing sections: Skills, Experience, Education, Summary");
        }
        outcome.sections = found;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(text: &str) -> RuleOutcome {
        SectionsRule::new().evaluate(&ResumeDoc::new(text))
    }

    #[test]
    fn test_each_section_scores_five() {
        let outcome = evaluate("Work Experience\nEducation");
        assert!((outcome.points - 10.0).abs() < f64::EPSILON);
        assert_eq!(outcome.sections, vec!["Experience", "Education"]);
    }

    #[test]
    fn test_all_six_sections_capped_at_25() {
        let text = "Experience Education Skills Summary Projects Certifications";
        let outcome = evaluate(text);
        assert!((outcome.points - 25.0).abs() < f64::EPSILON);
        assert_eq!(outcome.sections.len(), 6);
    }

    #[test]
    fn test_synonyms_detected() {
        let outcome = evaluate("Employment\nAcademic background\nCore competencies");
        assert_eq!(outcome.sections, vec!["Experience", "Education", "Skills"]);
    }

    #[test]
    fn test_four_sections_is_a_strength() {
        let outcome = evaluate("Experience Education Skills Summary");
        assert_eq!(outcome.strengths.len(), 1);
        assert!(outcome.improvements.is_empty());
    }

    #[test]
    fn test_three_sections_is_an_improvement() {
        let outcome = evaluate("Experience Education Skills");
        assert!(outcome.strengths.is_empty());
        assert_eq!(outcome.improvements.len(), 1);
    }

    #[test]
    fn test_no_duplicate_section_names() {
        let outcome = evaluate("Experience experience EXPERIENCE");
        assert_eq!(outcome.sections, vec!["Experience"]);
        assert!((outcome.points - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whole_word_matching() {
        // "degrees" contains "degree" but "inexperienced" must not hit
        // the experience pattern
        let outcome = evaluate("inexperienced candidate");
        assert!(outcome.sections.is_empty());
    }
}
