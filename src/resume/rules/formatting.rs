//! Formatting simplicity: characters and phrasing ATS parsers choke on.

use super::{ResumeDoc, RuleOutcome, ScoringRule};
use regex::Regex;

const MAX_POINTS: f64 = 15.0;
const PENALTY: f64 = 5.0;
const MIN_ACTION_VERBS: usize = 5;

/// Characters that commonly break ATS column/field detection
const SPECIAL_CHARS: [char; 7] = ['|', '{', '}', '[', ']', '<', '>'];

fn action_verb_pattern() -> Regex {
    Regex::new(
        r"(?i)\b(developed|managed|created|led|built|designed|implemented|achieved|improved|increased|reduced)\b",
    )
    .unwrap()
}

/// Rule starting at full points and deducting for ATS-hostile characters
/// and for passive phrasing (fewer than 5 action-verb occurrences).
pub struct FormattingRule;

impl FormattingRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FormattingRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for FormattingRule {
    fn name(&self) -> &'static str {
        "formatting"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn evaluate(&self, doc: &ResumeDoc) -> RuleOutcome {
        let mut points = MAX_POINTS;
        let mut outcome = RuleOutcome::default();

        if doc.text.contains(&SPECIAL_CHARS[..]) {
            points -= PENALTY;
            outcome = outcome.with_improvement(
                "Avoid special characters like |, {}, [], <> for better ATS compatibility",
            );
        }

        // Occurrences, not distinct verbs
        let verb_count = action_verb_pattern().find_iter(&doc.text).count();
        if verb_count >= MIN_ACTION_VERBS {
            outcome = outcome.with_strength("Uses strong action verbs");
        } else {
            points -= PENALTY;
            outcome = outcome
                .with_improvement("Use more action verbs (developed, managed, created, led, etc.)");
        }

        outcome.points = points;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(text: &str) -> RuleOutcome {
        FormattingRule::new().evaluate(&ResumeDoc::new(text))
    }

    #[test]
    fn test_clean_text_with_verbs_keeps_full_points() {
        let outcome = evaluate("Developed, managed, created, led and built five services");
        assert!((outcome.points - 15.0).abs() < f64::EPSILON);
        assert_eq!(outcome.strengths, vec!["Uses strong action verbs"]);
    }

    #[test]
    fn test_special_chars_cost_five() {
        let outcome = evaluate("Developed | managed | created | led | built things");
        assert!((outcome.points - 10.0).abs() < f64::EPSILON);
        assert!(outcome.improvements[0].contains("special characters"));
    }

    #[test]
    fn test_few_verbs_cost_five() {
        let outcome = evaluate("Responsible for stuff. Worked on things.");
        assert!((outcome.points - 10.0).abs() < f64::EPSILON);
        assert!(outcome.improvements[0].contains("action verbs"));
    }

    #[test]
    fn test_both_penalties_stack() {
        let outcome = evaluate("[contact] responsible for stuff");
        assert!((outcome.points - 5.0).abs() < f64::EPSILON);
        assert_eq!(outcome.improvements.len(), 2);
    }

    #[test]
    fn test_verb_occurrences_counted_not_distinct() {
        // One verb used five times passes the bar
        let outcome = evaluate("Led a team. Led a launch. Led a rewrite. Led hiring. Led QA.");
        assert_eq!(outcome.strengths.len(), 1);
        assert!((outcome.points - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_verbs_match_case_insensitively() {
        let outcome = evaluate("DEVELOPED IMPROVED INCREASED REDUCED ACHIEVED");
        assert_eq!(outcome.strengths.len(), 1);
    }
}
