//! Keyword coverage: how much recruiter-searchable vocabulary the text carries.

use super::{ResumeDoc, RuleOutcome, ScoringRule};
use regex::Regex;

const MAX_POINTS: f64 = 25.0;
/// Full points at this many distinct keywords
const SATURATION_COUNT: f64 = 10.0;
const STRONG_KEYWORD_COUNT: usize = 8;

/// Technology and soft-skill vocabulary, scanned in this order
const TECH_KEYWORDS: [&str; 29] = [
    "javascript",
    "python",
    "java",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "html",
    "css",
    "typescript",
    "mongodb",
    "express",
    "api",
    "rest",
    "testing",
    "ci/cd",
    "leadership",
    "management",
    "analytics",
    "data",
    "machine learning",
    "ai",
    "cloud",
    "azure",
    "gcp",
];

/// Rule that counts distinct keywords present as whole words. The score is
/// `count / 10 * 25`, capped at 25, so ten keywords saturate the category.
pub struct KeywordsRule;

impl KeywordsRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringRule for KeywordsRule {
    fn name(&self) -> &'static str {
        "keywords"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn evaluate(&self, doc: &ResumeDoc) -> RuleOutcome {
        let mut found = Vec::new();
        for keyword in TECH_KEYWORDS {
            let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(keyword))).unwrap();
            if pattern.is_match(&doc.lower) && !found.contains(&keyword.to_string()) {
                found.push(keyword.to_string());
            }
        }

        let count = found.len();
        let points = (count as f64 / SATURATION_COUNT * MAX_POINTS).min(MAX_POINTS);
        let mut outcome = RuleOutcome::new(points);
        if count >= STRONG_KEYWORD_COUNT {
            outcome =
                outcome.with_strength(format!("Contains {count} relevant technical keywords"));
        } else {
            outcome = outcome.with_improvement("Add more relevant technical skills and keywords");
        }
        outcome.keywords = found;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(text: &str) -> RuleOutcome {
        KeywordsRule::new().evaluate(&ResumeDoc::new(text))
    }

    #[test]
    fn test_score_scales_with_count() {
        // 4 keywords -> 4/10 * 25 = 10 points
        let outcome = evaluate("python react docker aws");
        assert!((outcome.points - 10.0).abs() < f64::EPSILON);
        assert_eq!(outcome.keywords.len(), 4);
    }

    #[test]
    fn test_ten_keywords_saturate() {
        let outcome = evaluate("python react docker aws sql git agile html css rest");
        assert!((outcome.points - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_more_than_ten_still_capped() {
        let outcome = evaluate("python react docker aws sql git agile html css rest api node");
        assert!((outcome.points - 25.0).abs() < f64::EPSILON);
        assert_eq!(outcome.keywords.len(), 12);
    }

    #[test]
    fn test_repeats_count_once() {
        let outcome = evaluate("python python python");
        assert_eq!(outcome.keywords, vec!["python"]);
        assert!((outcome.points - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_whole_word_java_vs_javascript() {
        // "javascript" must not also satisfy the "java" keyword
        let outcome = evaluate("javascript specialist");
        assert_eq!(outcome.keywords, vec!["javascript"]);
    }

    #[test]
    fn test_punctuation_adjacent_keywords_match() {
        let outcome = evaluate("Tools: node.js, ci/cd pipelines");
        assert!(outcome.keywords.contains(&"node".to_string()));
        assert!(outcome.keywords.contains(&"ci/cd".to_string()));
    }

    #[test]
    fn test_data_not_matched_inside_database() {
        let outcome = evaluate("database tuning");
        assert!(outcome.keywords.is_empty());
    }

    #[test]
    fn test_eight_keywords_is_a_strength() {
        let outcome = evaluate("python react docker aws sql git agile html");
        assert_eq!(outcome.strengths.len(), 1);
        assert!(outcome.strengths[0].contains('8'));
    }

    #[test]
    fn test_few_keywords_is_an_improvement() {
        let outcome = evaluate("python only");
        assert_eq!(outcome.improvements.len(), 1);
        assert!(outcome.strengths.is_empty());
    }
}
