//! Scoring rules for ATS resume analysis

pub mod contact;
pub mod formatting;
pub mod impact;
pub mod keywords;
pub mod length;
pub mod sections;

pub use contact::ContactRule;
pub use formatting::FormattingRule;
pub use impact::ImpactRule;
pub use keywords::KeywordsRule;
pub use length::LengthRule;
pub use sections::SectionsRule;

/// Resume text with derived views precomputed once and shared across rules
pub struct ResumeDoc {
    /// Original-case text (contact patterns match against this)
    pub text: String,
    /// Lowercased text for case-insensitive rules
    pub lower: String,
    /// Whitespace-token count, empty tokens excluded
    pub word_count: usize,
}

impl ResumeDoc {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            word_count: text.split_whitespace().count(),
        }
    }
}

/// What a single rule contributes to the analysis
#[derive(Debug, Default)]
pub struct RuleOutcome {
    /// Points awarded, already capped at the rule's max
    pub points: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// Detected section names (sections rule only)
    pub sections: Vec<String>,
    /// Matched keywords (keywords rule only)
    pub keywords: Vec<String>,
}

impl RuleOutcome {
    pub fn new(points: f64) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn with_strength(mut self, message: impl Into<String>) -> Self {
        self.strengths.push(message.into());
        self
    }

    pub fn with_improvement(mut self, message: impl Into<String>) -> Self {
        self.improvements.push(message.into());
        self
    }
}

/// Trait for scoring rules. Rules are pure: same doc, same outcome.
pub trait ScoringRule {
    /// Name of the rule (breakdown key)
    fn name(&self) -> &'static str;

    /// Maximum points this rule can award
    fn max_points(&self) -> f64;

    /// Evaluate the rule against a resume document
    fn evaluate(&self, doc: &ResumeDoc) -> RuleOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_precomputes_views() {
        let doc = ResumeDoc::new("Led Teams  across AWS");
        assert_eq!(doc.lower, "led teams  across aws");
        assert_eq!(doc.word_count, 4);
        assert_eq!(doc.text, "Led Teams  across AWS");
    }

    #[test]
    fn test_outcome_builders() {
        let outcome = RuleOutcome::new(10.0)
            .with_strength("solid")
            .with_improvement("more detail");
        assert!((outcome.points - 10.0).abs() < f64::EPSILON);
        assert_eq!(outcome.strengths, vec!["solid"]);
        assert_eq!(outcome.improvements, vec!["more detail"]);
    }
}
