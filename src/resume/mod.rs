//! Resume scoring engine - ATS compatibility analysis

pub mod rules;

use crate::{Grade, ResumeAnalysis, ScoreBreakdown};
use rules::{
    ContactRule, FormattingRule, ImpactRule, KeywordsRule, LengthRule, ResumeDoc, ScoringRule,
    SectionsRule,
};

/// Score below which the two generic recommendations are always appended
const LOW_SCORE_THRESHOLD: u8 = 60;

const LOW_SCORE_ADVICE: [&str; 2] = [
    "Focus on relevant experience and technical skills",
    "Ensure all major sections are present and well-detailed",
];

/// Stateless ATS scorer. Runs the six rules in fixed order, sums their
/// points, and clamps the rounded total to 0-100.
pub struct ResumeAnalyzer;

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score resume text. Total over any input; assumes the caller already
    /// rejected text too short to be a resume.
    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        let doc = ResumeDoc::new(text);

        let sections = SectionsRule::new().evaluate(&doc);
        let keywords = KeywordsRule::new().evaluate(&doc);
        let contact = ContactRule::new().evaluate(&doc);
        let length = LengthRule::new().evaluate(&doc);
        let formatting = FormattingRule::new().evaluate(&doc);
        let impact = ImpactRule::new().evaluate(&doc);

        let breakdown = ScoreBreakdown {
            sections: sections.points,
            keywords: keywords.points,
            contact: contact.points,
            length: length.points,
            formatting: formatting.points,
            impact: impact.points,
        };
        let score = clamp_score(breakdown.total());

        let mut strengths = Vec::new();
        let mut improvements = Vec::new();
        let mut sections_found = Vec::new();
        let mut keywords_found = Vec::new();
        for mut outcome in [sections, keywords, contact, length, formatting, impact] {
            strengths.append(&mut outcome.strengths);
            improvements.append(&mut outcome.improvements);
            sections_found.append(&mut outcome.sections);
            keywords_found.append(&mut outcome.keywords);
        }

        if score < LOW_SCORE_THRESHOLD {
            improvements.extend(LOW_SCORE_ADVICE.iter().map(|s| s.to_string()));
        }

        ResumeAnalysis {
            score,
            strengths,
            improvements,
            sections_found,
            keywords_found,
            word_count: doc.word_count,
            breakdown,
        }
    }
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to the nearest integer and clamp into 0-100
fn clamp_score(total: f64) -> u8 {
    total.round().clamp(0.0, 100.0) as u8
}

/// Aggregate over a batch scoring run
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    pub files_analyzed: usize,
    pub average_score: u8,
    pub below_threshold: usize,
}

impl BatchStats {
    pub fn from_scores(scores: &[u8], threshold: Option<u8>) -> Self {
        let files_analyzed = scores.len();
        let average_score = if files_analyzed > 0 {
            (scores.iter().map(|&s| s as u32).sum::<u32>() / files_analyzed as u32) as u8
        } else {
            0
        };
        let below_threshold = match threshold {
            Some(t) => scores.iter().filter(|&&s| s < t).count(),
            None => 0,
        };
        Self {
            files_analyzed,
            average_score,
            below_threshold,
        }
    }

    pub fn average_grade(&self) -> Grade {
        Grade::from_score(self.average_score)
    }
}
