//! Sift: free-text analysis for job-application tracking
//!
//! This library turns unstructured text into structured, scored output:
//! chat transcripts become reminder candidates with due dates, and resume
//! text becomes a 0-100 ATS compatibility score with actionable feedback.

pub mod config;
pub mod history;
pub mod input;
pub mod message;
pub mod reporter;
pub mod resume;
pub mod watcher;

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// Task category detected from keyword tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Assignment,
    Exam,
    Meeting,
    Interview,
    Deadline,
    Event,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Assignment => write!(f, "assignment"),
            Category::Exam => write!(f, "exam"),
            Category::Meeting => write!(f, "meeting"),
            Category::Interview => write!(f, "interview"),
            Category::Deadline => write!(f, "deadline"),
            Category::Event => write!(f, "event"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Task priority detected from keyword tables. Urgent is checked first,
/// so a line matching both urgent and high keywords resolves to urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Urgent => write!(f, "urgent"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// A substring of the input recognized as a calendar date, with its
/// resolved instant. `text` is verbatim (case preserved).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateMention {
    pub text: String,
    pub date: DateTime<Local>,
}

/// A line of the input recognized as a task, before date pairing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCandidate {
    /// The source line, trimmed
    pub title: String,
    pub category: Category,
    pub priority: Priority,
}

/// An unsaved task+date pairing awaiting optional persistence by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderCandidate {
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub due_date: DateTime<Local>,
    /// The matched date phrase, or the auto-assignment marker
    pub date_text: String,
}

/// Lifecycle status of a persisted reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// The record shape a caller persists reminder candidates into. The crate
/// itself stores nothing; this is the boundary contract with whatever
/// reminder store and notification loop sit outside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Local>,
    pub priority: Priority,
    pub category: Category,
    #[serde(default)]
    pub status: ReminderStatus,
    #[serde(default)]
    pub notified: bool,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_message: Option<String>,
}

impl ReminderRecord {
    /// Default source tag for records produced by the message engine
    pub const SOURCE_MESSAGE_PARSER: &'static str = "message-parser";

    /// Build a record from an extracted candidate with the store defaults
    /// (pending, not notified, message-parser source).
    pub fn from_candidate(candidate: ReminderCandidate, original_message: Option<String>) -> Self {
        Self {
            title: candidate.title,
            description: String::new(),
            due_date: candidate.due_date,
            priority: candidate.priority,
            category: candidate.category,
            status: ReminderStatus::Pending,
            notified: false,
            source: Self::SOURCE_MESSAGE_PARSER.to_string(),
            original_message,
        }
    }

    /// True if this reminder is pending, unnotified, and due within the
    /// next `hours` hours of `now` — the query a notification loop runs.
    pub fn is_due_within(&self, now: DateTime<Local>, hours: i64) -> bool {
        self.status == ReminderStatus::Pending
            && !self.notified
            && self.due_date >= now
            && self.due_date <= now + Duration::hours(hours)
    }
}

/// Derived counts over the analyzed message text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// All newline-split lines, blanks included
    pub total_lines: usize,
    /// Whitespace-delimited tokens
    pub total_words: usize,
    /// Date mentions before merging
    pub dates_found: usize,
    /// Task candidates before merging
    pub tasks_found: usize,
}

/// Full result of analyzing a chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAnalysis {
    /// Extractive summary of the most signal-bearing lines
    pub summary: String,
    pub reminders: Vec<ReminderCandidate>,
    pub stats: AnalysisSummary,
}

/// Per-category points for the resume score (each capped at its max)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Section detection (0-25)
    pub sections: f64,
    /// Keyword coverage (0-25)
    pub keywords: f64,
    /// Contact info (0-10)
    pub contact: f64,
    /// Length band (0-15)
    pub length: f64,
    /// Formatting simplicity (0-15)
    pub formatting: f64,
    /// Quantified impact (0-10)
    pub impact: f64,
}

impl ScoreBreakdown {
    /// Raw point total before clamping and rounding
    pub fn total(&self) -> f64 {
        self.sections + self.keywords + self.contact + self.length + self.formatting + self.impact
    }
}

/// Full result of scoring a resume
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    /// ATS compatibility score (0-100)
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// Capitalized names of detected sections, no duplicates
    pub sections_found: Vec<String>,
    /// Matched keywords, no duplicates
    pub keywords_found: Vec<String>,
    /// Whitespace-token count, same count the length rule uses
    pub word_count: usize,
    pub breakdown: ScoreBreakdown,
}

/// Letter grade for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// Public API: analyze a chat message with the system clock.
///
/// Assumes non-empty text; validate with [`input::validate_message`] first.
/// For a fixed clock use [`message::MessageAnalyzer::with_now`].
pub fn analyze_message(text: &str) -> MessageAnalysis {
    message::MessageAnalyzer::new().analyze(text)
}

/// Public API: score resume text for ATS compatibility.
///
/// Assumes text of useful length; validate with [`input::validate_resume`]
/// first. Deterministic: identical text always yields an identical result.
pub fn analyze_resume(text: &str) -> ResumeAnalysis {
    resume::ResumeAnalyzer::new().analyze(text)
}
