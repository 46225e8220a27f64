//! Task candidate scanning over message lines.
//!
//! Category and priority come from fixed ordered keyword tables; the first
//! matching entry wins, so table order is load-bearing. Urgent is checked
//! before high on purpose: "important" appears in both lists and resolves
//! to urgent.

use crate::{Category, Priority, TaskCandidate};

/// Category keyword table, in match-priority order
const CATEGORY_KEYWORDS: [(Category, &[&str]); 6] = [
    (
        Category::Assignment,
        &["assignment", "homework", "project", "submission", "submit"],
    ),
    (
        Category::Exam,
        &["exam", "test", "quiz", "examination", "midterm", "final"],
    ),
    (
        Category::Meeting,
        &["meeting", "meet", "discussion", "call", "conference"],
    ),
    (
        Category::Interview,
        &["interview", "interview round", "hr round", "technical round"],
    ),
    (Category::Deadline, &["deadline", "due", "last date"]),
    (
        Category::Event,
        &["event", "seminar", "workshop", "webinar", "session"],
    ),
];

/// Priority keyword table, in match-priority order
const PRIORITY_KEYWORDS: [(Priority, &[&str]); 4] = [
    (
        Priority::Urgent,
        &["urgent", "asap", "immediate", "critical", "emergency", "important"],
    ),
    (
        Priority::High,
        &["important", "priority", "crucial", "essential", "mandatory"],
    ),
    (Priority::Medium, &["soon", "upcoming", "scheduled"]),
    (Priority::Low, &["optional", "if possible", "when free"]),
];

/// Verbs that mark a line as actionable even without a category match
const TASK_INDICATORS: [&str; 8] = [
    "submit",
    "complete",
    "finish",
    "prepare",
    "attend",
    "join",
    "remember",
    "don't forget",
];

/// Scan message lines for task candidates.
///
/// A non-blank line becomes a candidate iff it contains a task-indicator
/// verb or matches any category keyword.
pub fn scan_tasks(text: &str) -> Vec<TaskCandidate> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let lower = line.to_lowercase();

            let category = CATEGORY_KEYWORDS
                .iter()
                .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
                .map(|(category, _)| *category)
                .unwrap_or(Category::Other);

            let priority = PRIORITY_KEYWORDS
                .iter()
                .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
                .map(|(priority, _)| *priority)
                .unwrap_or(Priority::Medium);

            let has_indicator = TASK_INDICATORS.iter().any(|verb| lower.contains(verb));

            if has_indicator || category != Category::Other {
                Some(TaskCandidate {
                    title: line.trim().to_string(),
                    category,
                    priority,
                })
            } else {
                None
            }
        })
        .collect()
}
