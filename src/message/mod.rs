//! Message extraction engine: dates, tasks, summary, reminder merging.

pub mod dates;
pub mod summary;
pub mod tasks;

use crate::{
    AnalysisSummary, Category, DateMention, MessageAnalysis, Priority, ReminderCandidate,
    TaskCandidate,
};
use chrono::{DateTime, Duration, Local};

/// Marker used as `date_text` when a task carries no date of its own
pub const AUTO_ASSIGNED_DATE_TEXT: &str = "tomorrow (auto-assigned)";

/// Stateless analyzer for informal chat transcripts.
///
/// The wall clock is read once per `analyze` call; pin it with [`with_now`]
/// for deterministic output.
///
/// [`with_now`]: MessageAnalyzer::with_now
pub struct MessageAnalyzer {
    now: Option<DateTime<Local>>,
}

impl MessageAnalyzer {
    pub fn new() -> Self {
        Self { now: None }
    }

    /// Pin the clock to a fixed instant (relative dates resolve against it)
    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.now = Some(now);
        self
    }

    /// Analyze a message: scan dates and tasks, merge them into reminder
    /// candidates, and produce an extractive summary with counts.
    ///
    /// Assumes non-empty text; the caller validates before invoking.
    pub fn analyze(&self, text: &str) -> MessageAnalysis {
        let now = self.now.unwrap_or_else(Local::now);

        let date_mentions = dates::scan_dates(text, now);
        let task_candidates = tasks::scan_tasks(text);

        let stats = AnalysisSummary {
            total_lines: text.split('\n').count(),
            total_words: text.split_whitespace().count(),
            dates_found: date_mentions.len(),
            tasks_found: task_candidates.len(),
        };

        let reminders = merge(task_candidates, &date_mentions, now);
        let summary = summary::summarize(text);

        MessageAnalysis {
            summary,
            reminders,
            stats,
        }
    }
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pair tasks with dates by position. A task past the last date reuses the
/// first date (clamped index, not modulo). Tasks without any date fall due
/// tomorrow; dates without any task become generic event reminders.
fn merge(
    tasks: Vec<TaskCandidate>,
    dates: &[DateMention],
    now: DateTime<Local>,
) -> Vec<ReminderCandidate> {
    if !tasks.is_empty() && !dates.is_empty() {
        tasks
            .into_iter()
            .enumerate()
            .map(|(index, task)| {
                let mention = &dates[if index < dates.len() { index } else { 0 }];
                ReminderCandidate {
                    title: task.title,
                    category: task.category,
                    priority: task.priority,
                    due_date: mention.date,
                    date_text: mention.text.clone(),
                }
            })
            .collect()
    } else if !tasks.is_empty() {
        let due_date = now + Duration::days(1);
        tasks
            .into_iter()
            .map(|task| ReminderCandidate {
                title: task.title,
                category: task.category,
                priority: task.priority,
                due_date,
                date_text: AUTO_ASSIGNED_DATE_TEXT.to_string(),
            })
            .collect()
    } else {
        dates
            .iter()
            .map(|mention| ReminderCandidate {
                title: format!("Event on {}", mention.text),
                category: Category::Event,
                priority: Priority::Medium,
                due_date: mention.date,
                date_text: mention.text.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn analyzer() -> MessageAnalyzer {
        MessageAnalyzer::new().with_now(Local.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap())
    }

    #[test]
    fn test_tasks_pair_with_dates_by_position() {
        let result = analyzer().analyze("submit report 25/12/2025\nexam revision 26/12/2025");
        assert_eq!(result.reminders.len(), 2);
        assert_eq!(result.reminders[0].date_text, "25/12/2025");
        assert_eq!(result.reminders[1].date_text, "26/12/2025");
    }

    #[test]
    fn test_surplus_tasks_wrap_to_first_date() {
        // Three tasks, one date: every reminder reuses date index 0
        let text = "submit the report tomorrow\ncomplete the deck\nprepare the demo";
        let result = analyzer().analyze(text);
        assert_eq!(result.reminders.len(), 3);
        for reminder in &result.reminders {
            assert_eq!(reminder.date_text, "tomorrow");
        }
    }

    #[test]
    fn test_tasks_without_dates_fall_due_tomorrow() {
        let result = analyzer().analyze("submit the report\nprepare the demo");
        assert_eq!(result.reminders.len(), 2);
        let expected = Local.with_ymd_and_hms(2025, 3, 11, 14, 30, 0).unwrap();
        for reminder in &result.reminders {
            assert_eq!(reminder.due_date, expected);
            assert_eq!(reminder.date_text, AUTO_ASSIGNED_DATE_TEXT);
        }
    }

    #[test]
    fn test_dates_without_tasks_become_events() {
        let result = analyzer().analyze("25/12/2025 btw");
        assert_eq!(result.reminders.len(), 1);
        let reminder = &result.reminders[0];
        assert_eq!(reminder.category, Category::Event);
        assert_eq!(reminder.priority, Priority::Medium);
        assert_eq!(reminder.title, "Event on 25/12/2025");
    }

    #[test]
    fn test_neither_tasks_nor_dates_yields_empty() {
        let result = analyzer().analyze("hello there\ngeneral chatter");
        assert!(result.reminders.is_empty());
    }

    #[test]
    fn test_stats_count_raw_lines_and_words() {
        let result = analyzer().analyze("submit report\n\nsee you 25/12/2025");
        assert_eq!(result.stats.total_lines, 3);
        assert_eq!(result.stats.total_words, 5);
        assert_eq!(result.stats.dates_found, 1);
        assert_eq!(result.stats.tasks_found, 1);
    }

    #[test]
    fn test_stats_are_pre_merge_sizes() {
        // Three tasks share one date after merging; stats still report 1 date
        let text = "submit the report tomorrow\ncomplete the deck\nprepare the demo";
        let result = analyzer().analyze(text);
        assert_eq!(result.stats.dates_found, 1);
        assert_eq!(result.stats.tasks_found, 3);
        assert_eq!(result.reminders.len(), 3);
    }

    #[test]
    fn test_summary_present() {
        let result = analyzer().analyze("remember the deadline\nok");
        assert_eq!(result.summary, "remember the deadline");
    }

    #[test]
    fn test_clock_injection_is_deterministic() {
        let text = "submit the report tomorrow";
        let a = analyzer().analyze(text);
        let b = analyzer().analyze(text);
        assert_eq!(a.reminders[0].due_date, b.reminders[0].due_date);
    }
}
