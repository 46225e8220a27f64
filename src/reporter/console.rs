//! Console reporter with colored output

use crate::resume::BatchStats;
use crate::{Grade, MessageAnalysis, ResumeAnalysis};
use colored::Colorize;
use std::path::Path;

/// Category labels and maxima for the resume breakdown display
const BREAKDOWN_CATEGORIES: [(&str, f64); 6] = [
    ("Sections", 25.0),
    ("Keywords", 25.0),
    ("Contact Info", 10.0),
    ("Length", 15.0),
    ("Formatting", 15.0),
    ("Quantified Impact", 10.0),
];

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    // --- message reports ---

    /// Report a message analysis: summary, extracted reminders, stats
    pub fn report_message(&self, analysis: &MessageAnalysis) {
        println!();
        println!("{}", "Message Analysis".bold());
        println!(
            "   Lines: {} | Words: {} | Dates: {} | Tasks: {}",
            analysis.stats.total_lines,
            analysis.stats.total_words,
            analysis.stats.dates_found,
            analysis.stats.tasks_found
        );
        println!();

        if !analysis.summary.is_empty() {
            println!("   {}", "Summary:".bold());
            println!("   {}", analysis.summary);
            println!();
        }

        if analysis.reminders.is_empty() {
            println!("   No reminders extracted.");
        } else {
            println!(
                "   {} ({}):",
                "Reminders".bold(),
                analysis.reminders.len()
            );
            for reminder in &analysis.reminders {
                let tag = format!("[{}/{}]", reminder.category, reminder.priority);
                println!(
                    "   {} {} {} {}",
                    "•".cyan(),
                    reminder.due_date.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                    tag.dimmed(),
                    reminder.title
                );
                if self.verbose {
                    println!("       {} from \"{}\"", "↳".dimmed(), reminder.date_text.dimmed());
                }
            }
        }
        println!();
    }

    /// Report a message analysis in quiet mode (one line)
    pub fn report_message_quiet(&self, analysis: &MessageAnalysis) {
        println!(
            "{} reminders, {} dates, {} tasks",
            analysis.reminders.len(),
            analysis.stats.dates_found,
            analysis.stats.tasks_found
        );
    }

    // --- resume reports ---

    /// Report a resume analysis with score bar, breakdown, and feedback.
    /// `delta` is the history comparison string, empty when unavailable.
    pub fn report_resume(&self, path: &Path, analysis: &ResumeAnalysis, delta: &str) {
        let grade = Grade::from_score(analysis.score);

        println!();
        println!(
            "{}",
            format!("ATS Score: {}", path.display()).bold()
        );
        println!("   Words: {}", analysis.word_count);
        println!();
        println!(
            "   Score: {} {}{}",
            self.create_score_bar(analysis.score),
            self.colorize_grade(grade).bold(),
            delta
        );
        println!();

        self.print_breakdown(analysis);

        if !analysis.sections_found.is_empty() {
            println!("   Sections: {}", analysis.sections_found.join(", "));
        }
        if !analysis.keywords_found.is_empty() {
            let shown = if self.verbose || analysis.keywords_found.len() <= 8 {
                analysis.keywords_found.join(", ")
            } else {
                format!(
                    "{} (+{} more)",
                    analysis.keywords_found[..8].join(", "),
                    analysis.keywords_found.len() - 8
                )
            };
            println!("   Keywords: {shown}");
        }
        println!();

        for strength in &analysis.strengths {
            println!("   {} {}", "✓".green(), strength);
        }
        for improvement in &analysis.improvements {
            println!("   {} {}", "→".cyan(), improvement);
        }
        println!();
    }

    /// Report a resume score in quiet mode (just path, score, grade)
    pub fn report_resume_quiet(&self, path: &Path, analysis: &ResumeAnalysis) {
        let grade = Grade::from_score(analysis.score);
        println!(
            "{}: {} ({})",
            path.display(),
            analysis.score,
            self.colorize_grade(grade)
        );
    }

    /// Summary block after a batch run
    pub fn report_batch_summary(&self, stats: &BatchStats) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Files analyzed:  {}",
            stats.files_analyzed.to_string().bold()
        );
        println!(
            "   Average score:   {} ({})",
            stats.average_score.to_string().bold(),
            self.colorize_grade(stats.average_grade())
        );
        if stats.below_threshold > 0 {
            println!(
                "   Below threshold: {}",
                stats.below_threshold.to_string().red()
            );
        }
        println!();
    }

    fn print_breakdown(&self, analysis: &ResumeAnalysis) {
        println!("   {}", "Score Breakdown:".bold());
        let values = [
            analysis.breakdown.sections,
            analysis.breakdown.keywords,
            analysis.breakdown.contact,
            analysis.breakdown.length,
            analysis.breakdown.formatting,
            analysis.breakdown.impact,
        ];
        for ((name, max), value) in BREAKDOWN_CATEGORIES.iter().zip(values) {
            let bar = self.create_mini_bar(value, *max);
            let score_str = format!("{:>4.1}/{}", value, max);
            let colored_score = if value >= max * 0.8 {
                score_str.green()
            } else if value >= max * 0.5 {
                score_str.yellow()
            } else {
                score_str.red()
            };
            println!("   {} {} {}", bar, colored_score, name);
        }
        println!();
    }

    fn colorize_grade(&self, grade: Grade) -> colored::ColoredString {
        let s = grade.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match grade {
            Grade::A => s.green().bold(),
            Grade::B => s.green(),
            Grade::C => s.yellow(),
            Grade::D => s.red(),
            Grade::F => s.red().bold(),
        }
    }

    fn create_score_bar(&self, score: u8) -> String {
        let filled = (score as usize * 20) / 100;
        let empty = 20 - filled;

        let bar = format!("[{}{}] {:>3}", "█".repeat(filled), "░".repeat(empty), score);

        if self.use_colors {
            if score >= 80 {
                bar.green().to_string()
            } else if score >= 60 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }

    fn create_mini_bar(&self, score: f64, max: f64) -> String {
        let filled = ((score * 10.0) / max).round() as usize;
        let filled = filled.min(10);
        let empty = 10 - filled;
        format!("[{}{}]", "▓".repeat(filled), "░".repeat(empty))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
