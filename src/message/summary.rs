//! Lightweight extractive summary over message lines.

/// Keywords that mark a line as signal-bearing
const SIGNAL_KEYWORDS: [&str; 7] = [
    "important",
    "remember",
    "deadline",
    "submit",
    "exam",
    "meeting",
    "interview",
];

/// Join the first 3 important lines with spaces; with no important lines,
/// fall back to the first 2 lines of any kind. A line is important when it
/// contains a signal keyword (case-insensitive) or a literal `?` or `!`.
pub fn summarize(text: &str) -> String {
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    let important: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let lower = line.to_lowercase();
            SIGNAL_KEYWORDS.iter().any(|k| lower.contains(k))
                || line.contains('?')
                || line.contains('!')
        })
        .copied()
        .collect();

    if !important.is_empty() {
        important.iter().take(3).copied().collect::<Vec<_>>().join(" ")
    } else {
        lines.iter().take(2).copied().collect::<Vec<_>>().join(" ")
    }
}
