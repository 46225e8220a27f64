//! Date mention scanning and resolution.
//!
//! Four pattern families are applied in order over the whole text; every
//! distinct matched substring (verbatim, case-sensitive) is resolved to a
//! concrete local instant. Phrases that fail to resolve are dropped
//! silently: free-text chat input is expected to produce false positives.

use crate::DateMention;
use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, TimeZone};
use regex::Regex;

const MONTHS: &str = "January|February|March|April|May|June|July|August|September|October|November|December|Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec";

/// The four pattern families, in scan order
fn date_patterns() -> Vec<Regex> {
    vec![
        // 25/12/2024, 25-12-2024, 25.12.2024
        Regex::new(r"\d{1,2}[/.\-]\d{1,2}[/.\-]\d{4}").unwrap(),
        // December 25, 2024 or Dec 25 2024
        Regex::new(&format!(r"(?i)(?:{MONTHS})\s+\d{{1,2}},?\s+\d{{4}}")).unwrap(),
        // 25th December, 25 Dec (the year, if present, is not captured)
        Regex::new(&format!(r"(?i)\d{{1,2}}(?:st|nd|rd|th)?\s+(?:{MONTHS})")).unwrap(),
        // today, tomorrow, tonight, next week, next month
        Regex::new(r"(?i)tomorrow|today|tonight|next\s+week|next\s+month").unwrap(),
    ]
}

/// Scan `text` for date phrases and resolve each to an instant.
///
/// Dedup is by verbatim matched text in first-match order; two different
/// phrases resolving to the same instant both survive.
pub fn scan_dates(text: &str, now: DateTime<Local>) -> Vec<DateMention> {
    let mut phrases: Vec<String> = Vec::new();
    for pattern in date_patterns() {
        for m in pattern.find_iter(text) {
            let phrase = m.as_str().to_string();
            if !phrases.contains(&phrase) {
                phrases.push(phrase);
            }
        }
    }

    phrases
        .into_iter()
        .filter_map(|text| resolve_phrase(&text, now).map(|date| DateMention { text, date }))
        .collect()
}

/// Resolve a matched phrase to an instant. Total: unresolvable input is None.
pub fn resolve_phrase(phrase: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let lower = phrase.to_lowercase();

    match lower.as_str() {
        "today" => return Some(now),
        "tomorrow" => return Some(now + Duration::days(1)),
        "tonight" => return at_local_hour(now.date_naive(), 20),
        _ => {}
    }
    if lower.contains("next week") {
        return Some(now + Duration::days(7));
    }
    if lower.contains("next month") {
        return now.checked_add_months(Months::new(1));
    }

    parse_explicit(phrase, now)
}

/// Generic date-string parsing: ordinal suffixes stripped, then an ordered
/// list of chrono formats. Numeric dates are day-first, matching the scanned
/// pattern family. Day+month phrases with no year get the current year.
fn parse_explicit(phrase: &str, now: DateTime<Local>) -> Option<DateTime<Local>> {
    let cleaned = strip_ordinals(phrase.trim());
    let cleaned = normalize_spaces(&cleaned);

    // %B accepts abbreviated month names when parsing, so one format
    // covers both "December" and "Dec"
    const FORMATS: [&str; 7] = [
        "%d/%m/%Y",
        "%d-%m-%Y",
        "%d.%m.%Y",
        "%B %d, %Y",
        "%B %d %Y",
        "%d %B %Y",
        "%d %B",
    ];

    for format in FORMATS {
        let candidate = if format.ends_with("%B") {
            // Year missing from the phrase: assume the clock's year
            format!("{} {}", cleaned, now.year())
        } else {
            cleaned.clone()
        };
        let format = if format.ends_with("%B") { "%d %B %Y" } else { format };
        if let Ok(date) = NaiveDate::parse_from_str(&candidate, format) {
            return at_local_hour(date, 0);
        }
    }
    None
}

/// Resolve a naive date at the given hour to a local instant
fn at_local_hour(date: NaiveDate, hour: u32) -> Option<DateTime<Local>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    Local.from_local_datetime(&naive).earliest()
}

/// Remove ordinal suffixes after day numbers: "25th" -> "25"
fn strip_ordinals(phrase: &str) -> String {
    let re = Regex::new(r"(?i)(\d{1,2})(st|nd|rd|th)").unwrap();
    re.replace_all(phrase, "$1").into_owned()
}

/// Collapse internal whitespace runs to single spaces
fn normalize_spaces(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}
