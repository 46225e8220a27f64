//! Trend tracking - persist resume scores to .sift-history.json

use crate::ResumeAnalysis;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

const HISTORY_FILENAME: &str = ".sift-history.json";
/// Keep only the most recent runs
const MAX_ENTRIES: usize = 20;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct HistoryFile {
    pub entries: Vec<HistoryEntry>,
}

/// One scored resume run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub timestamp: String,
    pub file: String,
    /// Identity of the scored text, so re-uploads of the same content are
    /// recognizable without storing the text itself
    pub fingerprint: String,
    pub score: u8,
    pub word_count: usize,
}

/// Short sha256 fingerprint of the analyzed text
pub fn content_fingerprint(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..8])
}

/// Find project root (directory containing the history file, a config, or .git)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_file() { start.parent()? } else { start };

    loop {
        if dir.join(HISTORY_FILENAME).exists()
            || dir.join(crate::config::CONFIG_FILENAME).exists()
            || dir.join(".git").exists()
        {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Load history from the project root (or create empty)
pub fn load_history(project_root: &Path) -> HistoryFile {
    let path = project_root.join(HISTORY_FILENAME);
    if let Ok(content) = fs::read_to_string(&path) {
        if let Ok(history) = serde_json::from_str::<HistoryFile>(&content) {
            return history;
        }
    }
    HistoryFile::default()
}

/// Save history to the project root
pub fn save_history(project_root: &Path, history: &HistoryFile) -> std::io::Result<()> {
    let path = project_root.join(HISTORY_FILENAME);
    let content = serde_json::to_string_pretty(history).unwrap_or_else(|_| "{}".to_string());
    fs::write(path, content)
}

/// Latest recorded score for a file path
pub fn previous_score(history: &HistoryFile, file_path: &Path) -> Option<u8> {
    let key = file_path.to_string_lossy();
    history
        .entries
        .iter()
        .rev()
        .find(|entry| entry.file == key)
        .map(|entry| entry.score)
}

/// Append a run and trim to the entry cap
pub fn append_entry(
    history: &mut HistoryFile,
    file_path: &Path,
    text: &str,
    analysis: &ResumeAnalysis,
) {
    history.entries.push(HistoryEntry {
        timestamp: chrono::Utc::now().to_rfc3339(),
        file: file_path.to_string_lossy().to_string(),
        fingerprint: content_fingerprint(text),
        score: analysis.score,
        word_count: analysis.word_count,
    });
    if history.entries.len() > MAX_ENTRIES {
        let excess = history.entries.len() - MAX_ENTRIES;
        history.entries.drain(0..excess);
    }
}

/// Format delta for console: " [was 82, up 4]", " [unchanged at 82]", or ""
pub fn format_delta(previous: Option<u8>, current: u8) -> String {
    let Some(prev) = previous else {
        return String::new();
    };
    if prev == current {
        return format!(" [unchanged at {}]", current);
    }
    let diff = current as i16 - prev as i16;
    if diff > 0 {
        format!(" [was {}, up {}]", prev, diff)
    } else {
        format!(" [was {}, down {}]", prev, -diff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::ResumeAnalyzer;

    fn sample_analysis() -> ResumeAnalysis {
        ResumeAnalyzer::new()
            .analyze("Experience Education Skills. Developed python services. jane@example.com")
    }

    // --- format_delta ---

    #[test]
    fn format_delta_no_previous_returns_empty() {
        assert_eq!(format_delta(None, 85), "");
    }

    #[test]
    fn format_delta_score_increased() {
        assert_eq!(format_delta(Some(80), 83), " [was 80, up 3]");
    }

    #[test]
    fn format_delta_score_decreased() {
        assert_eq!(format_delta(Some(90), 86), " [was 90, down 4]");
    }

    #[test]
    fn format_delta_score_unchanged() {
        assert_eq!(format_delta(Some(75), 75), " [unchanged at 75]");
    }

    // --- fingerprint ---

    #[test]
    fn fingerprint_is_stable_and_short() {
        let a = content_fingerprint("same text");
        let b = content_fingerprint("same text");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
    }

    #[test]
    fn fingerprint_differs_for_different_text() {
        assert_ne!(content_fingerprint("one"), content_fingerprint("two"));
    }

    // --- previous_score ---

    #[test]
    fn previous_score_empty_history_returns_none() {
        let history = HistoryFile::default();
        assert_eq!(previous_score(&history, Path::new("cv.txt")), None);
    }

    #[test]
    fn previous_score_uses_latest_entry_for_file() {
        let mut history = HistoryFile::default();
        let analysis = sample_analysis();
        append_entry(&mut history, Path::new("cv.txt"), "v1", &analysis);
        history.entries[0].score = 40;
        append_entry(&mut history, Path::new("cv.txt"), "v2", &analysis);
        history.entries[1].score = 70;
        append_entry(&mut history, Path::new("other.txt"), "x", &analysis);

        assert_eq!(previous_score(&history, Path::new("cv.txt")), Some(70));
        assert_eq!(previous_score(&history, Path::new("missing.txt")), None);
    }

    // --- append_entry ---

    #[test]
    fn append_entry_records_score_and_fingerprint() {
        let mut history = HistoryFile::default();
        let analysis = sample_analysis();
        append_entry(&mut history, Path::new("cv.txt"), "the text", &analysis);

        assert_eq!(history.entries.len(), 1);
        let entry = &history.entries[0];
        assert_eq!(entry.file, "cv.txt");
        assert_eq!(entry.score, analysis.score);
        assert_eq!(entry.fingerprint, content_fingerprint("the text"));
        assert_eq!(entry.word_count, analysis.word_count);
    }

    #[test]
    fn append_entry_truncates_to_cap() {
        let mut history = HistoryFile::default();
        let analysis = sample_analysis();
        for i in 0..25 {
            append_entry(&mut history, Path::new(&format!("cv{i}.txt")), "t", &analysis);
        }
        assert_eq!(history.entries.len(), MAX_ENTRIES);
        // Oldest entries dropped first
        assert_eq!(history.entries[0].file, "cv5.txt");
    }

    // --- load/save roundtrip ---

    #[test]
    fn save_and_load_history_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = HistoryFile::default();
        append_entry(&mut history, Path::new("cv.txt"), "text", &sample_analysis());

        save_history(dir.path(), &history).unwrap();
        let loaded = load_history(dir.path());

        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.entries[0].file, "cv.txt");
    }

    #[test]
    fn load_history_returns_empty_for_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_history(dir.path()).entries.is_empty());
    }

    #[test]
    fn load_history_returns_empty_for_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(HISTORY_FILENAME), "not valid json {{{").unwrap();
        assert!(load_history(dir.path()).entries.is_empty());
    }

    // --- find_project_root ---

    #[test]
    fn find_project_root_with_history_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(HISTORY_FILENAME), "{}").unwrap();
        assert_eq!(find_project_root(dir.path()).unwrap(), dir.path());
    }

    #[test]
    fn find_project_root_with_config_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(crate::config::CONFIG_FILENAME), "{}").unwrap();
        let sub = dir.path().join("cv");
        fs::create_dir(&sub).unwrap();
        assert_eq!(find_project_root(&sub).unwrap(), dir.path());
    }
}
