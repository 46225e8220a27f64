//! Text loading and caller-side validation.
//!
//! The analyzers are total functions; rejecting empty messages and
//! too-short resume text happens here, before they run.

use crate::config::is_ignored;
use globset::GlobSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Minimum character count for resume text to be worth scoring
pub const MIN_RESUME_LEN: usize = 50;

/// Extensions treated as scorable text in batch mode
const TEXT_EXTENSIONS: [&str; 3] = ["txt", "md", "text"];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("message text is required")]
    EmptyMessage,

    #[error("text too short to score ({len} chars, need at least {MIN_RESUME_LEN})")]
    ResumeTooShort { len: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a text source; `-` means stdin
pub fn read_text(path: &Path) -> Result<String, InputError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Reject blank message text
pub fn validate_message(text: &str) -> Result<(), InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyMessage);
    }
    Ok(())
}

/// Reject resume text below the useful minimum
pub fn validate_resume(text: &str) -> Result<(), InputError> {
    let len = text.trim().len();
    if len < MIN_RESUME_LEN {
        return Err(InputError::ResumeTooShort { len });
    }
    Ok(())
}

/// True for files batch mode will pick up
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TEXT_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t)))
        .unwrap_or(false)
}

/// Collect text files under a path, honoring config ignore globs.
/// A single-file path is returned as-is (extension not enforced).
pub fn collect_text_files(path: &Path, ignore_set: Option<&GlobSet>) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|p| is_text_file(p))
        .filter(|p| ignore_set.map_or(true, |set| !is_ignored(p, set)))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::build_ignore_set;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_message_rejects_blank() {
        assert!(validate_message("").is_err());
        assert!(validate_message("   \n\t ").is_err());
        assert!(validate_message("hi").is_ok());
    }

    #[test]
    fn test_validate_resume_rejects_short_text() {
        let err = validate_resume("too short").unwrap_err();
        assert!(matches!(err, InputError::ResumeTooShort { len: 9 }));
        assert!(validate_resume(&"x".repeat(MIN_RESUME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_resume_trims_before_measuring() {
        let padded = format!("   {}   ", "x".repeat(MIN_RESUME_LEN - 1));
        assert!(validate_resume(&padded).is_err());
    }

    #[test]
    fn test_read_text_missing_file() {
        let err = read_text(Path::new("does-not-exist.txt")).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.txt"));
    }

    #[test]
    fn test_read_text_roundtrip() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("note.txt");
        fs::write(&file, "hello").unwrap();
        assert_eq!(read_text(&file).unwrap(), "hello");
    }

    #[test]
    fn test_is_text_file_extensions() {
        assert!(is_text_file(Path::new("cv.txt")));
        assert!(is_text_file(Path::new("cv.MD")));
        assert!(!is_text_file(Path::new("cv.pdf")));
        assert!(!is_text_file(Path::new("cv")));
    }

    #[test]
    fn test_collect_walks_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.md"), "b").unwrap();
        fs::write(dir.path().join("skip.pdf"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.txt"), "c").unwrap();

        let files = collect_text_files(dir.path(), None);
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_collect_honors_ignore_set() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keep.txt"), "k").unwrap();
        fs::create_dir(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("drafts/old.txt"), "o").unwrap();

        let set = build_ignore_set(&["**/drafts/**".to_string()]).unwrap();
        let files = collect_text_files(dir.path(), Some(&set));
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.txt"));
    }

    #[test]
    fn test_collect_single_file_passthrough() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("resume.pdf.txt");
        fs::write(&file, "text").unwrap();
        let files = collect_text_files(&file, None);
        assert_eq!(files, vec![file]);
    }
}
