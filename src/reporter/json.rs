//! JSON reporter for machine-readable output

use crate::resume::BatchStats;
use crate::{MessageAnalysis, ResumeAnalysis};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn to_string<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Report a message analysis as JSON
    pub fn report_message(&self, analysis: &MessageAnalysis) -> String {
        self.to_string(analysis)
    }

    /// Report a single resume analysis as JSON
    pub fn report_resume(&self, path: &Path, analysis: &ResumeAnalysis) -> String {
        self.to_string(&ResumeEntry {
            file_path: path.to_path_buf(),
            analysis,
        })
    }

    /// Report a batch of resume analyses with an aggregate summary
    pub fn report_resume_batch(
        &self,
        results: &[(PathBuf, ResumeAnalysis)],
        stats: &BatchStats,
    ) -> String {
        let output = BatchOutput {
            results: results
                .iter()
                .map(|(path, analysis)| ResumeEntry {
                    file_path: path.clone(),
                    analysis,
                })
                .collect(),
            summary: BatchSummary {
                files_analyzed: stats.files_analyzed,
                average_score: stats.average_score,
                average_grade: stats.average_grade().to_string(),
                below_threshold: stats.below_threshold,
            },
        };
        self.to_string(&output)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResumeEntry<'a> {
    file_path: PathBuf,
    #[serde(flatten)]
    analysis: &'a ResumeAnalysis,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchOutput<'a> {
    results: Vec<ResumeEntry<'a>>,
    summary: BatchSummary,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchSummary {
    files_analyzed: usize,
    average_score: u8,
    average_grade: String,
    below_threshold: usize,
}
