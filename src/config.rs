//! Configuration loading for Sift

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".siftrc.json";

/// Root config structure for .siftrc.json
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default)]
    pub extends: Option<String>,

    /// Minimum resume score threshold (exit 1 if below)
    #[serde(default)]
    pub threshold: Option<u8>,

    /// Glob patterns for files/directories to exclude in batch mode
    #[serde(default)]
    pub ignore: Vec<String>,

    /// Record resume runs to .sift-history.json (default: true)
    #[serde(default)]
    pub history: Option<bool>,
}

impl Config {
    /// Fill unset fields from a base config (extends resolution)
    fn merge_from(&mut self, base: Config) {
        if self.threshold.is_none() {
            self.threshold = base.threshold;
        }
        if self.history.is_none() {
            self.history = base.history;
        }
        if self.ignore.is_empty() {
            self.ignore = base.ignore;
        }
    }

    /// CLI flags override config file values
    pub fn merge_with_cli(mut self, threshold: Option<u8>, no_history: bool) -> Self {
        if threshold.is_some() {
            self.threshold = threshold;
        }
        if no_history {
            self.history = Some(false);
        }
        self
    }

    /// Whether history recording is on (defaults on)
    pub fn history_enabled(&self) -> bool {
        self.history.unwrap_or(true)
    }
}

/// Find and load config with extends resolution. Searches the work
/// directory then its parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if path.exists() {
            Some(path)
        } else {
            anyhow::bail!("Config file not found: {}", path.display());
        }
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_with_extends(&path, &mut HashSet::new()),
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve its extends chain
fn load_config_with_extends(config_path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    // Prevent circular extends
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if visited.contains(&canonical) {
        anyhow::bail!(
            "Circular extends detected in config: {}",
            config_path.display()
        );
    }
    visited.insert(canonical);

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let mut config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;

    if let Some(extends) = config.extends.take() {
        let config_dir = config_path.parent().unwrap_or(Path::new("."));
        let extends_path = config_dir.join(&extends);
        let extends_path = if extends_path.extension().is_none() {
            extends_path.with_extension("json")
        } else {
            extends_path
        };
        if !extends_path.exists() {
            anyhow::bail!(
                "Extended config not found: {} (referenced from {})",
                extends_path.display(),
                config_path.display()
            );
        }
        let base = load_config_with_extends(&extends_path, visited)?;
        config.merge_from(base);
    }

    Ok(config)
}

/// Search for .siftrc.json in the directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Build a GlobSet from ignore patterns for path matching
pub fn build_ignore_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("Invalid ignore pattern: {}", pattern))?;
        builder.add(glob);
    }
    builder.build().map_err(|e| anyhow::anyhow!("{}", e))
}

/// Check if a path should be ignored based on config glob patterns
pub fn is_ignored(path: &Path, ignore_set: &GlobSet) -> bool {
    ignore_set.is_match(path)
}

/// Starter config written by `sift init`
pub fn default_config_json(threshold: u8) -> String {
    format!(
        "{{\n  \"threshold\": {threshold},\n  \"ignore\": [],\n  \"history\": true\n}}\n"
    )
}
