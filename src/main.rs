//! Sift: message and resume analysis CLI

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use sift::config::{build_ignore_set, default_config_json, load_config, Config, CONFIG_FILENAME};
use sift::history::{
    append_entry, find_project_root, format_delta, load_history, previous_score, save_history,
};
use sift::input::{collect_text_files, read_text, validate_message, validate_resume};
use sift::message::MessageAnalyzer;
use sift::reporter::{ConsoleReporter, JsonReporter};
use sift::resume::{BatchStats, ResumeAnalyzer};
use sift::watcher::TextWatcher;
use sift::ResumeAnalysis;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Sift: reminder extraction and ATS resume scoring
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract reminders and a summary from a chat transcript
    Message {
        /// Text file to analyze, or - for stdin
        path: PathBuf,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Quiet mode (one line of counts)
        #[arg(long, short)]
        quiet: bool,

        /// Verbose output (matched date phrases per reminder)
        #[arg(long, short)]
        verbose: bool,

        /// Fix "now" for relative dates (RFC 3339, e.g. 2025-03-10T09:00:00+01:00)
        #[arg(long)]
        now: Option<String>,
    },

    /// Score resume text for ATS compatibility
    Resume {
        /// Text file or directory of text files
        path: PathBuf,

        /// Output format as JSON
        #[arg(long, short)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Quiet mode (path, score, grade)
        #[arg(long, short)]
        quiet: bool,

        /// Verbose output (full keyword list)
        #[arg(long, short)]
        verbose: bool,

        /// Minimum score threshold (exit 1 if below)
        #[arg(long, short)]
        threshold: Option<u8>,

        /// Watch for file changes and re-score
        #[arg(long)]
        watch: bool,

        /// Skip recording this run to .sift-history.json
        #[arg(long)]
        no_history: bool,

        /// Path to config file (default: search .siftrc.json upward)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create .siftrc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Commands::Message {
            path,
            json,
            pretty,
            quiet,
            verbose,
            now,
        } => run_message(&path, json, pretty, quiet, verbose, now.as_deref()),
        Commands::Resume {
            path,
            json,
            pretty,
            quiet,
            verbose,
            threshold,
            watch,
            no_history,
            config,
        } => {
            let opts = ResumeOptions {
                json,
                pretty,
                quiet,
                verbose,
                threshold,
                no_history,
                config,
            };
            if watch {
                run_resume_watch(&path, &opts)
            } else {
                run_resume(&path, &opts)
            }
        }
        Commands::Init { threshold, dir } => run_init(threshold, dir.as_deref()),
    }
}

// --- message subcommand ---

fn run_message(
    path: &Path,
    json: bool,
    pretty: bool,
    quiet: bool,
    verbose: bool,
    now: Option<&str>,
) -> Result<ExitCode> {
    let text = read_text(path)?;
    validate_message(&text)?;

    let mut analyzer = MessageAnalyzer::new();
    if let Some(raw) = now {
        let instant: DateTime<Local> = DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid --now value: {raw}"))?
            .with_timezone(&Local);
        analyzer = analyzer.with_now(instant);
    }
    let analysis = analyzer.analyze(&text);

    if json {
        let reporter = if pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        println!("{}", reporter.report_message(&analysis));
    } else if quiet {
        ConsoleReporter::new().report_message_quiet(&analysis);
    } else {
        let mut reporter = ConsoleReporter::new();
        if verbose {
            reporter = reporter.verbose();
        }
        reporter.report_message(&analysis);
    }

    Ok(ExitCode::SUCCESS)
}

// --- resume subcommand ---

struct ResumeOptions {
    json: bool,
    pretty: bool,
    quiet: bool,
    verbose: bool,
    threshold: Option<u8>,
    no_history: bool,
    config: Option<PathBuf>,
}

fn run_resume(path: &Path, opts: &ResumeOptions) -> Result<ExitCode> {
    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path
    };
    let config = load_config(work_dir, opts.config.as_deref())?
        .merge_with_cli(opts.threshold, opts.no_history);

    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let files = collect_text_files(path, ignore_set.as_ref());
    if files.is_empty() {
        anyhow::bail!("No text files found under {}", path.display());
    }

    let results = score_files(&files)?;
    report_resume_results(&results, &config, opts)
}

/// Read and score files, in parallel when there are several
fn score_files(files: &[PathBuf]) -> Result<Vec<(PathBuf, String, ResumeAnalysis)>> {
    let analyze_one = |file: &PathBuf| -> Result<(PathBuf, String, ResumeAnalysis)> {
        let text = read_text(file)?;
        validate_resume(&text).with_context(|| file.display().to_string())?;
        let analysis = ResumeAnalyzer::new().analyze(&text);
        Ok((file.clone(), text, analysis))
    };

    if files.len() > 1 {
        files.par_iter().map(analyze_one).collect()
    } else {
        files.iter().map(analyze_one).collect()
    }
}

fn report_resume_results(
    results: &[(PathBuf, String, ResumeAnalysis)],
    config: &Config,
    opts: &ResumeOptions,
) -> Result<ExitCode> {
    // History bookkeeping happens before reporting so deltas show this run
    let mut deltas: Vec<String> = Vec::new();
    if config.history_enabled() {
        let root = results
            .first()
            .and_then(|(path, _, _)| find_project_root(path))
            .unwrap_or_else(|| PathBuf::from("."));
        let mut history = load_history(&root);
        for (path, text, analysis) in results {
            deltas.push(format_delta(previous_score(&history, path), analysis.score));
            append_entry(&mut history, path, text, analysis);
        }
        save_history(&root, &history)
            .with_context(|| format!("Failed to write history in {}", root.display()))?;
    } else {
        deltas.resize(results.len(), String::new());
    }

    let scores: Vec<u8> = results.iter().map(|(_, _, a)| a.score).collect();
    let stats = BatchStats::from_scores(&scores, config.threshold);

    if opts.json {
        let reporter = if opts.pretty {
            JsonReporter::new().pretty()
        } else {
            JsonReporter::new()
        };
        if results.len() == 1 {
            let (path, _, analysis) = &results[0];
            println!("{}", reporter.report_resume(path, analysis));
        } else {
            let entries: Vec<(PathBuf, ResumeAnalysis)> = results
                .iter()
                .map(|(path, _, analysis)| (path.clone(), analysis.clone()))
                .collect();
            println!("{}", reporter.report_resume_batch(&entries, &stats));
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if opts.verbose {
            reporter = reporter.verbose();
        }
        for ((path, _, analysis), delta) in results.iter().zip(&deltas) {
            if opts.quiet {
                reporter.report_resume_quiet(path, analysis);
            } else {
                reporter.report_resume(path, analysis, delta);
            }
        }
        if results.len() > 1 && !opts.quiet {
            reporter.report_batch_summary(&stats);
        }
    }

    if let Some(threshold) = config.threshold {
        if scores.iter().any(|&score| score < threshold) {
            return Ok(ExitCode::from(1));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_resume_watch(path: &Path, opts: &ResumeOptions) -> Result<ExitCode> {
    // Initial run; keep watching regardless of threshold failures
    let _ = run_resume(path, opts)?;

    println!("{}", "Watching for changes... (Ctrl-C to stop)".dimmed());
    let watcher = TextWatcher::watch(path)
        .with_context(|| format!("Failed to watch {}", path.display()))?;

    loop {
        let changed = watcher.next_changes();
        for file in changed {
            println!("{}", format!("Changed: {}", file.display()).dimmed());
            if let Err(e) = run_resume(&file, opts) {
                eprintln!("{}: {:#}", "Error".red().bold(), e);
            }
        }
    }
}

// --- init subcommand ---

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let dir = dir.unwrap_or(Path::new("."));
    let config_path = dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let content = default_config_json(threshold.unwrap_or(60));
    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created {}", config_path.display());
    Ok(ExitCode::SUCCESS)
}
