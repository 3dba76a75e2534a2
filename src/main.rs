//! Cadence: Speech Transcript Quality Analyzer CLI

use anyhow::{Context, Result};
use cadence::analyzer::Scorer;
use cadence::config::{
    build_ignore_set, is_ignored, load_config, Config, CONFIG_FILENAME, DEFAULT_CONFIG,
};
use cadence::input::read_transcript;
use cadence::reporter::{format_score, ConsoleReporter, HtmlReporter, JsonReporter};
use cadence::watcher::TranscriptWatcher;
use cadence::{validate_transcript, Evaluation, STDIN_SOURCE};
use clap::{Parser, Subcommand};
use colored::Colorize;
use globset::GlobSet;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Environment variable holding the diagnostics filter
const LOG_ENV: &str = "CADENCE_LOG";

/// Cadence: score a speech transcript from 0 to 100
#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript file or directory (omit or use "-" to type/paste a transcript)
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Also write a self-contained HTML report to FILE
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (one line per transcript)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (statistics, all findings, debug diagnostics)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .cadencerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Watch for file changes and re-evaluate
    #[arg(long)]
    watch: bool,

    /// Evaluate files in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .cadencerc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 60)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn run(args: &Args) -> Result<ExitCode> {
    if let Some(Commands::Init { threshold, dir }) = &args.command {
        return run_init(*threshold, dir.as_deref());
    }

    match args.path.as_deref() {
        None => run_interactive(args),
        Some(p) if p == Path::new("-") => run_interactive(args),
        Some(p) if args.watch => run_watch(args, p),
        Some(p) => run_paths(args, p),
    }
}

/// Directory used to search for the config file
fn work_dir_for(path: &Path) -> PathBuf {
    let dir = if path.is_dir() {
        path
    } else {
        path.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    };
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}

fn load_effective_config(args: &Args, work_dir: &Path) -> Result<Config> {
    Ok(load_config(work_dir, args.config.as_deref())?.merge_with_cli(args.threshold))
}

fn ignore_set_for(config: &Config) -> Result<Option<GlobSet>> {
    if config.ignore.is_empty() {
        Ok(None)
    } else {
        build_ignore_set(&config.ignore).map(Some)
    }
}

fn run_interactive(args: &Args) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_effective_config(args, &cwd)?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!(
            "{}",
            "Enter the speech transcript. Finish with a line containing END or an empty line:"
                .bold()
        );
    }
    let text = read_transcript(stdin.lock()).context("Failed to read standard input")?;

    if let Err(e) = validate_transcript(&text) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        return Ok(ExitCode::from(2));
    }

    let scorer = Scorer::with_settings(config.scorer_settings());
    let mut evaluation = scorer.evaluate(STDIN_SOURCE, &text);
    evaluation.findings = Scorer::apply_config_to_findings(evaluation.findings, Some(&config));

    let results = vec![evaluation];
    emit(args, &results)?;
    if meets_threshold(args, results[0].score.value, config.threshold) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn run_paths(args: &Args, path: &Path) -> Result<ExitCode> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let work_dir = work_dir_for(path);
    let config = load_effective_config(args, &work_dir)?;
    let ignore_set = ignore_set_for(&config)?;
    let patterns = config.get_transcript_patterns();

    let files = collect_transcript_files(path, ignore_set.as_ref(), &patterns);
    if files.is_empty() {
        eprintln!("{}: No transcript files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
        {
            tracing::warn!(error = %e, "could not configure thread pool");
        }
    }

    let scorer = Scorer::with_settings(config.scorer_settings());
    let use_parallel = args.parallel || files.len() > 10;
    tracing::debug!(files = files.len(), parallel = use_parallel, "evaluating transcripts");
    let outcomes = if use_parallel {
        scorer.evaluate_parallel(&files, Some(&config))
    } else {
        scorer.evaluate_many(&files, Some(&config))
    };

    let mut results = Vec::with_capacity(files.len());
    let mut had_errors = false;
    for (file, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(evaluation) => results.push(evaluation),
            Err(e) => {
                eprintln!("{}: {}: {:#}", "Error".red(), file.display(), e);
                had_errors = true;
            }
        }
    }

    if results.is_empty() {
        return Ok(ExitCode::from(2));
    }

    emit(args, &results)?;

    let (score, threshold) = if results.len() == 1 {
        let threshold = args
            .threshold
            .or_else(|| config.effective_threshold(Path::new(&results[0].source)));
        (results[0].score.value, threshold)
    } else {
        (Scorer::aggregate_stats(&results).average_score.value, config.threshold)
    };

    if !meets_threshold(args, score, threshold) {
        Ok(ExitCode::from(1))
    } else if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Print results in the requested format and write the HTML report if asked
fn emit(args: &Args, results: &[Evaluation]) -> Result<()> {
    let stats = Scorer::aggregate_stats(results);

    if let Some(ref html_path) = args.html {
        let html = HtmlReporter::new().report(results, &stats);
        std::fs::write(html_path, html)
            .with_context(|| format!("Failed to write HTML report to {}", html_path.display()))?;
        if !args.quiet && !args.json {
            eprintln!(
                "{}: HTML report written to {}",
                "Info".blue(),
                html_path.display()
            );
        }
    }

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(results, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for evaluation in results {
            reporter.report_quiet(evaluation);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(results, &stats);
        }
    }
    Ok(())
}

/// False (after telling the user) when the score is below the threshold
fn meets_threshold(args: &Args, score: f64, threshold: Option<u8>) -> bool {
    let Some(threshold) = threshold else {
        return true;
    };
    if score < f64::from(threshold) {
        if !args.quiet && !args.json {
            eprintln!(
                "\n{}: Score {} is below threshold {}",
                "Failed".red().bold(),
                format_score(score),
                threshold
            );
        }
        return false;
    }
    true
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let contents = match threshold {
        Some(t) => {
            let mut value: serde_json::Value =
                serde_json::from_str(DEFAULT_CONFIG).context("Default config is invalid")?;
            value["threshold"] = t.into();
            let mut rendered = serde_json::to_string_pretty(&value)?;
            rendered.push('\n');
            rendered
        }
        None => DEFAULT_CONFIG.to_string(),
    };

    std::fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold.unwrap_or(0)
    );
    Ok(ExitCode::SUCCESS)
}

fn run_watch(args: &Args, path: &Path) -> Result<ExitCode> {
    let work_dir = work_dir_for(path);
    let config = load_effective_config(args, &work_dir)?;
    let ignore_set = ignore_set_for(&config)?;
    let patterns = config.get_transcript_patterns();
    let scorer = Scorer::with_settings(config.scorer_settings());

    let watcher =
        TranscriptWatcher::watch(path, &patterns).context("Failed to create file watcher")?;
    eprintln!("{}: Watching for changes... (Ctrl+C to stop)", "Info".blue());

    loop {
        let changed: Vec<PathBuf> = watcher
            .next_changes()
            .into_iter()
            .filter(|p| ignore_set.as_ref().map_or(true, |set| !is_ignored(p, set)))
            .collect();

        for file in changed {
            match scorer.evaluate_file(&file, Some(&config)) {
                Ok(evaluation) => {
                    if args.quiet {
                        ConsoleReporter::new().report_quiet(&evaluation);
                    } else {
                        ConsoleReporter::new().report(&evaluation);
                    }
                }
                Err(e) => {
                    eprintln!("{}: {}: {:#}", "Error".red(), file.display(), e);
                }
            }
        }
    }
}

/// A single file is always evaluated; directories are walked for matching suffixes
fn collect_transcript_files(
    path: &Path,
    ignore_set: Option<&GlobSet>,
    patterns: &[&str],
) -> Vec<PathBuf> {
    let skip = |p: &Path| ignore_set.is_some_and(|set| is_ignored(p, set));

    if path.is_file() {
        return if skip(path) {
            vec![]
        } else {
            vec![path.to_path_buf()]
        };
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| TranscriptWatcher::is_transcript_file(p, patterns) && !skip(p))
        .collect();
    files.sort();
    files
}
