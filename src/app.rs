// Declare modules
pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::Path;

use self::cli::Cli;
use self::config::resolve_config;
use self::models::{FileReport, Outcome};
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let mut args = Cli::parse();
    let mut roots = std::mem::take(&mut args.paths);
    if roots.is_empty() {
        roots.push(env::current_dir().context("Failed to get current directory")?);
    }

    // 2. Resolve Configuration (fatal errors stop here, before any file I/O)
    let config = resolve_config(args)?;

    // 3. Set up reporting. Diagnostics go to stderr; --verbose turns on the
    //    per-file messages, read/write errors are always visible.
    let filter = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    // 4. Discover and process, one file at a time
    let scanner = Scanner::new(&config)?;
    let mut processed = 0usize;
    let mut rewritten = 0usize;
    for root in &roots {
        for path in scanner.scan(root) {
            let report = engine::process(&path, &config);
            report_file(&path, &report);
            processed += 1;
            if matches!(report.outcome, Outcome::Rewritten) {
                rewritten += 1;
            }
        }
    }

    log::info!("{} file(s) examined, {} rewritten", processed, rewritten);

    Ok(())
}

/// Turns one file's report into log lines. Per-file failures are reported
/// here and never abort the run.
fn report_file(path: &Path, report: &FileReport) {
    match &report.outcome {
        Outcome::Unchanged => log::debug!("{} is already clean", path.display()),
        Outcome::Rewritten => {
            let stats = &report.stats;
            if stats.was_dos {
                log::debug!("{}: fixed \\r\\n line endings", path.display());
            }
            if stats.fixed_indent {
                log::debug!("{}: fixed indentation", path.display());
            }
            if stats.trimmed_lines > 0 {
                log::debug!(
                    "{}: trimmed trailing whitespace of {} lines",
                    path.display(),
                    stats.trimmed_lines
                );
            }
            if stats.trimmed_blank_lines > 0 {
                log::debug!(
                    "{}: removed {} blank lines",
                    path.display(),
                    stats.trimmed_blank_lines
                );
            }
            if stats.appended_newline {
                log::debug!("{}: added newline at end of file", path.display());
            }
        }
        Outcome::SkippedBinary => {
            log::debug!("Skipping {} because it looks binary", path.display())
        }
        Outcome::SkippedTooLarge => {
            log::debug!("Skipping {} because it's over 1MiB", path.display())
        }
        Outcome::SkippedIgnored => log::debug!("Ignoring {}", path.display()),
        Outcome::SkippedEmpty => log::debug!("Skipping {} because it's empty", path.display()),
        Outcome::ReadError(err) => {
            log::error!("Unable to read `{}': {}", path.display(), err)
        }
        Outcome::WriteError(err) => {
            log::error!("Unable to write to `{}': {}", path.display(), err)
        }
    }
}
