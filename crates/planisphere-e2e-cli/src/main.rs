//! Planisphere CLI: run the end-to-end suites and generate the HTML report.
//!
//! ```bash
//! planisphere run                     # run every suite, then build the report
//! planisphere run --filter reserve    # run one suite
//! planisphere report                  # rebuild the report from existing results
//! planisphere clean --keep-days 3     # drop stale result files
//! ```
//!
//! The browser suites are `#[ignore]`d for a plain `cargo test`; `run`
//! re-enables them with `--include-ignored` so the split stays explicit.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::info;

/// Errors surfaced by the CLI
#[derive(Debug, Error)]
enum CliError {
    #[error("{tool} could not be started: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {code:?}")]
    ToolFailed { tool: &'static str, code: Option<i32> },

    #[error(transparent)]
    Suite(#[from] planisphere_e2e::E2eError),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Parser)]
#[command(name = "planisphere", about = "End-to-end suite runner for the hotel demo site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the browser suites, then generate the HTML report
    Run(RunArgs),
    /// Generate the HTML report from existing results
    Report(ReportArgs),
    /// Remove stale result files
    Clean(CleanArgs),
}

#[derive(Debug, clap::Args)]
struct RunArgs {
    /// Only run tests whose names match this filter
    #[arg(long)]
    filter: Option<String>,

    /// Directory test result records are written to
    #[arg(long, default_value = "reports/results")]
    results_dir: PathBuf,

    /// Directory the HTML report is generated into
    #[arg(long, default_value = "reports/html")]
    report_dir: PathBuf,

    /// Drop result files older than this many days before running
    #[arg(long, default_value_t = 3)]
    keep_days: u64,

    /// Skip the report-generation step
    #[arg(long)]
    no_report: bool,
}

#[derive(Debug, clap::Args)]
struct ReportArgs {
    /// Directory holding the test result records
    #[arg(long, default_value = "reports/results")]
    results_dir: PathBuf,

    /// Directory the HTML report is generated into
    #[arg(long, default_value = "reports/html")]
    report_dir: PathBuf,
}

#[derive(Debug, clap::Args)]
struct CleanArgs {
    /// Directory holding the test result records
    #[arg(long, default_value = "reports/results")]
    results_dir: PathBuf,

    /// Keep result files younger than this many days
    #[arg(long, default_value_t = 3)]
    keep_days: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Run(args) => run_suites(&args),
        Commands::Report(args) => generate_report(&args.results_dir, &args.report_dir),
        Commands::Clean(args) => {
            let removed = planisphere_e2e::clean_old_results(&args.results_dir, args.keep_days)?;
            info!(removed, "clean finished");
            Ok(())
        }
    }
}

fn run_suites(args: &RunArgs) -> CliResult<()> {
    let removed = planisphere_e2e::clean_old_results(&args.results_dir, args.keep_days)?;
    if removed > 0 {
        info!(removed, "dropped stale result files");
    }

    let mut cargo = Command::new("cargo");
    cargo.args(["test", "-p", "planisphere-e2e", "--tests"]);
    if let Some(filter) = &args.filter {
        cargo.arg(filter);
    }
    // One browser at a time; later cases in some suites depend on state
    // left by earlier ones.
    cargo.args(["--", "--include-ignored", "--test-threads=1"]);
    cargo.env("E2E_RESULTS_DIR", &args.results_dir);

    info!("running browser suites");
    let status = cargo.status().map_err(|source| CliError::Spawn {
        tool: "cargo test",
        source,
    })?;
    if !status.success() {
        // Generate the report before surfacing the failure so the failed
        // run is still browsable.
        if !args.no_report {
            let _ = generate_report(&args.results_dir, &args.report_dir);
        }
        return Err(CliError::ToolFailed {
            tool: "cargo test",
            code: status.code(),
        });
    }

    if args.no_report {
        return Ok(());
    }
    generate_report(&args.results_dir, &args.report_dir)
}

/// Invoke the external report generator over the results directory.
fn generate_report(results_dir: &Path, report_dir: &Path) -> CliResult<()> {
    info!(results = %results_dir.display(), report = %report_dir.display(), "generating report");
    let status = Command::new("allure")
        .arg("generate")
        .arg(results_dir)
        .arg("-o")
        .arg(report_dir)
        .arg("--clean")
        .status()
        .map_err(|source| CliError::Spawn {
            tool: "allure",
            source,
        })?;
    if !status.success() {
        return Err(CliError::ToolFailed {
            tool: "allure",
            code: status.code(),
        });
    }
    Ok(())
}
