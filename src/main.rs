//! CLI entry point for the roster rater.
//!
//! Reads a roster file (JSON or plain text, chosen by extension), prints each
//! student's average score and the number of students with academic debt,
//! and optionally appends per-student rows to a CSV file.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use roster_rater::{
    output::{append_records, print_pretty, render_json, render_text},
    parser::reader_for_path,
    stats::RosterStats,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "roster_rater")]
#[command(about = "Rates students and counts academic debts from a roster file", long_about = None)]
struct Cli {
    /// Path to the roster file (`.json` or plain text)
    #[arg(short, long)]
    path: String,

    /// How to print the results
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// CSV file to append per-student results to
    #[arg(long)]
    csv: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();
    run(&cli)
}

/// Colored stderr + JSON rolling log file. The returned guard flushes the
/// file writer on drop.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/roster_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("roster_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

#[tracing::instrument(skip(cli), fields(path = %cli.path))]
fn run(cli: &Cli) -> Result<()> {
    let path = Path::new(&cli.path);
    let roster = reader_for_path(path).read(path)?;
    info!(students = roster.len(), "Roster loaded");

    let stats = RosterStats::from_roster(&roster)?.with_source(&cli.path);
    print_pretty(&stats);

    match cli.format {
        Format::Text => print!("{}", render_text(&stats)),
        Format::Json => println!("{}", render_json(&stats)?),
    }

    if let Some(csv_path) = &cli.csv {
        append_records(csv_path, &stats)?;
        info!(csv_path, rows = stats.students.len(), "Results appended");
    }

    Ok(())
}
