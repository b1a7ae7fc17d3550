//! Command-line configuration for the `timesub` tool.
use crate::store::CaseFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "timesub", version, about = "Resolve and check temporal subtraction types")]
pub struct Cli {
    /// Log filter, e.g. `warn` or `timesub_core=debug`.
    #[arg(long, global = true, env = "TIMESUB_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check every row of a case table against the resolver.
    Check {
        /// CSV or JSON case table.
        path: PathBuf,
        /// Input format; inferred from the extension when omitted.
        #[arg(long, value_enum)]
        format: Option<CaseFormat>,
        /// Report format.
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        report: ReportFormat,
        /// Fail on documented static/dynamic inconsistencies too.
        #[arg(long)]
        strict: bool,
    },
    /// Resolve a single subtraction, e.g. `resolve 'NumericInstant[Unset]' PlainDuration`.
    Resolve { lhs: String, rhs: String },
    /// Show the capability conformance matrix of a timestamp-like subject.
    Protocols { subject: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// An unparsable filter falls back to `warn`.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
