//! Executes a parsed command line and produces the text to print and the exit status.
use crate::config::{Command, ReportFormat};
use crate::display::report;
use crate::store::{load_cases, parse::ParseError, LoadError, TemporalType};
use crate::type_system::protocols::{self, ProtocolError};
use crate::type_system::resolve_subtraction;
use crate::validation::ConformanceChecker;
use thiserror::Error;

pub const EXIT_OK: i32 = 0;
pub const EXIT_MISMATCH: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error("cannot render report: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a command printed and how the process should exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub exit_code: i32,
}

pub fn run(command: &Command) -> Result<Outcome, AppError> {
    match command {
        Command::Check { path, format, report: fmt, strict } => {
            let cases = load_cases(path, *format)?;
            let result = ConformanceChecker::new(&cases).check();
            let output = match fmt {
                ReportFormat::Text => report::format_report(&result),
                ReportFormat::Json => report::report_json(&result)?,
            };
            let exit_code = if result.has_failures(*strict) { EXIT_MISMATCH } else { EXIT_OK };
            Ok(Outcome { output, exit_code })
        }
        Command::Resolve { lhs, rhs } => {
            let lhs: TemporalType = lhs.parse()?;
            let rhs: TemporalType = rhs.parse()?;
            let resolution = resolve_subtraction(lhs, rhs);
            Ok(Outcome { output: report::format_resolution(&resolution), exit_code: EXIT_OK })
        }
        Command::Protocols { subject } => {
            let subject: TemporalType = subject.parse()?;
            if subject.is_duration_like() {
                return Err(ProtocolError::InvalidSubject(subject).into());
            }
            let output = report::format_protocol_matrix(
                subject,
                &protocols::matrix(subject),
                protocols::infer_timestamp_parameter(subject),
            );
            Ok(Outcome { output, exit_code: EXIT_OK })
        }
    }
}
