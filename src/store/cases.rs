//! Case tables: rows of `(lhs, rhs, expected)` read from CSV or JSON files.
use super::parse::ParseError;
use super::types::TemporalType;
use crate::type_system::RejectReason;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ParseError,
    },
    #[error("row {row}: invalid expectation '{text}': {source}")]
    Expectation {
        row: usize,
        text: String,
        #[source]
        source: ParseError,
    },
    #[error("cannot infer the case format of '{0}'; pass --format")]
    UnknownFormat(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CaseFormat {
    Csv,
    Json,
}

impl CaseFormat {
    /// Picks a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "csv" => Some(CaseFormat::Csv),
            "json" => Some(CaseFormat::Json),
            _ => None,
        }
    }
}

/// What a row expects the resolver to say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expectation {
    Type(TemporalType),
    /// `None` accepts any rejection reason.
    Rejected(Option<RejectReason>),
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Type(t) => write!(f, "{}", t),
            Expectation::Rejected(Some(reason)) => write!(f, "Rejected({})", reason),
            Expectation::Rejected(None) => f.write_str("Rejected"),
        }
    }
}

impl FromStr for Expectation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "Rejected" {
            return Ok(Expectation::Rejected(None));
        }
        if let Some(rest) = s.strip_prefix("Rejected(") {
            let reason = rest.strip_suffix(')').ok_or_else(|| ParseError::Malformed(s.to_string()))?;
            return reason.parse().map(|r| Expectation::Rejected(Some(r)));
        }
        s.parse().map(Expectation::Type)
    }
}

/// One row of a case table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Case {
    /// 1-based position in the input, header excluded.
    pub row: usize,
    pub lhs: TemporalType,
    pub rhs: TemporalType,
    pub expected: Option<Expectation>,
}

/// The on-disk shape of a row, shared by the CSV and JSON readers.
#[derive(Debug, Clone, Deserialize)]
struct RawCase {
    lhs_kind: String,
    #[serde(default)]
    lhs_unit: Option<String>,
    rhs_kind: String,
    #[serde(default)]
    rhs_unit: Option<String>,
    #[serde(default)]
    expected: Option<String>,
}

impl RawCase {
    fn into_case(self, row: usize) -> Result<Case, LoadError> {
        let lhs = TemporalType::from_parts(&self.lhs_kind, self.lhs_unit.as_deref())
            .map_err(|source| LoadError::Row { row, source })?;
        let rhs = TemporalType::from_parts(&self.rhs_kind, self.rhs_unit.as_deref())
            .map_err(|source| LoadError::Row { row, source })?;
        let expected = match self.expected.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(text.parse().map_err(|source| LoadError::Expectation {
                row,
                text: text.to_string(),
                source,
            })?),
        };
        Ok(Case { row, lhs, rhs, expected })
    }
}

/// Reads a case table from any reader.
pub fn read_cases<R: Read>(reader: R, format: CaseFormat) -> Result<Vec<Case>, LoadError> {
    let raw: Vec<RawCase> = match format {
        CaseFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
            rdr.deserialize().collect::<Result<_, _>>()?
        }
        CaseFormat::Json => serde_json::from_reader(reader)?,
    };

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| r.into_case(i + 1))
        .collect()
}

/// Reads a case table from a file, inferring the format from its extension
/// unless one is given.
pub fn load_cases(path: &Path, format: Option<CaseFormat>) -> Result<Vec<Case>, LoadError> {
    let format = format
        .or_else(|| CaseFormat::from_path(path))
        .ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))?;
    let file = File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    let cases = read_cases(BufReader::new(file), format)?;
    tracing::debug!(path = %path.display(), rows = cases.len(), "loaded case table");
    Ok(cases)
}
