//! Defines the findings reported by the conformance checker.
use serde::Serialize;

/// How seriously a finding should be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A documented gap between static and dynamic behavior.
    Warning,
    /// The resolver disagrees with the row's expected value.
    Error,
}

/// The specific category of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Resolution differs from the `expected` column.
    ExpectationMismatch,
    /// The resolver rejects an operation the reference runtime executes.
    RejectedButExecutes,
    /// The resolved type erases to a different class than the runtime returns.
    RuntimeClassDiverges,
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::ExpectationMismatch => Severity::Error,
            FindingKind::RejectedButExecutes | FindingKind::RuntimeClassDiverges => Severity::Warning,
        }
    }
}

/// A structured finding about one case row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// The 1-based row the finding is about.
    pub row: usize,
    pub kind: FindingKind,
    pub severity: Severity,
    /// A human-readable explanation.
    pub message: String,
}

impl Finding {
    pub(crate) fn new(row: usize, kind: FindingKind, message: String) -> Self {
        Self { row, kind, severity: kind.severity(), message }
    }
}
