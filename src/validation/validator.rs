//! The conformance checker that runs every case row through the resolver.
use super::error::{Finding, Severity};
use super::rules::{expected, runtime};
use crate::analysis::runtime::{observe, RuntimeBehavior};
use crate::store::Case;
use crate::type_system::{resolve_subtraction, Resolution};
use rayon::prelude::*;
use serde::Serialize;

/// How a row compares against its expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Match,
    Mismatch,
    /// The row carries no expected value.
    Unchecked,
}

/// Everything the checker learned about one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowOutcome {
    pub case: Case,
    pub resolution: Resolution,
    pub runtime: RuntimeBehavior,
    pub status: RowStatus,
    pub findings: Vec<Finding>,
}

/// The outcome of a full run, rows in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConformanceReport {
    pub rows: Vec<RowOutcome>,
}

impl ConformanceReport {
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.rows.iter().flat_map(|r| r.findings.iter())
    }

    pub fn count(&self, status: RowStatus) -> usize {
        self.rows.iter().filter(|r| r.status == status).count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings().filter(|f| f.severity == Severity::Warning).count()
    }

    /// True if any row disagrees with its expectation, or, when `strict`, if
    /// any documented inconsistency was found.
    pub fn has_failures(&self, strict: bool) -> bool {
        self.count(RowStatus::Mismatch) > 0 || (strict && self.warning_count() > 0)
    }
}

/// Runs the resolver, the expectation rule and the runtime rule over a case table.
///
/// Rows are independent, so they are evaluated in parallel. Like a linter, it
/// collects every finding rather than stopping at the first.
pub struct ConformanceChecker<'a> {
    cases: &'a [Case],
}

impl<'a> ConformanceChecker<'a> {
    pub fn new(cases: &'a [Case]) -> Self {
        Self { cases }
    }

    pub fn check(&self) -> ConformanceReport {
        // `collect` on an indexed parallel iterator keeps input order.
        let rows: Vec<RowOutcome> = self.cases.par_iter().map(check_row).collect();

        for finding in rows.iter().flat_map(|r| r.findings.iter()) {
            match finding.severity {
                Severity::Error => tracing::error!(row = finding.row, "{}", finding.message),
                Severity::Warning => tracing::warn!(row = finding.row, "{}", finding.message),
            }
        }

        let report = ConformanceReport { rows };
        tracing::info!(
            rows = report.rows.len(),
            mismatched = report.count(RowStatus::Mismatch),
            warnings = report.warning_count(),
            "conformance check finished"
        );
        report
    }
}

fn check_row(case: &Case) -> RowOutcome {
    let resolution = resolve_subtraction(case.lhs, case.rhs);
    let behavior = observe(case.lhs, case.rhs);

    let mut findings = Vec::new();
    if let Some(f) = expected::validate_expectation(case, &resolution) {
        findings.push(f);
    }
    if let Some(f) = runtime::validate_runtime(case, &resolution, behavior) {
        findings.push(f);
    }

    let status = match &case.expected {
        None => RowStatus::Unchecked,
        Some(e) if expected::matches(e, &resolution) => RowStatus::Match,
        Some(_) => RowStatus::Mismatch,
    };

    RowOutcome { case: *case, resolution, runtime: behavior, status, findings }
}
