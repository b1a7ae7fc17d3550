use crate::analysis::runtime::RuntimeBehavior;
use crate::store::TemporalType;
use crate::type_system::protocols::ProtocolCheck;
use crate::type_system::Resolution;
use crate::validation::{ConformanceReport, Finding, RowOutcome, RowStatus};
use serde::Serialize;
use std::fmt::Write;

/// Renders a resolution as a single token: the result type or `Rejected(reason)`.
pub fn format_resolution(resolution: &Resolution) -> String {
    match resolution {
        Ok(t) => t.to_string(),
        Err(rejection) => format!("Rejected({})", rejection.reason),
    }
}

fn format_runtime(behavior: RuntimeBehavior) -> String {
    match behavior {
        RuntimeBehavior::Executes(Some(class)) => format!("executes -> {}", class),
        RuntimeBehavior::Executes(None) => "executes".to_string(),
        RuntimeBehavior::Raises => "raises".to_string(),
        RuntimeBehavior::Unrecorded => "unrecorded".to_string(),
    }
}

/// Human-readable conformance report.
pub fn format_report(report: &ConformanceReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "CONFORMANCE REPORT ({} rows)", report.rows.len());
    let _ = writeln!(out, "--------------------------------------------------");

    for row in &report.rows {
        let marker = match row.status {
            RowStatus::Match => "ok",
            RowStatus::Mismatch => "FAIL",
            RowStatus::Unchecked => "--",
        };
        let _ = writeln!(
            out,
            "[{:>4}] {:<4} {} - {} = {}",
            row.case.row,
            marker,
            row.case.lhs,
            row.case.rhs,
            format_resolution(&row.resolution)
        );
        if let (RowStatus::Mismatch, Some(expected)) = (row.status, row.case.expected) {
            let _ = writeln!(out, "       |-- expected: {}", expected);
        }
        let _ = writeln!(out, "       |-- runtime: {}", format_runtime(row.runtime));
        for (i, finding) in row.findings.iter().enumerate() {
            let connector = if i == row.findings.len() - 1 { "`--" } else { "|--" };
            let _ = writeln!(out, "       {} {:?}: {}", connector, finding.severity, finding.message);
        }
    }

    let _ = writeln!(out, "--------------------------------------------------");
    let _ = writeln!(
        out,
        "matched: {}  mismatched: {}  unchecked: {}  warnings: {}",
        report.count(RowStatus::Match),
        report.count(RowStatus::Mismatch),
        report.count(RowStatus::Unchecked),
        report.warning_count()
    );
    out
}

#[derive(Serialize)]
struct JsonSummary {
    rows: usize,
    matched: usize,
    mismatched: usize,
    unchecked: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    row: usize,
    lhs: TemporalType,
    rhs: TemporalType,
    resolved: String,
    expected: Option<String>,
    status: RowStatus,
    runtime: RuntimeBehavior,
    findings: &'a [Finding],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: JsonSummary,
    rows: Vec<JsonRow<'a>>,
}

impl<'a> From<&'a RowOutcome> for JsonRow<'a> {
    fn from(row: &'a RowOutcome) -> Self {
        Self {
            row: row.case.row,
            lhs: row.case.lhs,
            rhs: row.case.rhs,
            resolved: format_resolution(&row.resolution),
            expected: row.case.expected.map(|e| e.to_string()),
            status: row.status,
            runtime: row.runtime,
            findings: &row.findings,
        }
    }
}

/// Machine-readable conformance report.
pub fn report_json(report: &ConformanceReport) -> Result<String, serde_json::Error> {
    let json = JsonReport {
        summary: JsonSummary {
            rows: report.rows.len(),
            matched: report.count(RowStatus::Match),
            mismatched: report.count(RowStatus::Mismatch),
            unchecked: report.count(RowStatus::Unchecked),
            warnings: report.warning_count(),
        },
        rows: report.rows.iter().map(JsonRow::from).collect(),
    };
    serde_json::to_string_pretty(&json)
}

/// Capability matrix for one subject.
pub fn format_protocol_matrix(subject: TemporalType, rows: &[ProtocolCheck], inferred: Option<TemporalType>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PROTOCOL CONFORMANCE for '{}':", subject);
    let _ = writeln!(out, "--------------------------------------------------");
    for row in rows {
        let mark = if row.satisfied { "yes" } else { "no " };
        let _ = writeln!(out, "{} {}[{}]  ({})", mark, row.protocol, row.param, row.detail);
    }
    let _ = writeln!(out, "--------------------------------------------------");
    match inferred {
        Some(d) => {
            let _ = writeln!(out, "generic inference: Timestamp[{}]", d);
        }
        None => {
            let _ = writeln!(out, "generic inference: none");
        }
    }
    out
}
