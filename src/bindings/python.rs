// FFI Facade: the entry point for Python.
// Defines the `_core` module and exposes the resolver, the protocol checks
// and the conformance checker as plain functions over descriptor strings.

use crate::display::report;
use crate::store::{load_cases, TemporalType};
use crate::type_system::protocols::{self, DurationParam, Protocol};
use crate::type_system::resolve_subtraction;
use crate::validation::ConformanceChecker;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

fn parse(s: &str) -> PyResult<TemporalType> {
    s.parse().map_err(|e: crate::store::parse::ParseError| PyValueError::new_err(e.to_string()))
}

/// Returns the result descriptor of `lhs - rhs`, or `Rejected(<reason>)`.
#[pyfunction]
#[pyo3(name = "resolve_subtraction")]
fn resolve(lhs: &str, rhs: &str) -> PyResult<String> {
    let resolution = resolve_subtraction(parse(lhs)?, parse(rhs)?);
    Ok(report::format_resolution(&resolution))
}

/// Whether `subject` conforms to `protocol`, optionally parameterized.
#[pyfunction]
#[pyo3(signature = (subject, protocol, param=None))]
fn check_protocol(subject: &str, protocol: &str, param: Option<&str>) -> PyResult<bool> {
    let subject = parse(subject)?;
    let protocol: Protocol = protocol.parse().map_err(|e: protocols::ProtocolError| PyValueError::new_err(e.to_string()))?;
    let param = DurationParam::parse(param).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(protocols::satisfies(subject, protocol, param))
}

/// Checks a case table and returns `(passed, json_report)`.
#[pyfunction]
#[pyo3(signature = (path, strict=false))]
fn check_cases(path: PathBuf, strict: bool) -> PyResult<(bool, String)> {
    let cases = load_cases(&path, None).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let result = ConformanceChecker::new(&cases).check();
    let json = report::report_json(&result).map_err(|e| PyRuntimeError::new_err(e.to_string()))?;
    Ok((!result.has_failures(strict), json))
}

// --- Module Definition ---
/// This function defines the `timesub._core` Python module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(resolve, m)?)?;
    m.add_function(wrap_pyfunction!(check_protocol, m)?)?;
    m.add_function(wrap_pyfunction!(check_cases, m)?)?;
    Ok(())
}
