//! Rule comparing a resolution against the row's expected value.
use crate::store::{Case, Expectation};
use crate::type_system::Resolution;
use crate::validation::error::{Finding, FindingKind};

/// Whether `resolution` is what `expected` asks for.
pub(crate) fn matches(expected: &Expectation, resolution: &Resolution) -> bool {
    match (expected, resolution) {
        (Expectation::Type(t), Ok(resolved)) => t == resolved,
        (Expectation::Rejected(None), Err(_)) => true,
        (Expectation::Rejected(Some(reason)), Err(rejection)) => *reason == rejection.reason,
        _ => false,
    }
}

/// Reports a mismatch between the resolver and the `expected` column.
pub(crate) fn validate_expectation(case: &Case, resolution: &Resolution) -> Option<Finding> {
    let expected = case.expected.as_ref()?;
    if matches(expected, resolution) {
        return None;
    }

    let got = match resolution {
        Ok(t) => t.to_string(),
        Err(rejection) => format!("Rejected({})", rejection.reason),
    };
    Some(Finding::new(
        case.row,
        FindingKind::ExpectationMismatch,
        format!(
            "Expectation Mismatch: '{}' - '{}' resolved to {} but the row expects {}.",
            case.lhs, case.rhs, got, expected
        ),
    ))
}
