//! Rule surfacing documented gaps between the resolver and the reference runtime.
use crate::analysis::runtime::RuntimeBehavior;
use crate::store::Case;
use crate::type_system::Resolution;
use crate::validation::error::{Finding, FindingKind};

/// "The Known Gap Rule": flags rows where static and dynamic behavior part ways.
///
/// These are warnings, not failures. The resolver is right about what a checker
/// reports; the runtime simply does something else for these pairings.
pub(crate) fn validate_runtime(case: &Case, resolution: &Resolution, runtime: RuntimeBehavior) -> Option<Finding> {
    match (resolution, runtime) {
        (Err(rejection), RuntimeBehavior::Executes(class)) => {
            let yields = class.map_or_else(|| "an unrecorded class".to_string(), |c| format!("'{}'", c));
            Some(Finding::new(
                case.row,
                FindingKind::RejectedButExecutes,
                format!(
                    "Documented Inconsistency: '{}' - '{}' is Rejected({}) statically but executes at runtime, yielding {}.",
                    case.lhs, case.rhs, rejection.reason, yields
                ),
            ))
        }
        (Ok(resolved), RuntimeBehavior::Executes(Some(class))) if resolved.runtime_class() != class => Some(Finding::new(
            case.row,
            FindingKind::RuntimeClassDiverges,
            format!(
                "Documented Inconsistency: '{}' - '{}' resolves to '{}' but the runtime returns a '{}'.",
                case.lhs,
                case.rhs,
                resolved,
                class
            ),
        )),
        _ => None,
    }
}
