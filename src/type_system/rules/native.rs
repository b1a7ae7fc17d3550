//! Rules for subtractions whose left operand is a native date or duration.
use crate::store::{DateKind, TemporalType};
use crate::type_system::error::RejectReason;

/// Infers the result of `lhs - rhs`. The resolver only routes native `lhs` here.
///
/// Native operands never absorb a numeric operand on the right: those pairings
/// are outside the guaranteed rule set and classified as reversed order.
pub(crate) fn infer(lhs: TemporalType, rhs: TemporalType) -> Result<TemporalType, RejectReason> {
    match (lhs, rhs) {
        (TemporalType::Date(kind), TemporalType::Duration) => Ok(TemporalType::Date(kind)),
        (TemporalType::Date(a), TemporalType::Date(b)) => date_minus_date(a, b),
        // The duration protocol declares `sub(Self) -> Self`.
        (TemporalType::Duration, TemporalType::Duration) => Ok(TemporalType::Duration),
        _ => Err(RejectReason::ReversedOperandOrderUnsupported),
    }
}

fn date_minus_date(a: DateKind, b: DateKind) -> Result<TemporalType, RejectReason> {
    if a == b {
        Ok(TemporalType::Duration)
    } else {
        Err(RejectReason::CrossKindNative)
    }
}
