//! What the reference runtime actually does for each subtraction.
//!
//! The table is recorded from the reference scripts' runtime assertions. Rows
//! the scripts never executed (they are commented out there) are
//! `Unrecorded`; the conformance checker draws no conclusion from those.
use crate::store::{DateKind, InstantUnit, RuntimeClass, TemporalType};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuntimeBehavior {
    /// The operation runs. The class of the result is `None` when it was never recorded.
    Executes(Option<RuntimeClass>),
    Raises,
    Unrecorded,
}

/// Looks up the recorded runtime behavior of `lhs - rhs`.
pub fn observe(lhs: TemporalType, rhs: TemporalType) -> RuntimeBehavior {
    use RuntimeBehavior::*;
    use TemporalType::*;

    match (lhs, rhs) {
        (Date(kind), Duration) => Executes(Some(date_class(kind))),
        (Date(a), Date(b)) if a == b => Executes(Some(RuntimeClass::Duration)),
        // The pure-language date implementation accepts a datetime operand
        // because datetime subclasses date; the reverse never does.
        (Date(DateKind::PlainDate), Date(DateKind::PlainDateTime)) => Executes(Some(RuntimeClass::Duration)),
        (Date(DateKind::PlainDateTime), Date(DateKind::PlainDate)) => Raises,
        (Duration, Duration) => Executes(Some(RuntimeClass::Duration)),
        (Duration, Date(_)) => Raises,
        (Duration, NumericInstant(_)) => Executes(None),

        (NumericInstant(unit), Date(kind)) if unit.date_kind() == Some(kind) => {
            Executes(Some(RuntimeClass::Duration))
        }
        // Shifting a calendar-backed instant by a native duration hands back a native value.
        (NumericInstant(InstantUnit::PlainDate), Duration) => Executes(Some(RuntimeClass::Date)),
        (NumericInstant(InstantUnit::PlainDateTime), Duration) => Executes(Some(RuntimeClass::DateTime)),
        (NumericInstant(_), NumericInstant(_)) => Executes(Some(RuntimeClass::NumericDuration)),
        (NumericInstant(_), NumericDuration(_)) => Executes(Some(RuntimeClass::NumericInstant)),

        _ => Unrecorded,
    }
}

fn date_class(kind: DateKind) -> RuntimeClass {
    TemporalType::Date(kind).runtime_class()
}
