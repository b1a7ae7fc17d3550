//! Rules for combining unit tags.
//!
//! All three functions are pure table lookups. `Unset` absorbs everything,
//! `Erased` absorbs everything but `Unset`, and `IntegerCount` absorbs the
//! calendar tags. An `Erased` operand stands for several tags at once, so the
//! result is the union of the per-tag results, which is again `Erased` unless
//! `Unset` swallows it.
use crate::store::{DurationUnit, InstantUnit};

/// `CommonUnit`: the duration unit of `NumericInstant[u] - NumericInstant[v]`.
///
/// Symmetric. Two calendar tags, equal or not, meet at `PlainDuration`.
pub(crate) fn common_unit(u: InstantUnit, v: InstantUnit) -> DurationUnit {
    use InstantUnit::*;
    match (u, v) {
        (Unset, _) | (_, Unset) => DurationUnit::Unset,
        (Erased, _) | (_, Erased) => DurationUnit::Erased,
        (IntegerCount, _) | (_, IntegerCount) => DurationUnit::IntegerCount,
        (PlainDate | PlainDateTime, PlainDate | PlainDateTime) => DurationUnit::PlainDuration,
    }
}

/// `ShiftUnit`: the instant unit of `NumericInstant[u] - NumericDuration[d]`.
///
/// A calendar duration keeps the instant's own calendar tag.
pub(crate) fn shift_unit(u: InstantUnit, d: DurationUnit) -> InstantUnit {
    match (u, d) {
        (InstantUnit::Unset, _) | (_, DurationUnit::Unset) => InstantUnit::Unset,
        (InstantUnit::Erased, _) | (_, DurationUnit::Erased) => InstantUnit::Erased,
        (InstantUnit::IntegerCount, _) | (_, DurationUnit::IntegerCount) => InstantUnit::IntegerCount,
        (calendar, _) => calendar,
    }
}

/// The duration unit of `NumericDuration[a] - NumericDuration[b]`.
pub(crate) fn duration_common_unit(a: DurationUnit, b: DurationUnit) -> DurationUnit {
    match (a, b) {
        (DurationUnit::Unset, _) | (_, DurationUnit::Unset) => DurationUnit::Unset,
        (DurationUnit::Erased, _) | (_, DurationUnit::Erased) => DurationUnit::Erased,
        (DurationUnit::IntegerCount, _) | (_, DurationUnit::IntegerCount) => DurationUnit::IntegerCount,
        (a, b) if a == b => a,
        _ => DurationUnit::PlainDuration,
    }
}
