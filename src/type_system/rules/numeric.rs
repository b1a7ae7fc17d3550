//! Rules for subtractions whose left operand comes from the numeric library.
use super::units::{common_unit, duration_common_unit, shift_unit};
use crate::store::{DurationUnit, InstantUnit, TemporalType};
use crate::type_system::error::RejectReason;

/// Infers the result of `NumericInstant[unit] - rhs`.
pub(crate) fn infer_instant(unit: InstantUnit, rhs: TemporalType) -> Result<TemporalType, RejectReason> {
    match rhs {
        // Shifting by a native duration keeps the unit.
        TemporalType::Duration => Ok(TemporalType::NumericInstant(unit)),
        // Only the exact originating native type can be subtracted back out,
        // and it degrades to a native duration.
        TemporalType::Date(kind) if unit.date_kind() == Some(kind) => Ok(TemporalType::Duration),
        TemporalType::Date(_) => Err(RejectReason::MixedCategoryUnsupported),
        TemporalType::NumericInstant(other) => Ok(TemporalType::NumericDuration(common_unit(unit, other))),
        TemporalType::NumericDuration(d) => Ok(TemporalType::NumericInstant(shift_unit(unit, d))),
    }
}

/// Infers the result of `NumericDuration[unit] - rhs`.
pub(crate) fn infer_duration(unit: DurationUnit, rhs: TemporalType) -> Result<TemporalType, RejectReason> {
    match rhs {
        TemporalType::NumericDuration(other) => Ok(TemporalType::NumericDuration(duration_common_unit(unit, other))),
        TemporalType::Duration => Err(RejectReason::MixedCategoryUnsupported),
        TemporalType::Date(_) | TemporalType::NumericInstant(_) => Err(RejectReason::ReversedOperandOrderUnsupported),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DateKind;
    use rstest::rstest;

    #[test]
    fn test_native_duration_preserves_unit() {
        for u in InstantUnit::ALL {
            assert_eq!(infer_instant(u, TemporalType::Duration), Ok(TemporalType::NumericInstant(u)));
        }
    }

    #[rstest]
    #[case(InstantUnit::PlainDate, DateKind::PlainDate, Ok(TemporalType::Duration))]
    #[case(InstantUnit::PlainDateTime, DateKind::PlainDateTime, Ok(TemporalType::Duration))]
    #[case(InstantUnit::PlainDateTime, DateKind::PlainDate, Err(RejectReason::MixedCategoryUnsupported))]
    #[case(InstantUnit::PlainDate, DateKind::PlainDateTime, Err(RejectReason::MixedCategoryUnsupported))]
    #[case(InstantUnit::IntegerCount, DateKind::PlainDate, Err(RejectReason::MixedCategoryUnsupported))]
    #[case(InstantUnit::Unset, DateKind::PlainDateTime, Err(RejectReason::MixedCategoryUnsupported))]
    fn test_instant_minus_native_date(
        #[case] unit: InstantUnit,
        #[case] kind: DateKind,
        #[case] expected: Result<TemporalType, RejectReason>,
    ) {
        assert_eq!(infer_instant(unit, TemporalType::Date(kind)), expected);
    }

    #[test]
    fn test_numeric_pairs_never_reject() {
        for u in InstantUnit::ALL {
            for v in InstantUnit::ALL {
                assert!(infer_instant(u, TemporalType::NumericInstant(v)).is_ok());
            }
            for d in DurationUnit::ALL {
                assert!(infer_instant(u, TemporalType::NumericDuration(d)).is_ok());
            }
        }
    }

    #[rstest]
    #[case(DurationUnit::PlainDuration, TemporalType::NumericDuration(DurationUnit::IntegerCount), Ok(TemporalType::NumericDuration(DurationUnit::IntegerCount)))]
    #[case(DurationUnit::PlainDuration, TemporalType::Duration, Err(RejectReason::MixedCategoryUnsupported))]
    #[case(DurationUnit::Unset, TemporalType::NumericInstant(InstantUnit::Unset), Err(RejectReason::ReversedOperandOrderUnsupported))]
    #[case(DurationUnit::IntegerCount, TemporalType::PLAIN_DATE, Err(RejectReason::ReversedOperandOrderUnsupported))]
    fn test_duration_on_the_left(
        #[case] unit: DurationUnit,
        #[case] rhs: TemporalType,
        #[case] expected: Result<TemporalType, RejectReason>,
    ) {
        assert_eq!(infer_duration(unit, rhs), expected);
    }
}
