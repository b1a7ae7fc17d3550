//! The entry point that dispatches a subtraction to its rule set.
use super::error::Rejection;
use super::rules::{native, numeric};
use crate::store::TemporalType;

/// The outcome of resolving one subtraction.
pub type Resolution = Result<TemporalType, Rejection>;

/// Resolves the result type a checker assigns to `lhs - rhs`.
///
/// Pure, total and deterministic: every pair of descriptors yields either a
/// result descriptor or a [`Rejection`] carrying a reason tag.
pub fn resolve_subtraction(lhs: TemporalType, rhs: TemporalType) -> Resolution {
    let outcome = match lhs {
        TemporalType::Date(_) | TemporalType::Duration => native::infer(lhs, rhs),
        TemporalType::NumericInstant(unit) => numeric::infer_instant(unit, rhs),
        TemporalType::NumericDuration(unit) => numeric::infer_duration(unit, rhs),
    };

    match &outcome {
        Ok(result) => tracing::trace!(%lhs, %rhs, %result, "resolved subtraction"),
        Err(reason) => tracing::trace!(%lhs, %rhs, %reason, "rejected subtraction"),
    }

    outcome.map_err(|reason| Rejection::new(reason, lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DurationUnit, InstantUnit};
    use crate::type_system::error::RejectReason;
    use rstest::rstest;

    fn instant(u: InstantUnit) -> TemporalType {
        TemporalType::NumericInstant(u)
    }

    fn duration(u: DurationUnit) -> TemporalType {
        TemporalType::NumericDuration(u)
    }

    #[rstest]
    #[case(TemporalType::PLAIN_DATE, TemporalType::Duration, TemporalType::PLAIN_DATE)]
    #[case(TemporalType::PLAIN_DATE, TemporalType::PLAIN_DATE, TemporalType::Duration)]
    #[case(TemporalType::PLAIN_DATE_TIME, TemporalType::Duration, TemporalType::PLAIN_DATE_TIME)]
    #[case(TemporalType::PLAIN_DATE_TIME, TemporalType::PLAIN_DATE_TIME, TemporalType::Duration)]
    #[case(instant(InstantUnit::PlainDateTime), TemporalType::PLAIN_DATE_TIME, TemporalType::Duration)]
    #[case(instant(InstantUnit::PlainDate), TemporalType::PLAIN_DATE, TemporalType::Duration)]
    fn test_guaranteed_results(#[case] lhs: TemporalType, #[case] rhs: TemporalType, #[case] expected: TemporalType) {
        assert_eq!(resolve_subtraction(lhs, rhs), Ok(expected));
    }

    #[rstest]
    #[case(TemporalType::PLAIN_DATE, TemporalType::PLAIN_DATE_TIME, RejectReason::CrossKindNative)]
    #[case(TemporalType::PLAIN_DATE_TIME, TemporalType::PLAIN_DATE, RejectReason::CrossKindNative)]
    #[case(TemporalType::Duration, instant(InstantUnit::PlainDateTime), RejectReason::ReversedOperandOrderUnsupported)]
    #[case(instant(InstantUnit::PlainDateTime), TemporalType::PLAIN_DATE, RejectReason::MixedCategoryUnsupported)]
    #[case(TemporalType::PLAIN_DATE, duration(DurationUnit::PlainDuration), RejectReason::ReversedOperandOrderUnsupported)]
    fn test_rejections_carry_reason(#[case] lhs: TemporalType, #[case] rhs: TemporalType, #[case] reason: RejectReason) {
        assert_eq!(resolve_subtraction(lhs, rhs), Err(Rejection::new(reason, lhs, rhs)));
    }

    #[test]
    fn test_instant_minus_native_duration_preserves_unit() {
        for u in InstantUnit::ALL {
            assert_eq!(resolve_subtraction(instant(u), TemporalType::Duration), Ok(instant(u)));
        }
    }

    // Mirrors the reference scripts' static expectations row by row.
    #[rstest]
    #[case(InstantUnit::PlainDateTime, InstantUnit::PlainDateTime, DurationUnit::PlainDuration)]
    #[case(InstantUnit::PlainDateTime, InstantUnit::PlainDate, DurationUnit::PlainDuration)]
    #[case(InstantUnit::PlainDateTime, InstantUnit::IntegerCount, DurationUnit::IntegerCount)]
    #[case(InstantUnit::PlainDateTime, InstantUnit::Unset, DurationUnit::Unset)]
    #[case(InstantUnit::PlainDate, InstantUnit::PlainDate, DurationUnit::PlainDuration)]
    #[case(InstantUnit::IntegerCount, InstantUnit::PlainDateTime, DurationUnit::IntegerCount)]
    #[case(InstantUnit::IntegerCount, InstantUnit::Unset, DurationUnit::Unset)]
    #[case(InstantUnit::Unset, InstantUnit::IntegerCount, DurationUnit::Unset)]
    fn test_instant_minus_instant(#[case] u: InstantUnit, #[case] v: InstantUnit, #[case] expected: DurationUnit) {
        assert_eq!(resolve_subtraction(instant(u), instant(v)), Ok(duration(expected)));
    }

    #[rstest]
    #[case(InstantUnit::PlainDateTime, DurationUnit::PlainDuration, InstantUnit::PlainDateTime)]
    #[case(InstantUnit::PlainDateTime, DurationUnit::IntegerCount, InstantUnit::IntegerCount)]
    #[case(InstantUnit::PlainDateTime, DurationUnit::Unset, InstantUnit::Unset)]
    #[case(InstantUnit::PlainDate, DurationUnit::PlainDuration, InstantUnit::PlainDate)]
    #[case(InstantUnit::IntegerCount, DurationUnit::PlainDuration, InstantUnit::IntegerCount)]
    #[case(InstantUnit::Unset, DurationUnit::PlainDuration, InstantUnit::Unset)]
    fn test_instant_minus_duration(#[case] u: InstantUnit, #[case] d: DurationUnit, #[case] expected: InstantUnit) {
        assert_eq!(resolve_subtraction(instant(u), duration(d)), Ok(instant(expected)));
    }

    /// The outcome class each operand pairing must land in, stated without the rule tables.
    fn expected_family(lhs: TemporalType, rhs: TemporalType, resolved: &Resolution) -> bool {
        use RejectReason::*;
        use TemporalType::*;

        let reason = resolved.as_ref().err().map(|r| r.reason);
        match (lhs, rhs) {
            (Date(_), Duration) => resolved == &Ok(lhs),
            (Date(a), Date(b)) if a == b => resolved == &Ok(Duration),
            (Date(_), Date(_)) => reason == Some(CrossKindNative),
            (Duration, Duration) => resolved == &Ok(Duration),
            (Duration, Date(_)) => reason == Some(ReversedOperandOrderUnsupported),
            (Date(_) | Duration, NumericInstant(_) | NumericDuration(_)) => {
                reason == Some(ReversedOperandOrderUnsupported)
            }
            (NumericInstant(_), Duration) => resolved == &Ok(lhs),
            (NumericInstant(u), Date(k)) if u.date_kind() == Some(k) => resolved == &Ok(Duration),
            (NumericInstant(_), Date(_)) => reason == Some(MixedCategoryUnsupported),
            (NumericInstant(_), NumericInstant(_)) => matches!(resolved, Ok(NumericDuration(_))),
            (NumericInstant(_), NumericDuration(_)) => matches!(resolved, Ok(NumericInstant(_))),
            (NumericDuration(_), NumericDuration(_)) => matches!(resolved, Ok(NumericDuration(_))),
            (NumericDuration(_), Duration) => reason == Some(MixedCategoryUnsupported),
            (NumericDuration(_), Date(_) | NumericInstant(_)) => reason == Some(ReversedOperandOrderUnsupported),
        }
    }

    #[test]
    fn test_every_pair_lands_in_its_rule_family() {
        let domain = TemporalType::all();
        for &lhs in &domain {
            for &rhs in &domain {
                let resolved = resolve_subtraction(lhs, rhs);
                assert!(expected_family(lhs, rhs, &resolved), "{} - {} gave {:?}", lhs, rhs, resolved);
                if let Err(rejection) = &resolved {
                    assert_eq!((rejection.lhs, rejection.rhs), (lhs, rhs));
                }
            }
        }
    }

    #[test]
    fn test_results_stay_in_the_numeric_category_unless_a_native_operand_is_subtracted() {
        let domain = TemporalType::all();
        for &lhs in domain.iter().filter(|t| !t.is_native()) {
            for &rhs in domain.iter().filter(|t| !t.is_native()) {
                if let Ok(result) = resolve_subtraction(lhs, rhs) {
                    assert!(!result.is_native(), "{} - {} gave {}", lhs, rhs, result);
                }
            }
        }
    }

    #[rstest]
    #[case("np.timedelta64")]
    #[case("np.timedelta64[Any]")]
    #[case("np.timedelta64[dt.timedelta | int | None]")]
    fn test_erased_duration_widens_the_instant(#[case] rhs: &str) {
        let lhs: TemporalType = "np.datetime64[dt.datetime]".parse().unwrap();
        let rhs: TemporalType = rhs.parse().unwrap();
        let resolved = resolve_subtraction(lhs, rhs);
        assert_eq!(resolved, Ok(instant(InstantUnit::Erased)));
        assert_ne!(resolved, Ok(lhs));
    }

    #[test]
    fn test_not_a_time_survives_an_erased_duration() {
        assert_eq!(
            resolve_subtraction(instant(InstantUnit::Unset), duration(DurationUnit::Erased)),
            Ok(instant(InstantUnit::Unset))
        );
    }

    #[test]
    fn test_rejection_message_names_reason() {
        let err = resolve_subtraction(TemporalType::PLAIN_DATE, TemporalType::PLAIN_DATE_TIME).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rejected(cross_kind_native): 'PlainDate' - 'PlainDateTime' has no result type"
        );
    }
}
