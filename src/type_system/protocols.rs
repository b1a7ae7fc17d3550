//! Capability conformance for timestamp-like subjects.
//!
//! A subject "is a timestamp" when it supports two overloads of subtraction:
//!
//! ```text
//! SubtractSelfYieldingDuration<D>:  Self - Self -> D
//! SubtractDurationYieldingSelf<D>:  Self - D    -> Self
//! ```
//!
//! Each overload is checked as its own named capability against the resolver.
//! The combined protocol declares both overloads on one declaration and binds
//! `D` only once, from the subject's first duration-accepting overload, with no
//! backtracking. That is why a numeric instant satisfies both single protocols
//! but not the bare combined one: its first duration overload accepts the
//! native duration, while its self-subtraction yields a numeric duration.
use super::resolver::resolve_subtraction;
use crate::store::{parse::ParseError, DurationUnit, TemporalType};
use serde::Serialize;
use smallvec::{smallvec, SmallVec};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Capability {
    SubtractSelfYieldingDuration,
    SubtractDurationYieldingSelf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Protocol {
    Single(Capability),
    /// Both overloads on one declaration, `Self` overload first.
    Combined,
}

/// The duration parameter `D` of a protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DurationParam {
    /// Left for the checker to bind.
    Inferred,
    /// Bound to exactly this duration-like descriptor.
    Exact(TemporalType),
    /// The numeric duration with no unit argument: every unit at once.
    NumericErased,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("'{0}' is not a timedelta and cannot parameterize a timestamp protocol")]
    InvalidParameter(TemporalType),
    #[error("'{0}' is a duration, not a timestamp-like subject")]
    InvalidSubject(TemporalType),
    #[error("'{subject}' does not satisfy {capability} with D = {binding}")]
    Unsatisfied {
        subject: TemporalType,
        capability: Capability,
        binding: DurationParam,
    },
    #[error("unknown protocol '{0}'")]
    UnknownProtocol(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// One row of a conformance matrix.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolCheck {
    pub protocol: Protocol,
    pub param: DurationParam,
    pub satisfied: bool,
    /// The binding of `D` when satisfied, the failure otherwise.
    pub detail: String,
}

/// `t - t` is well-typed and yields `t` again.
pub fn is_timedelta(t: TemporalType) -> bool {
    resolve_subtraction(t, t) == Ok(t)
}

/// Candidate bindings for an inferred `D`, in the order a checker tries them.
fn candidates() -> SmallVec<[TemporalType; 7]> {
    smallvec![
        TemporalType::Duration,
        TemporalType::NumericDuration(DurationUnit::PlainDuration),
        TemporalType::NumericDuration(DurationUnit::IntegerCount),
        TemporalType::NumericDuration(DurationUnit::Unset),
        TemporalType::NumericDuration(DurationUnit::PlainDate),
        TemporalType::NumericDuration(DurationUnit::PlainDateTime),
        TemporalType::NumericDuration(DurationUnit::Erased),
    ]
}

fn holds(subject: TemporalType, capability: Capability, binding: DurationParam) -> bool {
    match (capability, binding) {
        (_, DurationParam::Inferred) => false,
        (Capability::SubtractDurationYieldingSelf, DurationParam::Exact(d)) => {
            resolve_subtraction(subject, d) == Ok(subject)
        }
        (Capability::SubtractDurationYieldingSelf, DurationParam::NumericErased) => DurationUnit::ALL
            .iter()
            .all(|u| resolve_subtraction(subject, TemporalType::NumericDuration(*u)) == Ok(subject)),
        (Capability::SubtractSelfYieldingDuration, DurationParam::Exact(d)) => {
            resolve_subtraction(subject, subject) == Ok(d)
        }
        // An erased parameter never equals a concrete result.
        (Capability::SubtractSelfYieldingDuration, DurationParam::NumericErased) => false,
    }
}

fn require(subject: TemporalType, capability: Capability, binding: DurationParam) -> Result<(), ProtocolError> {
    if holds(subject, capability, binding) {
        Ok(())
    } else {
        Err(ProtocolError::Unsatisfied { subject, capability, binding })
    }
}

/// Binds an inferred `D` for a single capability.
fn infer_single(subject: TemporalType, capability: Capability) -> Option<TemporalType> {
    match capability {
        Capability::SubtractDurationYieldingSelf => candidates()
            .into_iter()
            .find(|d| holds(subject, capability, DurationParam::Exact(*d))),
        Capability::SubtractSelfYieldingDuration => resolve_subtraction(subject, subject)
            .ok()
            .filter(|d| is_timedelta(*d)),
    }
}

/// Checks whether `subject` conforms to `protocol` parameterized by `param`.
///
/// Returns the binding of `D` under which the subject conforms.
pub fn check(subject: TemporalType, protocol: Protocol, param: DurationParam) -> Result<DurationParam, ProtocolError> {
    if subject.is_duration_like() {
        return Err(ProtocolError::InvalidSubject(subject));
    }
    if let DurationParam::Exact(d) = param {
        if !is_timedelta(d) {
            return Err(ProtocolError::InvalidParameter(d));
        }
    }

    let outcome = match (protocol, param) {
        (Protocol::Single(capability), DurationParam::Inferred) => match infer_single(subject, capability) {
            Some(d) => Ok(DurationParam::Exact(d)),
            None => Err(ProtocolError::Unsatisfied { subject, capability, binding: param }),
        },
        (Protocol::Single(capability), bound) => require(subject, capability, bound).map(|_| bound),
        (Protocol::Combined, DurationParam::Inferred) => {
            // Bound once from the duration overload, then held fixed.
            let bound = infer_single(subject, Capability::SubtractDurationYieldingSelf)
                .map(DurationParam::Exact)
                .unwrap_or(DurationParam::Inferred);
            check_combined(subject, bound)
        }
        (Protocol::Combined, bound) => check_combined(subject, bound),
    };

    tracing::debug!(%subject, %protocol, %param, ok = outcome.is_ok(), "protocol check");
    outcome
}

fn check_combined(subject: TemporalType, bound: DurationParam) -> Result<DurationParam, ProtocolError> {
    require(subject, Capability::SubtractSelfYieldingDuration, bound)?;
    require(subject, Capability::SubtractDurationYieldingSelf, bound)?;
    Ok(bound)
}

/// Convenience wrapper over [`check`].
pub fn satisfies(subject: TemporalType, protocol: Protocol, param: DurationParam) -> bool {
    check(subject, protocol, param).is_ok()
}

/// The binding a generic function `f<D>(x: Timestamp<D>)` infers for `subject`.
///
/// Unlike the declaration-time binding of [`Protocol::Combined`], this search
/// tries every candidate and keeps the first that satisfies both overloads.
pub fn infer_timestamp_parameter(subject: TemporalType) -> Option<TemporalType> {
    if subject.is_duration_like() {
        return None;
    }
    candidates()
        .into_iter()
        .find(|d| check_combined(subject, DurationParam::Exact(*d)).is_ok())
}

/// Checks `subject` against every protocol under the usual parameterizations.
pub fn matrix(subject: TemporalType) -> Vec<ProtocolCheck> {
    let protocols = [
        Protocol::Single(Capability::SubtractDurationYieldingSelf),
        Protocol::Single(Capability::SubtractSelfYieldingDuration),
        Protocol::Combined,
    ];
    let params = [
        DurationParam::Inferred,
        DurationParam::Exact(TemporalType::Duration),
        DurationParam::NumericErased,
        DurationParam::Exact(TemporalType::NumericDuration(DurationUnit::PlainDuration)),
    ];

    let mut rows = Vec::with_capacity(protocols.len() * params.len());
    for protocol in protocols {
        for param in params {
            let (satisfied, detail) = match check(subject, protocol, param) {
                Ok(binding) => (true, format!("D = {}", binding)),
                Err(e) => (false, e.to_string()),
            };
            rows.push(ProtocolCheck { protocol, param, satisfied, detail });
        }
    }
    rows
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::SubtractSelfYieldingDuration => f.write_str("SubtractSelfYieldingDuration"),
            Capability::SubtractDurationYieldingSelf => f.write_str("SubtractDurationYieldingSelf"),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Single(c) => write!(f, "{}", c),
            Protocol::Combined => f.write_str("Timestamp"),
        }
    }
}

impl fmt::Display for DurationParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationParam::Inferred => f.write_str("<inferred>"),
            DurationParam::Exact(t) => write!(f, "{}", t),
            DurationParam::NumericErased => f.write_str("NumericDuration"),
        }
    }
}

impl FromStr for Protocol {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "SubtractDurationYieldingSelf" | "SupportsSubTD" => {
                Ok(Protocol::Single(Capability::SubtractDurationYieldingSelf))
            }
            "SubtractSelfYieldingDuration" | "SupportsSubSelf" => {
                Ok(Protocol::Single(Capability::SubtractSelfYieldingDuration))
            }
            "Timestamp" | "Combined" => Ok(Protocol::Combined),
            other => Err(ProtocolError::UnknownProtocol(other.to_string())),
        }
    }
}

impl DurationParam {
    /// Parses an optional parameter; absent or empty means inferred.
    pub fn parse(s: Option<&str>) -> Result<Self, ProtocolError> {
        match s.map(str::trim) {
            None | Some("") => Ok(DurationParam::Inferred),
            Some("NumericDuration" | "np.timedelta64") => Ok(DurationParam::NumericErased),
            Some(other) => Ok(DurationParam::Exact(other.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InstantUnit;
    use rstest::rstest;

    const SUB_TD: Protocol = Protocol::Single(Capability::SubtractDurationYieldingSelf);
    const SUB_SELF: Protocol = Protocol::Single(Capability::SubtractSelfYieldingDuration);

    fn np_dt() -> TemporalType {
        TemporalType::NumericInstant(InstantUnit::PlainDateTime)
    }

    fn np_td(u: DurationUnit) -> DurationParam {
        DurationParam::Exact(TemporalType::NumericDuration(u))
    }

    #[rstest]
    #[case(SUB_TD, DurationParam::Inferred, true)]
    #[case(SUB_SELF, DurationParam::Inferred, true)]
    #[case(SUB_TD, DurationParam::NumericErased, false)]
    #[case(SUB_SELF, DurationParam::NumericErased, false)]
    #[case(Protocol::Combined, DurationParam::Inferred, false)]
    #[case(Protocol::Combined, DurationParam::Exact(TemporalType::Duration), false)]
    #[case(Protocol::Combined, DurationParam::NumericErased, false)]
    #[case(Protocol::Combined, np_td(DurationUnit::PlainDuration), true)]
    fn test_numeric_instant_conformance(#[case] protocol: Protocol, #[case] param: DurationParam, #[case] expected: bool) {
        assert_eq!(satisfies(np_dt(), protocol, param), expected, "{} {}", protocol, param);
    }

    #[rstest]
    #[case(SUB_TD, DurationParam::Inferred)]
    #[case(SUB_SELF, DurationParam::Inferred)]
    #[case(Protocol::Combined, DurationParam::Inferred)]
    #[case(Protocol::Combined, DurationParam::Exact(TemporalType::Duration))]
    fn test_native_datetime_conforms(#[case] protocol: Protocol, #[case] param: DurationParam) {
        assert_eq!(
            check(TemporalType::PLAIN_DATE_TIME, protocol, param),
            Ok(DurationParam::Exact(TemporalType::Duration))
        );
    }

    #[test]
    fn test_singles_do_not_imply_combined() {
        let subject = np_dt();
        assert!(satisfies(subject, SUB_TD, DurationParam::Inferred));
        assert!(satisfies(subject, SUB_SELF, DurationParam::Inferred));
        let err = check(subject, Protocol::Combined, DurationParam::Inferred).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::Unsatisfied {
                subject,
                capability: Capability::SubtractSelfYieldingDuration,
                binding: DurationParam::Exact(TemporalType::Duration),
            }
        );
    }

    #[rstest]
    #[case(InstantUnit::PlainDateTime, Some(TemporalType::NumericDuration(DurationUnit::PlainDuration)))]
    #[case(InstantUnit::PlainDate, Some(TemporalType::NumericDuration(DurationUnit::PlainDuration)))]
    #[case(InstantUnit::IntegerCount, Some(TemporalType::NumericDuration(DurationUnit::IntegerCount)))]
    #[case(InstantUnit::Unset, Some(TemporalType::NumericDuration(DurationUnit::Unset)))]
    #[case(InstantUnit::Erased, Some(TemporalType::NumericDuration(DurationUnit::Erased)))]
    fn test_generic_inference(#[case] unit: InstantUnit, #[case] expected: Option<TemporalType>) {
        assert_eq!(infer_timestamp_parameter(TemporalType::NumericInstant(unit)), expected);
    }

    #[test]
    fn test_generic_inference_for_natives_and_durations() {
        assert_eq!(infer_timestamp_parameter(TemporalType::PLAIN_DATE), Some(TemporalType::Duration));
        assert_eq!(infer_timestamp_parameter(TemporalType::Duration), None);
    }

    #[test]
    fn test_timedelta_protocol() {
        assert!(is_timedelta(TemporalType::Duration));
        for u in DurationUnit::ALL {
            assert!(is_timedelta(TemporalType::NumericDuration(u)));
        }
        assert!(!is_timedelta(TemporalType::PLAIN_DATE));
        assert!(!is_timedelta(np_dt()));
    }

    #[test]
    fn test_invalid_parameter_and_subject() {
        assert_eq!(
            check(np_dt(), SUB_TD, DurationParam::Exact(TemporalType::PLAIN_DATE)),
            Err(ProtocolError::InvalidParameter(TemporalType::PLAIN_DATE))
        );
        assert_eq!(
            check(TemporalType::Duration, SUB_TD, DurationParam::Inferred),
            Err(ProtocolError::InvalidSubject(TemporalType::Duration))
        );
    }

    #[test]
    fn test_not_a_time_accepts_erased_duration() {
        let nat = TemporalType::NumericInstant(InstantUnit::Unset);
        assert!(satisfies(nat, SUB_TD, DurationParam::NumericErased));
    }

    #[test]
    fn test_matrix_shape() {
        let rows = matrix(np_dt());
        assert_eq!(rows.len(), 12);
        let satisfied: Vec<_> = rows.iter().filter(|r| r.satisfied).map(|r| (r.protocol, r.param)).collect();
        assert!(satisfied.contains(&(Protocol::Combined, np_td(DurationUnit::PlainDuration))));
        assert!(!satisfied.contains(&(Protocol::Combined, DurationParam::Inferred)));
    }

    #[rstest]
    #[case("SupportsSubTD", SUB_TD)]
    #[case("SubtractSelfYieldingDuration", SUB_SELF)]
    #[case("Timestamp", Protocol::Combined)]
    fn test_protocol_names(#[case] name: &str, #[case] expected: Protocol) {
        assert_eq!(name.parse::<Protocol>().unwrap(), expected);
    }

    #[test]
    fn test_param_parsing() {
        assert_eq!(DurationParam::parse(None).unwrap(), DurationParam::Inferred);
        assert_eq!(DurationParam::parse(Some("np.timedelta64")).unwrap(), DurationParam::NumericErased);
        assert_eq!(
            DurationParam::parse(Some("np.timedelta64[dt.timedelta]")).unwrap(),
            np_td(DurationUnit::PlainDuration)
        );
    }
}
