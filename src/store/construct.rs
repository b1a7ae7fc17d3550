//! Descriptor construction: the type decision made where a numeric temporal
//! value is built.
use super::types::{DateKind, DurationUnit, InstantUnit, TemporalType};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("cannot build a numeric instant from '{0}'")]
    NotAnInstant(TemporalType),
    #[error("cannot build a numeric duration from '{0}'")]
    NotADuration(TemporalType),
    #[error("unknown time unit code '{0}'")]
    UnknownUnitCode(String),
}

/// Unit codes accepted alongside a raw integer count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnitCode {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Millis,
    Micros,
    Nanos,
    Picos,
    Femtos,
    Attos,
    Generic,
}

impl FromStr for TimeUnitCode {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Y" => Ok(TimeUnitCode::Years),
            "M" => Ok(TimeUnitCode::Months),
            "W" => Ok(TimeUnitCode::Weeks),
            "D" => Ok(TimeUnitCode::Days),
            "h" => Ok(TimeUnitCode::Hours),
            "m" => Ok(TimeUnitCode::Minutes),
            "s" => Ok(TimeUnitCode::Seconds),
            "ms" => Ok(TimeUnitCode::Millis),
            "us" | "μs" => Ok(TimeUnitCode::Micros),
            "ns" => Ok(TimeUnitCode::Nanos),
            "ps" => Ok(TimeUnitCode::Picos),
            "fs" => Ok(TimeUnitCode::Femtos),
            "as" => Ok(TimeUnitCode::Attos),
            "generic" => Ok(TimeUnitCode::Generic),
            other => Err(ConstructionError::UnknownUnitCode(other.to_string())),
        }
    }
}

/// What a numeric temporal value is constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A native date, datetime or duration value.
    Native(TemporalType),
    /// A raw integer count with a unit code, e.g. `(100, "ns")`.
    Count { value: i64, unit: TimeUnitCode },
    /// The null sentinel.
    NotATime,
    /// A value whose static type is unknown, such as the result of an untyped call.
    Untyped,
    /// An already-constructed numeric value (identity conversion).
    Numeric(TemporalType),
}

impl Origin {
    /// Convenience for `Origin::Count` with a textual unit code.
    pub fn count(value: i64, unit: &str) -> Result<Self, ConstructionError> {
        Ok(Origin::Count { value, unit: unit.parse()? })
    }
}

/// Resolves the descriptor of a numeric instant built from `origin`.
pub fn numeric_instant(origin: Origin) -> Result<TemporalType, ConstructionError> {
    match origin {
        Origin::Native(TemporalType::Date(kind)) => Ok(TemporalType::NumericInstant(kind.instant_unit())),
        Origin::Count { .. } => Ok(TemporalType::NumericInstant(InstantUnit::IntegerCount)),
        Origin::NotATime => Ok(TemporalType::NumericInstant(InstantUnit::Unset)),
        Origin::Untyped => Ok(TemporalType::NumericInstant(InstantUnit::Erased)),
        Origin::Numeric(t @ TemporalType::NumericInstant(_)) => Ok(t),
        Origin::Native(other) | Origin::Numeric(other) => Err(ConstructionError::NotAnInstant(other)),
    }
}

/// Resolves the descriptor of a numeric duration built from `origin`.
pub fn numeric_duration(origin: Origin) -> Result<TemporalType, ConstructionError> {
    match origin {
        Origin::Native(TemporalType::Duration) => Ok(TemporalType::NumericDuration(DurationUnit::PlainDuration)),
        Origin::Count { .. } => Ok(TemporalType::NumericDuration(DurationUnit::IntegerCount)),
        Origin::NotATime => Ok(TemporalType::NumericDuration(DurationUnit::Unset)),
        Origin::Untyped => Ok(TemporalType::NumericDuration(DurationUnit::Erased)),
        Origin::Numeric(t @ TemporalType::NumericDuration(_)) => Ok(t),
        Origin::Native(other) | Origin::Numeric(other) => Err(ConstructionError::NotADuration(other)),
    }
}

impl From<DateKind> for Origin {
    fn from(kind: DateKind) -> Self {
        Origin::Native(TemporalType::Date(kind))
    }
}
