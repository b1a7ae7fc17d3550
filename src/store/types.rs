use serde::{Deserialize, Serialize};
use std::fmt;

/// A native calendar point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DateKind {
    PlainDate,
    PlainDateTime,
}

/// Unit tag carried by a `NumericInstant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstantUnit {
    PlainDate,
    PlainDateTime,
    IntegerCount,
    /// The "not-a-time" sentinel. Absorbing in every unit combination.
    Unset,
    /// No single tag: an untyped origin or a union of several tags.
    Erased,
}

/// Unit tag carried by a `NumericDuration`: the instant tags plus `PlainDuration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DurationUnit {
    PlainDate,
    PlainDateTime,
    PlainDuration,
    IntegerCount,
    Unset,
    /// No single tag, as in a bare `NumericDuration` annotation.
    Erased,
}

/// A type-level descriptor of a temporal operand or result.
///
/// Descriptors are plain values: the unit tag is fixed at construction and
/// never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TemporalType {
    /// `PlainDate` / `PlainDateTime`.
    Date(DateKind),
    /// `PlainDuration`.
    Duration,
    NumericInstant(InstantUnit),
    NumericDuration(DurationUnit),
}

/// The erased class of a value at runtime, with no unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeClass {
    Date,
    DateTime,
    Duration,
    NumericInstant,
    NumericDuration,
}

impl DateKind {
    pub const ALL: [DateKind; 2] = [DateKind::PlainDate, DateKind::PlainDateTime];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateKind::PlainDate => "PlainDate",
            DateKind::PlainDateTime => "PlainDateTime",
        }
    }

    /// The numeric instant unit a value of this kind propagates.
    pub fn instant_unit(&self) -> InstantUnit {
        match self {
            DateKind::PlainDate => InstantUnit::PlainDate,
            DateKind::PlainDateTime => InstantUnit::PlainDateTime,
        }
    }
}

impl InstantUnit {
    pub const ALL: [InstantUnit; 5] = [
        InstantUnit::PlainDate,
        InstantUnit::PlainDateTime,
        InstantUnit::IntegerCount,
        InstantUnit::Unset,
        InstantUnit::Erased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstantUnit::PlainDate => "PlainDate",
            InstantUnit::PlainDateTime => "PlainDateTime",
            InstantUnit::IntegerCount => "IntegerCount",
            InstantUnit::Unset => "Unset",
            InstantUnit::Erased => "Erased",
        }
    }

    /// Returns the native date kind this unit originated from, if any.
    pub fn date_kind(&self) -> Option<DateKind> {
        match self {
            InstantUnit::PlainDate => Some(DateKind::PlainDate),
            InstantUnit::PlainDateTime => Some(DateKind::PlainDateTime),
            InstantUnit::IntegerCount | InstantUnit::Unset | InstantUnit::Erased => None,
        }
    }
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 6] = [
        DurationUnit::PlainDate,
        DurationUnit::PlainDateTime,
        DurationUnit::PlainDuration,
        DurationUnit::IntegerCount,
        DurationUnit::Unset,
        DurationUnit::Erased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::PlainDate => "PlainDate",
            DurationUnit::PlainDateTime => "PlainDateTime",
            DurationUnit::PlainDuration => "PlainDuration",
            DurationUnit::IntegerCount => "IntegerCount",
            DurationUnit::Unset => "Unset",
            DurationUnit::Erased => "Erased",
        }
    }
}

impl From<InstantUnit> for DurationUnit {
    fn from(unit: InstantUnit) -> Self {
        match unit {
            InstantUnit::PlainDate => DurationUnit::PlainDate,
            InstantUnit::PlainDateTime => DurationUnit::PlainDateTime,
            InstantUnit::IntegerCount => DurationUnit::IntegerCount,
            InstantUnit::Unset => DurationUnit::Unset,
            InstantUnit::Erased => DurationUnit::Erased,
        }
    }
}

impl TemporalType {
    pub const PLAIN_DATE: TemporalType = TemporalType::Date(DateKind::PlainDate);
    pub const PLAIN_DATE_TIME: TemporalType = TemporalType::Date(DateKind::PlainDateTime);

    /// Every descriptor in the resolver's domain, in a stable order.
    pub fn all() -> Vec<TemporalType> {
        let mut all: Vec<TemporalType> = DateKind::ALL.iter().map(|k| TemporalType::Date(*k)).collect();
        all.push(TemporalType::Duration);
        all.extend(InstantUnit::ALL.iter().map(|u| TemporalType::NumericInstant(*u)));
        all.extend(DurationUnit::ALL.iter().map(|u| TemporalType::NumericDuration(*u)));
        all
    }

    pub fn is_native(&self) -> bool {
        matches!(self, TemporalType::Date(_) | TemporalType::Duration)
    }

    pub fn is_duration_like(&self) -> bool {
        matches!(self, TemporalType::Duration | TemporalType::NumericDuration(_))
    }

    /// The class a value of this type has at runtime once its unit tag is erased.
    pub fn runtime_class(&self) -> RuntimeClass {
        match self {
            TemporalType::Date(DateKind::PlainDate) => RuntimeClass::Date,
            TemporalType::Date(DateKind::PlainDateTime) => RuntimeClass::DateTime,
            TemporalType::Duration => RuntimeClass::Duration,
            TemporalType::NumericInstant(_) => RuntimeClass::NumericInstant,
            TemporalType::NumericDuration(_) => RuntimeClass::NumericDuration,
        }
    }
}

impl fmt::Display for TemporalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalType::Date(kind) => f.write_str(kind.as_str()),
            TemporalType::Duration => f.write_str("PlainDuration"),
            TemporalType::NumericInstant(u) => write!(f, "NumericInstant[{}]", u.as_str()),
            TemporalType::NumericDuration(u) => write!(f, "NumericDuration[{}]", u.as_str()),
        }
    }
}

impl fmt::Display for RuntimeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuntimeClass::Date => "date",
            RuntimeClass::DateTime => "datetime",
            RuntimeClass::Duration => "timedelta",
            RuntimeClass::NumericInstant => "datetime64",
            RuntimeClass::NumericDuration => "timedelta64",
        };
        f.write_str(name)
    }
}

impl From<TemporalType> for String {
    fn from(t: TemporalType) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for TemporalType {
    type Error = super::parse::ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
