//! Textual descriptor forms.
//!
//! Besides the canonical spelling (`NumericInstant[PlainDate]`) the parser
//! accepts the spelling used by the reference type-checking scripts
//! (`np.datetime64[dt.date]`, `np.timedelta64[int]`, `dt.timedelta`, ...), so
//! case tables can be written in either vocabulary.
use super::types::{DateKind, DurationUnit, InstantUnit, TemporalType};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown temporal kind '{0}'")]
    UnknownKind(String),
    #[error("unknown unit tag '{0}'")]
    UnknownUnit(String),
    #[error("'{kind}' requires a unit tag")]
    MissingUnit { kind: String },
    #[error("'{kind}' does not take a unit tag (got '{unit}')")]
    UnexpectedUnit { kind: String, unit: String },
    #[error("unit tag '{unit}' is not valid for a numeric instant")]
    InvalidInstantUnit { unit: String },
    #[error("malformed descriptor '{0}'")]
    Malformed(String),
    #[error("unknown rejection reason '{0}'")]
    UnknownReason(String),
}

/// The kind column of a descriptor, before its unit tag is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KindName {
    Date(DateKind),
    Duration,
    NumericInstant,
    NumericDuration,
}

fn parse_kind(s: &str) -> Result<KindName, ParseError> {
    match s {
        "PlainDate" | "dt.date" | "date" => Ok(KindName::Date(DateKind::PlainDate)),
        "PlainDateTime" | "dt.datetime" | "datetime" => Ok(KindName::Date(DateKind::PlainDateTime)),
        "PlainDuration" | "dt.timedelta" | "timedelta" => Ok(KindName::Duration),
        "NumericInstant" | "np.datetime64" | "datetime64" => Ok(KindName::NumericInstant),
        "NumericDuration" | "np.timedelta64" | "timedelta64" => Ok(KindName::NumericDuration),
        other => Err(ParseError::UnknownKind(other.to_string())),
    }
}

/// Parses any unit tag spelling into the widest tag set.
///
/// A union such as `dt.timedelta | int | None` collapses to its single member
/// when all members agree and to `Erased` otherwise.
pub fn parse_unit(s: &str) -> Result<DurationUnit, ParseError> {
    let s = strip(s);
    if !s.contains('|') {
        return parse_single_unit(s);
    }
    let members = s.split('|').map(parse_single_unit).collect::<Result<Vec<_>, _>>()?;
    match members.as_slice() {
        [first, rest @ ..] if rest.iter().all(|u| u == first) => Ok(*first),
        _ => Ok(DurationUnit::Erased),
    }
}

fn parse_single_unit(s: &str) -> Result<DurationUnit, ParseError> {
    match strip(s) {
        "PlainDate" | "dt.date" => Ok(DurationUnit::PlainDate),
        "PlainDateTime" | "dt.datetime" => Ok(DurationUnit::PlainDateTime),
        "PlainDuration" | "dt.timedelta" => Ok(DurationUnit::PlainDuration),
        "IntegerCount" | "int" => Ok(DurationUnit::IntegerCount),
        "Unset" | "None" => Ok(DurationUnit::Unset),
        "Erased" | "Any" => Ok(DurationUnit::Erased),
        other => Err(ParseError::UnknownUnit(other.to_string())),
    }
}

impl TryFrom<DurationUnit> for InstantUnit {
    type Error = ParseError;

    fn try_from(unit: DurationUnit) -> Result<Self, Self::Error> {
        match unit {
            DurationUnit::PlainDate => Ok(InstantUnit::PlainDate),
            DurationUnit::PlainDateTime => Ok(InstantUnit::PlainDateTime),
            DurationUnit::IntegerCount => Ok(InstantUnit::IntegerCount),
            DurationUnit::Unset => Ok(InstantUnit::Unset),
            DurationUnit::Erased => Ok(InstantUnit::Erased),
            DurationUnit::PlainDuration => Err(ParseError::InvalidInstantUnit {
                unit: unit.as_str().to_string(),
            }),
        }
    }
}

fn strip(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

impl TemporalType {
    /// Builds a descriptor from a kind column and an optional unit column.
    ///
    /// An empty unit column lets the kind column carry a full descriptor such
    /// as `NumericInstant[Unset]`.
    pub fn from_parts(kind: &str, unit: Option<&str>) -> Result<Self, ParseError> {
        let unit = unit.map(strip).filter(|u| !u.is_empty());
        let kind = strip(kind);

        let Some(unit) = unit else {
            return kind.parse();
        };

        match parse_kind(kind)? {
            KindName::NumericInstant => {
                let tag = InstantUnit::try_from(parse_unit(unit)?)?;
                Ok(TemporalType::NumericInstant(tag))
            }
            KindName::NumericDuration => Ok(TemporalType::NumericDuration(parse_unit(unit)?)),
            KindName::Date(_) | KindName::Duration => Err(ParseError::UnexpectedUnit {
                kind: kind.to_string(),
                unit: unit.to_string(),
            }),
        }
    }
}

impl FromStr for TemporalType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = strip(s);
        let (kind, unit) = match s.find('[') {
            Some(open) => {
                let inner = s[open + 1..]
                    .strip_suffix(']')
                    .ok_or_else(|| ParseError::Malformed(s.to_string()))?;
                (s[..open].trim(), Some(inner))
            }
            None => (s, None),
        };

        match (parse_kind(kind)?, unit) {
            (KindName::Date(k), None) => Ok(TemporalType::Date(k)),
            (KindName::Duration, None) => Ok(TemporalType::Duration),
            // A bare numeric duration annotation leaves its unit parameter erased.
            (KindName::NumericDuration, None) => Ok(TemporalType::NumericDuration(DurationUnit::Erased)),
            (KindName::NumericInstant, None) => Err(ParseError::MissingUnit { kind: kind.to_string() }),
            (KindName::Date(_) | KindName::Duration, Some(u)) => Err(ParseError::UnexpectedUnit {
                kind: kind.to_string(),
                unit: u.to_string(),
            }),
            (KindName::NumericInstant, Some(u)) => {
                Ok(TemporalType::NumericInstant(InstantUnit::try_from(parse_unit(u)?)?))
            }
            (KindName::NumericDuration, Some(u)) => Ok(TemporalType::NumericDuration(parse_unit(u)?)),
        }
    }
}
