//! Defines the rejection classification produced by the resolver.
use crate::store::{parse::ParseError, TemporalType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a subtraction has no result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// `PlainDate - PlainDateTime` or the reverse.
    CrossKindNative,
    /// A duration or native operand on the left of an operand it cannot absorb.
    ReversedOperandOrderUnsupported,
    /// A numeric operand paired with a native operand of a different category.
    MixedCategoryUnsupported,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::CrossKindNative => "cross_kind_native",
            RejectReason::ReversedOperandOrderUnsupported => "reversed_operand_order_unsupported",
            RejectReason::MixedCategoryUnsupported => "mixed_category_unsupported",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RejectReason {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cross_kind_native" => Ok(RejectReason::CrossKindNative),
            "reversed_operand_order_unsupported" => Ok(RejectReason::ReversedOperandOrderUnsupported),
            "mixed_category_unsupported" => Ok(RejectReason::MixedCategoryUnsupported),
            other => Err(ParseError::UnknownReason(other.to_string())),
        }
    }
}

/// A terminal classification: the type system refuses to assign a result type.
///
/// This is a value, not a failure of the resolver. It implements `Error` only
/// so callers that do want to abort can propagate it with `?`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("Rejected({reason}): '{lhs}' - '{rhs}' has no result type")]
pub struct Rejection {
    pub reason: RejectReason,
    pub lhs: TemporalType,
    pub rhs: TemporalType,
}

impl Rejection {
    pub(crate) fn new(reason: RejectReason, lhs: TemporalType, rhs: TemporalType) -> Self {
        Self { reason, lhs, rhs }
    }
}
