//! Conformance checking of case tables against the resolver.
pub use self::error::{Finding, FindingKind, Severity};
pub use self::validator::{ConformanceChecker, ConformanceReport, RowOutcome, RowStatus};

mod error;
mod validator;
mod rules {
    pub mod expected;
    pub mod runtime;
}
