//! Descriptor types and the case tables that carry them.
pub mod cases;
pub mod construct;
pub mod parse;
pub mod types;

// Re-export key types for convenient access
pub use cases::{load_cases, read_cases, Case, CaseFormat, Expectation, LoadError};
pub use types::{DateKind, DurationUnit, InstantUnit, RuntimeClass, TemporalType};
