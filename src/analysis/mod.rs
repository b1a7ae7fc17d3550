//! Reference data about how the runtime behaves.
pub mod runtime;
