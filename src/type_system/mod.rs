//! The static resolution engine for temporal subtraction.
//!
//! This module provides [`resolve_subtraction`], which decides the result type a
//! checker assigns to `lhs - rhs` for every pairing of native and numeric
//! temporal descriptors, and the capability checks in [`protocols`] that build
//! on it.

// Publicly export the primary components for use by other modules.
pub use self::error::{RejectReason, Rejection};
pub use self::resolver::{resolve_subtraction, Resolution};

// --- MODULE DECLARATIONS ---
mod error;
pub mod protocols;
mod resolver;
mod rules {
    pub mod native;
    pub mod numeric;
    pub mod units;
}
