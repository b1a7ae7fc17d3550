//! Type-level resolution of temporal subtraction between a native date/time
//! library and a numeric array library's temporal scalars.
//!
//! The core is [`type_system::resolve_subtraction`]. Around it sit descriptor
//! parsing and construction ([`store`]), capability checks
//! ([`type_system::protocols`]), the recorded runtime behavior
//! ([`analysis::runtime`]) and a conformance checker over case tables
//! ([`validation`]).

pub mod analysis;
pub mod app;
pub mod config;
pub mod display;
pub mod store;
pub mod type_system;
pub mod validation;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use store::TemporalType;
pub use type_system::{resolve_subtraction, RejectReason, Rejection, Resolution};
