//! Core type system for run-time dimensional analysis.
//!
//! `dimq-core` provides a minimal units model where the unit is a *value*:
//!
//! - A unit is a [`UnitSignature`], a normalized mapping from dimension label
//!   to rational exponent.
//! - A value tagged with a unit is a [`Quantity<N>`], a magnitude paired with
//!   a signature.
//! - Dimensional safety is enforced at run time: operations that require
//!   matching units report a [`QuantityError`] when the signatures differ.
//!
//! Most users should depend on `dimq` (the facade crate), which adds the
//! predefined unit constants and formatting helpers, unless they only need
//! these primitives.
//!
//! # What this crate solves
//!
//! - Dimension bookkeeping for an *open* vocabulary: labels are arbitrary
//!   identifier strings, so callers may calculate in units this crate has
//!   never heard of.
//! - Exact rational exponents (`s^1/2` stays `1/2`, never `0.5000…1`).
//! - A magnitude abstraction ([`Numeric`]) so quantities work over `f64`,
//!   `f32`, or exact `Rational64` values.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimension checking (a signature is data, not a type).
//! - Unit conversion databases or parsing of unit strings from text.
//! - Non-linear unit transforms (temperature offsets, logarithmic units).
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::quantity;
//!
//! let distance: dimq_core::Quantity<f64> = quantity!(217_261.44, m: 1);
//! let kilometer = quantity!(1000.0, m: 1);
//! assert_eq!(distance.to_string(), "217261.44 m");
//! assert!((distance.to(&kilometer).unwrap() - 217.26144).abs() < 1e-9);
//! ```
//!
//! Mismatched dimensions are rejected:
//!
//! ```rust
//! use dimq_core::{quantity, QuantityError};
//!
//! let err = quantity!(1.0, m: 1).checked_add(&quantity!(1.0, s: 1)).unwrap_err();
//! assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`UnitSignature`] and
//!   [`Quantity<N>`]; signatures serialize as a label→exponent map and are
//!   re-normalized on deserialization.
//!
//! # Panics and errors
//!
//! The checked methods return [`QuantityResult`] and never panic. The
//! operator impls (`+`, `-`, `/`, …) delegate to them and panic with the
//! error's message on dimension mismatches and division by zero, because
//! `std::ops` signatures cannot return `Result`; each impl documents its
//! panic conditions.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod error;
mod macros;
mod quantity;
mod signature;
mod value;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{QuantityError, QuantityResult};
pub use quantity::Quantity;
pub use signature::{SignatureBuilder, UnitSignature};
pub use value::Numeric;

// Re-export for callers who want exact rational magnitudes without naming
// the dependency themselves.
pub use num_rational::Rational64;

/// A dimension exponent: an exact rational number.
///
/// Integer exponents display as `2`, fractional ones as `1/2`.
pub type Exponent = num_rational::Rational64;
