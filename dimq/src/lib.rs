//! Unit-aware quantities for dimensional calculations.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full
//! API from `dimq-core` plus a curated set of predefined unit constants
//! (SI base units, accepted and derived units, a few non-metric ones) and a
//! small display formatter.
//!
//! The core idea is: a value is a [`Quantity`], a magnitude paired with a
//! [`UnitSignature`] — a normalized mapping from dimension label to rational
//! exponent. Dimension labels are an open vocabulary, so the signature lives
//! at run time and arithmetic checks it on every operation that requires
//! matching units.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   seconds; the error carries both rendered signatures).
//! - Tracks dimensions through arbitrary products, quotients, and rational
//!   powers (`m s^-1`, `s^1/2`, …).
//! - Lets you calculate in units of your own invention: any identifier can
//!   name a dimension.
//!
//! # What this crate does not try to solve
//!
//! - Compile-time dimensional analysis (signatures are data, not types).
//! - A unit-conversion database, free-text unit parsing, or non-linear unit
//!   transforms such as temperature offsets.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::units::{hour, kilometer, mile};
//!
//! let v = 45.0 * mile() / hour();
//! let d = 3.0 * hour() * v;
//! assert_eq!(d.unit().to_string(), "m");
//! assert!((d.value() - 217_261.44).abs() < 1e-6);
//! assert!((d.to(&kilometer()).unwrap() - 217.26144).abs() < 1e-9);
//! ```
//!
//! Units of your own:
//!
//! ```rust
//! use dimq::quantity;
//!
//! let stock = quantity!(12.0, apples: 1);
//! let rate = quantity!(3.0, apples: 1, day: -1);
//! let days_left = stock / rate;
//! assert_eq!(days_left.to_string(), "4 day");
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support in `dimq-core` (signatures serialize as
//!   a label→exponent map).
//!
//! # Panics and errors
//!
//! Fallible operations have checked methods returning
//! [`QuantityResult`]; the operator impls delegate to them and panic on
//! dimension mismatches and division by zero, with the error message as the
//! panic payload. See the `dimq-core` documentation for the full contract.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use dimq_core::{
    quantity, signature, Exponent, Numeric, Quantity, QuantityError, QuantityResult, Rational64,
    SignatureBuilder, UnitSignature,
};

pub mod format;
pub mod units;

pub use units::constants;
pub use units::derived;
pub use units::imperial;
pub use units::si;
pub use units::time;
