//! Derived and accepted units, expressed in terms of the base units.
//!
//! Everything here is plain arithmetic over the [`si`](super::si) constants,
//! so the signatures come out of the core's unit bookkeeping rather than
//! being written down by hand: `newton()` really is
//! `kilogram() * meter() / (second() * second())`.
//!
//! ```rust
//! use dimq::units::{joule, newton};
//!
//! assert_eq!(newton().unit().to_string(), "kg m s^-2");
//! assert_eq!(joule().unit().to_string(), "kg m^2 s^-2");
//! ```

use super::metric_family;
use super::si::{ampere, kelvin, kilogram, meter, nanometer, second};
use crate::Quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Units officially accepted for use with the SI
// ─────────────────────────────────────────────────────────────────────────────

/// Hectare: the area of a 100 m square, `1e4 {m^2}`.
pub fn hectare() -> Quantity {
    let side = 100.0 * meter();
    side.clone() * side
}

/// Liter: the volume of a 0.1 m cube, `1e-3 {m^3}`.
pub fn liter() -> Quantity {
    let edge = 0.1 * meter();
    edge.clone() * edge.clone() * edge
}

metric_family!(liter => {
    deciliter: 1e-1,
    centiliter: 1e-2,
    milliliter: 1e-3,
    microliter: 1e-6,
});

/// Tonne: `1000 {kg}`.
pub fn tonne() -> Quantity {
    1000.0 * kilogram()
}

// ─────────────────────────────────────────────────────────────────────────────
// Named derived units
// ─────────────────────────────────────────────────────────────────────────────

/// Hertz: `1 {s^-1}`.
pub fn hertz() -> Quantity {
    1.0 / second()
}

metric_family!(hertz => {
    kilohertz: 1e3,
    megahertz: 1e6,
    gigahertz: 1e9,
    terahertz: 1e12,
});

/// Newton: `1 {kg m s^-2}`.
pub fn newton() -> Quantity {
    kilogram() * meter() / (second() * second())
}

metric_family!(newton => {
    kilonewton: 1e3,
    millinewton: 1e-3,
});

/// Pascal: `1 {kg m^-1 s^-2}`.
pub fn pascal() -> Quantity {
    newton() / (meter() * meter())
}

metric_family!(pascal => {
    hectopascal: 1e2,
    kilopascal: 1e3,
    megapascal: 1e6,
});

/// Joule: `1 {kg m^2 s^-2}`.
pub fn joule() -> Quantity {
    newton() * meter()
}

metric_family!(joule => {
    kilojoule: 1e3,
    megajoule: 1e6,
    nanojoule: 1e-9,
});

/// Watt: `1 {kg m^2 s^-3}`.
pub fn watt() -> Quantity {
    joule() / second()
}

metric_family!(watt => {
    milliwatt: 1e-3,
    kilowatt: 1e3,
    megawatt: 1e6,
    gigawatt: 1e9,
});

/// Coulomb: `1 {A s}`.
pub fn coulomb() -> Quantity {
    ampere() * second()
}

/// Volt: `1 {kg m^2 s^-3 A^-1}`.
pub fn volt() -> Quantity {
    watt() / ampere()
}

metric_family!(volt => {
    millivolt: 1e-3,
    kilovolt: 1e3,
});

/// Farad: `1 {A^2 s^4 kg^-1 m^-2}`.
pub fn farad() -> Quantity {
    coulomb() / volt()
}

metric_family!(farad => {
    millifarad: 1e-3,
    microfarad: 1e-6,
    nanofarad: 1e-9,
    picofarad: 1e-12,
});

/// Ohm: `1 {kg m^2 s^-3 A^-2}`.
pub fn ohm() -> Quantity {
    volt() / ampere()
}

metric_family!(ohm => {
    kiloohm: 1e3,
    megaohm: 1e6,
});

/// Carnot, entropy per temperature step: `1 {kg m^2 s^-2 K^-1}`.
pub fn carnot() -> Quantity {
    joule() / kelvin()
}

// ─────────────────────────────────────────────────────────────────────────────
// Common units not officially sanctioned
// ─────────────────────────────────────────────────────────────────────────────

/// Angstrom: `0.1 {nm}`.
pub fn angstrom() -> Quantity {
    0.1 * nanometer()
}

/// Dyne: `1e-5` newton.
pub fn dyne() -> Quantity {
    1e-5 * newton()
}

/// Erg: `100` nanojoule.
pub fn erg() -> Quantity {
    100.0 * nanojoule()
}

/// Thermochemical calorie: `4.184` joule.
pub fn calorie() -> Quantity {
    4.184 * joule()
}

/// Kilocalorie (the dietary Calorie): `1000` calories.
pub fn kilocalorie() -> Quantity {
    1000.0 * calorie()
}

/// Bar: `1e5` pascal.
pub fn bar() -> Quantity {
    1e5 * pascal()
}

/// Millibar: `1e-3` bar.
pub fn millibar() -> Quantity {
    1e-3 * bar()
}

/// Clausius: `1` kilocalorie per kelvin.
pub fn clausius() -> Quantity {
    kilocalorie() / kelvin()
}
