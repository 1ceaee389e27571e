//! Physical constants expressed as quantities.

use super::derived::joule;
use super::si::{kelvin, mole, second};
use crate::Quantity;

/// Avogadro's number: `6.02214179e23 {mol^-1}`.
pub fn avogadro() -> Quantity {
    6.02214179e23 / mole()
}

/// Boltzmann's constant: `1.3806488e-23` J/K.
pub fn boltzmann() -> Quantity {
    1.3806488e-23 * joule() / kelvin()
}

/// Planck's constant: `6.62606957e-34` J·s.
pub fn planck() -> Quantity {
    6.62606957e-34 * joule() * second()
}
