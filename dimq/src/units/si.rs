//! SI base units and their metric-prefix families.
//!
//! Each base unit carries a single dimension of exponent 1, valued in the
//! canonical scale of that dimension. The one wrinkle is mass: the SI base
//! unit is the *kilogram*, so [`gram`] has value `1e-3` against the `kg`
//! dimension and [`kilogram`] comes out at exactly `1`.
//!
//! The `bit` rounds out the set for information-content calculations, as a
//! dimension of its own.
//!
//! ```rust
//! use dimq::units::{kilometer, meter};
//!
//! assert_eq!((1.0 * kilometer()).to(&meter()).unwrap(), 1000.0);
//! ```

use super::metric_family;
use crate::Quantity;

/// Metre, the SI unit of length: `1 {m}`.
pub fn meter() -> Quantity {
    Quantity::base(1.0, "m")
}

metric_family!(meter => {
    terameter: 1e12,
    gigameter: 1e9,
    megameter: 1e6,
    kilometer: 1e3,
    hectometer: 1e2,
    decameter: 1e1,
    decimeter: 1e-1,
    centimeter: 1e-2,
    millimeter: 1e-3,
    micrometer: 1e-6,
    nanometer: 1e-9,
    picometer: 1e-12,
    femtometer: 1e-15,
});

/// Second, the SI unit of time: `1 {s}`.
pub fn second() -> Quantity {
    Quantity::base(1.0, "s")
}

metric_family!(second => {
    millisecond: 1e-3,
    microsecond: 1e-6,
    nanosecond: 1e-9,
    picosecond: 1e-12,
    femtosecond: 1e-15,
});

/// Gram: `1e-3 {kg}`, since the kilogram is the SI base unit of mass.
pub fn gram() -> Quantity {
    Quantity::base(1e-3, "kg")
}

metric_family!(gram => {
    kilogram: 1e3,
    milligram: 1e-3,
    microgram: 1e-6,
    nanogram: 1e-9,
});

/// Ampere, the SI unit of electric current: `1 {A}`.
pub fn ampere() -> Quantity {
    Quantity::base(1.0, "A")
}

metric_family!(ampere => {
    milliampere: 1e-3,
    microampere: 1e-6,
});

/// Kelvin, the SI unit of thermodynamic temperature: `1 {K}`.
pub fn kelvin() -> Quantity {
    Quantity::base(1.0, "K")
}

metric_family!(kelvin => {
    millikelvin: 1e-3,
});

/// Candela, the SI unit of luminous intensity: `1 {cd}`.
pub fn candela() -> Quantity {
    Quantity::base(1.0, "cd")
}

/// Mole, the SI unit of amount of substance: `1 {mol}`.
pub fn mole() -> Quantity {
    Quantity::base(1.0, "mol")
}

metric_family!(mole => {
    millimole: 1e-3,
    micromole: 1e-6,
    nanomole: 1e-9,
});

/// Bit of information: `1 {bit}`.
pub fn bit() -> Quantity {
    Quantity::base(1.0, "bit")
}

metric_family!(bit => {
    kilobit: 1e3,
    megabit: 1e6,
    gigabit: 1e9,
    terabit: 1e12,
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn base_units_have_unit_value_and_single_dimension() {
        for q in [meter(), second(), ampere(), kelvin(), candela(), mole(), bit()] {
            assert_abs_diff_eq!(*q.value(), 1.0);
            assert_eq!(q.unit().len(), 1);
        }
    }

    #[test]
    fn kilogram_is_the_canonical_mass() {
        assert_abs_diff_eq!(*kilogram().value(), 1.0);
        assert_eq!(kilogram().unit().to_string(), "kg");
        assert_abs_diff_eq!(*gram().value(), 1e-3);
    }

    #[test]
    fn kilometer_to_meter() {
        let km = 1.0 * kilometer();
        assert_abs_diff_eq!(km.to(&meter()).unwrap(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn meter_to_kilometer() {
        let m = 1000.0 * meter();
        assert_abs_diff_eq!(m.to(&kilometer()).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn prefixes_share_the_base_signature() {
        assert_eq!(nanometer().unit(), meter().unit());
        assert_eq!(terabit().unit(), bit().unit());
        assert_eq!(millisecond().unit(), second().unit());
    }

    #[test]
    fn prefix_ratios() {
        assert_relative_eq!(
            micrometer().to(&nanometer()).unwrap(),
            1000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            gigameter().to(&megameter()).unwrap(),
            1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn roundtrip_km_m() {
        let original = 42.5 * kilometer();
        let in_meters = original.to(&meter()).unwrap() * meter();
        assert_abs_diff_eq!(
            in_meters.to(&kilometer()).unwrap(),
            42.5,
            epsilon = 1e-12
        );
    }
}
