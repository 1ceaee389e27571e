//! Non-metric units, defined by their exact metric equivalents.

use super::derived::liter;
use super::si::{centimeter, kilometer};
use crate::Quantity;

/// Statute mile: `1.609344` km exactly.
pub fn mile() -> Quantity {
    1.609344 * kilometer()
}

/// US gallon: `3.78541178` liters.
pub fn gallon() -> Quantity {
    3.78541178 * liter()
}

/// International inch: `2.54` cm exactly.
pub fn inch() -> Quantity {
    2.54 * centimeter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::si::meter;
    use approx::assert_relative_eq;

    #[test]
    fn mile_in_meters() {
        assert_relative_eq!(mile().to(&meter()).unwrap(), 1609.344, max_relative = 1e-12);
    }

    #[test]
    fn inch_in_meters() {
        assert_relative_eq!(inch().to(&meter()).unwrap(), 0.0254, max_relative = 1e-12);
    }

    #[test]
    fn gallon_in_liters() {
        assert_relative_eq!(
            gallon().to(&liter()).unwrap(),
            3.78541178,
            max_relative = 1e-12
        );
    }
}
