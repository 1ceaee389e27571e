//! Time units accepted for use with the SI.

use super::si::second;
use crate::Quantity;

/// Minute: `60 {s}`.
pub fn minute() -> Quantity {
    60.0 * second()
}

/// Hour: `3600 {s}`.
pub fn hour() -> Quantity {
    60.0 * minute()
}

/// Day: `86400 {s}`.
pub fn day() -> Quantity {
    24.0 * hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn day_in_seconds() {
        assert_abs_diff_eq!(day().to(&second()).unwrap(), 86_400.0, epsilon = 1e-9);
    }

    #[test]
    fn hour_in_minutes() {
        assert_abs_diff_eq!(hour().to(&minute()).unwrap(), 60.0, epsilon = 1e-12);
    }

    #[test]
    fn time_units_share_the_second_signature() {
        assert_eq!(minute().unit(), second().unit());
        assert_eq!(day().unit(), second().unit());
    }
}
