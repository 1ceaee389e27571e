//! The magnitude abstraction behind [`Quantity`](crate::Quantity).

use crate::error::{QuantityError, QuantityResult};
use crate::Exponent;
use core::ops::{Div, Neg, Sub};
use num_rational::Rational64;
use num_traits::{One, Zero};

/// Trait implemented by every type usable as a quantity's magnitude.
///
/// A magnitude must behave like a number: it can be added, subtracted,
/// multiplied, divided, negated, compared, and raised to a rational power.
/// Addition and multiplication come in through the [`Zero`] and [`One`]
/// supertraits, which also provide the zero test used by the bare-zero
/// additive identity and the division-by-zero check.
///
/// Implementations are provided for `f64`, `f32`, and
/// [`Rational64`] (the last gives exact arithmetic at the cost of only
/// supporting integer exponents in [`powr`](Numeric::powr)).
pub trait Numeric:
    Clone
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
{
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Raises the value to a rational power.
    ///
    /// # Errors
    ///
    /// The power is computed in the implementation's own domain; exponents
    /// that leave that domain are reported as an error rather than silently
    /// approximated (see the individual implementations).
    fn powr(&self, exp: Exponent) -> QuantityResult<Self>;
}

impl Numeric for f64 {
    #[inline]
    fn abs(&self) -> Self {
        f64::abs(*self)
    }

    /// Integer exponents go through `powi`; fractional exponents of a
    /// negative base are undefined in the real domain and reported as
    /// [`QuantityError::NegativeFractionalPower`].
    fn powr(&self, exp: Exponent) -> QuantityResult<Self> {
        if exp.is_integer() {
            return match i32::try_from(*exp.numer()) {
                Ok(n) => Ok(self.powi(n)),
                Err(_) => Ok(self.powf(*exp.numer() as f64)),
            };
        }
        if *self < 0.0 {
            return Err(QuantityError::NegativeFractionalPower { exponent: exp });
        }
        Ok(self.powf(*exp.numer() as f64 / *exp.denom() as f64))
    }
}

impl Numeric for f32 {
    #[inline]
    fn abs(&self) -> Self {
        f32::abs(*self)
    }

    fn powr(&self, exp: Exponent) -> QuantityResult<Self> {
        if exp.is_integer() {
            return match i32::try_from(*exp.numer()) {
                Ok(n) => Ok(self.powi(n)),
                Err(_) => Ok(self.powf(*exp.numer() as f32)),
            };
        }
        if *self < 0.0 {
            return Err(QuantityError::NegativeFractionalPower { exponent: exp });
        }
        Ok(self.powf((*exp.numer() as f64 / *exp.denom() as f64) as f32))
    }
}

impl Numeric for Rational64 {
    #[inline]
    fn abs(&self) -> Self {
        Rational64::abs(self)
    }

    /// Exact rationals support integer exponents only; a fractional exponent
    /// would produce an irrational result and is reported as
    /// [`QuantityError::InexactPower`].
    fn powr(&self, exp: Exponent) -> QuantityResult<Self> {
        if !exp.is_integer() {
            return Err(QuantityError::InexactPower { exponent: exp });
        }
        if self.is_zero() && exp < Exponent::zero() {
            return Err(QuantityError::DivisionByZero);
        }
        match i32::try_from(*exp.numer()) {
            Ok(n) => Ok(self.pow(n)),
            Err(_) => Err(QuantityError::InexactPower { exponent: exp }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn f64_integer_power() {
        assert_abs_diff_eq!(2.0f64.powr(Exponent::from(10)).unwrap(), 1024.0);
        assert_abs_diff_eq!((-2.0f64).powr(Exponent::from(3)).unwrap(), -8.0);
    }

    #[test]
    fn f64_fractional_power() {
        let sqrt = 9.0f64.powr(Exponent::new(1, 2)).unwrap();
        assert_abs_diff_eq!(sqrt, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn f64_negative_fractional_power_is_rejected() {
        let err = (-9.0f64).powr(Exponent::new(1, 2)).unwrap_err();
        assert!(matches!(
            err,
            QuantityError::NegativeFractionalPower { exponent } if exponent == Exponent::new(1, 2)
        ));
    }

    #[test]
    fn f64_zero_power_is_one() {
        assert_abs_diff_eq!(5.0f64.powr(Exponent::from(0)).unwrap(), 1.0);
    }

    #[test]
    fn f32_fractional_power() {
        let sqrt = 16.0f32.powr(Exponent::new(1, 2)).unwrap();
        assert!((sqrt - 4.0).abs() < 1e-6);
    }

    #[test]
    fn rational_integer_power_is_exact() {
        let v = Rational64::new(2, 3);
        assert_eq!(v.powr(Exponent::from(2)).unwrap(), Rational64::new(4, 9));
        assert_eq!(v.powr(Exponent::from(-1)).unwrap(), Rational64::new(3, 2));
    }

    #[test]
    fn rational_zero_to_negative_power_is_rejected() {
        let err = Rational64::zero().powr(Exponent::from(-1)).unwrap_err();
        assert!(matches!(err, QuantityError::DivisionByZero));
    }

    #[test]
    fn rational_fractional_power_is_rejected() {
        let v = Rational64::new(4, 9);
        let err = v.powr(Exponent::new(1, 2)).unwrap_err();
        assert!(matches!(err, QuantityError::InexactPower { .. }));
    }
}
