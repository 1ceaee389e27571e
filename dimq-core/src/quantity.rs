//! Quantity type and its implementations.

use crate::error::{QuantityError, QuantityResult};
use crate::signature::UnitSignature;
use crate::value::Numeric;
use crate::Exponent;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A numeric magnitude paired with a [`UnitSignature`].
///
/// `Quantity<N>` is immutable: every operation returns a new instance, so
/// values can be shared freely across threads (the type is `Send + Sync`
/// whenever `N` is). All unit bookkeeping is delegated to the signature;
/// the magnitude type `N` only has to satisfy [`Numeric`] and defaults to
/// `f64`.
///
/// The checked methods (`checked_add`, `checked_div`, [`pow`](Self::pow),
/// [`try_cmp`](Self::try_cmp), [`to`](Self::to)) are the primary contract
/// and report failures as [`QuantityError`]. The operator impls delegate to
/// them and panic on the failure cases, since `std::ops` signatures cannot
/// return `Result`; each documents its panic conditions.
///
/// # Zero as a universal identity
///
/// The bare number 0 (and the dimensionless zero quantity) is a
/// dimension-agnostic additive identity: it may be added to or subtracted
/// from any quantity without a dimension check, and the result carries the
/// other operand's unit. No other bare number may be.
///
/// # Examples
///
/// ```rust
/// use dimq_core::{quantity, Quantity};
///
/// let distance = quantity!(3.0, m: 1);
/// let time = quantity!(1.5, s: 1);
/// let velocity = distance / time;
/// assert_eq!(velocity.unit().to_string(), "m s^-1");
/// assert_eq!(velocity.to_string(), "2 m s^-1");
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity<N = f64> {
    value: N,
    unit: UnitSignature,
}

impl<N: Numeric> Quantity<N> {
    /// Creates a quantity from a magnitude and a unit signature.
    ///
    /// ```rust
    /// use dimq_core::{Quantity, UnitSignature};
    ///
    /// let sig = UnitSignature::builder().with("m", 1).with("s", -1).build();
    /// let v = Quantity::new(42.0, sig);
    /// assert_eq!(v.to_string(), "42 m s^-1");
    /// ```
    #[inline]
    pub fn new(value: N, unit: UnitSignature) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity with a single dimension of exponent 1.
    ///
    /// This is the shape of a predefined unit constant: `meter` is
    /// `Quantity::base(1.0, "m")`.
    #[inline]
    pub fn base(value: N, label: impl Into<String>) -> Self {
        Self {
            value,
            unit: UnitSignature::base(label),
        }
    }

    /// Creates a dimensionless quantity.
    #[inline]
    pub fn dimensionless(value: N) -> Self {
        Self {
            value,
            unit: UnitSignature::dimensionless(),
        }
    }

    /// The magnitude.
    #[inline]
    pub fn value(&self) -> &N {
        &self.value
    }

    /// The unit signature.
    #[inline]
    pub fn unit(&self) -> &UnitSignature {
        &self.unit
    }

    /// Consumes the quantity, returning magnitude and signature.
    #[inline]
    pub fn into_parts(self) -> (N, UnitSignature) {
        (self.value, self.unit)
    }

    /// Extracts the bare magnitude of a dimensionless quantity.
    ///
    /// A value that still carries a unit has no meaningful bare-number form,
    /// so this is only available once the dimensions have cancelled.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] when the signature is non-empty.
    ///
    /// ```rust
    /// use dimq_core::quantity;
    ///
    /// let ratio = quantity!(6.0, m: 1).checked_div(&quantity!(3.0, m: 1)).unwrap();
    /// assert_eq!(ratio.try_into_value().unwrap(), 2.0);
    /// assert!(quantity!(2.0, m: 1).try_into_value().is_err());
    /// ```
    pub fn try_into_value(self) -> QuantityResult<N> {
        if self.unit.is_dimensionless() {
            Ok(self.value)
        } else {
            Err(QuantityError::mismatch(
                &self.unit,
                &UnitSignature::dimensionless(),
            ))
        }
    }

    /// True iff the unit signature is empty.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// True iff the magnitude is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The dimensionless zero: value 0 with no unit. This is the only value
    /// that add/subtract/compare accept regardless of the other operand's
    /// dimension.
    #[inline]
    fn is_zero_identity(&self) -> bool {
        self.unit.is_dimensionless() && self.value.is_zero()
    }

    /// Returns the absolute value, unit unchanged.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            value: self.value.abs(),
            unit: self.unit.clone(),
        }
    }

    /// Adds two quantities.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] unless both signatures are equal
    /// or one operand is the dimensionless zero (whose unit defers to the
    /// other operand's).
    ///
    /// ```rust
    /// use dimq_core::quantity;
    ///
    /// let a = quantity!(1.0, m: 1);
    /// let b = quantity!(2.0, m: 1);
    /// assert_eq!(a.checked_add(&b).unwrap(), quantity!(3.0, m: 1));
    /// assert!(a.checked_add(&quantity!(1.0, s: 1)).is_err());
    /// ```
    pub fn checked_add(&self, other: &Self) -> QuantityResult<Self> {
        if self.unit == other.unit {
            Ok(Self {
                value: self.value.clone() + other.value.clone(),
                unit: self.unit.clone(),
            })
        } else if other.is_zero_identity() {
            Ok(self.clone())
        } else if self.is_zero_identity() {
            Ok(other.clone())
        } else {
            Err(QuantityError::mismatch(&self.unit, &other.unit))
        }
    }

    /// Subtracts `other` from `self`. Same dimension rule as
    /// [`checked_add`](Self::checked_add).
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] on unequal signatures with no
    /// dimensionless-zero operand.
    pub fn checked_sub(&self, other: &Self) -> QuantityResult<Self> {
        if self.unit == other.unit {
            Ok(Self {
                value: self.value.clone() - other.value.clone(),
                unit: self.unit.clone(),
            })
        } else if other.is_zero_identity() {
            Ok(self.clone())
        } else if self.is_zero_identity() {
            Ok(Self {
                value: -other.value.clone(),
                unit: other.unit.clone(),
            })
        } else {
            Err(QuantityError::mismatch(&self.unit, &other.unit))
        }
    }

    /// Divides `self` by `other`. The result's signature is
    /// `self.unit.combine(&other.unit, -1)`, so `q / q` is dimensionless.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DivisionByZero`] when `other`'s magnitude is zero.
    ///
    /// ```rust
    /// use dimq_core::quantity;
    ///
    /// let d = quantity!(10.0, m: 1);
    /// let t = quantity!(4.0, s: 1);
    /// let v = d.checked_div(&t).unwrap();
    /// assert_eq!(v.to_string(), "2.5 m s^-1");
    /// ```
    pub fn checked_div(&self, other: &Self) -> QuantityResult<Self> {
        if other.value.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(Self {
            value: self.value.clone() / other.value.clone(),
            unit: self.unit.combine(&other.unit, Exponent::from(-1)),
        })
    }

    /// Raises the quantity to a rational power: magnitude via
    /// [`Numeric::powr`], signature via [`UnitSignature::power`].
    ///
    /// # Errors
    ///
    /// Whatever [`Numeric::powr`] reports; for floats that is
    /// [`QuantityError::NegativeFractionalPower`] on a fractional power of a
    /// negative value.
    ///
    /// ```rust
    /// use dimq_core::{quantity, Exponent};
    ///
    /// let v = quantity!(3.0, m: 1, s: -1);
    /// let sq = v.pow(2).unwrap();
    /// assert_eq!(sq.to_string(), "9 m^2 s^-2");
    ///
    /// let root = quantity!(1.0, s: 1).pow(Exponent::new(1, 2)).unwrap();
    /// assert_eq!(root.to_string(), "1 s^1/2");
    /// ```
    pub fn pow(&self, n: impl Into<Exponent>) -> QuantityResult<Self> {
        let n = n.into();
        Ok(Self {
            value: self.value.powr(n)?,
            unit: self.unit.power(n),
        })
    }

    /// Orders two quantities.
    ///
    /// Returns `Ok(None)` when the magnitudes themselves are unordered
    /// (e.g. NaN), which keeps "not a number" distinct from "not the same
    /// dimension".
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] on unequal signatures, unless one
    /// operand is the dimensionless zero.
    pub fn try_cmp(&self, other: &Self) -> QuantityResult<Option<Ordering>> {
        if self.unit == other.unit || other.is_zero_identity() || self.is_zero_identity() {
            Ok(self.value.partial_cmp(&other.value))
        } else {
            Err(QuantityError::mismatch(&self.unit, &other.unit))
        }
    }

    /// Expresses `self` as a multiple of `display_unit`, returning the bare
    /// magnitude ("how many display-units fit").
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] unless both signatures are
    /// equal; [`QuantityError::DivisionByZero`] when the display unit's
    /// magnitude is zero.
    ///
    /// ```rust
    /// use dimq_core::quantity;
    ///
    /// let d = quantity!(5000.0, m: 1);
    /// let km = quantity!(1000.0, m: 1);
    /// assert_eq!(d.to(&km).unwrap(), 5.0);
    /// ```
    pub fn to(&self, display_unit: &Self) -> QuantityResult<N> {
        if self.unit != display_unit.unit {
            return Err(QuantityError::mismatch(&self.unit, &display_unit.unit));
        }
        if display_unit.value.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(self.value.clone() / display_unit.value.clone())
    }
}

/// Unwraps a checked-operation result inside an operator impl, where the
/// signature leaves no way to propagate.
fn expect_op<T>(result: QuantityResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Equality across mismatched units is **always unequal** — it never panics
/// and never raises. Use [`Quantity::try_cmp`] when a dimension mismatch
/// should surface as an error instead.
impl<N: PartialEq> PartialEq for Quantity<N> {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

/// Ordering requires equal signatures; mismatched units yield `None` (so
/// `<`, `>=`, … are all false). [`Quantity::try_cmp`] reports the mismatch
/// as an error and additionally accepts the dimensionless zero.
impl<N: Numeric> PartialOrd for Quantity<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit == other.unit {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

/// A quantity equals a bare number iff it is dimensionless with an equal
/// magnitude, or both the bare number and the magnitude are zero.
impl<N: Numeric> PartialEq<N> for Quantity<N> {
    fn eq(&self, other: &N) -> bool {
        if self.unit.is_dimensionless() {
            self.value == *other
        } else {
            other.is_zero() && self.value.is_zero()
        }
    }
}

/// Ordering against a bare number: defined for dimensionless quantities and
/// for the universal comparable 0; `None` otherwise.
impl<N: Numeric> PartialOrd<N> for Quantity<N> {
    fn partial_cmp(&self, other: &N) -> Option<Ordering> {
        if self.unit.is_dimensionless() || other.is_zero() {
            self.value.partial_cmp(other)
        } else {
            None
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<N: Numeric> Add for Quantity<N> {
    type Output = Self;

    /// # Panics
    ///
    /// On a dimension mismatch; see [`Quantity::checked_add`].
    #[inline]
    fn add(self, rhs: Self) -> Self {
        expect_op(self.checked_add(&rhs))
    }
}

impl<N: Numeric> AddAssign for Quantity<N> {
    /// # Panics
    ///
    /// On a dimension mismatch; see [`Quantity::checked_add`].
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = expect_op(self.checked_add(&rhs));
    }
}

impl<N: Numeric> Sub for Quantity<N> {
    type Output = Self;

    /// # Panics
    ///
    /// On a dimension mismatch; see [`Quantity::checked_sub`].
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        expect_op(self.checked_sub(&rhs))
    }
}

impl<N: Numeric> SubAssign for Quantity<N> {
    /// # Panics
    ///
    /// On a dimension mismatch; see [`Quantity::checked_sub`].
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = expect_op(self.checked_sub(&rhs));
    }
}

impl<N: Numeric> Mul for Quantity<N> {
    type Output = Self;

    /// Multiplication never fails at the unit level: the signatures combine
    /// with scale `+1`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
            unit: self.unit.combine(&rhs.unit, Exponent::from(1)),
        }
    }
}

impl<N: Numeric> Div for Quantity<N> {
    type Output = Self;

    /// # Panics
    ///
    /// When `rhs` has a zero magnitude; see [`Quantity::checked_div`].
    #[inline]
    fn div(self, rhs: Self) -> Self {
        expect_op(self.checked_div(&rhs))
    }
}

impl<N: Numeric> Add<N> for Quantity<N> {
    type Output = Self;

    /// Adding a bare number: 0 is the universal identity, any other number
    /// requires a dimensionless quantity.
    ///
    /// # Panics
    ///
    /// When `rhs` is non-zero and `self` carries a unit.
    fn add(self, rhs: N) -> Self {
        if rhs.is_zero() {
            return self;
        }
        if self.unit.is_dimensionless() {
            return Self::dimensionless(self.value + rhs);
        }
        panic!(
            "{}",
            QuantityError::mismatch(&self.unit, &UnitSignature::dimensionless())
        )
    }
}

impl<N: Numeric> Sub<N> for Quantity<N> {
    type Output = Self;

    /// Subtracting a bare number; same rule as `Add<N>`.
    ///
    /// # Panics
    ///
    /// When `rhs` is non-zero and `self` carries a unit.
    fn sub(self, rhs: N) -> Self {
        if rhs.is_zero() {
            return self;
        }
        if self.unit.is_dimensionless() {
            return Self::dimensionless(self.value - rhs);
        }
        panic!(
            "{}",
            QuantityError::mismatch(&self.unit, &UnitSignature::dimensionless())
        )
    }
}

impl<N: Numeric> Mul<N> for Quantity<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: N) -> Self {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<N: Numeric> Div<N> for Quantity<N> {
    type Output = Self;

    /// # Panics
    ///
    /// When `rhs` is zero.
    fn div(self, rhs: N) -> Self {
        if rhs.is_zero() {
            panic!("{}", QuantityError::DivisionByZero);
        }
        Self {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

impl<N: Numeric> Neg for Quantity<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

// Bare numbers on the left-hand side, so `3.0 * meter()` and `0.0 + q` read
// the same as their right-hand counterparts.
macro_rules! impl_scalar_lhs {
    ($($t:ty),+ $(,)?) => {$(
        impl Mul<Quantity<$t>> for $t {
            type Output = Quantity<$t>;

            #[inline]
            fn mul(self, rhs: Quantity<$t>) -> Quantity<$t> {
                rhs * self
            }
        }

        impl Div<Quantity<$t>> for $t {
            type Output = Quantity<$t>;

            /// # Panics
            ///
            /// When `rhs` has a zero magnitude.
            #[inline]
            fn div(self, rhs: Quantity<$t>) -> Quantity<$t> {
                expect_op(Quantity::dimensionless(self).checked_div(&rhs))
            }
        }

        impl Add<Quantity<$t>> for $t {
            type Output = Quantity<$t>;

            /// # Panics
            ///
            /// When `self` is non-zero and `rhs` carries a unit.
            #[inline]
            fn add(self, rhs: Quantity<$t>) -> Quantity<$t> {
                expect_op(Quantity::dimensionless(self).checked_add(&rhs))
            }
        }

        impl Sub<Quantity<$t>> for $t {
            type Output = Quantity<$t>;

            /// # Panics
            ///
            /// When `self` is non-zero and `rhs` carries a unit.
            #[inline]
            fn sub(self, rhs: Quantity<$t>) -> Quantity<$t> {
                expect_op(Quantity::dimensionless(self).checked_sub(&rhs))
            }
        }
    )+};
}

impl_scalar_lhs!(f64, f32);

/// Renders the magnitude followed by the signature, e.g. `217261.44 m`;
/// dimensionless quantities render as the bare magnitude.
impl<N: fmt::Display> fmt::Display for Quantity<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_dimensionless() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity;
    use approx::assert_abs_diff_eq;
    use num_rational::Rational64;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Construction and accessors
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn base_constructor_has_single_dimension() {
        let m = Quantity::base(1.0, "m");
        assert_eq!(m.unit().exponent("m"), Exponent::from(1));
        assert_eq!(m.unit().len(), 1);
    }

    #[test]
    fn dimensionless_constructor() {
        let q = Quantity::dimensionless(2.5);
        assert!(q.is_dimensionless());
        assert_eq!(*q.value(), 2.5);
    }

    #[test]
    fn into_parts_roundtrip() {
        let q = quantity!(4.0, m: 2);
        let (value, unit) = q.clone().into_parts();
        assert_eq!(Quantity::new(value, unit), q);
    }

    #[test]
    fn try_into_value_requires_dimensionless() {
        assert_eq!(Quantity::dimensionless(2.5).try_into_value().unwrap(), 2.5);
        let err = quantity!(2.5, m: 1).try_into_value().unwrap_err();
        assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Zero identity
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn adding_bare_zero_preserves_value_and_unit() {
        let q = quantity!(3.3, m: 1);
        assert_eq!(q.clone() + 0.0, q);
        assert_eq!(0.0 + q.clone(), q);
        assert_eq!(q.clone() - 0.0, q);
    }

    #[test]
    fn zero_minus_quantity_negates() {
        let q = quantity!(3.3, m: 1);
        assert_eq!(0.0 - q.clone(), -q);
    }

    #[test]
    fn dimensionless_zero_quantity_is_identity() {
        let q = quantity!(3.3, m: 1);
        let zero = Quantity::dimensionless(0.0);
        assert_eq!(q.checked_add(&zero).unwrap(), q);
        assert_eq!(zero.checked_add(&q).unwrap(), q);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn adding_nonzero_bare_number_panics() {
        let _ = quantity!(3.3, m: 1) + 1.0;
    }

    #[test]
    fn adding_bare_number_to_dimensionless_works() {
        let q = Quantity::dimensionless(1.5) + 2.5;
        assert_eq!(q, Quantity::dimensionless(4.0));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Addition and subtraction
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_matching_units() {
        let a = quantity!(1.0, m: 1);
        let b = quantity!(2.0, m: 1);
        assert_eq!(a + b, quantity!(3.0, m: 1));
    }

    #[test]
    fn sub_matching_units() {
        let a = quantity!(5.0, s: 1);
        let b = quantity!(2.0, s: 1);
        assert_eq!(a - b, quantity!(3.0, s: 1));
    }

    #[test]
    fn checked_add_mismatch_reports_both_signatures() {
        let err = quantity!(1.0, m: 1)
            .checked_add(&quantity!(1.0, s: 1))
            .unwrap_err();
        assert_eq!(
            err,
            QuantityError::DimensionMismatch {
                left: "m".into(),
                right: "s".into(),
            }
        );
    }

    #[test]
    fn checked_sub_mismatch_fails() {
        let err = quantity!(1.0, m: 1)
            .checked_sub(&quantity!(1.0, s: 1))
            .unwrap_err();
        assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_add_mismatch_panics() {
        let _ = quantity!(1.0, m: 1) + quantity!(1.0, s: 1);
    }

    #[test]
    fn add_assign_in_place() {
        let mut q = quantity!(1.0, m: 1);
        q += quantity!(2.0, m: 1);
        assert_eq!(q, quantity!(3.0, m: 1));
    }

    #[test]
    fn sub_assign_in_place() {
        let mut q = quantity!(5.0, m: 1);
        q -= quantity!(2.0, m: 1);
        assert_eq!(q, quantity!(3.0, m: 1));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Multiplication and division
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn mul_combines_signatures() {
        let d = quantity!(6.0, m: 1);
        let t = quantity!(2.0, s: 1);
        let p = d * t;
        assert_eq!(p.unit().to_string(), "m s");
        assert_abs_diff_eq!(*p.value(), 12.0);
    }

    #[test]
    fn div_subtracts_exponents() {
        let d = quantity!(6.0, m: 1);
        let t = quantity!(2.0, s: 1);
        let v = d / t;
        assert_eq!(v.unit().to_string(), "m s^-1");
        assert_abs_diff_eq!(*v.value(), 3.0);
    }

    #[test]
    fn mul_cancels_inverse_dimensions() {
        let v = quantity!(42.0, m: 1, s: -1);
        let t = quantity!(2.0, s: 1);
        let d = v * t;
        assert_eq!(d.unit(), &UnitSignature::base("m"));
        assert_abs_diff_eq!(*d.value(), 84.0);
    }

    #[test]
    fn division_by_self_is_dimensionless_one() {
        let q = quantity!(7.5, m: 1, s: -2);
        let ratio = q.clone() / q;
        assert!(ratio.is_dimensionless());
        assert_abs_diff_eq!(*ratio.value(), 1.0);
    }

    #[test]
    fn checked_div_by_zero_quantity_fails() {
        let err = quantity!(1.0, m: 1)
            .checked_div(&quantity!(0.0, s: 1))
            .unwrap_err();
        assert_eq!(err, QuantityError::DivisionByZero);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn operator_div_by_zero_scalar_panics() {
        let _ = quantity!(1.0, m: 1) / 0.0;
    }

    #[test]
    fn scalar_multiplication_keeps_unit() {
        let q = quantity!(2.0, m: 1) * 3.0;
        assert_eq!(q, quantity!(6.0, m: 1));
        let q = 3.0 * quantity!(2.0, m: 1);
        assert_eq!(q, quantity!(6.0, m: 1));
    }

    #[test]
    fn scalar_division_keeps_unit() {
        let q = quantity!(6.0, m: 1) / 3.0;
        assert_eq!(q, quantity!(2.0, m: 1));
    }

    #[test]
    fn scalar_divided_by_quantity_inverts_unit() {
        let f: Quantity<f64> = 2.0 / quantity!(4.0, s: 1);
        assert_eq!(f.unit().to_string(), "s^-1");
        assert_abs_diff_eq!(*f.value(), 0.5);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Exponentiation
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn pow_squares_unit_and_value() {
        let v = quantity!(3.0, m: 1, s: -1);
        let sq = v.pow(2).unwrap();
        assert_eq!(sq.unit().exponent("m"), Exponent::from(2));
        assert_eq!(sq.unit().exponent("s"), Exponent::from(-2));
        assert_abs_diff_eq!(*sq.value(), 9.0);
    }

    #[test]
    fn pow_fractional_exponent() {
        let root = quantity!(4.0, s: 1).pow(Exponent::new(1, 2)).unwrap();
        assert_eq!(root.unit().exponent("s"), Exponent::new(1, 2));
        assert_abs_diff_eq!(*root.value(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn pow_negative_base_fractional_exponent_fails() {
        let err = quantity!(-4.0, s: 1).pow(Exponent::new(1, 2)).unwrap_err();
        assert!(matches!(err, QuantityError::NegativeFractionalPower { .. }));
    }

    #[test]
    fn pow_zero_gives_dimensionless() {
        let q = quantity!(3.0, m: 2).pow(0).unwrap();
        assert!(q.is_dimensionless());
        assert_abs_diff_eq!(*q.value(), 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn ordering_with_matching_units() {
        let a = quantity!(1.0, m: 1);
        let b = quantity!(2.0, m: 1);
        assert!(a < b);
        assert!(b >= a);
        assert_eq!(a.try_cmp(&b).unwrap(), Some(Ordering::Less));
    }

    #[test]
    fn try_cmp_mismatch_fails() {
        let err = quantity!(1.0, m: 1).try_cmp(&quantity!(1.0, s: 1)).unwrap_err();
        assert!(matches!(err, QuantityError::DimensionMismatch { .. }));
    }

    #[test]
    fn try_cmp_accepts_dimensionless_zero() {
        let q = quantity!(-1.0, m: 1);
        let zero = Quantity::dimensionless(0.0);
        assert_eq!(q.try_cmp(&zero).unwrap(), Some(Ordering::Less));
    }

    #[test]
    fn try_cmp_nan_is_unordered_not_mismatched() {
        let a = quantity!(f64::NAN, m: 1);
        let b = quantity!(1.0, m: 1);
        assert_eq!(a.try_cmp(&b).unwrap(), None);
    }

    #[test]
    fn mismatched_units_are_never_equal() {
        assert_ne!(quantity!(1.0, m: 1), quantity!(1.0, s: 1));
    }

    #[test]
    fn mismatched_units_have_no_ordering() {
        let a = quantity!(1.0, m: 1);
        let b = quantity!(2.0, s: 1);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a >= b));
    }

    #[test]
    fn comparison_against_bare_zero() {
        let q = quantity!(5.0, m: 1);
        assert!(q > 0.0);
        assert!(quantity!(-5.0, m: 1) < 0.0);
        assert!(quantity!(0.0, m: 1) == 0.0);
    }

    #[test]
    fn comparison_against_nonzero_scalar_requires_dimensionless() {
        let q = quantity!(5.0, m: 1);
        assert_eq!(q.partial_cmp(&3.0), None);
        assert!(Quantity::dimensionless(5.0) > 3.0);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion and display
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn to_expresses_in_display_unit() {
        let d = quantity!(5000.0, m: 1);
        let km = quantity!(1000.0, m: 1);
        assert_abs_diff_eq!(d.to(&km).unwrap(), 5.0);
    }

    #[test]
    fn to_mismatched_display_unit_fails() {
        let d = quantity!(5000.0, m: 1);
        let s = quantity!(1.0, s: 1);
        assert!(matches!(
            d.to(&s).unwrap_err(),
            QuantityError::DimensionMismatch { .. }
        ));
    }

    #[test]
    fn to_zero_display_unit_fails() {
        let d = quantity!(5000.0, m: 1);
        let bad = quantity!(0.0, m: 1);
        assert_eq!(d.to(&bad).unwrap_err(), QuantityError::DivisionByZero);
    }

    #[test]
    fn display_value_then_unit() {
        assert_eq!(quantity!(217261.44, m: 1).to_string(), "217261.44 m");
        assert_eq!(quantity!(42.0, m: 1, s: -1).to_string(), "42 m s^-1");
        assert_eq!(Quantity::dimensionless(1.5).to_string(), "1.5");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Negation and absolute value
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn neg_and_abs_keep_unit() {
        let q = quantity!(-3.0, m: 1);
        assert_eq!(-q.clone(), quantity!(3.0, m: 1));
        assert_eq!(q.abs(), quantity!(3.0, m: 1));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Exact rational magnitudes
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn rational_magnitudes_stay_exact() {
        let third = Quantity::base(Rational64::new(1, 3), "m");
        let sum = third.checked_add(&third).unwrap();
        assert_eq!(*sum.value(), Rational64::new(2, 3));
        let ninth = third.pow(2).unwrap();
        assert_eq!(*ninth.value(), Rational64::new(1, 9));
        assert_eq!(ninth.unit().exponent("m"), Exponent::from(2));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_self_division_is_dimensionless_one(v in 1e-6..1e6f64) {
            let q = quantity!(v, m: 1, s: -2);
            let ratio = q.clone() / q;
            prop_assert!(ratio.is_dimensionless());
            prop_assert!((ratio.value() - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_add_commutes_for_matching_units(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let qa = quantity!(a, m: 1);
            let qb = quantity!(b, m: 1);
            prop_assert_eq!(qa.clone() + qb.clone(), qb + qa);
        }

        #[test]
        fn prop_zero_is_identity(v in -1e6..1e6f64) {
            let q = quantity!(v, kg: 1);
            prop_assert_eq!(q.clone() + 0.0, q.clone());
            prop_assert_eq!(0.0 + q.clone(), q.clone());
            prop_assert_eq!(q.clone() - 0.0, q);
        }

        #[test]
        fn prop_mul_then_div_roundtrips(v in 1e-3..1e3f64, w in 1e-3..1e3f64) {
            let q = quantity!(v, m: 1);
            let r = quantity!(w, s: 1);
            let back = q.clone() * r.clone() / r;
            prop_assert_eq!(back.unit(), q.unit());
            prop_assert!((back.value() - q.value()).abs() < 1e-9 * v.abs().max(1.0));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn quantity_roundtrips_through_json() {
            let q = quantity!(42.5, m: 1, s: -1);
            let json = serde_json::to_string(&q).unwrap();
            let back: Quantity = serde_json::from_str(&json).unwrap();
            assert_eq!(back, q);
        }

        #[test]
        fn signature_serializes_as_map() {
            let q = quantity!(1.0, m: 1);
            let json = serde_json::to_string(&q).unwrap();
            assert!(json.contains("\"value\""));
            assert!(json.contains("\"unit\""));
            assert!(json.contains("\"m\""));
        }

        #[test]
        fn deserialization_renormalizes_zero_exponents() {
            let json = r#"{"value":1.0,"unit":{"m":[1,1],"s":[0,1]}}"#;
            let q: Quantity = serde_json::from_str(json).unwrap();
            assert_eq!(q.unit(), &UnitSignature::base("m"));
        }
    }
}
