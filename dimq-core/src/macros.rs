//! Macros for constructing quantities and signatures.

/// Builds a [`UnitSignature`](crate::UnitSignature) from `label: exponent`
/// pairs.
///
/// Exponents may be integers or [`Exponent`](crate::Exponent) values; zero
/// exponents are dropped and repeated labels accumulate.
///
/// ```rust
/// use dimq_core::{signature, Exponent, UnitSignature};
///
/// let velocity = signature!(m: 1, s: -1);
/// assert_eq!(velocity.to_string(), "m s^-1");
///
/// let sqrt_time = signature!(s: Exponent::new(1, 2));
/// assert_eq!(sqrt_time.to_string(), "s^1/2");
///
/// assert_eq!(signature!(), UnitSignature::dimensionless());
/// ```
#[macro_export]
macro_rules! signature {
    () => {
        $crate::UnitSignature::dimensionless()
    };
    ($($label:ident: $exp:expr),+ $(,)?) => {
        $crate::UnitSignature::from_pairs([
            $((stringify!($label), $crate::Exponent::from($exp))),+
        ])
    };
}

/// Builds a [`Quantity`](crate::Quantity) from a magnitude and
/// `label: exponent` pairs, mirroring construction like "3.3 metres" as
/// `quantity!(3.3, m: 1)`.
///
/// With no pairs the quantity is dimensionless.
///
/// ```rust
/// use dimq_core::quantity;
///
/// let v = quantity!(42.0, m: 1, s: -1);
/// assert_eq!(v.to_string(), "42 m s^-1");
///
/// let ratio = quantity!(0.5);
/// assert!(ratio.is_dimensionless());
/// ```
#[macro_export]
macro_rules! quantity {
    ($value:expr) => {
        $crate::Quantity::dimensionless($value)
    };
    ($value:expr, $($label:ident: $exp:expr),+ $(,)?) => {
        $crate::Quantity::new($value, $crate::signature!($($label: $exp),+))
    };
}
