//! Error types for quantity operations.

use crate::signature::UnitSignature;
use crate::Exponent;

/// Result type for quantity operations.
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Error type for quantity operations.
///
/// Every fallible operation in this crate reports through this enum. Errors
/// are raised synchronously at the offending operation; nothing is deferred
/// and no operation leaves a half-built value behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// Two operands with unequal unit signatures were given to an operation
    /// that requires matching units (addition, subtraction, ordering,
    /// conversion). Carries both rendered signatures for diagnostics.
    #[error("dimension mismatch: cannot combine `{left}` with `{right}`")]
    DimensionMismatch {
        /// Rendered signature of the left operand.
        left: String,
        /// Rendered signature of the right operand.
        right: String,
    },

    /// Division by a quantity or bare number whose value is exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A fractional power was applied to a negative value; the result is
    /// undefined in the real domain.
    #[error("fractional power {exponent} of a negative value")]
    NegativeFractionalPower {
        /// The offending exponent.
        exponent: Exponent,
    },

    /// A fractional power was applied to an exact rational value; the result
    /// is not representable as a rational number.
    #[error("fractional power {exponent} of an exact rational value")]
    InexactPower {
        /// The offending exponent.
        exponent: Exponent,
    },
}

impl QuantityError {
    /// Builds a [`QuantityError::DimensionMismatch`] from the two offending
    /// signatures. Dimensionless operands render as `1`.
    pub(crate) fn mismatch(left: &UnitSignature, right: &UnitSignature) -> Self {
        fn render(sig: &UnitSignature) -> String {
            if sig.is_dimensionless() {
                "1".to_owned()
            } else {
                sig.to_string()
            }
        }
        QuantityError::DimensionMismatch {
            left: render(left),
            right: render(right),
        }
    }
}
