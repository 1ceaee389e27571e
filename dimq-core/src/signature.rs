//! Unit signatures: normalized dimension-to-exponent mappings.

use crate::Exponent;
use core::fmt;
use num_traits::Zero;
use std::collections::{btree_map, BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A normalized mapping from dimension label to rational exponent.
///
/// A `UnitSignature` fully characterizes a quantity's dimensional type:
/// `m s^-1` is the signature of a velocity, the empty signature is
/// dimensionless. Labels are opaque identifier strings chosen by the caller;
/// no vocabulary is enforced, so users may calculate in arbitrary dimensions.
///
/// # Invariant
///
/// A dimension with exponent exactly 0 is never stored. Every constructor and
/// combinator upholds this, so two signatures are equal iff their non-zero
/// mappings are equal, and structural equality is the sole dimensional
/// type-check. The map is ordered, which makes rendering deterministic and
/// lets the type serve as a hash key.
///
/// Signatures are immutable: combinators always return a new value.
///
/// # Examples
///
/// ```rust
/// use dimq_core::{Exponent, UnitSignature};
///
/// let velocity = UnitSignature::builder().with("m", 1).with("s", -1).build();
/// assert_eq!(velocity.to_string(), "m s^-1");
///
/// let area = UnitSignature::base("m").power(Exponent::from(2));
/// assert_eq!(area.exponent("m"), Exponent::from(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UnitSignature {
    dims: BTreeMap<String, Exponent>,
}

impl UnitSignature {
    /// The empty signature.
    ///
    /// ```rust
    /// use dimq_core::UnitSignature;
    /// assert!(UnitSignature::dimensionless().is_dimensionless());
    /// ```
    #[inline]
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A signature with a single dimension of exponent 1.
    ///
    /// ```rust
    /// use dimq_core::{Exponent, UnitSignature};
    /// let m = UnitSignature::base("m");
    /// assert_eq!(m.exponent("m"), Exponent::from(1));
    /// ```
    pub fn base(label: impl Into<String>) -> Self {
        let mut dims = BTreeMap::new();
        dims.insert(label.into(), Exponent::from(1));
        Self { dims }
    }

    /// Builds a signature from (label, exponent) pairs.
    ///
    /// Zero exponents are dropped and repeated labels accumulate, so the
    /// result is always normalized.
    ///
    /// ```rust
    /// use dimq_core::{Exponent, UnitSignature};
    ///
    /// let sig = UnitSignature::from_pairs([("m", 1), ("s", -2), ("kg", 0)]);
    /// assert_eq!(sig.len(), 2);
    /// assert_eq!(sig.exponent("kg"), Exponent::from(0));
    /// ```
    pub fn from_pairs<L, E, I>(pairs: I) -> Self
    where
        L: Into<String>,
        E: Into<Exponent>,
        I: IntoIterator<Item = (L, E)>,
    {
        let mut dims: BTreeMap<String, Exponent> = BTreeMap::new();
        for (label, exp) in pairs {
            let exp = exp.into();
            match dims.entry(label.into()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(exp);
                }
                btree_map::Entry::Occupied(mut slot) => {
                    *slot.get_mut() += exp;
                }
            }
        }
        dims.retain(|_, exp| !exp.is_zero());
        Self { dims }
    }

    /// Starts building a signature one dimension at a time.
    ///
    /// ```rust
    /// use dimq_core::{Exponent, UnitSignature};
    ///
    /// let accel = UnitSignature::builder().with("m", 1).with("s", -2).build();
    /// assert_eq!(accel.exponent("s"), Exponent::from(-2));
    /// ```
    #[inline]
    pub fn builder() -> SignatureBuilder {
        SignatureBuilder::default()
    }

    /// Combines two signatures: each dimension's exponent becomes
    /// `self[d] + scale * other[d]`.
    ///
    /// A scale of `+1` corresponds to multiplication of the underlying
    /// quantities, `-1` to division. Dimensions whose resulting exponent is
    /// 0 are dropped.
    ///
    /// ```rust
    /// use dimq_core::{Exponent, UnitSignature};
    ///
    /// let m = UnitSignature::base("m");
    /// let s = UnitSignature::base("s");
    /// let velocity = m.combine(&s, Exponent::from(-1));
    /// assert_eq!(velocity.to_string(), "m s^-1");
    /// assert!(m.combine(&m, Exponent::from(-1)).is_dimensionless());
    /// ```
    pub fn combine(&self, other: &Self, scale: Exponent) -> Self {
        let mut dims = self.dims.clone();
        for (label, exp) in &other.dims {
            let scaled = *exp * scale;
            match dims.entry(label.clone()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(scaled);
                }
                btree_map::Entry::Occupied(mut slot) => {
                    *slot.get_mut() += scaled;
                }
            }
        }
        dims.retain(|_, exp| !exp.is_zero());
        Self { dims }
    }

    /// Multiplies every exponent by `n`.
    ///
    /// `n` may be any rational, including fractions (`s^1/2` for a square
    /// root of time) and negatives; `power(0)` is dimensionless.
    ///
    /// ```rust
    /// use dimq_core::{Exponent, UnitSignature};
    ///
    /// let hz = UnitSignature::base("s").power(Exponent::from(-1));
    /// assert_eq!(hz.to_string(), "s^-1");
    ///
    /// let sqrt_s = UnitSignature::base("s").power(Exponent::new(1, 2));
    /// assert_eq!(sqrt_s.to_string(), "s^1/2");
    /// ```
    pub fn power(&self, n: Exponent) -> Self {
        if n.is_zero() {
            return Self::dimensionless();
        }
        let dims = self
            .dims
            .iter()
            .map(|(label, exp)| (label.clone(), *exp * n))
            .collect();
        Self { dims }
    }

    /// The reciprocal signature, `power(-1)`.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.power(Exponent::from(-1))
    }

    /// True iff the signature is empty.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_empty()
    }

    /// The exponent of `label`, or 0 when the dimension is absent.
    #[inline]
    pub fn exponent(&self, label: &str) -> Exponent {
        self.dims.get(label).copied().unwrap_or_else(Exponent::zero)
    }

    /// Number of dimensions with a non-zero exponent.
    #[inline]
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// True iff the signature is empty; alias of
    /// [`is_dimensionless`](Self::is_dimensionless) for collection-style
    /// callers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Iterates over `(label, exponent)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Exponent)> {
        self.dims.iter().map(|(label, exp)| (label.as_str(), *exp))
    }
}

/// Incremental [`UnitSignature`] construction.
///
/// Exponents for the same label accumulate; zero exponents disappear when
/// [`build`](SignatureBuilder::build) normalizes the result.
#[derive(Clone, Debug, Default)]
pub struct SignatureBuilder {
    pairs: Vec<(String, Exponent)>,
}

impl SignatureBuilder {
    /// Adds a dimension with the given exponent.
    pub fn with(mut self, label: impl Into<String>, exp: impl Into<Exponent>) -> Self {
        self.pairs.push((label.into(), exp.into()));
        self
    }

    /// Finishes building, normalizing the collected pairs.
    pub fn build(self) -> UnitSignature {
        UnitSignature::from_pairs(self.pairs)
    }
}

/// Deterministic rendering: dimensions in label order, `label^exponent` with
/// an exponent of 1 elided, joined by single spaces. Fractional exponents
/// render as `numerator/denominator`. The dimensionless signature renders as
/// the empty string.
///
/// ```rust
/// use dimq_core::{Exponent, UnitSignature};
///
/// let sig = UnitSignature::builder().with("s", -1).with("m", 1).build();
/// assert_eq!(sig.to_string(), "m s^-1");
/// ```
impl fmt::Display for UnitSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, exp) in &self.dims {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if exp.is_integer() && *exp.numer() == 1 {
                f.write_str(label)?;
            } else {
                write!(f, "{label}^{exp}")?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for UnitSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.dims.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for UnitSignature {
    /// Deserialization re-normalizes, so external data cannot smuggle in a
    /// zero exponent and break the equality invariant.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dims = BTreeMap::<String, Exponent>::deserialize(deserializer)?;
        Ok(Self::from_pairs(dims))
    }
}
