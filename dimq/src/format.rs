//! Human-friendly rendering of quantities.
//!
//! The core's `Display` prints a magnitude and a raw signature
//! (`217261.44 m`). The helpers here go one step further: expressing a
//! quantity in a chosen display unit for LaTeX output, or picking the metric
//! prefix that keeps the mantissa readable (`217.26144 km` rather than
//! `217261.44 m`). They consume only `to()` from the core contract.

use crate::{Quantity, QuantityResult};

/// Metric prefixes in thousands steps, largest first. The empty entry is the
/// unprefixed base.
const DISPLAY_PREFIXES: &[(&str, f64)] = &[
    ("T", 1e12),
    ("G", 1e9),
    ("M", 1e6),
    ("k", 1e3),
    ("", 1e0),
    ("m", 1e-3),
    ("u", 1e-6),
    ("n", 1e-9),
    ("p", 1e-12),
    ("f", 1e-15),
];

/// Renders `q` in `display_unit` as a LaTeX snippet, rewriting scientific
/// notation as `mantissa \times 10^{exponent}`.
///
/// `precision` is the number of digits after the decimal point in the
/// mantissa. Magnitudes with a zero exponent render as the bare mantissa.
///
/// # Errors
///
/// The same errors as [`Quantity::to`]: a dimension mismatch with the
/// display unit, or a zero-valued display unit.
///
/// ```rust
/// use dimq::format::latex;
/// use dimq::units::{kilometer, meter};
///
/// let d = 217_261.44 * meter();
/// assert_eq!(latex(&d, &meter(), 3).unwrap(), r"2.173 \times 10^{5}");
/// assert_eq!(latex(&d, &kilometer(), 2).unwrap(), r"2.17 \times 10^{2}");
/// ```
pub fn latex(q: &Quantity, display_unit: &Quantity, precision: usize) -> QuantityResult<String> {
    let v = q.to(display_unit)?;
    let formatted = format!("{v:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, "0")) => Ok(mantissa.to_owned()),
        Some((mantissa, exponent)) => Ok(format!(r"{mantissa} \times 10^{{{exponent}}}")),
        None => Ok(formatted),
    }
}

/// Renders `q` against a base unit, choosing the metric prefix that keeps
/// the mantissa in `[1, 1000)` where one exists.
///
/// `symbol` is the base unit's printable symbol; the chosen prefix is glued
/// onto it (`km`, `us`, …). A zero magnitude renders unprefixed.
///
/// # Errors
///
/// The same errors as [`Quantity::to`].
///
/// ```rust
/// use dimq::format::with_metric_prefix;
/// use dimq::units::{meter, second};
///
/// let d = 217_261.44 * meter();
/// assert_eq!(with_metric_prefix(&d, &meter(), "m").unwrap(), "217.26144 km");
///
/// let t = 0.004 * second();
/// assert_eq!(with_metric_prefix(&t, &second(), "s").unwrap(), "4 ms");
/// ```
pub fn with_metric_prefix(
    q: &Quantity,
    base_unit: &Quantity,
    symbol: &str,
) -> QuantityResult<String> {
    let v = q.to(base_unit)?;
    if v == 0.0 {
        return Ok(format!("0 {symbol}"));
    }
    let magnitude = v.abs();
    let (prefix, factor) = DISPLAY_PREFIXES
        .iter()
        .copied()
        .find(|(_, factor)| magnitude >= *factor)
        .unwrap_or(("f", 1e-15));
    Ok(format!("{} {prefix}{symbol}", v / factor))
}
