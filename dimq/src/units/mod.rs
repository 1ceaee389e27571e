//! Predefined unit constants.
//!
//! Every constant is a zero-argument function returning a fresh
//! [`Quantity`](crate::Quantity): a magnitude (the unit's value in base
//! terms) and a unit signature. `meter()` is `1 {m}`, `kilometer()` is
//! `1000 {m}`, `newton()` is `1 {kg m s^-2}`. Quantities with a unit are
//! written by multiplication, exactly like prose: `3.0 * hour()`,
//! `45.0 * mile() / hour()`.
//!
//! These constants consume only the core construction and arithmetic
//! contract; nothing here is special-cased by the core.
//!
//! ## Modules
//!
//! - [`si`]: the SI base units (plus the `bit`) and their metric-prefix
//!   families.
//! - [`time`]: minute, hour, day.
//! - [`derived`]: named derived units (hertz through ohm), accepted units
//!   (hectare, liter, tonne), and common lab units (calorie, bar, …).
//! - [`imperial`]: the non-metric stragglers (mile, gallon, inch).
//! - [`constants`]: a few physical constants expressed as quantities.
//!
//! All constants are also re-exported flat from this module, so
//! `units::kilometer()` and `units::si::kilometer()` are the same function.

/// Defines the metric-multiple family of a base unit: each entry becomes a
/// zero-argument constant scaling the base by the given factor.
macro_rules! metric_family {
    ($base:ident => { $($name:ident: $factor:expr),+ $(,)? }) => {
        $(
            #[doc = concat!("`", stringify!($factor), "` × [`", stringify!($base), "()`](", stringify!($base), ").")]
            pub fn $name() -> $crate::Quantity {
                $base() * $factor
            }
        )+
    };
}

pub(crate) use metric_family;

pub mod constants;
pub mod derived;
pub mod imperial;
pub mod si;
pub mod time;

pub use constants::*;
pub use derived::*;
pub use imperial::*;
pub use si::*;
pub use time::*;
