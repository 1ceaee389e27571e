//! Quantities over exact rational magnitudes, and fractional exponents that
//! stay fractions.

use dimq::{quantity, signature, Exponent, Quantity, Rational64};

fn main() {
    // A rational-valued flow rate: 2/3 of a cubic metre per second.
    let flow = Quantity::new(Rational64::new(2, 3), signature!(m: 3, s: -1));
    let doubled = flow.checked_add(&flow).unwrap();
    println!("{doubled}");
    assert_eq!(*doubled.value(), Rational64::new(4, 3));

    // Fractional exponents are exact rationals, not floats.
    let root_time = quantity!(1.0, s: 1).pow(Exponent::new(1, 2)).unwrap();
    println!("{root_time}");
    assert_eq!(root_time.unit().to_string(), "s^1/2");
}
