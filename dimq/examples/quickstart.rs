//! Minimal end-to-end example: compose units, convert, and print.

use dimq::units::{hour, kilometer, mile};

fn main() {
    let v = 45.0 * mile() / hour();
    let d = 3.0 * hour() * v;

    println!("{d}");
    println!("{} km", d.to(&kilometer()).unwrap());

    assert!((d.value() - 217_261.44).abs() < 1e-6);
}
