//! Dimension labels are an open vocabulary: invent your own and the
//! bookkeeping still applies.

use dimq::{quantity, QuantityError};

fn main() -> Result<(), QuantityError> {
    let stock = quantity!(120.0, widgets: 1);
    let rate = quantity!(8.0, widgets: 1, day: -1);

    let days_left = stock.checked_div(&rate)?;
    println!("inventory lasts {days_left}");

    // Mixing made-up dimensions is still an error.
    let sprockets = quantity!(3.0, sprockets: 1);
    let err = stock.checked_add(&sprockets).unwrap_err();
    println!("as expected: {err}");

    Ok(())
}
