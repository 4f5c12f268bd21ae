//! Monetary conversions between platform micro-units and currency units
//!
//! The platform transmits money as integer micro-units; billing happens in
//! whole cents. Inbound values scale down to currency units. Outbound values
//! are rounded UP to the next whole cent with a one-cent floor before scaling
//! back, so a cost is never under-reported.

use crate::constants::{CENTS_PER_UNIT, MICROS_PER_UNIT, MIN_BILLABLE_UNITS};
use crate::normalize::parse_double;
use adwire_types::MicroAmount;
use tracing::debug;

/// Round a currency amount UP to the next whole cent, with a one-cent floor
///
/// Rounding is always upward: `1.001` becomes `1.01`, never `1.00`. Zero and
/// negative amounts clamp to the floor.
///
/// # Examples
/// ```
/// use adwire_codec::round_up_to_cents;
///
/// assert_eq!(round_up_to_cents(1.001), 1.01);
/// assert_eq!(round_up_to_cents(0.0), 0.01);
/// ```
pub fn round_up_to_cents(units: f64) -> f64 {
    let cents_per_unit = CENTS_PER_UNIT as f64;
    let rounded = (units * cents_per_unit).ceil() / cents_per_unit;
    if rounded >= MIN_BILLABLE_UNITS {
        rounded
    } else {
        debug!(
            "Clamping {} to the minimum billable amount {}",
            units, MIN_BILLABLE_UNITS
        );
        MIN_BILLABLE_UNITS
    }
}

/// Convert micro-unit wire text to whole currency units
///
/// The text goes through [`parse_double`] first, so display formatting is
/// tolerated and unusable text degrades to zero. No cent rounding happens on
/// this inbound path.
pub fn micros_text_to_units(text: &str) -> f64 {
    parse_double(text) / MICROS_PER_UNIT as f64
}

/// Convert a numeric micro-unit value to whole currency units
///
/// No parsing and no rounding, just the scale change.
pub fn micros_to_units(micros: f64) -> f64 {
    micros / MICROS_PER_UNIT as f64
}

/// Convert a currency amount to its micro-unit wire representation
///
/// The amount is first rounded up to a billable cent amount, then scaled to
/// micro-units and rounded to the nearest integer. This is the outbound
/// direction used when sending values back to the platform.
pub fn units_to_micros(units: f64) -> MicroAmount {
    let billable = round_up_to_cents(units);
    MicroAmount::from_raw((billable * MICROS_PER_UNIT as f64).round() as i64)
}
