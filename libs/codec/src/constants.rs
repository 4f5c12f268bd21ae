//! Wire-contract constants for the advertising platform bulk format
//!
//! These values are part of the platform's wire contract and MUST remain
//! consistent with it; changing them silently corrupts every monetary field
//! that passes through the mappers.

/// Micro-units per whole currency unit
///
/// The platform transmits monetary fields as integer micro-units:
/// 1,000,000 micro-units equal one unit of the account currency.
pub const MICROS_PER_UNIT: i64 = 1_000_000;

/// Cents per whole currency unit
pub const CENTS_PER_UNIT: i64 = 100;

/// Smallest billable amount, in currency units (one cent)
///
/// Outbound monetary values are rounded up to whole cents and never drop
/// below this floor, so a cost is never under-reported as zero.
pub const MIN_BILLABLE_UNITS: f64 = 0.01;
