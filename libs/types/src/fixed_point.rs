//! Fixed-point money for platform micro-unit amounts
//!
//! The advertising platform transmits monetary fields as integer micro-units
//! (10^-6 of the account currency). This module keeps those amounts as scaled
//! integers so repeated download/upload cycles never accumulate
//! floating-point error.
//!
//! ## Design Principles
//!
//! - **No Precision Loss**: Amounts stored as scaled integers
//! - **Overflow Protection**: Checked arithmetic with clear error handling
//! - **Transparency**: Explicit conversion boundaries between floating-point
//!   currency units and fixed-point micros

use crate::errors::MoneyError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Fixed-point money amount in platform micro-units
///
/// Represents currency amounts as scaled integers to avoid floating-point
/// precision loss. Scale factor: 1,000,000 (10^6)
///
/// Examples:
/// - 1.00 currency unit = MicroAmount(1_000_000)
/// - 0.01 currency unit = MicroAmount(10_000)
/// - 2.50 currency units = MicroAmount(2_500_000)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MicroAmount(pub i64);

impl MicroAmount {
    /// Scale factor for 6 decimal places
    pub const SCALE: i64 = 1_000_000;

    /// Maximum representable value (prevents overflow)
    pub const MAX: Self = Self(i64::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i64::MIN);

    /// Zero
    pub const ZERO: Self = Self(0);

    /// One cent (0.01 currency units)
    pub const ONE_CENT: Self = Self(10_000);

    /// One whole currency unit
    pub const ONE_UNIT: Self = Self(1_000_000);

    /// Create from a decimal string with exact parsing
    ///
    /// This is the PRIMARY method for creating a MicroAmount from external
    /// data such as API responses or configuration.
    ///
    /// # Examples
    /// ```
    /// use adwire_types::MicroAmount;
    ///
    /// let amount = MicroAmount::from_decimal_str("2.50").unwrap();
    /// assert_eq!(amount.raw(), 2_500_000);
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self, MoneyError> {
        use std::str::FromStr;

        let decimal = Decimal::from_str(s).map_err(|_| MoneyError::InvalidDecimal {
            input: s.to_string(),
        })?;

        // Scale to 6 decimal places, overflow-checked: the multiply itself
        // can leave Decimal range before the i64 bound is ever consulted
        let scaled = decimal
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or_else(|| Self::range_error(decimal))?;

        // Convert to i64 with bounds checking
        if let Some(value) = scaled.to_i64() {
            Ok(Self(value))
        } else {
            Err(Self::range_error(decimal))
        }
    }

    /// Typed out-of-range error for an amount the micro scale cannot hold
    fn range_error(decimal: Decimal) -> MoneyError {
        let float_val = decimal.to_f64().unwrap_or(f64::NAN);
        if float_val > 0.0 {
            MoneyError::Overflow { value: float_val }
        } else {
            MoneyError::Underflow { value: float_val }
        }
    }

    /// CONVENIENCE method: create from floating-point currency units
    ///
    /// Use this at the boundary where floating-point arithmetic has already
    /// been performed. Validates that the value converts safely.
    ///
    /// # Safety Notes
    /// - Validates finite values only (rejects NaN, infinity)
    /// - Checks for overflow/underflow
    /// - Rounds to the nearest representable micro-unit
    pub fn try_from_units(units: f64) -> Result<Self, MoneyError> {
        if !units.is_finite() {
            return Err(MoneyError::NotFinite { value: units });
        }

        let scaled = units * Self::SCALE as f64;

        // Check for overflow/underflow
        if scaled > i64::MAX as f64 {
            return Err(MoneyError::Overflow { value: units });
        }
        if scaled < i64::MIN as f64 {
            return Err(MoneyError::Underflow { value: units });
        }

        Ok(Self(scaled.round() as i64))
    }

    /// Convert to floating-point currency units
    ///
    /// # Warning
    /// Only use for display, logging, or interfacing with systems that
    /// require floating-point. Never use for money arithmetic.
    pub fn to_units(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    /// Get the raw micro-unit integer
    pub fn raw(self) -> i64 {
        self.0
    }

    /// Create from a raw micro-unit integer (advanced usage)
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from a whole cent count (compile-time constant friendly)
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents * 10_000)
    }

    // CHECKED ARITHMETIC - for calculations where overflow must be handled

    /// Checked addition - returns None on overflow
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Checked subtraction - returns None on underflow
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    // SATURATING ARITHMETIC - for analytics/display where clamping is fine

    /// Saturating addition - clamps to max on overflow
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction - clamps to min on underflow
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Absolute value
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

/// Display implementation for convenient logging
impl fmt::Display for MicroAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.to_units())
    }
}

/// Panicking arithmetic via traits - "should never fail" operations
/// with constants and other scenarios where overflow is impossible
impl Add for MicroAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0) // Will panic on overflow - use for "safe" operations only
    }
}

impl Sub for MicroAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0) // Will panic on underflow - use for "safe" operations only
    }
}
