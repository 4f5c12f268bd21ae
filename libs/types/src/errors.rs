//! Error types shared across the Adwire crates
//!
//! Covers fixed-point money construction failures and the typed failures
//! raised when a conversion is applied to a value shape outside its domain.

use thiserror::Error;

/// Errors that can occur when constructing or converting micro-unit amounts
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MoneyError {
    /// Value exceeds the maximum representable micro-unit amount
    #[error("Overflow: value {value} exceeds maximum representable value")]
    Overflow { value: f64 },

    /// Value is below the minimum representable micro-unit amount
    #[error("Underflow: value {value} is below minimum representable value")]
    Underflow { value: f64 },

    /// Invalid decimal string format
    #[error("Invalid decimal string: '{input}' - expected numeric format")]
    InvalidDecimal { input: String },

    /// Value is not finite (NaN or infinity)
    #[error("Value is not finite: {value}")]
    NotFinite { value: f64 },
}

/// Result type for value conversions
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Errors raised when a conversion receives a value it cannot handle
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// Strict cast received text that does not parse as the target type
    #[error("Invalid cast: '{input}' cannot be read as {target}")]
    InvalidCast { target: &'static str, input: String },

    /// Conversion applied to a value shape outside its accepted domain
    #[error("{conversion} does not accept {found} values")]
    UnsupportedInput {
        conversion: &'static str,
        found: &'static str,
    },
}
