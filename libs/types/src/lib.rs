//! # Adwire Shared Types
//!
//! Value model and fixed-point money types shared across the Adwire
//! bulk-data pipeline.
//!
//! ## Design Philosophy
//!
//! - **One Value Model**: Every wire cell is a [`FieldValue`]; absent data is
//!   an explicit variant, not a sentinel
//! - **No Precision Loss**: Platform money travels as micro-unit integers
//!   ([`MicroAmount`]), never as free-floating decimals
//! - **Clear Boundaries**: Explicit conversion points between floating-point
//!   currency units and fixed-point micros
//! - **Pure Data**: No conversion rules live here; those belong to the codec
//!   crate
//!
//! ## Quick Start
//!
//! ```rust
//! use adwire_types::{FieldValue, MicroAmount};
//!
//! // Wire cells carry loosely typed values; blank cells are Missing
//! let cell = FieldValue::from("2500000");
//! assert!(!cell.is_missing());
//! assert!(FieldValue::Missing.is_missing());
//!
//! // Money is fixed-point micro-units (10^-6 of the account currency)
//! let amount = MicroAmount::from_decimal_str("2.50").unwrap();
//! assert_eq!(amount.raw(), 2_500_000);
//! ```

pub mod errors;
pub mod fixed_point;
pub mod value;

pub use errors::{ConvertError, ConvertResult, MoneyError};
pub use fixed_point::MicroAmount;
pub use value::FieldValue;
