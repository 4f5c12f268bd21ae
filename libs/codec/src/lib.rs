//! # Adwire Codec - Wire Value Conversion Rules
//!
//! ## Purpose
//!
//! This crate contains the "rules" layer of the Adwire pipeline: everything
//! that turns a raw wire cell into a normalized in-memory value and back.
//! - Scalar normalization (strip display formatting, parse, degrade to zero)
//! - Monetary conversion policy (micro-units, upward cent rounding with a
//!   one-cent floor)
//! - The `FieldMapper` converter/adapter pairing with its missing-value guard
//! - The fixed registry assigning a mapper to each known `FieldType`
//!
//! ## Architecture Role
//!
//! ```text
//! adwire-types → [adwire-codec] → bulk upload/download layers
//!     ↑               ↓
//! Pure Data      Conversion Rules
//! FieldValue     normalize, money
//! MicroAmount    FieldMapper, registry
//! ```
//!
//! ## What This Crate Contains
//! - `normalize`: total text-to-number normalizers
//! - `money`: micro-unit and cent-rounding conversions
//! - `mapper`: `Conversion` rules, `FieldMapper`, and the registry
//! - `field_type`: the six field types the bulk format declares
//! - Wire constants and error types
//!
//! ## What This Crate Does NOT Contain
//! - Network transport to the advertising platform
//! - Tabular/dataframe handling (callers map their own null notion into
//!   `FieldValue::Missing` before calling in)
//! - Raw data structure definitions (these live in adwire-types)

// Core modules
pub mod constants;
pub mod error;
pub mod field_type;
pub mod mapper;
pub mod money;
pub mod normalize;

// Re-export key types for convenience
pub use constants::{CENTS_PER_UNIT, MICROS_PER_UNIT, MIN_BILLABLE_UNITS};
pub use error::{ConvertError, ConvertResult, UnknownFieldType};
pub use field_type::FieldType;
pub use mapper::{mapper_for, mapper_for_name, mappers, Conversion, FieldMapper};
pub use money::{micros_text_to_units, micros_to_units, round_up_to_cents, units_to_micros};
pub use normalize::{parse_double, parse_integer};

// Re-export the shared value types so most callers need only this crate
pub use adwire_types::{FieldValue, MicroAmount, MoneyError};
