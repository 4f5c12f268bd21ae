//! Error surface of the codec crate
//!
//! The conversion errors themselves live in `adwire-types` so both ends of
//! the pipeline can name them without depending on the rules layer; this
//! module re-exports them and adds the registry lookup error.

use thiserror::Error;

pub use adwire_types::errors::{ConvertError, ConvertResult};

/// Lookup failure for a wire field-type name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown field type: '{0}'")]
pub struct UnknownFieldType(pub String);
