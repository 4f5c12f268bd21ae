//! The known field types of the bulk data format

use crate::error::UnknownFieldType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field types the bulk format declares for its columns
///
/// Every column in a bulk download carries one of these six type names; the
/// registry in [`crate::mapper`] assigns each a conversion pair. The set is
/// fixed by the platform and known at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Monetary amount, transmitted as micro-unit text
    Money,
    /// Bid amount, same micro-unit encoding as `Money`
    Bid,
    /// Wide whole number (impression counts, identifiers)
    Long,
    /// Floating-point number
    Double,
    /// Whole number
    Integer,
    /// Free-form text
    String,
}

impl FieldType {
    /// Every known field type, in declaration order
    pub const ALL: [FieldType; 6] = [
        FieldType::Money,
        FieldType::Bid,
        FieldType::Long,
        FieldType::Double,
        FieldType::Integer,
        FieldType::String,
    ];

    /// The exact type name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Money => "Money",
            FieldType::Bid => "Bid",
            FieldType::Long => "Long",
            FieldType::Double => "Double",
            FieldType::Integer => "Integer",
            FieldType::String => "String",
        }
    }

    /// Check if this field type carries micro-unit money
    pub fn is_micro_denominated(&self) -> bool {
        matches!(self, FieldType::Money | FieldType::Bid)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    /// Parse an exact wire type name; matching is case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Money" => Ok(FieldType::Money),
            "Bid" => Ok(FieldType::Bid),
            "Long" => Ok(FieldType::Long),
            "Double" => Ok(FieldType::Double),
            "Integer" => Ok(FieldType::Integer),
            "String" => Ok(FieldType::String),
            _ => Err(UnknownFieldType(s.to_string())),
        }
    }
}
