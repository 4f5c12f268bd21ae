//! Dynamic cell values for bulk upload and download rows
//!
//! Bulk files carry loosely typed cells: text, counts, micro-amounts, and a
//! lot of blanks. [`FieldValue`] is the single in-memory shape for one cell.
//! Absent cells are explicit (`Missing`), and a NaN float counts as absent to
//! match the null convention of the tabular tooling the rows come from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value from a bulk data row
///
/// Serde representation is untagged: JSON `null` becomes `Missing`, whole
/// numbers become `Integer`, other numbers become `Float`, text becomes
/// `String`. Variant order matters for deserialization priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent cell, serialized as `null`
    Missing,
    /// Whole-number cell (counts, identifiers, micro-amounts)
    Integer(i64),
    /// Floating-point cell
    Float(f64),
    /// Text cell exactly as it appears on the wire
    String(String),
}

impl FieldValue {
    /// True when the cell carries no usable value
    ///
    /// NaN floats count as missing: the tabular layer upstream marks absent
    /// numeric cells as NaN, and conversions must never observe them.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Float(x) => x.is_nan(),
            _ => false,
        }
    }

    /// Short value-shape name for diagnostics and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Missing => "missing",
            FieldValue::Integer(_) => "integer",
            FieldValue::Float(_) => "float",
            FieldValue::String(_) => "string",
        }
    }

    /// Borrow the text of a `String` cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Wire-text rendering; `Missing` renders as the empty string
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Missing => Ok(()),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_detection() {
        assert!(FieldValue::Missing.is_missing());
        assert!(FieldValue::Float(f64::NAN).is_missing());

        assert!(!FieldValue::Integer(0).is_missing());
        assert!(!FieldValue::Float(0.0).is_missing());
        assert!(!FieldValue::String(String::new()).is_missing());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldValue::Missing.type_name(), "missing");
        assert_eq!(FieldValue::Integer(1).type_name(), "integer");
        assert_eq!(FieldValue::Float(1.0).type_name(), "float");
        assert_eq!(FieldValue::from("x").type_name(), "string");
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(FieldValue::from(5i64), FieldValue::Integer(5));
        assert_eq!(FieldValue::from(1.5f64), FieldValue::Float(1.5));
        assert_eq!(FieldValue::from("abc"), FieldValue::String("abc".to_string()));
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Missing);
        assert_eq!(FieldValue::from(Some(5i64)), FieldValue::Integer(5));
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(FieldValue::Missing.to_string(), "");
        assert_eq!(FieldValue::Integer(42).to_string(), "42");
        assert_eq!(FieldValue::Float(1.5).to_string(), "1.5");
        assert_eq!(FieldValue::from("Campaign #1").to_string(), "Campaign #1");
    }

    #[test]
    fn test_serde_untagged() {
        let cell: FieldValue = serde_json::from_str("null").unwrap();
        assert_eq!(cell, FieldValue::Missing);

        let cell: FieldValue = serde_json::from_str("2500000").unwrap();
        assert_eq!(cell, FieldValue::Integer(2_500_000));

        let cell: FieldValue = serde_json::from_str("0.075").unwrap();
        assert_eq!(cell, FieldValue::Float(0.075));

        let cell: FieldValue = serde_json::from_str("\"2500000\"").unwrap();
        assert_eq!(cell, FieldValue::String("2500000".to_string()));

        assert_eq!(serde_json::to_string(&FieldValue::Missing).unwrap(), "null");
        assert_eq!(serde_json::to_string(&FieldValue::Integer(5)).unwrap(), "5");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(FieldValue::from("abc").as_str(), Some("abc"));
        assert_eq!(FieldValue::Integer(5).as_str(), None);
        assert_eq!(FieldValue::Missing.as_str(), None);
    }
}
