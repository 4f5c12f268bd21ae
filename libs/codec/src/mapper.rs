//! Converter/adapter pairs and the field-type registry
//!
//! A [`FieldMapper`] pairs the inbound conversion (wire to internal) with the
//! outbound one (internal to wire) and short-circuits missing values before
//! either runs. The registry assigns one mapper to each known [`FieldType`];
//! it is built once at first use and never mutated, so lookups are safe from
//! any thread.

use crate::error::{ConvertError, ConvertResult};
use crate::field_type::FieldType;
use crate::money::{micros_text_to_units, units_to_micros};
use crate::normalize::{parse_double, parse_integer};
use adwire_types::FieldValue;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// One directional conversion rule for a wire field
///
/// The fixed set of conversions the registry composes mappers from. Each is
/// a pure function of a single value; none may observe a missing value (the
/// mapper guards for that).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conversion {
    /// Pass the value through unchanged
    #[default]
    Identity,
    /// Strip display formatting and parse as a double, degrading to zero
    NormalizeDouble,
    /// Strip to bare digits and parse as an integer, degrading to zero
    NormalizeInteger,
    /// Parse micro-unit text and scale down to currency units
    MicrosTextToUnits,
    /// Round currency units up to a billable cent amount and scale to micros
    UnitsToMicros,
    /// Cast a scalar to an integer (floats truncate, strings parse strictly)
    CastInteger,
    /// Cast a scalar to a float (strings parse strictly)
    CastFloat,
    /// Render a scalar as wire text
    CastString,
}

impl Conversion {
    /// Conversion name for diagnostics and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Conversion::Identity => "Identity",
            Conversion::NormalizeDouble => "NormalizeDouble",
            Conversion::NormalizeInteger => "NormalizeInteger",
            Conversion::MicrosTextToUnits => "MicrosTextToUnits",
            Conversion::UnitsToMicros => "UnitsToMicros",
            Conversion::CastInteger => "CastInteger",
            Conversion::CastFloat => "CastFloat",
            Conversion::CastString => "CastString",
        }
    }

    /// Apply this conversion to one value
    ///
    /// The missing guard is the mapper's job; applying any conversion
    /// directly to a `Missing` value is a domain error, as is a value shape
    /// the conversion does not accept.
    pub fn apply(&self, value: &FieldValue) -> ConvertResult<FieldValue> {
        match (self, value) {
            (_, FieldValue::Missing) => Err(self.unsupported(value)),
            (Conversion::Identity, v) => Ok(v.clone()),
            (Conversion::NormalizeDouble, FieldValue::String(s)) => {
                Ok(FieldValue::Float(parse_double(s)))
            }
            (Conversion::NormalizeInteger, FieldValue::String(s)) => {
                Ok(FieldValue::Integer(parse_integer(s)))
            }
            (Conversion::MicrosTextToUnits, FieldValue::String(s)) => {
                Ok(FieldValue::Float(micros_text_to_units(s)))
            }
            (Conversion::UnitsToMicros, FieldValue::Float(x)) => {
                Ok(FieldValue::Integer(units_to_micros(*x).raw()))
            }
            (Conversion::UnitsToMicros, FieldValue::Integer(n)) => {
                Ok(FieldValue::Integer(units_to_micros(*n as f64).raw()))
            }
            (Conversion::CastInteger, FieldValue::Integer(n)) => Ok(FieldValue::Integer(*n)),
            (Conversion::CastInteger, FieldValue::Float(x)) => {
                Ok(FieldValue::Integer(*x as i64))
            }
            (Conversion::CastInteger, FieldValue::String(s)) => s
                .trim()
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| ConvertError::InvalidCast {
                    target: "integer",
                    input: s.clone(),
                }),
            (Conversion::CastFloat, FieldValue::Float(x)) => Ok(FieldValue::Float(*x)),
            (Conversion::CastFloat, FieldValue::Integer(n)) => Ok(FieldValue::Float(*n as f64)),
            (Conversion::CastFloat, FieldValue::String(s)) => s
                .trim()
                .parse::<f64>()
                .map(FieldValue::Float)
                .map_err(|_| ConvertError::InvalidCast {
                    target: "float",
                    input: s.clone(),
                }),
            (Conversion::CastString, v) => Ok(FieldValue::String(v.to_string())),
            (_, v) => Err(self.unsupported(v)),
        }
    }

    fn unsupported(&self, value: &FieldValue) -> ConvertError {
        ConvertError::UnsupportedInput {
            conversion: self.name(),
            found: value.type_name(),
        }
    }
}

/// An immutable converter/adapter pair for one wire field type
///
/// `from_external` runs the converter (wire to internal), `to_external` runs
/// the adapter (internal to wire). Both propagate missing values without
/// invoking the conversion: parsing an absent cell would turn it into a
/// spurious zero. The default mapper is the identity pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMapper {
    converter: Conversion,
    adapter: Conversion,
}

impl FieldMapper {
    /// Pair an inbound converter with an outbound adapter
    pub const fn new(converter: Conversion, adapter: Conversion) -> Self {
        Self { converter, adapter }
    }

    /// The inbound conversion, without the missing guard
    pub fn converter(&self) -> Conversion {
        self.converter
    }

    /// The outbound conversion, without the missing guard
    pub fn adapter(&self) -> Conversion {
        self.adapter
    }

    /// Convert a wire value to its internal representation
    ///
    /// Missing values (including NaN floats) come back as `Missing`.
    pub fn from_external(&self, value: &FieldValue) -> ConvertResult<FieldValue> {
        if value.is_missing() {
            return Ok(FieldValue::Missing);
        }
        self.converter.apply(value)
    }

    /// Convert an internal value to its wire representation
    ///
    /// Missing values (including NaN floats) come back as `Missing`.
    pub fn to_external(&self, value: &FieldValue) -> ConvertResult<FieldValue> {
        if value.is_missing() {
            return Ok(FieldValue::Missing);
        }
        self.adapter.apply(value)
    }
}

// The four distinct mapper configurations behind the six field types.
static MICRO_MONEY: FieldMapper =
    FieldMapper::new(Conversion::MicrosTextToUnits, Conversion::UnitsToMicros);
static WHOLE_NUMBER: FieldMapper =
    FieldMapper::new(Conversion::NormalizeInteger, Conversion::CastInteger);
static DECIMAL_NUMBER: FieldMapper =
    FieldMapper::new(Conversion::NormalizeDouble, Conversion::CastFloat);
static TEXT: FieldMapper = FieldMapper::new(Conversion::CastString, Conversion::CastString);

/// Mapper registry, built once on first access
static MAPPERS: Lazy<HashMap<FieldType, &'static FieldMapper>> = Lazy::new(|| {
    FieldType::ALL
        .iter()
        .map(|&field_type| (field_type, mapper_for(field_type)))
        .collect()
});

/// Look up the mapper for a field type
pub fn mapper_for(field_type: FieldType) -> &'static FieldMapper {
    match field_type {
        FieldType::Money | FieldType::Bid => &MICRO_MONEY,
        FieldType::Long | FieldType::Integer => &WHOLE_NUMBER,
        FieldType::Double => &DECIMAL_NUMBER,
        FieldType::String => &TEXT,
    }
}

/// Look up the mapper for a wire type name
///
/// Returns `None` for unknown names; how to surface that is the caller's
/// decision.
pub fn mapper_for_name(name: &str) -> Option<&'static FieldMapper> {
    let field_type: FieldType = name.parse().ok()?;
    MAPPERS.get(&field_type).copied()
}

/// Registry view for iteration and diagnostics
pub fn mappers() -> &'static HashMap<FieldType, &'static FieldMapper> {
    &MAPPERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_propagates_through_every_mapper() {
        for field_type in FieldType::ALL {
            let mapper = mapper_for(field_type);
            assert_eq!(
                mapper.from_external(&FieldValue::Missing).unwrap(),
                FieldValue::Missing,
                "from_external leaked a value for {}",
                field_type
            );
            assert_eq!(
                mapper.to_external(&FieldValue::Missing).unwrap(),
                FieldValue::Missing,
                "to_external leaked a value for {}",
                field_type
            );
            assert_eq!(
                mapper.from_external(&FieldValue::Float(f64::NAN)).unwrap(),
                FieldValue::Missing,
                "NaN float must count as missing for {}",
                field_type
            );
        }
    }

    #[test]
    fn test_string_mapper_is_identity_on_text() {
        let mapper = mapper_for(FieldType::String);
        let cell = FieldValue::from("abc");
        assert_eq!(mapper.from_external(&cell).unwrap(), cell);
        assert_eq!(mapper.to_external(&cell).unwrap(), cell);
    }

    #[test]
    fn test_money_mapper_both_directions() {
        let mapper = mapper_for(FieldType::Money);

        let inbound = mapper.from_external(&FieldValue::from("2500000")).unwrap();
        assert_eq!(inbound, FieldValue::Float(2.5));

        let outbound = mapper.to_external(&FieldValue::Float(2.5)).unwrap();
        assert_eq!(outbound, FieldValue::Integer(2_500_000));

        // Fractional cents round up before scaling
        let outbound = mapper.to_external(&FieldValue::Float(1.004)).unwrap();
        assert_eq!(outbound, FieldValue::Integer(1_010_000));
    }

    #[test]
    fn test_bid_shares_money_configuration() {
        assert_eq!(mapper_for(FieldType::Bid), mapper_for(FieldType::Money));
        assert_eq!(
            mapper_for(FieldType::Long),
            mapper_for(FieldType::Integer)
        );
    }

    #[test]
    fn test_whole_number_mapper() {
        let mapper = mapper_for(FieldType::Long);

        let inbound = mapper.from_external(&FieldValue::from("$1,234")).unwrap();
        assert_eq!(inbound, FieldValue::Integer(1234));

        let outbound = mapper.to_external(&FieldValue::Integer(42)).unwrap();
        assert_eq!(outbound, FieldValue::Integer(42));

        // Floats truncate toward zero on the way out
        let outbound = mapper.to_external(&FieldValue::Float(1.9)).unwrap();
        assert_eq!(outbound, FieldValue::Integer(1));
    }

    #[test]
    fn test_decimal_mapper() {
        let mapper = mapper_for(FieldType::Double);

        let inbound = mapper.from_external(&FieldValue::from("123.456")).unwrap();
        assert_eq!(inbound, FieldValue::Float(123.456));

        let outbound = mapper.to_external(&FieldValue::Float(0.075)).unwrap();
        assert_eq!(outbound, FieldValue::Float(0.075));

        let outbound = mapper.to_external(&FieldValue::from("1.5")).unwrap();
        assert_eq!(outbound, FieldValue::Float(1.5));
    }

    #[test]
    fn test_strict_casts_reject_bad_text() {
        let err = Conversion::CastInteger
            .apply(&FieldValue::from("1.5"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCast { target: "integer", .. }));

        let err = Conversion::CastFloat
            .apply(&FieldValue::from("1.2.3"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::InvalidCast { target: "float", .. }));

        // Surrounding whitespace is tolerated
        assert_eq!(
            Conversion::CastInteger.apply(&FieldValue::from(" 42 ")).unwrap(),
            FieldValue::Integer(42)
        );
    }

    #[test]
    fn test_conversions_reject_foreign_shapes() {
        let err = Conversion::NormalizeDouble
            .apply(&FieldValue::Integer(5))
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedInput {
                conversion: "NormalizeDouble",
                found: "integer",
            }
        );

        let err = Conversion::UnitsToMicros
            .apply(&FieldValue::from("2.5"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedInput { .. }));
    }

    #[test]
    fn test_raw_conversion_rejects_missing() {
        let err = Conversion::Identity.apply(&FieldValue::Missing).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnsupportedInput {
                conversion: "Identity",
                found: "missing",
            }
        );
    }

    #[test]
    fn test_cast_string_renders_scalars() {
        assert_eq!(
            Conversion::CastString.apply(&FieldValue::Integer(42)).unwrap(),
            FieldValue::from("42")
        );
        assert_eq!(
            Conversion::CastString.apply(&FieldValue::Float(1.5)).unwrap(),
            FieldValue::from("1.5")
        );
    }

    #[test]
    fn test_default_mapper_is_identity_pair() {
        let mapper = FieldMapper::default();
        assert_eq!(mapper.converter(), Conversion::Identity);
        assert_eq!(mapper.adapter(), Conversion::Identity);

        let cell = FieldValue::Integer(5);
        assert_eq!(mapper.from_external(&cell).unwrap(), cell);
        assert_eq!(mapper.to_external(&cell).unwrap(), cell);
    }

    #[test]
    fn test_accessors_expose_unguarded_conversions() {
        let mapper = mapper_for(FieldType::Money);
        assert_eq!(mapper.converter(), Conversion::MicrosTextToUnits);
        assert_eq!(mapper.adapter(), Conversion::UnitsToMicros);
    }

    #[test]
    fn test_registry_lookup_by_name() {
        assert!(mapper_for_name("Money").is_some());
        assert!(mapper_for_name("String").is_some());
        assert!(mapper_for_name("Percent").is_none());
        assert!(mapper_for_name("money").is_none());
    }

    #[test]
    fn test_registry_covers_every_field_type() {
        let registry = mappers();
        assert_eq!(registry.len(), FieldType::ALL.len());
        for field_type in FieldType::ALL {
            assert!(registry.contains_key(&field_type));
        }
    }
}
