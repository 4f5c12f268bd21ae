//! Total text-to-number normalizers for raw wire cells
//!
//! Bulk downloads deliver numbers wrapped in display formatting: currency
//! symbols, thousands separators, percent signs, stray whitespace. These
//! normalizers keep only the numeric characters and parse what remains.
//! They never fail: anything unusable degrades to zero.

use tracing::debug;

/// Normalize formatted text to a double
///
/// Keeps ASCII digits and decimal points, drops everything else (including
/// any sign), then parses. An empty or unparseable remainder yields `0.0`.
///
/// # Examples
/// ```
/// use adwire_codec::parse_double;
///
/// assert_eq!(parse_double("$1,234.56"), 1234.56);
/// assert_eq!(parse_double("abc"), 0.0);
/// ```
pub fn parse_double(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        if !text.is_empty() {
            debug!("Degrading non-numeric double text '{}' to 0.0", text);
        }
        return 0.0;
    }
    match cleaned.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            debug!(
                "Degrading unparseable double text '{}' (cleaned '{}') to 0.0",
                text, cleaned
            );
            0.0
        }
    }
}

/// Normalize formatted text to an integer
///
/// Keeps ASCII digits only. Signs and decimal points are stripped along with
/// the rest, so `"-12.5"` becomes `125`. An empty remainder, or a digit run
/// too long for an i64, yields `0`.
pub fn parse_integer(text: &str) -> i64 {
    let cleaned: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if cleaned.is_empty() {
        if !text.is_empty() {
            debug!("Degrading non-numeric integer text '{}' to 0", text);
        }
        return 0;
    }
    match cleaned.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            debug!(
                "Degrading oversized integer text '{}' (cleaned '{}') to 0",
                text, cleaned
            );
            0
        }
    }
}
