//! SI-suffixed value parsing and formatting.
//!
//! Values are entered as a plain floating-point number optionally followed by
//! one scale suffix:
//!
//! | Suffix | Factor |
//! |--------|--------|
//! | `k`    | 1e3    |
//! | `M`    | 1e6    |
//! | `m`    | 1e-3   |
//! | `u`    | 1e-6   |
//!
//! Suffixes are case-sensitive: `m` is milli, `M` is mega.

use crate::error::{NodalError, Result};

/// Scale factor for a suffix character, if it is one.
pub fn suffix_factor(suffix: char) -> Option<f64> {
    match suffix {
        'k' => Some(1e3),
        'M' => Some(1e6),
        'm' => Some(1e-3),
        'u' => Some(1e-6),
        _ => None,
    }
}

/// Parse a number string with an optional scale suffix.
///
/// ```
/// use nodal_core::value::parse_value;
///
/// assert_eq!(parse_value("2k").unwrap(), 2000.0);
/// assert_eq!(parse_value("12").unwrap(), 12.0);
/// assert!(parse_value("").is_err());
/// ```
pub fn parse_value(text: &str) -> Result<f64> {
    let text = text.trim();
    let last = text
        .chars()
        .last()
        .ok_or_else(|| NodalError::invalid_value(text, "empty value"))?;

    let (num_str, multiplier) = match suffix_factor(last) {
        Some(factor) => (&text[..text.len() - last.len_utf8()], factor),
        None => (text, 1.0),
    };

    num_str
        .parse::<f64>()
        .map(|v| v * multiplier)
        .map_err(|e| NodalError::invalid_value(text, e.to_string()))
}

/// Format a value with a scale suffix and two decimals.
///
/// This is the display counterpart of [`parse_value`]; values smaller than
/// one micro-unit fall back to scientific notation.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e6 {
        format!("{:.2}M", value / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.2}k", value / 1e3)
    } else if magnitude >= 1.0 {
        format!("{:.2}", value)
    } else if magnitude >= 1e-3 {
        format!("{:.2}m", value * 1e3)
    } else if magnitude >= 1e-6 {
        format!("{:.2}u", value * 1e6)
    } else {
        format!("{:.2e}", value)
    }
}
