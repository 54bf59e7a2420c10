//! Cell value coercion
//!
//! Spreadsheet cells use `-` (or nothing) for "no value". Numeric cells fall
//! back to a default when blank; when they hold something unparseable the
//! caller is told so it can warn before using the default.

use super::weapon::FpCost;

const PLACEHOLDER: &str = "-";

/// Outcome of reading a numeric cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric<T> {
    /// `-` or whitespace only
    Blank,
    Value(T),
    /// Present but not a number of the expected kind
    Invalid,
}

impl<T> Numeric<T> {
    fn parse(value: &str, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        if is_blank(value) {
            Numeric::Blank
        } else {
            parse(value.trim()).map_or(Numeric::Invalid, Numeric::Value)
        }
    }
}

/// Whether a cell holds the placeholder or only whitespace
pub fn is_blank(value: &str) -> bool {
    value == PLACEHOLDER || value.trim().is_empty()
}

pub fn integer(value: &str) -> Numeric<i64> {
    Numeric::parse(value, |v| v.parse().ok())
}

/// Finite floating point cell; `inf`/`NaN` count as invalid
pub fn float(value: &str) -> Numeric<f64> {
    Numeric::parse(value, |v| v.parse::<f64>().ok().filter(|f| f.is_finite()))
}

/// The raw cell, or `None` when blank
pub fn optional_text(value: &str) -> Option<String> {
    if is_blank(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// `true` in any letter case; anything else is false
pub fn flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Split `"Slash / Pierce"` or `"Slash/Pierce"` into its parts
///
/// Order and duplicates are kept; an empty segment stays an empty string.
pub fn damage_types(value: &str) -> Vec<String> {
    if is_blank(value) {
        return Vec::new();
    }
    value
        .replace(" / ", "/")
        .split('/')
        .map(|t| t.trim().to_string())
        .collect()
}

/// Integer FP cost, or the raw text when it isn't a plain number
pub fn fp_cost(value: &str) -> Option<FpCost> {
    match integer(value) {
        Numeric::Blank => None,
        Numeric::Value(points) => Some(FpCost::Points(points)),
        Numeric::Invalid => optional_text(value).map(FpCost::Text),
    }
}
