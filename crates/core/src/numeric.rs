//! Numeric literals - Decimal values as they arrive from untyped JSON
//!
//! A monetary value may reach the SDK as a JSON string (`"100.50"`), a JSON
//! integer (`100`) or a JSON float (`100.5`) once it has been through a generic
//! decoder. `NumericLiteral` captures that ambiguity at the boundary and converts
//! every variant to one canonical decimal string.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A numeric value exactly as it was found in a decoded JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericLiteral {
    /// Decimal encoded as a JSON string, kept verbatim
    Text(String),
    /// JSON integer
    Integer(i64),
    /// JSON floating point number (lossy path)
    Float(f64),
}

impl NumericLiteral {
    /// Read a literal from a JSON value.
    ///
    /// Returns `None` for anything that is neither a string nor a number.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(NumericLiteral::Text(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(NumericLiteral::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    // above i64::MAX, still exact as text
                    Some(NumericLiteral::Text(u.to_string()))
                } else {
                    n.as_f64().map(NumericLiteral::Float)
                }
            }
            _ => None,
        }
    }

    /// Returns true if the literal went through floating point
    pub fn is_lossy(&self) -> bool {
        matches!(self, NumericLiteral::Float(_))
    }

    /// Canonical decimal string for this literal.
    ///
    /// Text is returned unchanged. Floats keep every significant digit of
    /// their shortest round-trip form; non-finite floats become `""`.
    pub fn to_decimal_string(&self) -> String {
        match self {
            NumericLiteral::Text(s) => s.clone(),
            NumericLiteral::Integer(i) => i.to_string(),
            NumericLiteral::Float(f) => float_to_decimal_string(*f),
        }
    }

    /// Parse the literal as a `Decimal`
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            NumericLiteral::Text(s) => parse_decimal(s),
            NumericLiteral::Integer(i) => Some(Decimal::from(*i)),
            NumericLiteral::Float(_) => parse_decimal(&self.to_decimal_string()),
        }
    }

    /// Integer view of the literal, truncating any fractional part toward zero
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            NumericLiteral::Integer(i) => Some(*i),
            NumericLiteral::Float(f) if f.is_finite() => f.trunc().to_i64(),
            NumericLiteral::Float(_) => None,
            NumericLiteral::Text(s) => s
                .trim()
                .parse::<i64>()
                .ok()
                .or_else(|| parse_decimal(s.trim()).and_then(|d| d.trunc().to_i64())),
        }
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}

/// Parse a decimal string.
///
/// The text must be exactly a decimal: surrounding whitespace is rejected,
/// since the string is forwarded to the ledger as written.
pub fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() || s.trim() != s {
        return None;
    }
    Decimal::from_str(s).ok()
}

/// Convert a float to its decimal string without fixing the scale.
///
/// `f64`'s `Display` yields the shortest string that round-trips to the same
/// float and never uses exponent notation, so routing it through `Decimal`
/// only normalises trailing zeros. Floats beyond `Decimal`'s range or 28-digit
/// scale keep that shortest text instead of being rounded.
pub fn float_to_decimal_string(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let shortest = value.to_string();
    let normalized = Decimal::from_str(&shortest)
        .ok()
        .map(|d| d.normalize().to_string())
        .filter(|text| text.parse::<f64>().ok() == Some(value));

    match normalized {
        Some(text) => text,
        None => {
            tracing::warn!(value, "float does not fit a decimal, keeping its shortest form");
            shortest
        }
    }
}
