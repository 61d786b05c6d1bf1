//! Null-safe accessors over a decoded JSON object
//!
//! A missing key and a key holding the wrong JSON type read the same way:
//! empty string, `false`, `0` or `None`. Validation decides later whether the
//! gap matters.

use super::{FromWire, WireMap};
use ledgerkit_core::{Metadata, NumericLiteral};
use serde_json::Value;

/// Read-only view over one wire object
#[derive(Debug, Clone, Copy)]
pub struct WireObject<'a> {
    map: &'a WireMap,
}

impl<'a> WireObject<'a> {
    pub fn new(map: &'a WireMap) -> Self {
        Self { map }
    }

    /// Raw value under `key`
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// String under `key`, or `""`
    pub fn string(&self, key: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Bool under `key`, or `false`
    pub fn bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Numeric literal under `key`, in whatever form it arrived
    pub fn numeric(&self, key: &str) -> Option<NumericLiteral> {
        self.get(key).and_then(NumericLiteral::from_json)
    }

    /// Decimal string under `key`, or `""`
    pub fn decimal_string(&self, key: &str) -> String {
        match self.numeric(key) {
            Some(literal) => {
                if literal.is_lossy() {
                    tracing::debug!(field = key, %literal, "decimal field arrived as floating point");
                }
                literal.to_decimal_string()
            }
            None => String::new(),
        }
    }

    /// Integer under `key` (floats truncate toward zero), or `0`
    pub fn integer(&self, key: &str) -> i64 {
        self.numeric(key)
            .and_then(|literal| literal.to_i64())
            .unwrap_or(0)
    }

    /// Nested object under `key`
    pub fn object(&self, key: &str) -> Option<WireObject<'a>> {
        self.get(key)
            .and_then(Value::as_object)
            .map(WireObject::new)
    }

    /// Decode the nested object under `key`
    pub fn decode<T: FromWire>(&self, key: &str) -> Option<T> {
        self.object(key).map(T::from_wire)
    }

    /// Decode every object element of the array under `key`.
    ///
    /// Non-object elements are skipped; a missing key gives an empty list.
    pub fn decode_all<T: FromWire>(&self, key: &str) -> Vec<T> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|map| T::from_wire(WireObject::new(map)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Metadata object under `key`, copied as-is
    pub fn metadata(&self, key: &str) -> Option<Metadata> {
        self.get(key).and_then(Value::as_object).cloned()
    }
}
