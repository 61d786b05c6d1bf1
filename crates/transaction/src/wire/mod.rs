//! Wire map conversion
//!
//! The backend speaks JSON objects. `marshal` serializes the typed model into
//! a `WireMap`, leaving out unset optional fields; `unmarshal` rebuilds the model
//! from a decoded map without ever failing. Only JSON text decoding can fail.

pub mod marshal;
pub mod reader;
pub mod unmarshal;

use crate::error::WireError;
use crate::model::TransactionDslInput;
use serde_json::{Map, Value};

pub use reader::WireObject;

/// Generic string-keyed JSON object
pub type WireMap = Map<String, Value>;

/// Project a typed value onto a wire map.
///
/// Implemented for every `Serialize` type in `marshal`.
pub trait ToWire {
    fn to_wire(&self) -> WireMap;
}

/// Rebuild a typed value from a wire object. Never fails.
pub trait FromWire: Sized {
    fn from_wire(object: WireObject<'_>) -> Self;
}

impl TransactionDslInput {
    /// Marshal into a wire map
    pub fn to_transaction_map(&self) -> WireMap {
        let map = self.to_wire();
        tracing::trace!(keys = map.len(), "transaction marshaled");
        map
    }

    /// Unmarshal from a wire map
    pub fn from_transaction_map(map: &WireMap) -> Self {
        Self::from_wire(WireObject::new(map))
    }

    /// Marshal into a JSON value
    pub fn to_json_value(&self) -> Value {
        Value::Object(self.to_transaction_map())
    }

    /// Marshal into compact JSON text
    pub fn to_json_string(&self) -> String {
        self.to_json_value().to_string()
    }

    /// Unmarshal from an already decoded JSON value
    pub fn from_json_value(value: &Value) -> Result<Self, WireError> {
        match value {
            Value::Object(map) => Ok(Self::from_transaction_map(map)),
            _ => Err(WireError::NotAnObject),
        }
    }

    /// Decode JSON text and unmarshal it
    pub fn from_json_str(json: &str) -> Result<Self, WireError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }
}
