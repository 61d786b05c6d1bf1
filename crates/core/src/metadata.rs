//! Metadata - Free-form key/value data attached to transactions and legs
//!
//! Values are restricted to JSON scalars so the backend can index them.

use serde_json::{Map, Value};
use thiserror::Error;

/// Metadata map as carried on the wire
pub type Metadata = Map<String, Value>;

/// Maximum length of a metadata key
pub const MAX_METADATA_KEY_LEN: usize = 100;

/// Maximum length of a string metadata value
pub const MAX_METADATA_VALUE_LEN: usize = 2000;

/// Errors produced by the metadata rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("metadata key cannot be empty")]
    EmptyKey,

    #[error("metadata key too long (max {MAX_METADATA_KEY_LEN} chars): {0}")]
    KeyTooLong(String),

    #[error("metadata value for key {key} too long: {len} chars (max {MAX_METADATA_VALUE_LEN})")]
    ValueTooLong { key: String, len: usize },

    #[error("metadata value for key {key} must be a string, number, boolean or null")]
    UnsupportedValue { key: String },
}

/// Validate a metadata map.
///
/// An empty map is always valid.
pub fn validate_metadata(metadata: &Metadata) -> Result<(), MetadataError> {
    for (key, value) in metadata {
        if key.is_empty() {
            return Err(MetadataError::EmptyKey);
        }

        if key.chars().count() > MAX_METADATA_KEY_LEN {
            return Err(MetadataError::KeyTooLong(key.clone()));
        }

        match value {
            Value::String(s) => {
                let len = s.chars().count();
                if len > MAX_METADATA_VALUE_LEN {
                    return Err(MetadataError::ValueTooLong {
                        key: key.clone(),
                        len,
                    });
                }
            }
            Value::Number(_) | Value::Bool(_) | Value::Null => {}
            Value::Array(_) | Value::Object(_) => {
                return Err(MetadataError::UnsupportedValue { key: key.clone() });
            }
        }
    }

    Ok(())
}
