//! Transaction DSL errors

use crate::model::LegSide;
use ledgerkit_core::{CodeError, MetadataError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors reported by `Send::validate`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    // === Required fields ===
    #[error("asset is required")]
    AssetRequired,

    #[error("value must be greater than 0 (got {0:?})")]
    ValueNotPositive(String),

    #[error("source is required with at least one from entry")]
    SourceRequired,

    #[error("distribute is required with at least one to entry")]
    DistributeRequired,

    #[error("{side} entry {index}: account is required")]
    AccountRequired { side: LegSide, index: usize },

    // === Format ===
    #[error("invalid asset code: {0}")]
    InvalidAssetCode(CodeError),

    #[error("invalid value: {0:?} is not a decimal number")]
    InvalidValue(String),

    #[error("{side} entry {index}: invalid external account format: {account} (expected @external/<ASSET_CODE>)")]
    InvalidExternalAccount {
        side: LegSide,
        index: usize,
        account: String,
    },

    // === Semantic mismatch ===
    #[error("asset code mismatch: external account {account} holds {actual}, transaction asset is {expected}")]
    ExternalAssetMismatch {
        account: String,
        expected: String,
        actual: String,
    },

    // === Leg sizing ===
    #[error("{side} entry {index}: a leg cannot carry both an amount and a share")]
    AmbiguousLegSizing { side: LegSide, index: usize },

    #[error("{side} entry {index}: invalid amount: {reason}")]
    InvalidLegAmount {
        side: LegSide,
        index: usize,
        reason: &'static str,
    },

    #[error("{side} entry {index}: invalid share: {reason}")]
    InvalidShare {
        side: LegSide,
        index: usize,
        reason: &'static str,
    },

    #[error("{side} entry {index}: invalid rate: {reason}")]
    InvalidRate {
        side: LegSide,
        index: usize,
        reason: &'static str,
    },

    #[error("{side} entry {index}: invalid metadata: {source}")]
    InvalidLegMetadata {
        side: LegSide,
        index: usize,
        source: MetadataError,
    },

    #[error("{side} unbalanced: legs total {total}, transaction value is {expected}")]
    UnbalancedSide {
        side: LegSide,
        total: Decimal,
        expected: Decimal,
    },
}

impl SendError {
    /// Returns true for missing-field errors
    pub fn is_required_field(&self) -> bool {
        matches!(
            self,
            SendError::AssetRequired
                | SendError::ValueNotPositive(_)
                | SendError::SourceRequired
                | SendError::DistributeRequired
                | SendError::AccountRequired { .. }
        )
    }

    /// Returns true for external account errors (format or asset mismatch)
    pub fn is_external_account_error(&self) -> bool {
        matches!(
            self,
            SendError::InvalidExternalAccount { .. } | SendError::ExternalAssetMismatch { .. }
        )
    }
}

/// Errors reported by `TransactionDslInput::validate`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("send operation is required")]
    MissingSend,

    #[error("invalid send operation: {0}")]
    InvalidSend(#[from] SendError),

    #[error("description too long: {len} chars (max {max})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("chart of accounts group name too long: {len} chars (max {max})")]
    GroupNameTooLong { len: usize, max: usize },

    #[error("invalid transaction code: {0}")]
    InvalidCode(CodeError),

    #[error("invalid metadata: {0}")]
    InvalidMetadata(#[from] MetadataError),
}

impl TransactionError {
    /// The wrapped send error, if the failure came from the Send rules
    pub fn send_error(&self) -> Option<&SendError> {
        match self {
            TransactionError::InvalidSend(err) => Some(err),
            _ => None,
        }
    }
}

/// Errors decoding wire text. Map-level conversion itself never fails.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("wire payload must be a JSON object")]
    NotAnObject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_send_error_wrapping() {
        let err: TransactionError = SendError::ValueNotPositive("0".to_string()).into();
        let message = err.to_string();
        assert!(message.starts_with("invalid send operation: "));
        assert!(message.contains("value must be greater than 0"));
        assert!(err.send_error().is_some());
    }

    #[test]
    fn test_leg_error_display() {
        let err = SendError::AccountRequired {
            side: LegSide::Distribute,
            index: 1,
        };
        assert_eq!(err.to_string(), "distribute entry 1: account is required");
        assert!(err.is_required_field());
    }

    #[test]
    fn test_mismatch_display() {
        let err = SendError::ExternalAssetMismatch {
            account: "@external/EUR".to_string(),
            expected: "USD".to_string(),
            actual: "EUR".to_string(),
        };
        assert!(err.to_string().contains("asset code mismatch"));
        assert!(err.is_external_account_error());
        assert!(!err.is_required_field());
    }

    #[test]
    fn test_unbalanced_display() {
        let err = SendError::UnbalancedSide {
            side: LegSide::Source,
            total: dec!(90),
            expected: dec!(100),
        };
        assert_eq!(
            err.to_string(),
            "source unbalanced: legs total 90, transaction value is 100"
        );
    }
}
