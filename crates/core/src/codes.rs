//! Codes - Format rules for asset codes and transaction codes
//!
//! Asset codes identify what a transaction moves (USD, BTC, EUR).
//! Transaction codes are caller-chosen identifiers attached to a transaction.

use thiserror::Error;

/// Maximum length of an asset code
pub const MAX_ASSET_CODE_LEN: usize = 10;

/// Maximum length of a transaction code
pub const MAX_TRANSACTION_CODE_LEN: usize = 100;

/// Errors produced by the code format rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("asset code is required")]
    EmptyAssetCode,

    #[error("asset code too long (max {MAX_ASSET_CODE_LEN} chars): {0}")]
    AssetCodeTooLong(String),

    #[error("invalid asset code format: {0} (expected uppercase letters and digits)")]
    InvalidAssetCode(String),

    #[error("transaction code too long (max {MAX_TRANSACTION_CODE_LEN} chars): {0}")]
    TransactionCodeTooLong(String),

    #[error("invalid transaction code format: {0} (allowed: letters, digits, '_' and '-')")]
    InvalidTransactionCode(String),
}

/// Validate an asset code.
///
/// A valid code is 1 to 10 characters of ASCII uppercase letters and digits.
///
/// # Example
/// ```
/// use ledgerkit_core::validate_asset_code;
///
/// assert!(validate_asset_code("USD").is_ok());
/// assert!(validate_asset_code("BTC").is_ok());
/// assert!(validate_asset_code("usd").is_err());
/// assert!(validate_asset_code("US D").is_err());
/// ```
pub fn validate_asset_code(code: &str) -> Result<(), CodeError> {
    if code.is_empty() {
        return Err(CodeError::EmptyAssetCode);
    }

    if code.len() > MAX_ASSET_CODE_LEN {
        return Err(CodeError::AssetCodeTooLong(code.to_string()));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(CodeError::InvalidAssetCode(code.to_string()));
    }

    Ok(())
}

/// Check an asset code without producing an error value
pub fn is_valid_asset_code(code: &str) -> bool {
    validate_asset_code(code).is_ok()
}

/// Validate a transaction code.
///
/// An empty code means "no code" and is accepted; callers that require a code
/// check emptiness themselves.
pub fn validate_transaction_code(code: &str) -> Result<(), CodeError> {
    if code.is_empty() {
        return Ok(());
    }

    if code.len() > MAX_TRANSACTION_CODE_LEN {
        return Err(CodeError::TransactionCodeTooLong(code.to_string()));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CodeError::InvalidTransactionCode(code.to_string()));
    }

    Ok(())
}
