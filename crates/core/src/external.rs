//! External accounts - Synthetic accounts at the ledger boundary
//!
//! Format: `@external/<ASSET_CODE>`
//! Example: `@external/USD` represents USD entering or leaving the ledger.

use crate::codes::validate_asset_code;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every alias-style account reference
pub const ALIAS_PREFIX: char = '@';

/// Prefix of an external account reference, up to the asset code
pub const EXTERNAL_PREFIX: &str = "@external/";

/// Errors produced when parsing an external account reference
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalAccountError {
    #[error("invalid external account format: {0} (expected @external/<ASSET_CODE>)")]
    InvalidFormat(String),
}

/// A parsed external account reference.
///
/// # Example
/// ```
/// use ledgerkit_core::ExternalAccount;
///
/// let account: ExternalAccount = "@external/USD".parse().unwrap();
/// assert_eq!(account.asset_code(), "USD");
/// assert_eq!(account.to_string(), "@external/USD");
///
/// assert!("@external/".parse::<ExternalAccount>().is_err());
/// assert!("@treasury".parse::<ExternalAccount>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExternalAccount {
    asset_code: String,
}

impl ExternalAccount {
    /// Create the external account for an asset code.
    pub fn new(asset_code: &str) -> Result<Self, ExternalAccountError> {
        validate_asset_code(asset_code)
            .map_err(|_| ExternalAccountError::InvalidFormat(Self::reference(asset_code)))?;
        Ok(Self {
            asset_code: asset_code.to_string(),
        })
    }

    /// The asset code embedded in the reference
    pub fn asset_code(&self) -> &str {
        &self.asset_code
    }

    /// Returns true if the account string is alias-style (starts with `@`)
    pub fn is_alias(account: &str) -> bool {
        account.starts_with(ALIAS_PREFIX)
    }

    /// Returns true if the account string is a well-formed external reference
    pub fn is_external(account: &str) -> bool {
        account.parse::<ExternalAccount>().is_ok()
    }

    /// Render the account reference for an asset code without validating it.
    pub fn reference(asset_code: &str) -> String {
        format!("{EXTERNAL_PREFIX}{asset_code}")
    }
}

impl fmt::Display for ExternalAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EXTERNAL_PREFIX, self.asset_code)
    }
}

impl FromStr for ExternalAccount {
    type Err = ExternalAccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s
            .strip_prefix(EXTERNAL_PREFIX)
            .ok_or_else(|| ExternalAccountError::InvalidFormat(s.to_string()))?;

        if validate_asset_code(code).is_err() {
            return Err(ExternalAccountError::InvalidFormat(s.to_string()));
        }

        Ok(Self {
            asset_code: code.to_string(),
        })
    }
}
