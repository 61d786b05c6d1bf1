//! Ledgerkit Core - Value rules shared by the SDK
//!
//! This crate contains the leaf rules the transaction model relies on:
//! - `codes`: asset-code and transaction-code formats
//! - `external`: `@external/<ASSET_CODE>` account references
//! - `metadata`: metadata map type and its limits
//! - `numeric`: `NumericLiteral`, the string/integer/float boundary type

pub mod codes;
pub mod external;
pub mod metadata;
pub mod numeric;

pub use codes::{is_valid_asset_code, validate_asset_code, validate_transaction_code, CodeError};
pub use external::{ExternalAccount, ExternalAccountError};
pub use metadata::{validate_metadata, Metadata, MetadataError};
pub use numeric::{float_to_decimal_string, parse_decimal, NumericLiteral};
