//! Validation rules for the transaction DSL
//!
//! Rules run in a fixed order and the first failure is returned:
//! 1. Send asset (required, then format)
//! 2. Send value (positive decimal)
//! 3. Source legs, 4. Distribute legs (present, accounts set)
//! 5. External accounts (format, then asset cross-check)
//! 6. Leg sizing (amount / share / rate / metadata)
//! 7. Side balance when every leg is explicitly sized
//! 8. Envelope bounds (description, group name, code, metadata)

use crate::error::{SendError, TransactionError};
use crate::model::{FromTo, LegSide, Send, TransactionDslInput};
use ledgerkit_core::{
    parse_decimal, validate_asset_code, validate_metadata, validate_transaction_code,
    ExternalAccount,
};
use rust_decimal::Decimal;

/// Maximum length of a transaction description
pub const MAX_DESCRIPTION_LEN: usize = 256;

/// Maximum length of a chart-of-accounts group name
pub const MAX_GROUP_NAME_LEN: usize = 256;

/// Validation result for Send rules
pub type SendResult = Result<(), SendError>;

impl Send {
    /// Validate the Send and all of its legs
    pub fn validate(&self) -> SendResult {
        validate_send(self)
    }
}

impl TransactionDslInput {
    /// Validate the whole request, Send rules first
    pub fn validate(&self) -> Result<(), TransactionError> {
        validate_transaction(self)
    }
}

/// Validate a Send
pub fn validate_send(send: &Send) -> SendResult {
    let result = run_send_rules(send);
    if let Err(ref err) = result {
        tracing::debug!(asset = %send.asset, value = %send.value, error = %err, "send rejected");
    }
    result
}

/// Validate a TransactionDslInput
pub fn validate_transaction(input: &TransactionDslInput) -> Result<(), TransactionError> {
    let result = run_transaction_rules(input);
    if let Err(ref err) = result {
        tracing::debug!(code = %input.code, error = %err, "transaction rejected");
    }
    result
}

fn run_send_rules(send: &Send) -> SendResult {
    validate_asset(&send.asset)?;
    let value = validate_value(&send.value)?;
    validate_source(send)?;
    validate_distribute(send)?;
    validate_external_accounts(send)?;
    validate_leg_sizing(send)?;
    validate_balance(send, value)
}

fn run_transaction_rules(input: &TransactionDslInput) -> Result<(), TransactionError> {
    let send = input.send.as_ref().ok_or(TransactionError::MissingSend)?;
    send.validate()?;

    let len = input.description.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(TransactionError::DescriptionTooLong {
            len,
            max: MAX_DESCRIPTION_LEN,
        });
    }

    let len = input.chart_of_accounts_group_name.chars().count();
    if len > MAX_GROUP_NAME_LEN {
        return Err(TransactionError::GroupNameTooLong {
            len,
            max: MAX_GROUP_NAME_LEN,
        });
    }

    validate_transaction_code(&input.code).map_err(TransactionError::InvalidCode)?;

    if let Some(metadata) = &input.metadata {
        validate_metadata(metadata)?;
    }

    Ok(())
}

/// Rule 1: asset required, then well-formed
fn validate_asset(asset: &str) -> SendResult {
    if asset.is_empty() {
        return Err(SendError::AssetRequired);
    }
    validate_asset_code(asset).map_err(SendError::InvalidAssetCode)
}

/// Rule 2: value is a decimal > 0. Empty counts as zero.
fn validate_value(value: &str) -> Result<Decimal, SendError> {
    if value.trim().is_empty() {
        return Err(SendError::ValueNotPositive(value.to_string()));
    }

    let parsed = parse_decimal(value).ok_or_else(|| SendError::InvalidValue(value.to_string()))?;
    if parsed <= Decimal::ZERO {
        return Err(SendError::ValueNotPositive(value.to_string()));
    }
    Ok(parsed)
}

/// Rule 3
fn validate_source(send: &Send) -> SendResult {
    let legs = send
        .source
        .as_ref()
        .map(|s| s.from.as_slice())
        .filter(|legs| !legs.is_empty())
        .ok_or(SendError::SourceRequired)?;
    require_accounts(LegSide::Source, legs)
}

/// Rule 4
fn validate_distribute(send: &Send) -> SendResult {
    let legs = send
        .distribute
        .as_ref()
        .map(|d| d.to.as_slice())
        .filter(|legs| !legs.is_empty())
        .ok_or(SendError::DistributeRequired)?;
    require_accounts(LegSide::Distribute, legs)
}

fn require_accounts(side: LegSide, legs: &[FromTo]) -> SendResult {
    match legs.iter().position(|leg| leg.account.is_empty()) {
        Some(index) => Err(SendError::AccountRequired { side, index }),
        None => Ok(()),
    }
}

/// Rule 5: `@` accounts must be `@external/<ASSET>` with the Send's asset
fn validate_external_accounts(send: &Send) -> SendResult {
    for (side, index, leg) in send.legs() {
        if !leg.is_alias() {
            continue;
        }

        let external: ExternalAccount =
            leg.account
                .parse()
                .map_err(|_| SendError::InvalidExternalAccount {
                    side,
                    index,
                    account: leg.account.clone(),
                })?;

        if external.asset_code() != send.asset {
            return Err(SendError::ExternalAssetMismatch {
                account: leg.account.clone(),
                expected: send.asset.clone(),
                actual: external.asset_code().to_string(),
            });
        }
    }
    Ok(())
}

/// Rule 6: each leg is sized at most one way, with sane numbers
fn validate_leg_sizing(send: &Send) -> SendResult {
    for (side, index, leg) in send.legs() {
        if leg.amount.is_some() && leg.share.is_some() {
            return Err(SendError::AmbiguousLegSizing { side, index });
        }

        if let Some(amount) = &leg.amount {
            if amount.asset.is_empty() {
                return Err(SendError::InvalidLegAmount {
                    side,
                    index,
                    reason: "asset is required",
                });
            }
            positive(&amount.value)
                .map_err(|reason| SendError::InvalidLegAmount { side, index, reason })?;
        }

        if let Some(share) = &leg.share {
            if !(1..=100).contains(&share.percentage) {
                return Err(SendError::InvalidShare {
                    side,
                    index,
                    reason: "percentage must be between 1 and 100",
                });
            }
            if !(0..=100).contains(&share.percentage_of_percentage) {
                return Err(SendError::InvalidShare {
                    side,
                    index,
                    reason: "percentageOfPercentage must be between 0 and 100",
                });
            }
        }

        if let Some(rate) = &leg.rate {
            if rate.from.is_empty() || rate.to.is_empty() {
                return Err(SendError::InvalidRate {
                    side,
                    index,
                    reason: "from and to assets are required",
                });
            }
            positive(&rate.value).map_err(|reason| SendError::InvalidRate { side, index, reason })?;
        }

        if let Some(metadata) = &leg.metadata {
            validate_metadata(metadata).map_err(|source| SendError::InvalidLegMetadata {
                side,
                index,
                source,
            })?;
        }
    }
    Ok(())
}

fn positive(value: &str) -> Result<Decimal, &'static str> {
    if value.trim().is_empty() {
        return Err("value must be greater than 0");
    }
    match parse_decimal(value) {
        Some(d) if d > Decimal::ZERO => Ok(d),
        Some(_) => Err("value must be greater than 0"),
        None => Err("value is not a decimal number"),
    }
}

/// Rule 7: fully sized sides must add up to the Send value
fn validate_balance(send: &Send, value: Decimal) -> SendResult {
    if let Some(source) = &send.source {
        check_side_total(LegSide::Source, &source.from, &source.remaining, &send.asset, value)?;
    }
    if let Some(distribute) = &send.distribute {
        check_side_total(
            LegSide::Distribute,
            &distribute.to,
            &distribute.remaining,
            &send.asset,
            value,
        )?;
    }
    Ok(())
}

fn check_side_total(
    side: LegSide,
    legs: &[FromTo],
    remaining: &str,
    asset: &str,
    expected: Decimal,
) -> SendResult {
    // a remaining account absorbs any difference
    if !remaining.is_empty() || legs.iter().any(|leg| !leg.remaining.is_empty()) {
        return Ok(());
    }

    let explicit: Option<Vec<Decimal>> = legs
        .iter()
        .map(|leg| match (&leg.amount, &leg.rate) {
            (Some(amount), None) if amount.asset == asset => amount.decimal(),
            _ => None,
        })
        .collect();

    // shares, rates or unsized legs are resolved by the ledger
    let Some(amounts) = explicit else {
        return Ok(());
    };

    let total = amounts
        .iter()
        .try_fold(Decimal::ZERO, |acc, d| acc.checked_add(*d))
        .unwrap_or(Decimal::MAX);

    if total != expected {
        return Err(SendError::UnbalancedSide {
            side,
            total,
            expected,
        });
    }
    Ok(())
}
