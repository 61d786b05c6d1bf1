//! Ready-made transaction shapes
//!
//! - deposit: `@external/<ASSET>` → account
//! - withdrawal: account → `@external/<ASSET>`
//! - transfer: account → account

use crate::builder::TransactionDslInputBuilder;
use crate::model::{FromTo, Send, TransactionDslInput};
use ledgerkit_core::ExternalAccount;

/// Money entering the ledger into `account`
pub fn deposit(asset: &str, value: &str, account: &str) -> TransactionDslInputBuilder {
    transfer(asset, value, &ExternalAccount::reference(asset), account)
}

/// Money leaving the ledger from `account`
pub fn withdrawal(asset: &str, value: &str, account: &str) -> TransactionDslInputBuilder {
    transfer(asset, value, account, &ExternalAccount::reference(asset))
}

/// Money moving between two accounts
pub fn transfer(
    asset: &str,
    value: &str,
    from_account: &str,
    to_account: &str,
) -> TransactionDslInputBuilder {
    let send = Send::builder(asset, value)
        .from(FromTo::new(from_account))
        .to(FromTo::new(to_account))
        .build();
    TransactionDslInput::builder(send)
}
