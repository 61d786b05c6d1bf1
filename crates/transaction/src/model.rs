//! Transaction DSL model
//!
//! A transaction request is a tree:
//!
//! ```text
//! TransactionDslInput
//! └── Send (asset, value)
//!     ├── Source     { remaining?, from: [FromTo, ...] }
//!     └── Distribute { remaining?, to:   [FromTo, ...] }
//! ```
//!
//! Each `FromTo` is one leg: the account that gives (source) or receives
//! (distribute) part of the value. Decimal values are kept as the strings the
//! caller supplied; `decimal()` helpers parse them when arithmetic is needed.
//! Optional strings use "empty means unset", as on the wire. Field attributes
//! give the JSON shape: camelCase keys, unset optional fields left out.
//!
//! The `Send` struct shadows the `std::marker::Send` trait wherever it is
//! imported; spell the trait out in full if it is ever needed as a bound.

use ledgerkit_core::{parse_decimal, ExternalAccount, Metadata};
use rust_decimal::Decimal;
use serde::Serialize;
use strum_macros::Display;

/// Which side of a Send a leg belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LegSide {
    /// Accounts value is taken from
    Source,
    /// Accounts value is given to
    Distribute,
}

/// Explicit size of a leg
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Amount {
    /// Asset code of the amount
    pub asset: String,
    /// Decimal string, e.g. `"100.50"`
    pub value: String,
}

impl Amount {
    /// Create a new Amount
    pub fn new(asset: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            value: value.into(),
        }
    }

    /// Parsed value, `None` if the string is not a decimal
    pub fn decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.value)
    }
}

/// Proportional size of a leg
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    /// Percentage of the Send value (1..=100)
    pub percentage: i64,
    /// Percentage applied to `percentage` itself (0 = unset)
    #[serde(skip_serializing_if = "is_zero")]
    pub percentage_of_percentage: i64,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl Share {
    /// Create a share of `percentage` percent
    pub fn new(percentage: i64) -> Self {
        Self {
            percentage,
            percentage_of_percentage: 0,
        }
    }

    pub fn with_percentage_of_percentage(mut self, percentage_of_percentage: i64) -> Self {
        self.percentage_of_percentage = percentage_of_percentage;
        self
    }
}

/// Exchange rate applied to a leg whose asset differs from the Send asset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub from: String,
    pub to: String,
    pub value: String,
    pub external_id: String,
}

impl Rate {
    /// Create a rate converting `from` into `to`
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value: value.into(),
            external_id: String::new(),
        }
    }

    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = external_id.into();
        self
    }

    /// Parsed rate value
    pub fn decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.value)
    }
}

/// One leg of a transfer
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FromTo {
    /// Account id, alias, or `@external/<ASSET>`
    pub account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share: Option<Share>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
    /// Account that absorbs what this leg leaves unallocated
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remaining: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub chart_of_accounts: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl FromTo {
    /// Create a leg for an account
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_share(mut self, share: Share) -> Self {
        self.share = Some(share);
        self
    }

    pub fn with_rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn with_remaining(mut self, remaining: impl Into<String>) -> Self {
        self.remaining = remaining.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_chart_of_accounts(mut self, chart_of_accounts: impl Into<String>) -> Self {
        self.chart_of_accounts = chart_of_accounts.into();
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Returns true if the account is alias-style (starts with `@`)
    pub fn is_alias(&self) -> bool {
        ExternalAccount::is_alias(&self.account)
    }
}

/// Where the value comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Source {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remaining: String,
    pub from: Vec<FromTo>,
}

impl Source {
    pub fn new(from: Vec<FromTo>) -> Self {
        Self {
            remaining: String::new(),
            from,
        }
    }

    pub fn with_remaining(mut self, remaining: impl Into<String>) -> Self {
        self.remaining = remaining.into();
        self
    }

    /// Append a leg
    pub fn add_from(mut self, leg: FromTo) -> Self {
        self.from.push(leg);
        self
    }
}

/// Where the value goes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribute {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub remaining: String,
    pub to: Vec<FromTo>,
}

impl Distribute {
    pub fn new(to: Vec<FromTo>) -> Self {
        Self {
            remaining: String::new(),
            to,
        }
    }

    pub fn with_remaining(mut self, remaining: impl Into<String>) -> Self {
        self.remaining = remaining.into();
        self
    }

    /// Append a leg
    pub fn add_to(mut self, leg: FromTo) -> Self {
        self.to.push(leg);
        self
    }
}

/// The balanced-transfer unit: `value` of `asset` moves from `source` to `distribute`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Send {
    pub asset: String,
    /// Decimal string, e.g. `"100"`
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribute: Option<Distribute>,
}

impl Send {
    /// Create a Send with no legs
    pub fn new(asset: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            value: value.into(),
            source: None,
            distribute: None,
        }
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_distribute(mut self, distribute: Distribute) -> Self {
        self.distribute = Some(distribute);
        self
    }

    /// Parsed value, `None` if the string is not a decimal
    pub fn decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.value)
    }

    /// Every leg with its side and position, source legs first
    pub fn legs(&self) -> impl Iterator<Item = (LegSide, usize, &FromTo)> + '_ {
        let from = self.source.iter().flat_map(|s| {
            s.from
                .iter()
                .enumerate()
                .map(|(i, leg)| (LegSide::Source, i, leg))
        });
        let to = self.distribute.iter().flat_map(|d| {
            d.to.iter()
                .enumerate()
                .map(|(i, leg)| (LegSide::Distribute, i, leg))
        });
        from.chain(to)
    }
}

/// Top-level transaction request
///
/// `description` and `metadata` are always written, `metadata` as `null`
/// when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDslInput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub chart_of_accounts_group_name: String,
    pub description: String,
    /// Caller-chosen transaction code, empty when unset
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Hold the transaction for later commit
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pending: bool,
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send: Option<Send>,
}

impl TransactionDslInput {
    /// Create an input around a Send with every optional field unset
    pub fn new(send: Send) -> Self {
        Self {
            send: Some(send),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_leg_side_display() {
        assert_eq!(LegSide::Source.to_string(), "source");
        assert_eq!(LegSide::Distribute.to_string(), "distribute");
    }

    #[test]
    fn test_amount_decimal() {
        assert_eq!(Amount::new("USD", "10.25").decimal(), Some(dec!(10.25)));
        assert_eq!(Amount::new("USD", "ten").decimal(), None);
    }

    #[test]
    fn test_leg_builders() {
        let leg = FromTo::new("@external/USD")
            .with_amount(Amount::new("USD", "50"))
            .with_description("fee")
            .with_chart_of_accounts("1000");

        assert!(leg.is_alias());
        assert_eq!(leg.amount.as_ref().unwrap().value, "50");
        assert_eq!(leg.description, "fee");
        assert!(leg.share.is_none());
        assert!(leg.remaining.is_empty());
    }

    #[test]
    fn test_legs_order() {
        let send = Send::new("USD", "100")
            .with_source(Source::new(vec![FromTo::new("a"), FromTo::new("b")]))
            .with_distribute(Distribute::new(vec![FromTo::new("c")]));

        let legs: Vec<_> = send
            .legs()
            .map(|(side, i, leg)| (side, i, leg.account.as_str()))
            .collect();

        assert_eq!(
            legs,
            vec![
                (LegSide::Source, 0, "a"),
                (LegSide::Source, 1, "b"),
                (LegSide::Distribute, 0, "c"),
            ]
        );
    }

    #[test]
    fn test_legs_without_containers() {
        let send = Send::new("USD", "100");
        assert_eq!(send.legs().count(), 0);
    }

    #[test]
    fn test_model_is_thread_safe() {
        fn assert_thread_safe<T: std::marker::Send + Sync>() {}
        assert_thread_safe::<Send>();
        assert_thread_safe::<TransactionDslInput>();
    }

    #[test]
    fn test_share_builder() {
        let share = Share::new(50).with_percentage_of_percentage(10);
        assert_eq!(share.percentage, 50);
        assert_eq!(share.percentage_of_percentage, 10);
    }
}
