//! Builders for Send and TransactionDslInput
//!
//! Builders are consumed by `build()`, so a half-assembled request can never be
//! shared while it is still being mutated.

use crate::error::TransactionError;
use crate::model::{Distribute, FromTo, Send, Source, TransactionDslInput};
use ledgerkit_core::Metadata;
use serde_json::Value;

/// Builder for Send
#[derive(Debug, Clone, Default)]
pub struct SendBuilder {
    asset: String,
    value: String,
    from: Vec<FromTo>,
    to: Vec<FromTo>,
    source_remaining: String,
    distribute_remaining: String,
}

impl SendBuilder {
    /// Create a new builder
    pub fn new(asset: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Add a source leg
    pub fn from(mut self, leg: FromTo) -> Self {
        self.from.push(leg);
        self
    }

    /// Add a destination leg
    pub fn to(mut self, leg: FromTo) -> Self {
        self.to.push(leg);
        self
    }

    /// Set the remaining account of the source side
    pub fn source_remaining(mut self, account: impl Into<String>) -> Self {
        self.source_remaining = account.into();
        self
    }

    /// Set the remaining account of the distribute side
    pub fn distribute_remaining(mut self, account: impl Into<String>) -> Self {
        self.distribute_remaining = account.into();
        self
    }

    /// Build the Send.
    ///
    /// A side with no legs and no remaining account is left as `None`.
    pub fn build(self) -> Send {
        let source = if self.from.is_empty() && self.source_remaining.is_empty() {
            None
        } else {
            Some(Source::new(self.from).with_remaining(self.source_remaining))
        };
        let distribute = if self.to.is_empty() && self.distribute_remaining.is_empty() {
            None
        } else {
            Some(Distribute::new(self.to).with_remaining(self.distribute_remaining))
        };

        Send {
            asset: self.asset,
            value: self.value,
            source,
            distribute,
        }
    }
}

impl Send {
    /// Create a new Send builder
    pub fn builder(asset: impl Into<String>, value: impl Into<String>) -> SendBuilder {
        SendBuilder::new(asset, value)
    }
}

/// Builder for TransactionDslInput
#[derive(Debug, Clone)]
pub struct TransactionDslInputBuilder {
    input: TransactionDslInput,
}

impl TransactionDslInputBuilder {
    /// Create a new builder around a Send
    pub fn new(send: Send) -> Self {
        Self {
            input: TransactionDslInput::new(send),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.input.description = description.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.input.code = code.into();
        self
    }

    pub fn chart_of_accounts_group_name(mut self, name: impl Into<String>) -> Self {
        self.input.chart_of_accounts_group_name = name.into();
        self
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.input.pending = pending;
        self
    }

    /// Replace the metadata map
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.input.metadata = Some(metadata);
        self
    }

    /// Add a single metadata entry
    pub fn metadata_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.input
            .metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the Send
    pub fn send(mut self, send: Send) -> Self {
        self.input.send = Some(send);
        self
    }

    /// Build the input without validating it
    pub fn build(self) -> TransactionDslInput {
        self.input
    }

    /// Build the input and run `validate()` on it
    pub fn try_build(self) -> Result<TransactionDslInput, TransactionError> {
        self.input.validate()?;
        Ok(self.input)
    }
}

impl TransactionDslInput {
    /// Create a new input builder
    pub fn builder(send: Send) -> TransactionDslInputBuilder {
        TransactionDslInputBuilder::new(send)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use serde_json::json;

    #[test]
    fn test_send_builder_sides() {
        let send = Send::builder("USD", "100")
            .from(FromTo::new("acc-1"))
            .to(FromTo::new("acc-2").with_amount(Amount::new("USD", "60")))
            .distribute_remaining("acc-3")
            .build();

        let source = send.source.as_ref().unwrap();
        assert_eq!(source.from.len(), 1);
        assert!(source.remaining.is_empty());

        let distribute = send.distribute.as_ref().unwrap();
        assert_eq!(distribute.to.len(), 1);
        assert_eq!(distribute.remaining, "acc-3");
    }

    #[test]
    fn test_send_builder_empty_sides_are_none() {
        let send = Send::builder("USD", "100").build();
        assert!(send.source.is_none());
        assert!(send.distribute.is_none());
    }

    #[test]
    fn test_input_builder() {
        let send = Send::builder("USD", "100")
            .from(FromTo::new("acc-1"))
            .to(FromTo::new("acc-2"))
            .build();

        let input = TransactionDslInput::builder(send)
            .description("Payment")
            .code("PAY-001")
            .pending(true)
            .metadata_entry("reference", "INV-7")
            .metadata_entry("priority", 2)
            .build();

        assert_eq!(input.description, "Payment");
        assert_eq!(input.code, "PAY-001");
        assert!(input.pending);
        let metadata = input.metadata.unwrap();
        assert_eq!(metadata.get("reference"), Some(&json!("INV-7")));
        assert_eq!(metadata.get("priority"), Some(&json!(2)));
    }

    #[test]
    fn test_try_build_validates() {
        let send = Send::builder("USD", "0")
            .from(FromTo::new("acc-1"))
            .to(FromTo::new("acc-2"))
            .build();

        let result = TransactionDslInput::builder(send).try_build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("value must be greater than 0"));
    }
}
