//! Typed model → wire map
//!
//! The model's serde attributes define the payload: optional fields are
//! omitted rather than written as `null`, so a minimal transaction produces a
//! compact payload. Values are written as held: decimal strings stay strings,
//! percentages are JSON integers.

use super::{ToWire, WireMap};
use serde::Serialize;
use serde_json::Value;

impl<T: Serialize> ToWire for T {
    fn to_wire(&self) -> WireMap {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::error!(value = %other, "value did not marshal to an object");
                WireMap::new()
            }
            Err(err) => {
                tracing::error!(error = %err, "marshal failed");
                WireMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, FromTo, Rate, Send, Share, Source, TransactionDslInput};
    use serde_json::json;

    fn minimal() -> TransactionDslInput {
        let send = Send::builder("USD", "100")
            .from(FromTo::new("acc-1"))
            .to(FromTo::new("acc-2"))
            .build();
        TransactionDslInput::new(send)
    }

    #[test]
    fn test_minimal_payload() {
        let map = minimal().to_transaction_map();
        assert_eq!(
            Value::Object(map),
            json!({
                "description": "",
                "metadata": null,
                "send": {
                    "asset": "USD",
                    "value": "100",
                    "source": { "from": [{ "account": "acc-1" }] },
                    "distribute": { "to": [{ "account": "acc-2" }] }
                }
            })
        );
    }

    #[test]
    fn test_pending_false_omitted() {
        let map = minimal().to_transaction_map();
        assert!(!map.contains_key("pending"));

        let mut input = minimal();
        input.pending = true;
        assert_eq!(input.to_transaction_map().get("pending"), Some(&json!(true)));
    }

    #[test]
    fn test_empty_code_omitted() {
        let map = minimal().to_transaction_map();
        assert!(!map.contains_key("code"));
        assert!(!map.contains_key("chartOfAccountsGroupName"));

        let mut input = minimal();
        input.code = "TX-1".to_string();
        input.chart_of_accounts_group_name = "PIX".to_string();
        let map = input.to_transaction_map();
        assert_eq!(map.get("code"), Some(&json!("TX-1")));
        assert_eq!(map.get("chartOfAccountsGroupName"), Some(&json!("PIX")));
    }

    #[test]
    fn test_missing_send_omitted() {
        let map = TransactionDslInput::default().to_transaction_map();
        assert!(!map.contains_key("send"));
    }

    #[test]
    fn test_full_leg() {
        let mut metadata = ledgerkit_core::Metadata::new();
        metadata.insert("note".into(), json!("x"));

        let leg = FromTo::new("acc-1")
            .with_amount(Amount::new("EUR", "10.00"))
            .with_rate(Rate::new("USD", "EUR", "0.92").with_external_id("fx-1"))
            .with_remaining("acc-9")
            .with_description("converted")
            .with_chart_of_accounts("4000")
            .with_metadata(metadata);

        assert_eq!(
            Value::Object(leg.to_wire()),
            json!({
                "account": "acc-1",
                "amount": { "asset": "EUR", "value": "10.00" },
                "rate": { "from": "USD", "to": "EUR", "value": "0.92", "externalId": "fx-1" },
                "remaining": "acc-9",
                "description": "converted",
                "chartOfAccounts": "4000",
                "metadata": { "note": "x" }
            })
        );
    }

    #[test]
    fn test_share_percentage_of_percentage() {
        assert_eq!(
            Value::Object(Share::new(50).to_wire()),
            json!({ "percentage": 50 })
        );
        assert_eq!(
            Value::Object(Share::new(50).with_percentage_of_percentage(20).to_wire()),
            json!({ "percentage": 50, "percentageOfPercentage": 20 })
        );
    }

    #[test]
    fn test_container_remaining() {
        let source = Source::new(vec![FromTo::new("a")]).with_remaining("r");
        assert_eq!(
            Value::Object(source.to_wire()),
            json!({ "remaining": "r", "from": [{ "account": "a" }] })
        );
    }
}
