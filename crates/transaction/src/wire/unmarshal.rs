//! Wire map → typed model
//!
//! Pure structural reconstruction: nothing here fails or validates. Nested
//! objects come back as `Some` only when the key holds an object, so "not sent"
//! stays distinguishable from "sent empty".

use super::{FromWire, WireObject};
use crate::model::{Amount, Distribute, FromTo, Rate, Send, Share, Source, TransactionDslInput};

impl FromWire for Amount {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            asset: object.string("asset"),
            value: object.decimal_string("value"),
        }
    }
}

impl FromWire for Share {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            percentage: object.integer("percentage"),
            percentage_of_percentage: object.integer("percentageOfPercentage"),
        }
    }
}

impl FromWire for Rate {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            from: object.string("from"),
            to: object.string("to"),
            value: object.decimal_string("value"),
            external_id: object.string("externalId"),
        }
    }
}

impl FromWire for FromTo {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            account: object.string("account"),
            amount: object.decode("amount"),
            share: object.decode("share"),
            rate: object.decode("rate"),
            remaining: object.string("remaining"),
            description: object.string("description"),
            chart_of_accounts: object.string("chartOfAccounts"),
            metadata: object.metadata("metadata"),
        }
    }
}

impl FromWire for Source {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            remaining: object.string("remaining"),
            from: object.decode_all("from"),
        }
    }
}

impl FromWire for Distribute {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            remaining: object.string("remaining"),
            to: object.decode_all("to"),
        }
    }
}

impl FromWire for Send {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            asset: object.string("asset"),
            value: object.decimal_string("value"),
            source: object.decode("source"),
            distribute: object.decode("distribute"),
        }
    }
}

impl FromWire for TransactionDslInput {
    fn from_wire(object: WireObject<'_>) -> Self {
        Self {
            chart_of_accounts_group_name: object.string("chartOfAccountsGroupName"),
            description: object.string("description"),
            code: object.string("code"),
            pending: object.bool("pending"),
            metadata: object.metadata("metadata"),
            send: object.decode("send"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::WireMap;
    use serde_json::{json, Value};

    fn map(value: Value) -> WireMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_full_payload() {
        let m = map(json!({
            "chartOfAccountsGroupName": "PIX",
            "description": "Payment",
            "code": "TX-1",
            "pending": true,
            "metadata": { "ref": "A1" },
            "send": {
                "asset": "USD",
                "value": "100.00",
                "source": {
                    "remaining": "acc-0",
                    "from": [{ "account": "@external/USD", "amount": { "asset": "USD", "value": "100.00" } }]
                },
                "distribute": {
                    "to": [
                        { "account": "acc-1", "share": { "percentage": 60 } },
                        { "account": "acc-2", "share": { "percentage": 40, "percentageOfPercentage": 10 },
                          "rate": { "from": "USD", "to": "EUR", "value": "0.9", "externalId": "r1" },
                          "description": "leg", "chartOfAccounts": "2000", "metadata": { "k": 1 } }
                    ]
                }
            }
        }));

        let input = TransactionDslInput::from_transaction_map(&m);
        assert_eq!(input.chart_of_accounts_group_name, "PIX");
        assert_eq!(input.description, "Payment");
        assert_eq!(input.code, "TX-1");
        assert!(input.pending);
        assert_eq!(input.metadata.as_ref().unwrap().get("ref"), Some(&json!("A1")));

        let send = input.send.as_ref().unwrap();
        assert_eq!(send.asset, "USD");
        assert_eq!(send.value, "100.00");

        let source = send.source.as_ref().unwrap();
        assert_eq!(source.remaining, "acc-0");
        assert_eq!(source.from[0].account, "@external/USD");
        assert_eq!(source.from[0].amount, Some(Amount::new("USD", "100.00")));

        let distribute = send.distribute.as_ref().unwrap();
        assert_eq!(distribute.to.len(), 2);
        assert_eq!(distribute.to[0].share, Some(Share::new(60)));
        let second = &distribute.to[1];
        assert_eq!(second.share, Some(Share::new(40).with_percentage_of_percentage(10)));
        assert_eq!(
            second.rate,
            Some(Rate::new("USD", "EUR", "0.9").with_external_id("r1"))
        );
        assert_eq!(second.description, "leg");
        assert_eq!(second.chart_of_accounts, "2000");
        assert!(second.metadata.is_some());

        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_float_values_keep_precision() {
        let m = map(json!({
            "send": {
                "asset": "BTC",
                "value": 0.12345678,
                "source": { "from": [{ "account": "a", "amount": { "asset": "BTC", "value": 0.12345678 } }] },
                "distribute": { "to": [{ "account": "b", "share": { "percentage": 100.0 } }] }
            }
        }));

        let input = TransactionDslInput::from_transaction_map(&m);
        let send = input.send.unwrap();
        assert_eq!(send.value, "0.12345678");
        assert_eq!(
            send.source.unwrap().from[0].amount.as_ref().unwrap().value,
            "0.12345678"
        );
        assert_eq!(send.distribute.unwrap().to[0].share, Some(Share::new(100)));
    }

    #[test]
    fn test_integer_value() {
        let m = map(json!({ "send": { "asset": "USD", "value": 250 } }));
        let input = TransactionDslInput::from_transaction_map(&m);
        assert_eq!(input.send.unwrap().value, "250");
    }

    #[test]
    fn test_absent_and_wrong_typed_fields() {
        let m = map(json!({
            "description": 42,
            "pending": "yes",
            "metadata": "not a map",
            "send": {
                "asset": "USD",
                "source": "oops",
                "distribute": { "to": [ "not an object", { "account": "b", "amount": [] } ] }
            }
        }));

        let input = TransactionDslInput::from_transaction_map(&m);
        assert_eq!(input.description, "");
        assert!(!input.pending);
        assert!(input.metadata.is_none());

        let send = input.send.unwrap();
        assert_eq!(send.value, "");
        assert!(send.source.is_none());
        let distribute = send.distribute.unwrap();
        assert_eq!(distribute.to.len(), 1);
        assert_eq!(distribute.to[0].account, "b");
        assert!(distribute.to[0].amount.is_none());
    }

    #[test]
    fn test_empty_map() {
        let input = TransactionDslInput::from_transaction_map(&WireMap::new());
        assert_eq!(input, TransactionDslInput::default());
    }
}
