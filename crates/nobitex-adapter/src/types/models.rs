/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{OrderExecution, OrderSide};

/// Statistics for one market, selected from the stats map by the
/// `"{src}-{dst}"` key. Every field is optional: the exchange omits
/// fields for quiet markets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketStats {
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub best_buy: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub best_sell: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub latest: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub day_low: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub day_high: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub day_open: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub day_close: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub day_change: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub volume_src: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub volume_dst: Option<Decimal>,
    pub is_closed: Option<bool>,
}

/// A single executed market trade
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    pub src_currency: Option<String>,
    pub dst_currency: Option<String>,
    pub market: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub price: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub amount: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub total: Option<Decimal>,
    #[serde(rename = "type")]
    pub side: Option<OrderSide>,
}

/// An order, either from the public book or one owned by the user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub side: Option<OrderSide>,
    pub execution: Option<OrderExecution>,
    pub src_currency: Option<String>,
    pub dst_currency: Option<String>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub price: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub amount: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub total_price: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub matched_amount: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub unmatched_amount: Option<Decimal>,
    pub status: Option<String>,
    pub is_my_order: Option<bool>,
}

/// A registered bank card
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
    pub number: Option<String>,
    pub bank: Option<String>,
    pub owner: Option<String>,
    pub confirmed: Option<bool>,
    pub status: Option<String>,
}

/// A registered bank account
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAccount {
    pub id: Option<i64>,
    pub number: Option<String>,
    pub shaba: Option<String>,
    pub bank: Option<String>,
    pub owner: Option<String>,
    pub confirmed: Option<bool>,
    pub status: Option<String>,
}

/// Profile of the authenticated user.
///
/// Fields the schema does not model land in `extra` instead of being
/// dropped, so callers can still reach them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub city: Option<String>,
    pub bank_cards: Vec<Card>,
    pub bank_accounts: Vec<BankAccount>,
    pub withdraw_eligible: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One wallet of the authenticated user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wallet {
    pub id: Option<i64>,
    pub currency: Option<String>,
    pub user: Option<String>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub balance: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub active_balance: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub blocked_balance: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub rial_balance: Option<Decimal>,
    #[serde(
        deserialize_with = "serde_helpers::deserialize_decimal_opt",
        serialize_with = "serde_helpers::serialize_decimal_opt"
    )]
    pub rial_balance_sell: Option<Decimal>,
    pub deposit_address: Option<String>,
}

/// One recorded login attempt
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginAttempt {
    pub ip: Option<String>,
    pub username: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

/// Account limitations of the authenticated user
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserLimitations {
    pub user_level: Option<String>,
    pub features: serde_json::Map<String, Value>,
    pub limits: serde_json::Map<String, Value>,
}

pub(crate) mod serde_helpers {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    // The exchange sends decimals as strings in most payloads and as bare
    // numbers in a few (rial balances). Accept both, and treat null or an
    // empty string as absent.
    pub fn deserialize_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }

        if let Some(raw) = value.as_str() {
            if raw.trim().is_empty() {
                return Ok(None);
            }
            return Decimal::from_str(raw.trim())
                .map(Some)
                .map_err(serde::de::Error::custom);
        }

        if value.is_number() {
            return Decimal::from_str(&value.to_string())
                .map(Some)
                .map_err(serde::de::Error::custom);
        }

        Err(serde::de::Error::custom("invalid decimal value"))
    }

    pub fn serialize_decimal_opt<S>(
        value: &Option<Decimal>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(decimal) => serializer.serialize_str(&decimal.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn market_stats_deserializes_from_partial_object() {
        let value = json!({"bestBuy": "1", "bestSell": "2"});

        let stats: MarketStats = serde_json::from_value(value).expect("stats should deserialize");

        assert_eq!(stats.best_buy, Some(Decimal::from(1)));
        assert_eq!(stats.best_sell, Some(Decimal::from(2)));
        assert!(stats.latest.is_none());
        assert!(stats.is_closed.is_none());
    }

    #[test]
    fn market_stats_tolerates_unknown_fields() {
        let value = json!({"bestBuy": "1", "somethingNew": {"nested": true}});

        let stats: MarketStats = serde_json::from_value(value).expect("stats should deserialize");

        assert_eq!(stats.best_buy, Some(Decimal::from(1)));
    }

    #[test]
    fn trade_deserializes_iso_timestamp_and_side() {
        let value = json!({
            "srcCurrency": "Bitcoin",
            "dstCurrency": "Tether",
            "timestamp": "2018-11-28T11:46:11.063000+00:00",
            "market": "Bitcoin-Tether",
            "price": "4000000",
            "amount": "0.15",
            "total": "600000",
            "type": "sell"
        });

        let trade: Trade = serde_json::from_value(value).expect("trade should deserialize");

        assert_eq!(trade.side, Some(OrderSide::Sell));
        assert_eq!(trade.price, Some(Decimal::from(4_000_000)));
        assert!(trade.timestamp.is_some());
    }

    #[test]
    fn wallet_accepts_numeric_rial_balance() {
        let value = json!({
            "id": 4159,
            "currency": "btc",
            "balance": "0.0012",
            "blockedBalance": "0",
            "activeBalance": "0.0012",
            "rialBalance": 0,
            "rialBalanceSell": 0,
            "depositAddress": null
        });

        let wallet: Wallet = serde_json::from_value(value).expect("wallet should deserialize");

        assert_eq!(wallet.id, Some(4159));
        assert_eq!(wallet.rial_balance, Some(Decimal::ZERO));
        assert!(wallet.deposit_address.is_none());
    }

    #[test]
    fn profile_captures_unknown_fields() {
        let value = json!({
            "firstName": "John",
            "lastName": "Doe",
            "bankCards": [{"number": "6037-9900-0000-0000", "bank": "Melli", "confirmed": true}],
            "verifications": {"email": true, "phone": false}
        });

        let profile: Profile = serde_json::from_value(value).expect("profile should deserialize");

        assert_eq!(profile.first_name.as_deref(), Some("John"));
        assert_eq!(profile.bank_cards.len(), 1);
        assert!(profile.extra.contains_key("verifications"));
    }

    #[test]
    fn order_deserializes_capitalized_execution() {
        let value = json!({
            "type": "buy",
            "execution": "Limit",
            "srcCurrency": "btc",
            "dstCurrency": "usdt",
            "price": "52000",
            "amount": "0.05",
            "status": "Active"
        });

        let order: Order = serde_json::from_value(value).expect("order should deserialize");

        assert_eq!(order.side, Some(OrderSide::Buy));
        assert_eq!(order.execution, Some(OrderExecution::Limit));
        assert!(order.is_my_order.is_none());
    }

    #[test]
    fn limitations_keep_feature_and_limit_maps() {
        let value = json!({
            "userLevel": "level2",
            "features": {"cryptoTrade": false},
            "limits": {"withdrawRialDaily": {"used": "0", "limit": "900000000"}}
        });

        let limitations: UserLimitations =
            serde_json::from_value(value).expect("limitations should deserialize");

        assert_eq!(limitations.user_level.as_deref(), Some("level2"));
        assert_eq!(limitations.features.get("cryptoTrade"), Some(&json!(false)));
        assert!(limitations.limits.contains_key("withdrawRialDaily"));
    }
}
