/*
[INPUT]:  Caller-supplied endpoint arguments
[OUTPUT]: Validated, serializable request bodies
[POS]:    Data layer - request types and pre-flight validation
[UPDATE]: When API schema changes or validation rules change
*/

use rust_decimal::Decimal;
use serde::Serialize;

use crate::http::{NobitexError, Result};

use super::enums::{OrderExecution, OrderSide};

/// Body for registering a bank card
#[derive(Debug, Clone, Serialize)]
pub struct CardRequest {
    pub bank: String,
    pub number: String,
}

impl CardRequest {
    pub fn new(bank: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            bank: bank.into(),
            number: number.into(),
        }
    }

    /// Checked before any request is sent: bank name non-empty, card
    /// number exactly 16 digits.
    pub fn validate(&self) -> Result<()> {
        if self.bank.is_empty() {
            return Err(NobitexError::invalid_argument("Bank name is invalid."));
        }
        if !is_card_number(&self.number) {
            return Err(NobitexError::invalid_argument("Card number is invalid."));
        }
        Ok(())
    }
}

/// Body for registering a bank account
#[derive(Debug, Clone, Serialize)]
pub struct BankAccountRequest {
    pub bank: String,
    pub number: String,
    pub shaba: String,
}

impl BankAccountRequest {
    pub fn new(
        bank: impl Into<String>,
        number: impl Into<String>,
        shaba: impl Into<String>,
    ) -> Self {
        Self {
            bank: bank.into(),
            number: number.into(),
            shaba: shaba.into(),
        }
    }

    /// Checked before any request is sent: bank name non-empty, account
    /// number digits only, shaba the literal `IR` followed by 24 digits.
    pub fn validate(&self) -> Result<()> {
        if self.bank.is_empty() {
            return Err(NobitexError::invalid_argument("Bank name is invalid."));
        }
        if !all_digits(&self.number) {
            return Err(NobitexError::invalid_argument("Account number is invalid."));
        }
        if !is_shaba(&self.shaba) {
            return Err(NobitexError::invalid_argument("Account shaba is invalid."));
        }
        Ok(())
    }
}

/// Body for placing an order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(rename = "type")]
    pub side: OrderSide,
    pub execution: OrderExecution,
    pub src_currency: String,
    pub dst_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl OrderRequest {
    /// Checked before any request is sent: currency pair non-empty,
    /// amount positive, price present for limit execution.
    pub fn validate(&self) -> Result<()> {
        require_pair(&self.src_currency, &self.dst_currency)?;
        if self.amount <= Decimal::ZERO {
            return Err(NobitexError::invalid_argument("Order amount is invalid."));
        }
        if self.execution == OrderExecution::Limit && self.price.is_none() {
            return Err(NobitexError::invalid_argument("Order price is invalid."));
        }
        Ok(())
    }
}

/// Shared pair check for market endpoints. Null and empty are rejected
/// identically; there is no such thing as a blank currency code.
pub(crate) fn require_pair(src_currency: &str, dst_currency: &str) -> Result<()> {
    if src_currency.is_empty() {
        return Err(NobitexError::invalid_argument("Source currency is invalid."));
    }
    if dst_currency.is_empty() {
        return Err(NobitexError::invalid_argument(
            "Destination currency is invalid.",
        ));
    }
    Ok(())
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_card_number(value: &str) -> bool {
    value.len() == 16 && all_digits(value)
}

fn is_shaba(value: &str) -> bool {
    match value.strip_prefix("IR") {
        Some(digits) => digits.len() == 24 && all_digits(digits),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<()>, expected: &str) {
        match result {
            Err(NobitexError::InvalidArgument(message)) => assert_eq!(message, expected),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_card_number_too_short() {
        let req = CardRequest::new("Melli", "1234");
        assert_invalid(req.validate(), "Card number is invalid.");
    }

    #[test]
    fn test_card_number_sixteen_digits_passes() {
        let req = CardRequest::new("Melli", "1234567812345678");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_card_number_with_letters_rejected() {
        let req = CardRequest::new("Melli", "123456781234567a");
        assert_invalid(req.validate(), "Card number is invalid.");
    }

    #[test]
    fn test_card_empty_bank_rejected() {
        let req = CardRequest::new("", "1234567812345678");
        assert_invalid(req.validate(), "Bank name is invalid.");
    }

    #[test]
    fn test_shaba_too_short() {
        let req = BankAccountRequest::new("Melli", "1", "IR12345");
        assert_invalid(req.validate(), "Account shaba is invalid.");
    }

    #[test]
    fn test_shaba_full_length_passes() {
        let req = BankAccountRequest::new("Melli", "1", "IR123456789012345678901234");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_shaba_without_prefix_rejected() {
        let req = BankAccountRequest::new("Melli", "1", "123456789012345678901234NL");
        assert_invalid(req.validate(), "Account shaba is invalid.");
    }

    #[test]
    fn test_account_number_requires_digits() {
        let req = BankAccountRequest::new("Melli", "12a4", "IR123456789012345678901234");
        assert_invalid(req.validate(), "Account number is invalid.");
    }

    #[test]
    fn test_require_pair_rejects_empty_source() {
        assert_invalid(require_pair("", "usdt"), "Source currency is invalid.");
        assert_invalid(require_pair("btc", ""), "Destination currency is invalid.");
        assert!(require_pair("btc", "usdt").is_ok());
    }

    #[test]
    fn test_order_amount_must_be_positive() {
        let req = OrderRequest {
            side: OrderSide::Buy,
            execution: OrderExecution::Market,
            src_currency: "btc".to_string(),
            dst_currency: "usdt".to_string(),
            amount: Decimal::ZERO,
            price: None,
        };
        assert_invalid(req.validate(), "Order amount is invalid.");
    }

    #[test]
    fn test_limit_order_requires_price() {
        let req = OrderRequest {
            side: OrderSide::Sell,
            execution: OrderExecution::Limit,
            src_currency: "btc".to_string(),
            dst_currency: "usdt".to_string(),
            amount: Decimal::ONE,
            price: None,
        };
        assert_invalid(req.validate(), "Order price is invalid.");
    }

    #[test]
    fn test_order_body_uses_wire_field_names() {
        let req = OrderRequest {
            side: OrderSide::Buy,
            execution: OrderExecution::Limit,
            src_currency: "btc".to_string(),
            dst_currency: "usdt".to_string(),
            amount: Decimal::new(5, 2),
            price: Some(Decimal::from(52_000)),
        };

        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["type"], "buy");
        assert_eq!(body["execution"], "limit");
        assert_eq!(body["srcCurrency"], "btc");
        assert_eq!(body["amount"], "0.05");
        assert_eq!(body["price"], "52000");
    }
}
