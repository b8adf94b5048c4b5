/*
[INPUT]:  Session token and currency arguments
[OUTPUT]: Wallet data (list, single-wallet balance)
[POS]:    HTTP layer - wallet endpoints (require authentication)
[UPDATE]: When adding new wallet endpoints or changing response format
*/

use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::json;

use crate::types::Wallet;

use super::client::NobitexClient;
use super::error::{NobitexError, Result};

impl NobitexClient {
    /// Wallets of the authenticated user
    ///
    /// POST /users/wallets/list
    pub async fn get_wallets(&self) -> Result<Option<Vec<Wallet>>> {
        let builder = self.request(Method::POST, "/users/wallets/list")?;
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("wallets")
    }

    /// Balance of the wallet holding the given currency
    ///
    /// POST /users/wallets/balance
    pub async fn get_wallet_balance(&self, currency: &str) -> Result<Option<Decimal>> {
        if currency.is_empty() {
            return Err(NobitexError::invalid_argument("Currency code is invalid."));
        }

        let body = json!({ "currency": currency });

        let builder = self
            .request(Method::POST, "/users/wallets/balance")?
            .json(&body);
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("balance")
    }
}
