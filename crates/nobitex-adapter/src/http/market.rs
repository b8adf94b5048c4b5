/*
[INPUT]:  Currency pair arguments
[OUTPUT]: Market data (stats, recent trades, open orders)
[POS]:    HTTP layer - public market data endpoints
[UPDATE]: When adding new market endpoints or changing response format
*/

use reqwest::Method;
use serde_json::json;

use crate::types::requests::require_pair;
use crate::types::{MarketStats, Order, Trade};

use super::client::NobitexClient;
use super::error::Result;

impl NobitexClient {
    /// Statistics for one market, keyed as `"{src}-{dst}"` in the stats map
    ///
    /// POST /market/stats
    pub async fn get_market_stats(
        &self,
        src_currency: &str,
        dst_currency: &str,
    ) -> Result<Option<MarketStats>> {
        require_pair(src_currency, dst_currency)?;

        let body = json!({
            "srcCurrency": src_currency,
            "dstCurrency": dst_currency,
        });

        let builder = self.request(Method::POST, "/market/stats")?.json(&body);
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_keyed_as("stats", &format!("{src_currency}-{dst_currency}"))
    }

    /// Recent trades for a currency pair
    ///
    /// POST /market/trades/list
    pub async fn get_market_trades(
        &self,
        src_currency: &str,
        dst_currency: &str,
    ) -> Result<Option<Vec<Trade>>> {
        require_pair(src_currency, dst_currency)?;

        let body = json!({
            "srcCurrency": src_currency,
            "dstCurrency": dst_currency,
        });

        let builder = self
            .request(Method::POST, "/market/trades/list")?
            .json(&body);
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("trades")
    }

    /// Open orders on the public book for a currency pair
    ///
    /// POST /market/orders/list
    pub async fn get_market_orders(
        &self,
        src_currency: &str,
        dst_currency: &str,
    ) -> Result<Option<Vec<Order>>> {
        require_pair(src_currency, dst_currency)?;

        let body = json!({
            "srcCurrency": src_currency,
            "dstCurrency": dst_currency,
        });

        let builder = self
            .request(Method::POST, "/market/orders/list")?
            .json(&body);
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("orders")
    }
}
