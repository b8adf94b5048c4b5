/*
[INPUT]:  Validated order requests
[OUTPUT]: Placed order confirmation
[POS]:    HTTP layer - order placement (requires authentication)
[UPDATE]: When adding new order endpoints or changing order flow
*/

use reqwest::Method;

use crate::types::{Order, OrderRequest};

use super::client::NobitexClient;
use super::error::Result;

impl NobitexClient {
    /// Place a new order
    ///
    /// POST /market/orders/add
    pub async fn create_order(&self, req: OrderRequest) -> Result<Option<Order>> {
        req.validate()?;

        let builder = self
            .request(Method::POST, "/market/orders/add")?
            .json(&req);
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("order")
    }
}
