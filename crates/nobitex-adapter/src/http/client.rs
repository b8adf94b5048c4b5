/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use tracing::debug;

use crate::auth::{BasicAuth, Credentials};

use super::envelope::Envelope;
use super::error::Result;

/// Base URL for the Nobitex API
const DEFAULT_API_URL: &str = "https://api.nobitex.ir";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Nobitex API.
///
/// Constructed once and reused across all endpoint calls; the authenticator
/// and its session token travel with it.
#[derive(Debug, Clone)]
pub struct NobitexClient {
    http_client: Client,
    base_url: Url,
    auth: BasicAuth,
}

impl NobitexClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), credentials)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            auth: BasicAuth::new(credentials),
        })
    }

    /// Authenticator owning the credentials and session token
    pub fn auth(&self) -> &BasicAuth {
        &self.auth
    }

    /// Exchange the stored credentials for a fresh session token
    pub async fn refresh_token(&self) -> Result<String> {
        self.auth.refresh_token(self).await
    }

    /// Build a request for an API endpoint, decorated with the session
    /// token when one is present
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        let builder = self.http_client.request(method, url);
        Ok(self.auth.authenticate(builder))
    }

    /// Submit a request and decode the response body into an envelope
    pub(crate) async fn send_envelope(&self, builder: RequestBuilder) -> Result<Envelope> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(http_status = %status, bytes = body.len(), "response received");
        Envelope::decode(&body)
    }
}
