/*
[INPUT]:  Credentials and the HTTP client
[OUTPUT]: Session tokens and decorated requests
[POS]:    Auth layer - login exchange and request decoration
[UPDATE]: When the login endpoint or token header format changes
*/

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde_json::json;
use tracing::debug;

use crate::http::{NobitexClient, NobitexError, Result};

use super::{Credentials, TokenStore};

const LOGIN_ENDPOINT: &str = "/auth/login/";

/// Header carrying the one-time code during login
const TOTP_HEADER: &str = "X-TOTP";

/// Username/password authentication with bearer-token decoration.
///
/// Owns the credentials and the session token store. [`refresh_token`]
/// performs the login exchange; [`authenticate`] attaches the token to an
/// outgoing request once one has been obtained.
///
/// [`refresh_token`]: BasicAuth::refresh_token
/// [`authenticate`]: BasicAuth::authenticate
#[derive(Debug, Clone)]
pub struct BasicAuth {
    credentials: Credentials,
    session: TokenStore,
}

impl BasicAuth {
    /// Create an authenticator with no session token held
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            session: TokenStore::new(),
        }
    }

    /// Token store backing this authenticator
    pub fn session(&self) -> &TokenStore {
        &self.session
    }

    /// Exchange the stored credentials for a fresh session token.
    ///
    /// POST /auth/login/
    ///
    /// Each call fully replaces the prior token: a rejected login or a
    /// transport failure leaves the session without one. Safe to call
    /// repeatedly.
    pub async fn refresh_token(&self, client: &NobitexClient) -> Result<String> {
        self.session.clear();

        let builder = self.login_request(client)?;
        let envelope = client.send_envelope(builder).await?;

        let token: String = envelope.extract_as("key")?.ok_or_else(|| {
            NobitexError::InvalidResponse("login envelope carried no token".to_string())
        })?;

        self.session.set(token.clone());
        debug!(username = %self.credentials.username(), "session token refreshed");
        Ok(token)
    }

    fn login_request(&self, client: &NobitexClient) -> Result<RequestBuilder> {
        let body = json!({
            "username": self.credentials.username,
            "password": self.credentials.password,
            "remember": self.credentials.remember_wire(),
        });

        let mut builder = client.request(Method::POST, LOGIN_ENDPOINT)?.json(&body);
        if let Some(code) = self.credentials.totp_token {
            builder = builder.header(TOTP_HEADER, code);
        }

        Ok(builder)
    }

    /// Attach the session token to an outgoing request.
    ///
    /// With no token held the request passes through unchanged; that is the
    /// unauthenticated initial state, not an error.
    pub fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.get() {
            Some(token) => request.header(AUTHORIZATION, format!("Token {token}")),
            None => request,
        }
    }
}
