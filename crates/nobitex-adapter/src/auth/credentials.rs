/*
[INPUT]:  Username, password, remember flag, optional TOTP code
[OUTPUT]: Immutable credential set for the login exchange
[POS]:    Auth layer - credential ownership
[UPDATE]: When login body fields change
*/

use std::fmt;

/// Login credentials for the Nobitex API.
///
/// Immutable once constructed; owned by [`BasicAuth`](super::BasicAuth).
#[derive(Clone)]
pub struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) remember: bool,
    pub(crate) totp_token: Option<u32>,
}

impl Credentials {
    /// Create credentials with long-term token generation enabled and no
    /// one-time code
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember: true,
            totp_token: None,
        }
    }

    /// Toggle long-term token generation
    pub fn remember(mut self, remember: bool) -> Self {
        self.remember = remember;
        self
    }

    /// Attach a one-time code generated by an authenticator app
    pub fn with_totp(mut self, totp_token: u32) -> Self {
        self.totp_token = Some(totp_token);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Wire value for the `remember` body field. The API expects the
    /// literal strings "yes"/"no", not a JSON boolean.
    pub(crate) fn remember_wire(&self) -> &'static str {
        if self.remember { "yes" } else { "no" }
    }
}

// Manual Debug so the password never reaches log output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember)
            .field("totp_token", &self.totp_token.map(|_| "[REDACTED]"))
            .finish()
    }
}
