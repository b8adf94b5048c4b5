/*
[INPUT]:  Session token and account arguments
[OUTPUT]: User account data (profile, attempts, cards, limitations)
[POS]:    HTTP layer - user endpoints (require authentication)
[UPDATE]: When adding new user endpoints or changing request bodies
[UPDATE]: 2026-08-03 Route limitations to /users/limitations
*/

use reqwest::Method;

use crate::types::{BankAccountRequest, CardRequest, LoginAttempt, Profile, UserLimitations};

use super::client::NobitexClient;
use super::error::Result;

impl NobitexClient {
    /// Profile of the authenticated user
    ///
    /// POST /users/profile
    pub async fn get_user_profile(&self) -> Result<Option<Profile>> {
        let builder = self.request(Method::POST, "/users/profile")?;
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("profile")
    }

    /// Recent login attempts for the authenticated user
    ///
    /// POST /users/login-attempts
    pub async fn get_login_attempts(&self) -> Result<Option<Vec<LoginAttempt>>> {
        let builder = self.request(Method::POST, "/users/login-attempts")?;
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("attempts")
    }

    /// Referral code of the authenticated user
    ///
    /// POST /users/get-referral-code
    pub async fn get_referral_code(&self) -> Result<Option<String>> {
        let builder = self.request(Method::POST, "/users/get-referral-code")?;
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("referralCode")
    }

    /// Withdrawal and trade limits for the authenticated user
    ///
    /// POST /users/limitations
    pub async fn get_user_limitations(&self) -> Result<Option<UserLimitations>> {
        let builder = self.request(Method::POST, "/users/limitations")?;
        let envelope = self.send_envelope(builder).await?;
        envelope.extract_as("limitations")
    }

    /// Register a bank card. Returns whether the server acknowledged it.
    ///
    /// POST /users/cards-add
    pub async fn add_card(&self, req: CardRequest) -> Result<bool> {
        req.validate()?;

        let builder = self.request(Method::POST, "/users/cards-add")?.json(&req);
        let envelope = self.send_envelope(builder).await?;
        envelope.acknowledged()
    }

    /// Register a bank account. Returns whether the server acknowledged it.
    ///
    /// POST /users/account-add
    pub async fn add_bank_account(&self, req: BankAccountRequest) -> Result<bool> {
        req.validate()?;

        let builder = self.request(Method::POST, "/users/account-add")?.json(&req);
        let envelope = self.send_envelope(builder).await?;
        envelope.acknowledged()
    }
}
