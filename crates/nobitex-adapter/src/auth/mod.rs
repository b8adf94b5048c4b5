/*
[INPUT]:  Login credentials and session state
[OUTPUT]: Bearer tokens and decorated requests
[POS]:    Auth layer - handles Nobitex API authentication
[UPDATE]: When the login flow or token handling changes
*/

pub mod basic;
pub mod credentials;
pub mod session;

pub use basic::BasicAuth;
pub use credentials::Credentials;
pub use session::TokenStore;
