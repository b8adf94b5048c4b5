/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod envelope;
pub mod error;
pub mod market;
pub mod order;
pub mod user;
pub mod wallet;

pub use envelope::Envelope;
pub use error::{NobitexError, Result};

pub use client::{ClientConfig, NobitexClient};
