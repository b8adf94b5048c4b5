/*
[INPUT]:  Raw JSON response bodies
[OUTPUT]: Classified envelopes and extracted payload values
[POS]:    HTTP layer - shared response envelope protocol
[UPDATE]: When the status/message/payload contract changes
*/

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{NobitexError, Result};

const STATUS_OK: &str = "ok";
const STATUS_FAILED: &str = "failed";

/// Uniform response wrapper returned by every Nobitex endpoint.
///
/// Decoded once per response. The payload key is endpoint-specific
/// (`stats`, `trades`, `profile`, ...) and stays in `fields` until a caller
/// asks for it by name; `status` and `message` are lifted out so the
/// success/failure classification is a presence check, not a field lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    fields: serde_json::Map<String, Value>,
}

impl Envelope {
    /// Parse a raw response body
    pub fn decode(body: &str) -> Result<Self> {
        let envelope = serde_json::from_str(body)?;
        Ok(envelope)
    }

    fn has_status(&self, expected: &str) -> bool {
        self.status.as_deref() == Some(expected)
    }

    // A failed status wins over any payload carried alongside it.
    fn check_rejected(&self) -> Result<()> {
        if self.has_status(STATUS_FAILED) {
            if let Some(message) = &self.message {
                return Err(NobitexError::rejected(message.clone()));
            }
        }
        Ok(())
    }

    /// Extract the named payload field.
    ///
    /// Three outcomes: the payload value when the envelope succeeded and
    /// carries the field, `Ok(None)` when there is nothing to report (an
    /// `ok` envelope without the field, or an unrecognized status), and
    /// [`NobitexError::Rejected`] when the server failed the call.
    pub fn extract(&self, field: &str) -> Result<Option<&Value>> {
        self.check_rejected()?;

        if self.has_status(STATUS_OK) {
            return Ok(self.fields.get(field));
        }

        Ok(None)
    }

    /// Extract the named payload field and map it into a typed result
    pub fn extract_as<T: DeserializeOwned>(&self, field: &str) -> Result<Option<T>> {
        match self.extract(field)? {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Extract one entry of a keyed payload object, e.g. the
    /// `"{src}-{dst}"` entry of the market stats map
    pub fn extract_keyed_as<T: DeserializeOwned>(
        &self,
        field: &str,
        key: &str,
    ) -> Result<Option<T>> {
        match self.extract(field)? {
            Some(value) => match value.get(key) {
                Some(entry) => Ok(Some(serde_json::from_value(entry.clone())?)),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }

    /// Fail on a rejected envelope, otherwise report whether the call was
    /// acknowledged with status `"ok"`. Used by endpoints whose only
    /// payload is the status itself.
    pub fn acknowledged(&self) -> Result<bool> {
        self.check_rejected()?;
        Ok(self.has_status(STATUS_OK))
    }
}
