use serde::{Deserialize, Serialize};

/// Response wrapper returned by every paste.gg endpoint, discriminated on
/// the `status` field.
///
/// Delete and update respond with a success envelope carrying no payload,
/// so `result` is optional even on success. Service-side failures (bad
/// input, missing key, unknown paste) are delivered as the `Error` variant
/// of a normal response, not as a transport error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub enum Envelope<T> {
    Success {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result: Option<T>,
    },
    Error {
        error: String,
        #[serde(default)]
        message: String,
    },
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success { .. })
    }

    /// Returns the payload, if the response was successful and carried one.
    pub fn result(&self) -> Option<&T> {
        match self {
            Envelope::Success { result } => result.as_ref(),
            Envelope::Error { .. } => None,
        }
    }

    /// Consumes the envelope, returning the payload if any.
    pub fn into_result(self) -> Option<T> {
        match self {
            Envelope::Success { result } => result,
            Envelope::Error { .. } => None,
        }
    }
}
