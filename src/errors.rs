//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// `Validation` and `Authorization` are raised before any request is sent
/// and indicate a contract violation at the call site, not a transient
/// condition. Service-reported failures are not errors at this level: they
/// arrive as the error variant of [`crate::types::Envelope`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request was rejected before being sent because an input was
    /// malformed or missing.
    #[error("invalid input: {0}")]
    Validation(&'static str),
    /// The request was rejected before being sent because no usable
    /// credential was available.
    #[error("missing credential: {0}")]
    Authorization(&'static str),
    /// An HTTP request failed (network error, or an unparseable response).
    #[error("request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
