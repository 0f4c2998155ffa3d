//! HTTP client for the paste.gg API.

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::{
    types::{CreatePaste, Envelope, Paste, UpdatePaste},
    Error,
};

/// Endpoints and API version for the paste service.
///
/// The defaults point at the public paste.gg deployment. `main_url` is the
/// browsable site root, used to build the `url` field of freshly created
/// pastes; the API itself lives under `base_url`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the API. Defaults to `https://api.paste.gg`.
    pub base_url: String,
    /// Base URL of the public site. Defaults to `https://paste.gg`.
    pub main_url: String,
    /// API version appended to the base URL. Defaults to 1.
    pub version: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.paste.gg".to_string(),
            main_url: "https://paste.gg".to_string(),
            version: 1,
        }
    }
}

/// HTTP client for the paste.gg API.
///
/// Wraps the four paste endpoints (get, create, delete, update) and parses
/// every response into an [`Envelope`]. Each call builds a fresh
/// `reqwest::Client` and issues exactly one request: no retries, no
/// timeout, no pooling. Callers wanting a timeout should wrap the call at
/// the call site.
///
/// The client holds no mutable state, so a single instance can serve
/// concurrent calls.
pub struct Client {
    /// Auth key for the paste.gg API. An empty key is treated as absent.
    auth_key: Option<String>,
    /// Full URL for the versioned API root, e.g. `https://api.paste.gg/v1`.
    api_url: String,
    config: Config,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates an anonymous client pointing at the public paste.gg API.
    pub fn new() -> Self {
        Self::with_config(None, Config::default())
    }

    /// Creates a client that authenticates with the given API key.
    pub fn with_auth_key(auth_key: &str) -> Self {
        Self::with_config(Some(auth_key), Config::default())
    }

    /// Creates a client with an optional API key and custom endpoints.
    /// Used for testing with wiremock, and for self-hosted deployments.
    pub fn with_config(auth_key: Option<&str>, config: Config) -> Self {
        Self {
            auth_key: auth_key
                .filter(|key| !key.is_empty())
                .map(|key| key.to_string()),
            api_url: format!("{}/v{}", config.base_url, config.version),
            config,
        }
    }

    /// The endpoints this client was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches an existing paste. `full` includes file contents in the
    /// result; the default listing carries file metadata only.
    pub async fn get(&self, id: &str, full: bool) -> Result<Envelope<Paste>, Error> {
        if id.is_empty() {
            return Err(Error::Validation("paste id must not be empty"));
        }
        let mut url = self.endpoint(&format!("/pastes/{}", id))?;
        url.query_pairs_mut()
            .append_pair("full", if full { "true" } else { "false" });
        self.send::<()>(Method::GET, url, None, None).await
    }

    /// Creates a new paste.
    ///
    /// On success the returned paste's `url` field is filled in with the
    /// browsable location under the configured `main_url`; the service
    /// itself does not send one.
    pub async fn create(&self, paste: &CreatePaste) -> Result<Envelope<Paste>, Error> {
        if paste.files.is_empty() {
            return Err(Error::Validation("a paste requires at least one file"));
        }
        let url = self.endpoint("/pastes")?;
        let mut envelope = self.send(Method::POST, url, None, Some(paste)).await?;
        if let Envelope::Success {
            result: Some(created),
        } = &mut envelope
        {
            created.url = Some(format!("{}/{}", self.config.main_url, created.id));
        }
        Ok(envelope)
    }

    /// Deletes an existing paste.
    ///
    /// `key` is a deletion key (returned when the paste was created
    /// anonymously) or an auth key; leave it `None` to use the key the
    /// client was constructed with.
    pub async fn delete(&self, id: &str, key: Option<&str>) -> Result<Envelope<Paste>, Error> {
        let has_key = key.is_some_and(|k| !k.is_empty()) || self.auth_key.is_some();
        if !has_key {
            return Err(Error::Authorization(
                "deleting a paste requires an auth key or deletion key",
            ));
        }
        let url = self.endpoint(&format!("/pastes/{}", id))?;
        self.send::<()>(Method::DELETE, url, key, None).await
    }

    /// Updates an existing paste. Requires the client to have an auth key.
    pub async fn update(&self, id: &str, patch: &UpdatePaste) -> Result<Envelope<Paste>, Error> {
        if self.auth_key.is_none() {
            return Err(Error::Authorization(
                "an auth key is required for this endpoint",
            ));
        }
        let url = self.endpoint(&format!("/pastes/{}", id))?;
        self.send(Method::PATCH, url, None, Some(patch)).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Authorization header value for a request. A non-empty per-call key
    /// takes precedence over the client-level key for that call only.
    fn auth_header(&self, key: Option<&str>) -> Option<String> {
        key.filter(|k| !k.is_empty())
            .or(self.auth_key.as_deref())
            .map(|k| format!("Key {}", k))
    }

    async fn send<B>(
        &self,
        method: Method,
        url: Url,
        key: Option<&str>,
        body: Option<&B>,
    ) -> Result<Envelope<Paste>, Error>
    where
        B: Serialize + ?Sized,
    {
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::RequestFailed
        })?;

        let is_get = method == Method::GET;
        let mut req = client.request(method, url);
        if let Some(auth) = self.auth_header(key) {
            req = req.header("authorization", auth);
        }
        if !is_get {
            req = req.header("content-type", "application/json");
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to reach the paste service: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        // Delete and update answer 204-style with no body at all.
        if text.trim().is_empty() {
            if status.is_success() {
                return Ok(Envelope::Success { result: None });
            }
            tracing::error!("Request failed with status {} and an empty body", status);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        // The service reports its own failures as an error envelope on a
        // non-success status, so the body is parsed before the status is
        // considered; the envelope is relayed to the caller unchanged.
        serde_json::from_str::<Envelope<Paste>>(&text).map_err(|e| {
            let snippet = truncate_body(&text);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            if status.is_success() {
                Error::RequestFailed
            } else {
                Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                }
            }
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, Config};

    #[test]
    fn api_url_joins_base_and_version() {
        let client = Client::new();
        assert_eq!(client.api_url, "https://api.paste.gg/v1");

        let client = Client::with_config(
            None,
            Config {
                base_url: "http://localhost:8080".to_string(),
                main_url: "http://localhost:8080".to_string(),
                version: 2,
            },
        );
        assert_eq!(client.api_url, "http://localhost:8080/v2");
    }

    #[test]
    fn empty_auth_key_is_treated_as_absent() {
        let client = Client::with_auth_key("");
        assert!(client.auth_key.is_none());
        assert_eq!(client.auth_header(None), None);
    }

    #[test]
    fn per_call_key_overrides_client_key() {
        let client = Client::with_auth_key("clientkey");
        assert_eq!(client.auth_header(None).as_deref(), Some("Key clientkey"));
        assert_eq!(
            client.auth_header(Some("callkey")).as_deref(),
            Some("Key callkey")
        );
        // An empty override falls back to the client key.
        assert_eq!(
            client.auth_header(Some("")).as_deref(),
            Some("Key clientkey")
        );
    }
}
