//! Authenticated HTTP client for the Slack Web API
//!
//! Every method is a form-encoded POST to `<base_url>/<method>` answered by a
//! JSON object carrying `ok`/`error` alongside the payload fields. Decoding
//! happens in two stages: the envelope first, the payload only when `ok`.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::params::Params;
use crate::config::ClientConfig;
use crate::error::SlackError;

const UNKNOWN_ERROR: &str = "unknown_error";

/// Client bound to one token. Cheap to clone; clones share the connection
/// pool.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    payload: serde_json::Map<String, serde_json::Value>,
}

impl SlackClient {
    pub fn new(config: ClientConfig) -> Result<Self, SlackError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| SlackError::Config(format!("failed to build HTTP client: {}", e)))?;
        Self::with_http_client(config, http)
    }

    /// Use an existing [`reqwest::Client`]. The config's timeout is not
    /// applied; configure it on `http` instead.
    pub fn with_http_client(
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self, SlackError> {
        config.validate()?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Parameters pre-filled with this client's token.
    pub fn params(&self) -> Params {
        Params::new(self.config.token())
    }

    /// Call `endpoint` and decode the payload into `T`.
    ///
    /// Usable directly for methods without a typed wrapper.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Params,
    ) -> Result<T, SlackError> {
        let url = format!("{}/{}", self.config.base_url(), endpoint);
        tracing::debug!("Slack POST {}", url);
        if self.config.debug() {
            tracing::debug!(endpoint, params = %params.redacted(), "request parameters");
        }

        let resp = self
            .http
            .post(&url)
            .form(params.pairs())
            .send()
            .await
            .map_err(|source| SlackError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|source| SlackError::Transport {
            endpoint: endpoint.to_string(),
            source,
        })?;

        if self.config.debug() {
            tracing::debug!(
                endpoint,
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&body),
                "raw response"
            );
        }

        decode_response(endpoint, status, &body)
    }
}

/// Turn a raw HTTP response into the typed payload or a classified error.
fn decode_response<T: DeserializeOwned>(
    endpoint: &str,
    status: StatusCode,
    body: &[u8],
) -> Result<T, SlackError> {
    let envelope: Envelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(source) if status.is_success() => {
            return Err(SlackError::Decode {
                endpoint: endpoint.to_string(),
                source,
            })
        }
        Err(_) => return Err(status_error(endpoint, status, body)),
    };

    if !envelope.ok {
        let code = envelope
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        tracing::debug!("Slack {} returned error: {}", endpoint, code);
        return Err(SlackError::Api { code });
    }

    if !status.is_success() {
        return Err(status_error(endpoint, status, body));
    }

    serde_json::from_value(serde_json::Value::Object(envelope.payload)).map_err(|source| {
        SlackError::Decode {
            endpoint: endpoint.to_string(),
            source,
        }
    })
}

fn status_error(endpoint: &str, status: StatusCode, body: &[u8]) -> SlackError {
    SlackError::Status {
        endpoint: endpoint.to_string(),
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}
