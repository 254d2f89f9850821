use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// A single request to the endpoint that did not produce a usable body.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to reach endpoint {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("endpoint responded with status {status}")]
    Status { status: StatusCode, body: String },

    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if one was received.
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Posts JSON bodies to the user-configured translation endpoint.
///
/// Dropping the future returned by [`TranslationClient::post_json`] aborts the
/// underlying connection.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: Client,
}

impl Default for TranslationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends `body` as a JSON POST to `url` and decodes a 2xx response as `R`.
    ///
    /// Non-2xx statuses are errors regardless of the body. A 2xx body that
    /// fails to parse is [`ClientError::MalformedJson`]; fields missing from
    /// an otherwise valid object are left to `R`'s serde defaults.
    pub async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let started = Instant::now();

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Connect {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(%status, elapsed_ms = started.elapsed().as_millis() as u64, "endpoint responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let bytes = response.bytes().await.map_err(ClientError::Body)?;
        serde_json::from_slice(&bytes).map_err(ClientError::MalformedJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ClientError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
        assert!(err.to_string().contains("502"));

        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        assert_eq!(ClientError::MalformedJson(json_err).status(), None);
    }
}
