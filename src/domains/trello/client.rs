//! Trello REST API client.
//!
//! The [`TrelloClient`] trait is the seam between the card service and the
//! network: four verbs, each returning the decoded JSON body or an
//! [`ApiError`]. The service never looks at status codes itself, only at the
//! error variants raised here. Tests substitute the trait with an in-memory
//! mock.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::config::TrelloConfig;

/// Errors raised by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Trello answered 404 for the requested path.
    #[error("Trello reports {path} as not found")]
    NotFound { path: String },

    /// Any other non-success HTTP status.
    #[error("Trello returned {status} for {path}: {body}")]
    Status {
        status: u16,
        path: String,
        body: String,
    },

    /// The request never produced an HTTP response.
    #[error("Request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON.
    #[error("Invalid JSON from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Authenticated access to the Trello REST API.
///
/// All four verbs resolve `path` against the configured base URL and return
/// the decoded JSON body. Non-success responses raise; callers never see a
/// status code directly.
#[async_trait]
pub trait TrelloClient: Send + Sync {
    /// GET `path`, with optional query parameters.
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ApiError>;

    /// POST `data` as a JSON body to `path`.
    async fn post(&self, path: &str, data: &Value) -> Result<Value, ApiError>;

    /// PUT `data` as a JSON body to `path`.
    async fn put(&self, path: &str, data: &Value) -> Result<Value, ApiError>;

    /// DELETE `path`.
    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}

/// [`TrelloClient`] backed by `reqwest`.
///
/// Trello authenticates with `key` and `token` query parameters, so both are
/// appended to every request.
pub struct TrelloHttpClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_token: String,
}

impl TrelloHttpClient {
    /// Create a client from the Trello section of the server config.
    pub fn new(config: &TrelloConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_token: config.api_token.clone(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth(&self) -> [(&str, &str); 2] {
        [("key", &self.api_key), ("token", &self.api_token)]
    }

    async fn decode_response(
        path: &str,
        response: reqwest::Response,
    ) -> Result<Value, ApiError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
                body,
            });
        }
        response.json().await.map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl TrelloClient for TrelloHttpClient {
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, ApiError> {
        debug!("GET {}", path);
        let response = self
            .http
            .get(self.url_for(path))
            .query(&self.auth())
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;
        Self::decode_response(path, response).await
    }

    async fn post(&self, path: &str, data: &Value) -> Result<Value, ApiError> {
        debug!("POST {}", path);
        let response = self
            .http
            .post(self.url_for(path))
            .query(&self.auth())
            .json(data)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;
        Self::decode_response(path, response).await
    }

    async fn put(&self, path: &str, data: &Value) -> Result<Value, ApiError> {
        debug!("PUT {}", path);
        let response = self
            .http
            .put(self.url_for(path))
            .query(&self.auth())
            .json(data)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;
        Self::decode_response(path, response).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        debug!("DELETE {}", path);
        let response = self
            .http
            .delete(self.url_for(path))
            .query(&self.auth())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                path: path.to_string(),
                source,
            })?;
        Self::decode_response(path, response).await
    }
}
