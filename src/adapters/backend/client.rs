//! Thin REST client for the hosted backend.
//!
//! Every request carries the project `apikey` header plus a bearer token:
//! the signed-in user's access token for session-scoped calls, the anon key
//! otherwise. Non-2xx responses are turned into `BackendError` domain errors
//! carrying the backend's own message.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

const REST_PREFIX: &str = "rest/v1";

/// Error body shape returned by the REST layer.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
    hint: Option<String>,
}

#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    api_key: Secret<String>,
    http: Client,
}

impl BackendClient {
    /// Builds a client with the configured base URL, key and timeout.
    pub fn new(config: &BackendConfig) -> Result<Self, DomainError> {
        Self::with_parts(config.base_url(), config.anon_key.clone(), config.request_timeout())
    }

    pub fn with_parts(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            DomainError::new(
                ErrorCode::InternalError,
                format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: Secret::new(api_key.into()),
            http,
        })
    }

    /// `{base}/rest/v1/{path}`
    pub fn rest_url(&self, path: &str) -> String {
        format!("{}/{}/{}", self.base_url, REST_PREFIX, path.trim_start_matches('/'))
    }

    /// The anon key, used as bearer when no user session is involved.
    pub fn anon_bearer(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn request(&self, method: Method, path: &str, bearer: &str) -> RequestBuilder {
        self.http
            .request(method, self.rest_url(path))
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(bearer)
    }

    /// GETs `path` (table plus query string) and decodes the row array.
    pub async fn select<T: DeserializeOwned>(
        &self,
        path: &str,
        bearer: &str,
    ) -> Result<Vec<T>, DomainError> {
        let response = self.send(self.request(Method::GET, path, bearer), path).await?;
        decode(response, path).await
    }

    /// POSTs a row and returns the stored representation.
    pub async fn insert<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
        bearer: &str,
    ) -> Result<T, DomainError> {
        let request = self
            .request(Method::POST, table, bearer)
            .header("Prefer", "return=representation")
            .json(row);
        let response = self.send(request, table).await?;
        let mut rows: Vec<T> = decode(response, table).await?;
        if rows.is_empty() {
            return Err(DomainError::backend(format!("{} insert returned no row", table)));
        }
        Ok(rows.swap_remove(0))
    }

    /// Calls a stored procedure with an empty argument object.
    pub async fn rpc<T: DeserializeOwned>(
        &self,
        function: &str,
        bearer: &str,
    ) -> Result<T, DomainError> {
        let path = format!("rpc/{}", function);
        let request = self
            .request(Method::POST, &path, bearer)
            .json(&serde_json::json!({}));
        let response = self.send(request, &path).await?;
        decode(response, &path).await
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, DomainError> {
        let response = request.send().await.map_err(|e| {
            let message = if e.is_timeout() {
                format!("Backend request to {} timed out", path)
            } else if e.is_connect() {
                format!("Connection to backend failed: {}", e)
            } else {
                e.to_string()
            };
            tracing::warn!(path, error = %e, "backend request failed");
            DomainError::backend(message)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| format!("Backend returned {}", status));
        tracing::warn!(path, status = status.as_u16(), message = %message, "backend rejected request");
        Err(DomainError::backend(message).with_detail("status", status.as_u16().to_string()))
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, DomainError> {
    response.json::<T>().await.map_err(|e| {
        tracing::warn!(path, error = %e, "unexpected backend response shape");
        DomainError::backend(format!("Failed to parse backend response: {}", e))
    })
}

/// Pulls the human-readable message out of a REST error body.
fn error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = parsed.message.or(parsed.error)?;
    Some(match parsed.hint {
        Some(hint) if !hint.is_empty() => format!("{} ({})", message, hint),
        _ => message,
    })
}
