use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AttemptError, DomainError};

/// Longest slice of an error body kept in attempt diagnostics
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Trait for HTTP client operations (for mocking)
#[async_trait]
pub trait HttpClientTrait: Send + Sync + std::fmt::Debug {
    /// POST a JSON body and decode a JSON response.
    ///
    /// Transport failures, non-success statuses and undecodable bodies map
    /// onto the matching [`AttemptError`] variants.
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, AttemptError>;
}

#[async_trait]
impl<T: HttpClientTrait + ?Sized> HttpClientTrait for Arc<T> {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, AttemptError> {
        (**self).post_json(url, headers, body).await
    }
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn post_json(
        &self,
        url: &str,
        headers: Vec<(&str, &str)>,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, AttemptError> {
        let mut request = self.client.post(url);

        for (key, value) in headers {
            request = request.header(key, value);
        }

        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| AttemptError::transport(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_body = response.text().await.unwrap_or_default();
            return Err(AttemptError::status(status, snippet(&error_body)));
        }

        response
            .json()
            .await
            .map_err(|e| AttemptError::extraction(format!("Failed to parse response: {}", e)))
    }
}

/// Cut a response body down to a diagnostic snippet on a char boundary
pub fn snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
