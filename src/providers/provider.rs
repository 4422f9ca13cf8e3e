use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use super::pinecone::models::{IndexDescription, IndexStats};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("HTTP error {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else {
            ProviderError::Unavailable(e.to_string())
        }
    }
}

/// Data warehouse reachable with the configured project and credentials.
#[async_trait]
pub trait WarehouseClient: Send + Sync {
    /// Names of every dataset visible to the caller, across all pages.
    async fn list_datasets(&self) -> Result<Vec<String>, ProviderError>;
}

#[async_trait]
pub trait VectorIndexClient: Send + Sync {
    async fn list_indexes(&self) -> Result<Vec<IndexDescription>, ProviderError>;

    async fn describe_index_stats(
        &self,
        index: &IndexDescription,
    ) -> Result<IndexStats, ProviderError>;
}

#[async_trait]
pub trait LanguageModelClient: Send + Sync {
    /// Sends a single user turn and returns the text of the reply.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Reads a response body and decodes it, turning non-2xx statuses into
/// `ProviderError::HttpError`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let status = response.status().as_u16();
    let body = response.text().await?;

    if !(200..300).contains(&status) {
        debug!(status, body = %body, "Provider returned an error status");
        return Err(ProviderError::HttpError { status, body });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::ParseError(e.to_string()))
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalises_slashes() {
        assert_eq!(join_url("http://a/", "/b"), "http://a/b");
        assert_eq!(join_url("http://a", "b"), "http://a/b");
    }

    #[test]
    fn test_http_error_display_includes_status_and_body() {
        let err = ProviderError::HttpError {
            status: 403,
            body: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error 403: permission denied");
    }
}
