use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue},
};
use serde_json::json;
use tracing::debug;

use super::models::{IndexDescription, IndexList, IndexStats};
use crate::config::constants::{PINECONE_API_VERSION, PINECONE_CONTROL_PLANE_URL};
use crate::providers::provider::{ProviderError, VectorIndexClient, join_url, read_json};

pub struct PineconeProvider {
    api_key: String,
    control_plane_url: String,
    host_override: Option<String>,
    http_client: Client,
}

impl PineconeProvider {
    /// `host_url` pins the data plane host; when empty the host reported by
    /// the control plane for the index is used.
    pub fn new(api_key: &str, host_url: &str) -> Self {
        Self::with_control_plane(api_key, host_url, PINECONE_CONTROL_PLANE_URL)
    }

    pub fn with_control_plane(api_key: &str, host_url: &str, control_plane_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            control_plane_url: control_plane_url.to_string(),
            host_override: Some(host_url.trim())
                .filter(|h| !h.is_empty())
                .map(str::to_string),
            http_client: Client::new(),
        }
    }

    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Api-Key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| ProviderError::Auth("API key is not a valid header value".to_string()))?,
        );
        headers.insert(
            "X-Pinecone-API-Version",
            HeaderValue::from_static(PINECONE_API_VERSION),
        );
        Ok(headers)
    }

    fn data_plane_url(&self, index: &IndexDescription) -> Result<String, ProviderError> {
        let host = self
            .host_override
            .as_deref()
            .or(index.host.as_deref())
            .ok_or_else(|| {
                ProviderError::Unavailable(format!("No host known for index '{}'", index.name))
            })?;
        Ok(normalize_host(host))
    }
}

fn normalize_host(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        host.trim_end_matches('/').to_string()
    } else {
        format!("https://{}", host.trim_end_matches('/'))
    }
}

#[async_trait]
impl VectorIndexClient for PineconeProvider {
    async fn list_indexes(&self) -> Result<Vec<IndexDescription>, ProviderError> {
        let url = join_url(&self.control_plane_url, "indexes");
        debug!(url = %url, "Listing Pinecone indexes");

        let response = self
            .http_client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await?;

        let list: IndexList = read_json(response).await?;
        Ok(list.indexes)
    }

    async fn describe_index_stats(
        &self,
        index: &IndexDescription,
    ) -> Result<IndexStats, ProviderError> {
        let url = join_url(&self.data_plane_url(index)?, "describe_index_stats");
        debug!(url = %url, index = %index.name, "Fetching Pinecone index stats");

        let response = self
            .http_client
            .post(&url)
            .headers(self.headers()?)
            .json(&json!({}))
            .send()
            .await?;

        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host_adds_scheme() {
        assert_eq!(
            normalize_host("idx-abc.svc.pinecone.io"),
            "https://idx-abc.svc.pinecone.io"
        );
        assert_eq!(normalize_host("http://localhost:5080/"), "http://localhost:5080");
    }

    #[test]
    fn test_host_override_wins_over_listed_host() {
        let provider = PineconeProvider::new("key", "override.pinecone.io");
        let mut index = IndexDescription::named("reviews");
        index.host = Some("listed.pinecone.io".to_string());
        assert_eq!(
            provider.data_plane_url(&index).unwrap(),
            "https://override.pinecone.io"
        );
    }

    #[test]
    fn test_missing_host_is_an_error() {
        let provider = PineconeProvider::new("key", "  ");
        let index = IndexDescription::named("reviews");
        assert!(matches!(
            provider.data_plane_url(&index),
            Err(ProviderError::Unavailable(_))
        ));
    }
}
