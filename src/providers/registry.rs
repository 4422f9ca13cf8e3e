use async_trait::async_trait;

use super::auth::ServiceAccountTokenSource;
use super::bigquery::BigQueryProvider;
use super::gemini::GeminiProvider;
use super::pinecone::PineconeProvider;
use super::provider::{LanguageModelClient, ProviderError, VectorIndexClient, WarehouseClient};
use crate::config::constants::{
    BIGQUERY_BASE_URL, BIGQUERY_SCOPE, GEMINI_BASE_URL, PINECONE_CONTROL_PLANE_URL,
};
use crate::config::{GcpSettings, GeminiSettings, PineconeSettings};

/// Builds a fresh client for each service from its settings group.
///
/// The validator only calls into the factory once the settings a check needs
/// are known to be present, so a factory that is never invoked proves that no
/// network call was attempted.
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    async fn warehouse(
        &self,
        settings: &GcpSettings,
    ) -> Result<Box<dyn WarehouseClient>, ProviderError>;

    async fn vector_index(
        &self,
        settings: &PineconeSettings,
    ) -> Result<Box<dyn VectorIndexClient>, ProviderError>;

    async fn language_model(
        &self,
        settings: &GeminiSettings,
    ) -> Result<Box<dyn LanguageModelClient>, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct Endpoints {
    pub bigquery: String,
    pub pinecone_control_plane: String,
    pub gemini: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            bigquery: BIGQUERY_BASE_URL.to_string(),
            pinecone_control_plane: PINECONE_CONTROL_PLANE_URL.to_string(),
            gemini: GEMINI_BASE_URL.to_string(),
        }
    }
}

/// Factory for the real HTTP clients.
#[derive(Debug, Clone, Default)]
pub struct HttpProviderFactory {
    endpoints: Endpoints,
}

impl HttpProviderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

#[async_trait]
impl ProviderFactory for HttpProviderFactory {
    async fn warehouse(
        &self,
        settings: &GcpSettings,
    ) -> Result<Box<dyn WarehouseClient>, ProviderError> {
        let token_source =
            ServiceAccountTokenSource::from_file(&settings.application_credentials, BIGQUERY_SCOPE)
                .await?;
        Ok(Box::new(BigQueryProvider::with_base_url(
            &settings.project_id,
            Box::new(token_source),
            &self.endpoints.bigquery,
        )))
    }

    async fn vector_index(
        &self,
        settings: &PineconeSettings,
    ) -> Result<Box<dyn VectorIndexClient>, ProviderError> {
        Ok(Box::new(PineconeProvider::with_control_plane(
            &settings.api_key,
            &settings.host_url,
            &self.endpoints.pinecone_control_plane,
        )))
    }

    async fn language_model(
        &self,
        settings: &GeminiSettings,
    ) -> Result<Box<dyn LanguageModelClient>, ProviderError> {
        Ok(Box::new(GeminiProvider::with_base_url(
            &settings.api_key,
            &settings.model,
            &self.endpoints.gemini,
        )))
    }
}
