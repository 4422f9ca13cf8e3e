use std::path::Path;

use async_trait::async_trait;
use tracing::debug;
use yup_oauth2::{ServiceAccountAuthenticator, ServiceAccountKey};

use super::provider::ProviderError;

/// Source of OAuth2 bearer tokens for Google APIs.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, ProviderError>;
}

/// Exchanges a service account key for access tokens.
pub struct ServiceAccountTokenSource {
    key: ServiceAccountKey,
    scopes: Vec<String>,
}

impl ServiceAccountTokenSource {
    pub async fn from_file(path: impl AsRef<Path>, scope: &str) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let key = yup_oauth2::read_service_account_key(path).await.map_err(|e| {
            ProviderError::Auth(format!(
                "Failed to read service account key {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(client_email = %key.client_email, "Read service account key");

        Ok(Self {
            key,
            scopes: vec![scope.to_string()],
        })
    }
}

#[async_trait]
impl TokenSource for ServiceAccountTokenSource {
    async fn access_token(&self) -> Result<String, ProviderError> {
        let authenticator = ServiceAccountAuthenticator::builder(self.key.clone())
            .build()
            .await
            .map_err(|e| ProviderError::Auth(format!("Failed to build authenticator: {}", e)))?;

        let token = authenticator
            .token(self.scopes.as_slice())
            .await
            .map_err(|e| ProviderError::Auth(e.to_string()))?;

        token
            .token()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::Auth("Token response carried no access token".to_string()))
    }
}

/// Fixed token, for endpoints that are stubbed or fronted by a proxy.
pub struct StaticTokenSource(pub String);

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn access_token(&self) -> Result<String, ProviderError> {
        Ok(self.0.clone())
    }
}
