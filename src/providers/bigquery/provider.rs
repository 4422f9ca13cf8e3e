use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::models::DatasetList;
use crate::providers::auth::TokenSource;
use crate::providers::provider::{ProviderError, WarehouseClient, join_url, read_json};

pub struct BigQueryProvider {
    project_id: String,
    base_url: String,
    http_client: Client,
    token_source: Box<dyn TokenSource>,
}

impl BigQueryProvider {
    pub fn with_base_url(
        project_id: &str,
        token_source: Box<dyn TokenSource>,
        base_url: &str,
    ) -> Self {
        Self {
            project_id: project_id.to_string(),
            base_url: base_url.to_string(),
            http_client: Client::new(),
            token_source,
        }
    }

    fn datasets_url(&self) -> String {
        join_url(
            &self.base_url,
            &format!("bigquery/v2/projects/{}/datasets", self.project_id),
        )
    }
}

#[async_trait]
impl WarehouseClient for BigQueryProvider {
    async fn list_datasets(&self) -> Result<Vec<String>, ProviderError> {
        let token = self.token_source.access_token().await?;
        let url = self.datasets_url();

        let mut names = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http_client.get(&url).bearer_auth(&token);
            if let Some(page) = &page_token {
                request = request.query(&[("pageToken", page)]);
            }

            debug!(url = %url, page = ?page_token, "Listing BigQuery datasets");
            let page: DatasetList = read_json(request.send().await?).await?;

            names.extend(
                page.datasets
                    .into_iter()
                    .map(|d| d.dataset_reference.dataset_id),
            );

            match page.next_page_token {
                Some(next) if !next.is_empty() => page_token = Some(next),
                _ => break,
            }
        }

        Ok(names)
    }
}
