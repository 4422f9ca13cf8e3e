use std::path::Path;

use tracing::info;

use super::types::{CheckFailure, CheckOutcome, CheckSuccess};
use crate::config::GcpSettings;
use crate::providers::ProviderFactory;

pub async fn check_bigquery(settings: &GcpSettings, factory: &dyn ProviderFactory) -> CheckOutcome {
    if settings.project_id.is_empty() {
        return Err(CheckFailure::ConfigMissing {
            variable: GcpSettings::PROJECT_ID,
        });
    }
    if settings.application_credentials.is_empty() {
        return Err(CheckFailure::ConfigMissing {
            variable: GcpSettings::APPLICATION_CREDENTIALS,
        });
    }
    if !Path::new(&settings.application_credentials).exists() {
        return Err(CheckFailure::ResourceMissing(format!(
            "Service account key file not found at: {}",
            settings.application_credentials
        )));
    }

    let client = factory.warehouse(settings).await?;
    let datasets = client.list_datasets().await?;
    info!(project = %settings.project_id, count = datasets.len(), "Listed BigQuery datasets");

    Ok(CheckSuccess::Warehouse { datasets })
}
