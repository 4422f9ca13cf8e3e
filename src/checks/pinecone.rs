use tracing::{info, warn};

use super::types::{CheckFailure, CheckOutcome, CheckSuccess, format_names};
use crate::config::PineconeSettings;
use crate::config::constants::{EXPECTED_INDEX_DIMENSION, EXPECTED_INDEX_METRIC};
use crate::providers::ProviderFactory;
use crate::providers::pinecone::IndexDescription;

/// Lines pushed to `details` are reported before the PASS/FAIL marker
/// whatever the outcome, so the index listing is shown even when the
/// configured index is missing or its stats cannot be fetched.
pub async fn check_pinecone(
    settings: &PineconeSettings,
    factory: &dyn ProviderFactory,
    details: &mut Vec<String>,
) -> CheckOutcome {
    if settings.api_key.is_empty() {
        return Err(CheckFailure::ConfigMissing {
            variable: PineconeSettings::API_KEY,
        });
    }

    let client = factory.vector_index(settings).await?;
    let indexes = client.list_indexes().await?;
    let available: Vec<String> = indexes.iter().map(|i| i.name.clone()).collect();
    details.push(format!("Available indexes: {}", format_names(&available)));

    let Some(index) = indexes.iter().find(|i| i.name == settings.index_name) else {
        return Err(CheckFailure::ResourceMissing(format!(
            "Index '{}' not found. Please create it at app.pinecone.io with {} dims + {} metric. Available indexes: {}",
            settings.index_name,
            EXPECTED_INDEX_DIMENSION,
            EXPECTED_INDEX_METRIC,
            format_names(&available)
        )));
    };

    if let Some(mismatch) = shape_mismatch(index) {
        warn!(index = %index.name, "{}", mismatch);
        details.push(format!("Warning: {}", mismatch));
    }

    let stats = client.describe_index_stats(index).await?;
    info!(index = %index.name, vectors = stats.total_vector_count, "Fetched Pinecone index stats");

    Ok(CheckSuccess::VectorIndex {
        index: index.name.clone(),
        stats,
    })
}

/// Describes how the listed index differs from the expected dimension and
/// metric. Fields the control plane did not report are not compared.
fn shape_mismatch(index: &IndexDescription) -> Option<String> {
    let dimension_differs = index
        .dimension
        .is_some_and(|d| d != EXPECTED_INDEX_DIMENSION);
    let metric_differs = index
        .metric
        .as_deref()
        .is_some_and(|m| !m.eq_ignore_ascii_case(EXPECTED_INDEX_METRIC));

    if !dimension_differs && !metric_differs {
        return None;
    }

    Some(format!(
        "index '{}' has dimension={}, metric={}; expected {} dims + {} metric",
        index.name,
        index
            .dimension
            .map_or_else(|| "unknown".to_string(), |d| d.to_string()),
        index.metric.as_deref().unwrap_or("unknown"),
        EXPECTED_INDEX_DIMENSION,
        EXPECTED_INDEX_METRIC
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(dimension: Option<u32>, metric: Option<&str>) -> IndexDescription {
        let mut index = IndexDescription::named("yelp-reviews");
        index.dimension = dimension;
        index.metric = metric.map(str::to_string);
        index
    }

    #[test]
    fn test_expected_shape_has_no_mismatch() {
        assert_eq!(shape_mismatch(&index(Some(384), Some("cosine"))), None);
        assert_eq!(shape_mismatch(&index(None, None)), None);
    }

    #[test]
    fn test_wrong_dimension_is_reported() {
        let mismatch = shape_mismatch(&index(Some(1536), Some("cosine"))).unwrap();
        assert_eq!(
            mismatch,
            "index 'yelp-reviews' has dimension=1536, metric=cosine; expected 384 dims + cosine metric"
        );
    }

    #[test]
    fn test_wrong_metric_is_reported() {
        let mismatch = shape_mismatch(&index(None, Some("dotproduct"))).unwrap();
        assert!(mismatch.contains("dimension=unknown, metric=dotproduct"));
    }
}
