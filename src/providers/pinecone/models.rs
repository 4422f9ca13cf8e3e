use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct IndexList {
    #[serde(default)]
    pub indexes: Vec<IndexDescription>,
}

/// An index as reported by the control plane.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct IndexDescription {
    pub name: String,
    #[serde(default)]
    pub dimension: Option<u32>,
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
}

impl IndexDescription {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            dimension: None,
            metric: None,
            host: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    #[serde(default)]
    pub total_vector_count: u64,
    #[serde(default)]
    pub dimension: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_index_list_parses_control_plane_shape() {
        let list: IndexList = serde_json::from_value(json!({
            "indexes": [{
                "name": "yelp-reviews",
                "dimension": 384,
                "metric": "cosine",
                "host": "yelp-reviews-abc123.svc.us-east-1.pinecone.io",
                "spec": {"serverless": {"cloud": "aws", "region": "us-east-1"}},
                "status": {"ready": true, "state": "Ready"}
            }]
        }))
        .unwrap();

        assert_eq!(list.indexes.len(), 1);
        assert_eq!(list.indexes[0].dimension, Some(384));
        assert_eq!(list.indexes[0].metric.as_deref(), Some("cosine"));
    }

    #[test]
    fn test_stats_default_missing_counts_to_zero() {
        let stats: IndexStats =
            serde_json::from_value(json!({"namespaces": {}, "dimension": 384})).unwrap();
        assert_eq!(stats.total_vector_count, 0);
        assert_eq!(stats.dimension, 384);
    }
}
