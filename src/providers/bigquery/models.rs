use serde::Deserialize;

/// One page of `datasets.list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetList {
    #[serde(default)]
    pub datasets: Vec<DatasetListEntry>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetListEntry {
    pub dataset_reference: DatasetReference,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference {
    pub dataset_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_project_has_no_datasets_field() {
        let page: DatasetList =
            serde_json::from_value(json!({"kind": "bigquery#datasetList", "etag": "x"})).unwrap();
        assert!(page.datasets.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn test_dataset_reference_is_read() {
        let page: DatasetList = serde_json::from_value(json!({
            "datasets": [{
                "kind": "bigquery#dataset",
                "id": "proj:yelp",
                "datasetReference": {"datasetId": "yelp", "projectId": "proj"},
                "location": "US"
            }],
            "nextPageToken": "abc"
        }))
        .unwrap();
        assert_eq!(page.datasets[0].dataset_reference.dataset_id, "yelp");
        assert_eq!(page.next_page_token.as_deref(), Some("abc"));
    }
}
