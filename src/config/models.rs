use std::env;

use super::constants::DEFAULT_KAFKA_BOOTSTRAP_SERVERS;

fn setting<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).unwrap_or_else(|| default.to_string())
}

/// Every setting the platform reads, grouped by the service it belongs to.
///
/// Values are never validated here: an unset variable resolves to its
/// default, which is the empty string for everything except
/// `KAFKA_BOOTSTRAP_SERVERS`. Consumers decide what counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub gcp: GcpSettings,
    pub pinecone: PineconeSettings,
    pub gemini: GeminiSettings,
    pub yelp: YelpSettings,
    pub kafka: KafkaSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GcpSettings {
    pub project_id: String,
    pub bigquery_dataset: String,
    pub application_credentials: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PineconeSettings {
    pub api_key: String,
    pub index_name: String,
    pub host_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YelpSettings {
    pub business_json_path: String,
    pub review_json_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KafkaSettings {
    pub bootstrap_servers: String,
    pub topic: String,
}

impl Default for KafkaSettings {
    fn default() -> Self {
        Self {
            bootstrap_servers: DEFAULT_KAFKA_BOOTSTRAP_SERVERS.to_string(),
            topic: String::new(),
        }
    }
}

impl Settings {
    /// Resolves every setting from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves every setting through `lookup`, falling back to defaults for
    /// names it does not know.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            gcp: GcpSettings::from_lookup(&lookup),
            pinecone: PineconeSettings::from_lookup(&lookup),
            gemini: GeminiSettings::from_lookup(&lookup),
            yelp: YelpSettings::from_lookup(&lookup),
            kafka: KafkaSettings::from_lookup(&lookup),
        }
    }
}

impl GcpSettings {
    pub const PROJECT_ID: &'static str = "GCP_PROJECT_ID";
    pub const BIGQUERY_DATASET: &'static str = "GCP_BIGQUERY_DATASET";
    pub const APPLICATION_CREDENTIALS: &'static str = "GOOGLE_APPLICATION_CREDENTIALS";

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        Self {
            project_id: setting(lookup, Self::PROJECT_ID, ""),
            bigquery_dataset: setting(lookup, Self::BIGQUERY_DATASET, ""),
            application_credentials: setting(lookup, Self::APPLICATION_CREDENTIALS, ""),
        }
    }
}

impl PineconeSettings {
    pub const API_KEY: &'static str = "PINECONE_API_KEY";
    pub const INDEX_NAME: &'static str = "PINECONE_INDEX_NAME";
    pub const HOST_URL: &'static str = "PINECONE_HOST_URL";

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        Self {
            api_key: setting(lookup, Self::API_KEY, ""),
            index_name: setting(lookup, Self::INDEX_NAME, ""),
            host_url: setting(lookup, Self::HOST_URL, ""),
        }
    }
}

impl GeminiSettings {
    pub const API_KEY: &'static str = "GEMINI_API_KEY";
    pub const MODEL: &'static str = "GEMINI_MODEL";

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        Self {
            api_key: setting(lookup, Self::API_KEY, ""),
            model: setting(lookup, Self::MODEL, ""),
        }
    }
}

impl YelpSettings {
    pub const BUSINESS_JSON_PATH: &'static str = "YELP_BUSINESS_JSON_PATH";
    pub const REVIEW_JSON_PATH: &'static str = "YELP_REVIEW_JSON_PATH";

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        Self {
            business_json_path: setting(lookup, Self::BUSINESS_JSON_PATH, ""),
            review_json_path: setting(lookup, Self::REVIEW_JSON_PATH, ""),
        }
    }
}

impl KafkaSettings {
    pub const BOOTSTRAP_SERVERS: &'static str = "KAFKA_BOOTSTRAP_SERVERS";
    pub const TOPIC: &'static str = "KAFKA_TOPIC";

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: &F) -> Self {
        Self {
            bootstrap_servers: setting(
                lookup,
                Self::BOOTSTRAP_SERVERS,
                DEFAULT_KAFKA_BOOTSTRAP_SERVERS,
            ),
            topic: setting(lookup, Self::TOPIC, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_lookup_uses_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.kafka.bootstrap_servers, "localhost:9092");
        assert_eq!(settings.gcp.project_id, "");
        assert_eq!(settings.gemini.model, "");
    }

    #[test]
    fn test_values_are_grouped_by_service() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("GCP_PROJECT_ID", "yelp-analytics"),
            ("GOOGLE_APPLICATION_CREDENTIALS", "/keys/sa.json"),
            ("PINECONE_INDEX_NAME", "reviews"),
            ("GEMINI_MODEL", "gemini-1.5-flash"),
            ("YELP_REVIEW_JSON_PATH", "data/review.json"),
            ("KAFKA_TOPIC", "yelp-reviews"),
        ]));

        assert_eq!(settings.gcp.project_id, "yelp-analytics");
        assert_eq!(settings.gcp.application_credentials, "/keys/sa.json");
        assert_eq!(settings.pinecone.index_name, "reviews");
        assert_eq!(settings.gemini.model, "gemini-1.5-flash");
        assert_eq!(settings.yelp.review_json_path, "data/review.json");
        assert_eq!(settings.yelp.business_json_path, "");
        assert_eq!(settings.kafka.topic, "yelp-reviews");
    }

    #[test]
    fn test_explicit_empty_value_overrides_default() {
        let settings = Settings::from_lookup(lookup_from(&[("KAFKA_BOOTSTRAP_SERVERS", "")]));
        assert_eq!(settings.kafka.bootstrap_servers, "");
    }

    #[test]
    fn test_loading_is_idempotent() {
        let lookup = lookup_from(&[("PINECONE_API_KEY", "pc-key")]);
        assert_eq!(Settings::from_lookup(&lookup), Settings::from_lookup(&lookup));
    }
}
