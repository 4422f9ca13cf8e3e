use std::env;

use tracing::Level;

pub const DEFAULT_KAFKA_BOOTSTRAP_SERVERS: &str = "localhost:9092";

pub const BIGQUERY_BASE_URL: &str = "https://bigquery.googleapis.com";
pub const BIGQUERY_SCOPE: &str = "https://www.googleapis.com/auth/bigquery.readonly";

pub const PINECONE_CONTROL_PLANE_URL: &str = "https://api.pinecone.io";
pub const PINECONE_API_VERSION: &str = "2024-07";
pub const EXPECTED_INDEX_DIMENSION: u32 = 384;
pub const EXPECTED_INDEX_METRIC: &str = "cosine";

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_MAX_OUTPUT_TOKENS: u32 = 50;
pub const CONNECTION_PROMPT: &str = "Reply with exactly: CONNECTION_OK";

pub fn log_level() -> Level {
    env::var("PREFLIGHT_LOG_LEVEL")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(Level::WARN)
}
