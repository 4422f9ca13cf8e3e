pub mod auth;
pub mod bigquery;
pub mod gemini;
pub mod pinecone;
pub mod provider;
pub mod registry;

pub use provider::{LanguageModelClient, ProviderError, VectorIndexClient, WarehouseClient};
pub use registry::{Endpoints, HttpProviderFactory, ProviderFactory};
