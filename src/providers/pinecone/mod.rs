pub mod models;
pub mod provider;

pub use models::{IndexDescription, IndexStats};
pub use provider::PineconeProvider;
