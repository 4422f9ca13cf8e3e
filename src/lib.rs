pub mod checks;
pub mod config;
pub mod providers;

pub use reqwest;
pub use serde_json;
