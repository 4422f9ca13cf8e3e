pub mod constants;
pub mod lib;
pub mod models;

pub use lib::{ConfigError, load_settings, load_settings_from};
pub use models::{
    GcpSettings, GeminiSettings, KafkaSettings, PineconeSettings, Settings, YelpSettings,
};
