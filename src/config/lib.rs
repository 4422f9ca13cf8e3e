use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use super::models::Settings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Loads `.env` from the working directory when one exists, then reads the
/// settings from the process environment. Variables that are already set
/// win over the file.
pub fn load_settings() -> Settings {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment file {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }
    Settings::from_env()
}

pub fn load_settings_from(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    })?;
    debug!("Loaded environment file {}", path.display());
    Ok(Settings::from_env())
}
