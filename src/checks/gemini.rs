use tracing::info;

use super::types::{CheckFailure, CheckOutcome, CheckSuccess};
use crate::config::GeminiSettings;
use crate::config::constants::CONNECTION_PROMPT;
use crate::providers::ProviderFactory;

/// Any reply counts as a pass; its text is reported but not compared with
/// the requested literal.
pub async fn check_gemini(settings: &GeminiSettings, factory: &dyn ProviderFactory) -> CheckOutcome {
    if settings.api_key.is_empty() {
        return Err(CheckFailure::ConfigMissing {
            variable: GeminiSettings::API_KEY,
        });
    }
    if settings.model.is_empty() {
        return Err(CheckFailure::ConfigMissing {
            variable: GeminiSettings::MODEL,
        });
    }

    let client = factory.language_model(settings).await?;
    let reply = client.generate(CONNECTION_PROMPT).await?;
    info!(model = %settings.model, "Gemini replied");

    Ok(CheckSuccess::LanguageModel { reply })
}
