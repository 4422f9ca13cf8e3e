use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::models::{GenerateContentRequest, GenerateContentResponse};
use crate::config::constants::GEMINI_MAX_OUTPUT_TOKENS;
use crate::providers::provider::{LanguageModelClient, ProviderError, join_url, read_json};

pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    http_client: Client,
}

impl GeminiProvider {
    pub fn with_base_url(api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.trim_start_matches("models/").to_string(),
            base_url: base_url.to_string(),
            http_client: Client::new(),
        }
    }

    fn generate_url(&self) -> String {
        join_url(
            &self.base_url,
            &format!("v1beta/models/{}:generateContent", self.model),
        )
    }
}

#[async_trait]
impl LanguageModelClient for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = self.generate_url();
        let request = GenerateContentRequest::user_turn(prompt, GEMINI_MAX_OUTPUT_TOKENS);
        debug!(model = %self.model, "Sending Gemini generateContent request");

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let body: GenerateContentResponse = read_json(response).await?;
        Ok(body.reply_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url_strips_models_prefix() {
        let provider = GeminiProvider::with_base_url("k", "models/gemini-1.5-flash", "http://x/");
        assert_eq!(
            provider.generate_url(),
            "http://x/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }
}
