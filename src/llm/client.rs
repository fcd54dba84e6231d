use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::debug;

/// Collaborator that turns a prompt into generated text.
///
/// The webhook dispatcher only depends on this trait, so tests can swap in
/// a scripted client.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Client for the hosted generative-language REST API.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        }
    }

    /// Fetches the model catalog.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/v1beta/models?key={}", self.base_url, self.api_key);

        debug!("Fetching model catalog");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::completion(format!(
                "model listing failed with status {status}: {body}"
            )));
        }

        let list: ModelList = response.json().await?;
        Ok(list.models)
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Model identifiers from the catalog already carry the "models/"
        // prefix, which is part of the resource path.
        let url = format!(
            "{}/v1beta/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("Requesting generation from model {}", self.model);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::completion(format!(
                "generation failed with status {status}: {body}"
            )));
        }

        let response: GenerateContentResponse = response.json().await?;
        response
            .into_text()
            .ok_or_else(|| Error::completion("response contained no candidate text"))
    }
}
