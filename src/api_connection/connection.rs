use reqwest::{Client, StatusCode};
use std::fmt;
use thiserror::Error;

use super::endpoints::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GatewayConfig;
use crate::gateway::GenerativeModel;

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error {status}: {error_body}")]
    Api {
        status: StatusCode,
        error_body: String,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// HTTP transport to the remote `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiConnection {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl fmt::Debug for GeminiConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConnection")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiConnection {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    pub async fn call_generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ApiConnectionError> {
        let url = self.endpoint_url();
        tracing::debug!(model = %self.model, turns = request.contents.len(), "calling generateContent");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                ApiConnectionError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!("Gemini API error: {} - {}", status, error_body);
            return Err(ApiConnectionError::Api { status, error_body });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini envelope: {}", e);
            ApiConnectionError::Serialization(e)
        })?;

        if let Some(usage) = &parsed.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "generateContent usage"
            );
        }
        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            tracing::warn!(block_reason = reason, "prompt was blocked by the provider");
        }

        Ok(parsed)
    }
}

impl GenerativeModel for GeminiConnection {
    async fn generate(
        &self,
        request: GenerateContentRequest,
    ) -> Result<Option<String>, ApiConnectionError> {
        let response = self.call_generate_content(&request).await?;
        Ok(response.text())
    }
}
