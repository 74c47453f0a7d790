//! Gemini client
//!
//! Implements [`TextGenerator`] over the Gemini `generateContent` REST
//! endpoint. A single attempt is made per call; there is no retry and no
//! request timeout.

use super::TextGenerator;
use crate::config::GeminiConfig;
use crate::error::ServiceError;
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument};

/// HTTP client for the hosted Gemini model
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

/// Concatenate the text parts of the first candidate
pub fn extract_text(response: &Value) -> Result<String, ServiceError> {
    let parts = response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| ServiceError::MalformedResponse("missing candidates[0].content.parts".into()))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        return Err(ServiceError::EmptyResponse);
    }
    Ok(text)
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or(ServiceError::MissingApiKey)?;
        debug!("Prompt: {}", prompt);

        let request_body = json!({
            "contents": [
                {
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Gemini API: {}", e);
                ServiceError::Transport(e)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status { status, body });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini API response: {}", e);
            ServiceError::Transport(e)
        })?;

        let text = extract_text(&response_json)?;
        info!("Received Gemini response ({} chars)", text.len());
        Ok(text)
    }
}
