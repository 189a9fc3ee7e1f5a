use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    llm::ports::LLMClient,
};

pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiRequest {
    fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

impl GeminiResponse {
    /// First text part of the first candidate.
    fn into_text(self) -> Result<String, CoreError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

impl GeminiLLMClient {
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build Gemini HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.google_api_key.filter(|key| !key.is_empty()),
            model_name: config.gemini_model,
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| CoreError::MissingConfiguration(GOOGLE_API_KEY.to_string()))
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model_name
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                if e.is_timeout() {
                    CoreError::ExternalServiceError("LLM API request timed out".to_string())
                } else {
                    CoreError::ExternalServiceError(format!("LLM API error: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response.into_text()
    }
}

impl LLMClient for GeminiLLMClient {
    fn ensure_configured(&self) -> Result<(), CoreError> {
        self.api_key().map(|_| ())
    }

    async fn generate_text(&self, prompt: String) -> Result<String, CoreError> {
        self.call_gemini_api(GeminiRequest::from_prompt(prompt))
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn config(api_key: Option<&str>) -> LLMConfig {
        LLMConfig {
            google_api_key: api_key.map(str::to_string),
            gemini_model: "gemini-1.5-flash".to_string(),
            // Nothing listens here; a request would fail with a transport error.
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_missing_key_is_reported() {
        let client = GeminiLLMClient::new(config(None)).unwrap();
        assert_eq!(
            client.ensure_configured(),
            Err(CoreError::MissingConfiguration("GOOGLE_API_KEY".to_string()))
        );
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let client = GeminiLLMClient::new(config(Some(""))).unwrap();
        assert!(client.ensure_configured().is_err());
    }

    #[test]
    fn test_present_key_is_accepted() {
        let client = GeminiLLMClient::new(config(Some("test-key"))).unwrap();
        assert_eq!(client.ensure_configured(), Ok(()));
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_before_request() {
        let client = GeminiLLMClient::new(config(None)).unwrap();
        let err = client.generate_text("hello".to_string()).await.unwrap_err();
        assert_eq!(
            err,
            CoreError::MissingConfiguration("GOOGLE_API_KEY".to_string())
        );
    }

    #[tokio::test]
    async fn test_transport_error_does_not_expose_key() {
        let client = GeminiLLMClient::new(config(Some("SECRET-KEY-123"))).unwrap();
        let err = client.generate_text("hello".to_string()).await.unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
        assert!(!err.to_string().contains("SECRET-KEY-123"));
        let details = serde_json::to_string(&err).unwrap();
        assert!(!details.contains("SECRET-KEY-123"));
    }

    #[test]
    fn test_request_shape() {
        let request = GeminiRequest::from_prompt("Suggest a meal".to_string());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "contents": [{ "parts": [{ "text": "Suggest a meal" }] }] })
        );
    }

    #[test]
    fn test_reply_text_is_first_candidate_part() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {
                    "content": { "parts": [{ "text": "🍜 | Ramen\n" }], "role": "model" },
                    "finishReason": "STOP"
                },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "promptTokenCount": 12 }
        }))
        .unwrap();

        assert_eq!(response.into_text().unwrap(), "🍜 | Ramen\n");
    }

    #[test]
    fn test_reply_without_candidates_is_upstream_error() {
        let response: GeminiResponse = serde_json::from_value(serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        }))
        .unwrap();

        assert_eq!(
            response.into_text(),
            Err(CoreError::ExternalServiceError(
                "No response from LLM".to_string()
            ))
        );
    }
}
