// ABOUTME: Google Gemini LLM provider backing the AyurBot assistant
// ABOUTME: generateContent requests with system instruction, safety settings, and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitarva

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! The API key is read from `GEMINI_API_KEY` by [`crate::config::AssistantConfig`];
//! it is never compiled in. The key travels in the `x-goog-api-key` header so it
//! does not show up in request URLs or logs.
//!
//! ## Error Mapping
//!
//! | Condition                 | Error code                     |
//! |---------------------------|--------------------------------|
//! | HTTP 401 / 403            | `EXTERNAL_AUTH_FAILED`         |
//! | HTTP 429                  | `EXTERNAL_RATE_LIMITED`        |
//! | transport failure         | `EXTERNAL_SERVICE_UNAVAILABLE` |
//! | other status, no content  | `EXTERNAL_SERVICE_ERROR`       |

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use vitarva_core::errors::{AppError, AppResult, ErrorCode};

use super::{
    ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, MessageRole, TokenUsage,
};
use crate::config::AssistantConfig;

const SERVICE_NAME: &str = "Gemini";

const API_KEY_HEADER: &str = "x-goog-api-key";

const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

const HARM_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    candidate_count: u32,
}

#[derive(Debug, Serialize)]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    default_model: String,
    client: Client,
}

impl GeminiProvider {
    /// Create a provider with an API key and the default endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        let defaults = AssistantConfig::default();
        Self {
            api_key: api_key.into(),
            base_url: defaults.base_url,
            default_model: defaults.model,
            client: Client::new(),
        }
    }

    /// Create a provider from the assistant configuration
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_MISSING` if no API key is configured
    pub fn from_config(config: &AssistantConfig) -> AppResult<Self> {
        let api_key = config.require_api_key()?;
        Ok(Self {
            api_key: api_key.to_owned(),
            base_url: config.base_url.clone(),
            default_model: config.model.clone(),
            client: Client::new(),
        })
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at another endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    const fn convert_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System | MessageRole::User => "user",
            MessageRole::Assistant => "model",
        }
    }

    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    fn text_content(role: Option<&str>, text: &str) -> GeminiContent {
        GeminiContent {
            role: role.map(str::to_owned),
            parts: vec![ContentPart {
                text: Some(text.to_owned()),
            }],
        }
    }

    /// Split messages into conversation turns and the system instruction
    fn convert_messages(messages: &[ChatMessage]) -> (Vec<GeminiContent>, Option<GeminiContent>) {
        let mut contents = Vec::with_capacity(messages.len());
        let mut system_instruction = None;

        for message in messages {
            if message.role == MessageRole::System {
                system_instruction = Some(Self::text_content(None, &message.content));
            } else {
                contents.push(Self::text_content(
                    Some(Self::convert_role(message.role)),
                    &message.content,
                ));
            }
        }

        (contents, system_instruction)
    }

    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let (contents, system_instruction) = Self::convert_messages(&request.messages);

        let has_sampling = request.temperature.is_some()
            || request.top_k.is_some()
            || request.top_p.is_some()
            || request.max_tokens.is_some();
        let generation_config = has_sampling.then(|| GenerationConfig {
            temperature: request.temperature,
            top_k: request.top_k,
            top_p: request.top_p,
            max_output_tokens: request.max_tokens,
            candidate_count: 1,
        });

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
            safety_settings: HARM_CATEGORIES
                .iter()
                .map(|&category| SafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
        }
    }

    /// Join the text parts of the first candidate
    fn extract_content(response: &GeminiResponse) -> AppResult<String> {
        let text: String = response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                "No response generated",
            ));
        }
        Ok(text)
    }

    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    /// Map a non-success HTTP status to an error code
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        let code = match status {
            401 | 403 => ErrorCode::ExternalAuthFailed,
            429 => ErrorCode::ExternalRateLimited,
            _ => ErrorCode::ExternalServiceError,
        };
        AppError::new(code, format!("{SERVICE_NAME} API error ({status}): {message}"))
            .with_details(serde_json::json!({ "status": status }))
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::gemini()
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(provider = "gemini"))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        let url = self.build_url(model, "generateContent");
        let gemini_request = Self::build_gemini_request(request);

        debug!(
            model,
            turns = gemini_request.contents.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(SERVICE_NAME, format!("HTTP request failed: {e}"))
                    .with_source(e)
            })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::external_unavailable(SERVICE_NAME, format!("Failed to read response: {e}"))
                .with_source(e)
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::external_service(SERVICE_NAME, format!("Unreadable response: {e}"))
                    .with_source(e)
            })?;

        if let Some(error) = gemini_response.error.as_ref() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                error.message.clone(),
            ));
        }

        let content = Self::extract_content(&gemini_response)?;
        let usage = gemini_response
            .usage_metadata
            .as_ref()
            .map(Self::convert_usage);
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!("Successfully received Gemini response");

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            usage,
            finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                AppError::external_unavailable(SERVICE_NAME, format!("Health check failed: {e}"))
                    .with_source(e)
            })?;

        Ok(response.status().is_success())
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_message_becomes_instruction() {
        let request = ChatRequest::with_assistant_defaults(vec![
            ChatMessage::system("You are AyurBot."),
            ChatMessage::user("Namaste"),
            ChatMessage::assistant("Namaste! How can I help?"),
        ]);
        let body = serde_json::to_value(GeminiProvider::build_gemini_request(&request)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are AyurBot.");
        assert_eq!(body["contents"].as_array().unwrap().len(), 2);
        assert_eq!(body["contents"][1]["role"], "model");
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(body["safetySettings"][0]["threshold"], "BLOCK_MEDIUM_AND_ABOVE");
    }

    #[test]
    fn test_plain_request_omits_generation_config() {
        let request = ChatRequest::new(vec![ChatMessage::user("Namaste")]);
        let body = serde_json::to_value(GeminiProvider::build_gemini_request(&request)).unwrap();

        assert!(body.get("generationConfig").is_none());
        assert!(body.get("systemInstruction").is_none());
        assert_eq!(body["contents"][0]["role"], "user");
    }

    #[test]
    fn test_status_mapping() {
        let body = r#"{"error": {"message": "API key not valid"}}"#;
        let err = GeminiProvider::map_api_error(403, body);
        assert_eq!(err.code, ErrorCode::ExternalAuthFailed);
        assert!(err.message.contains("API key not valid"));

        assert_eq!(
            GeminiProvider::map_api_error(429, "quota").code,
            ErrorCode::ExternalRateLimited
        );
        assert_eq!(
            GeminiProvider::map_api_error(500, "boom").code,
            ErrorCode::ExternalServiceError
        );
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let response: GeminiResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        let err = GeminiProvider::extract_content(&response).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExternalServiceError);
    }

    #[test]
    fn test_text_parts_joined() {
        let response: GeminiResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Ghee "}, {"text": "pacifies Vata."}]}, "finishReason": "STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(
            GeminiProvider::extract_content(&response).unwrap(),
            "Ghee pacifies Vata."
        );
    }

    #[test]
    fn test_debug_redacts_key() {
        let provider = GeminiProvider::new("secret-key-value");
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("secret-key-value"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
