//! GeminiClient - Direct REST API implementation for Gemini.
//!
//! This client calls the Gemini REST API directly with a request timeout.
//! Configuration is loaded from secret.json.

use crate::config::GeminiSettings;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Errors from the external completion boundary.
///
/// None of these ever reach the end user: the health-check flow substitutes
/// the offline fallback for every variant.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request could not be sent or timed out.
    #[error("Completion request failed: {message}")]
    RequestFailed { message: String, is_retryable: bool },

    /// Upstream returned a non-success status.
    #[error("Completion request returned {status}: {message}")]
    Http {
        status: u16,
        message: String,
        is_retryable: bool,
    },

    /// Upstream payload could not be parsed or contained no text.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// Missing or invalid local configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// True if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RequestFailed { is_retryable, .. } | Self::Http { is_retryable, .. } => {
                *is_retryable
            }
            _ => false,
        }
    }
}

/// The mockable seam for external text completion.
///
/// Production uses [`GeminiClient`]; tests substitute a stub so the fallback
/// path can be exercised without network access.
#[async_trait]
pub trait CompletionAgent: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError>;
}

/// Client that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Creates a new client from resolved settings.
    pub fn new(settings: GeminiSettings) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: settings.api_key,
            model: settings.model,
        })
    }

    /// Resolves settings from the environment and secret.json.
    pub fn try_from_config() -> Result<Self, ClientError> {
        let settings = GeminiSettings::resolve().map_err(ClientError::Config)?;
        Self::new(settings)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String, ClientError> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| ClientError::RequestFailed {
                message: format!("Gemini API request failed: {err}"),
                is_retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            ClientError::MalformedResponse(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionAgent for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String, ClientError> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            ClientError::MalformedResponse(
                "Gemini API returned no text in the response candidates".into(),
            )
        })
}

fn map_http_error(status: StatusCode, body: String) -> ClientError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    ClientError::Http {
        status: status.as_u16(),
        message,
        is_retryable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_http_error_parses_structured_body() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string());
        assert!(err.is_retryable());
        assert!(err.to_string().contains("RESOURCE_EXHAUSTED"));
    }

    #[test]
    fn test_map_http_error_falls_back_to_raw_body() {
        let err = map_http_error(StatusCode::BAD_REQUEST, "not json".to_string());
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("not json"));
    }

    #[test]
    fn test_extract_text_response_empty_candidates() {
        let response = GenerateContentResponse { candidates: None };
        assert!(extract_text_response(response).is_err());
    }
}
