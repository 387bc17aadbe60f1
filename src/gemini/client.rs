//! HTTP client for the Gemini generateContent endpoint
//!
//! One request per submission: POST the composed instruction as a single
//! user turn, extract `candidates[0].content.parts[0].text` from the
//! response. Anything else is an error.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::TuiConfig;

/// Default API base URL
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Errors from a single generate call
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("GEMINI_API_KEY is not set. Add it to the config file or set the environment variable.")]
    MissingApiKey,

    #[error("API error: {status} {status_text} - {message}")]
    Api {
        status: u16,
        status_text: String,
        message: String,
    },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Could not retrieve optimized prompt. Unexpected API response structure.")]
    UnexpectedResponse,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Client for the Gemini text-generation API
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a new client. The `GEMINI_API_KEY` environment variable
    /// takes precedence over the config file value.
    pub fn new(config: &TuiConfig) -> Self {
        let api_key = resolve_api_key(std::env::var("GEMINI_API_KEY").ok(), config);

        Self {
            http: reqwest::Client::new(),
            api_key,
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: config
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    /// Whether an API key is available
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, self.model, api_key
        )
    }

    /// Send one instruction to the model and return the generated text,
    /// trimmed of leading/trailing whitespace.
    pub async fn generate(&self, instruction: &str) -> Result<String, GenerateError> {
        // Fail before issuing any request when no key is configured
        let api_key = self.api_key.as_deref().ok_or(GenerateError::MissingApiKey)?;

        let payload = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: instruction }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint(api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(status = %status, "generate request failed");
            return Err(api_error(status, &body));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|_| GenerateError::UnexpectedResponse)?;
        extract_text(parsed)
    }
}

/// Pick the API key: a non-empty environment value wins over the
/// config file value
fn resolve_api_key(env_value: Option<String>, config: &TuiConfig) -> Option<String> {
    env_value
        .filter(|k| !k.is_empty())
        .or_else(|| config.api_key.clone())
}

/// Build an Api error from a non-success response, pulling the
/// server-supplied `error.message` out of the body when present
fn api_error(status: StatusCode, body: &str) -> GenerateError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| "Unknown error".to_string());

    GenerateError::Api {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
        message,
    }
}

/// Extract `candidates[0].content.parts[0].text`, trimmed
fn extract_text(response: GenerateResponse) -> Result<String, GenerateError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .map(|t| t.trim().to_string())
        .ok_or(GenerateError::UnexpectedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key(key: Option<&str>) -> GeminiClient {
        GeminiClient {
            http: reqwest::Client::new(),
            api_key: key.map(String::from),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    fn config_with_key(key: Option<&str>) -> TuiConfig {
        TuiConfig {
            api_key: key.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_env_key_overrides_file_key() {
        let config = config_with_key(Some("from-file"));
        let key = resolve_api_key(Some("from-env".to_string()), &config);
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_empty_env_key_falls_back_to_file() {
        let config = config_with_key(Some("from-file"));
        let key = resolve_api_key(Some(String::new()), &config);
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_file_key_used_when_env_unset() {
        let config = config_with_key(Some("from-file"));
        assert_eq!(resolve_api_key(None, &config).as_deref(), Some("from-file"));
    }

    #[test]
    fn test_no_key_anywhere_resolves_to_none() {
        let config = config_with_key(None);
        assert!(resolve_api_key(None, &config).is_none());
    }

    #[test]
    fn test_request_body_shape() {
        let payload = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: "hi" }],
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["contents"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_endpoint_embeds_model_and_key() {
        let client = client_with_key(Some("k123"));
        let url = client.endpoint("k123");
        assert_eq!(
            url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key=k123"
        );
    }

    #[tokio::test]
    async fn test_generate_without_key_fails_fast() {
        let client = client_with_key(None);
        let err = client.generate("hi").await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_api_error_includes_status_and_server_message() {
        let err = api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":{"message":"boom"}}"#,
        );
        let msg = err.to_string();
        assert!(msg.contains("500"), "missing status in: {msg}");
        assert!(msg.contains("boom"), "missing server message in: {msg}");
    }

    #[test]
    fn test_api_error_with_unparseable_body() {
        let err = api_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("Unknown error"));
    }

    #[test]
    fn test_extract_text_trims_whitespace() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"  Hello  "}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(response).unwrap(), "Hello");
    }

    #[test]
    fn test_extract_text_empty_candidates_is_structural_error() {
        let response: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(GenerateError::UnexpectedResponse)
        ));
    }

    #[test]
    fn test_extract_text_missing_candidates_is_structural_error() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            extract_text(response),
            Err(GenerateError::UnexpectedResponse)
        ));
    }

    #[test]
    fn test_extract_text_missing_text_field_is_structural_error() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{}]}}]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(GenerateError::UnexpectedResponse)
        ));
    }

    #[test]
    fn test_extract_text_empty_parts_is_structural_error() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(matches!(
            extract_text(response),
            Err(GenerateError::UnexpectedResponse)
        ));
    }

    #[test]
    fn test_unexpected_response_message_is_fixed() {
        assert_eq!(
            GenerateError::UnexpectedResponse.to_string(),
            "Could not retrieve optimized prompt. Unexpected API response structure."
        );
    }
}
