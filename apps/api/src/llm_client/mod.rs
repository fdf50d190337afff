/// LLM Client — the single point of entry for all chat-completion calls.
///
/// ARCHITECTURAL RULE: No other module may call the OpenRouter API directly.
/// All LLM interactions MUST go through this module.
///
/// The client deliberately carries no timeout, retry, or rate-limit policy:
/// transport and API failures propagate to the request boundary as-is, which
/// is the documented behavior of the legacy API.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model used for resume improvement.
/// Intentionally hardcoded to prevent accidental drift.
pub const IMPROVE_MODEL: &str = "google/gemini-2.5-flash-lite-preview-09-2025";
/// Model used for company-name extraction and instruction-driven edits.
pub const EDIT_MODEL: &str = "google/gemini-2.0-flash-001";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A single chat message in the OpenAI-compatible wire format.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single chat-completion client used by all services.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        // No request timeout: the legacy API lets a slow upstream block the
        // handling task indefinitely.
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Sends a chat-completion request and returns the first choice's text.
    pub async fn chat(&self, model: &str, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request_body = ChatRequest { model, messages };

        let response = self
            .client
            .post(OPENROUTER_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse a structured error message
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded ({} chars, model {model})", content.len());

        Ok(content)
    }

    /// Convenience method that calls the LLM and parses the reply as JSON
    /// after stripping any markdown code fences.
    pub async fn chat_json(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<Value, LlmError> {
        let text = self.chat(model, messages).await?;
        extract_json_from_response(&text)
    }
}

/// Extracts JSON from an LLM reply, tolerating markdown code-fence wrapping.
///
/// The stripping rule is an exact reproducible unit, independent of which
/// upstream model produced the text: trim whitespace; if the text starts with
/// a fence marker, drop the entire first line unconditionally, and drop the
/// last line only if it is exactly a closing fence.
pub fn extract_json_from_response(content: &str) -> Result<Value, LlmError> {
    let content = content.trim();

    let stripped = if content.starts_with("```") {
        let mut lines: Vec<&str> = content.lines().collect();
        lines.remove(0);
        if lines.last().is_some_and(|l| l.trim() == "```") {
            lines.pop();
        }
        lines.join("\n")
    } else {
        content.to_string()
    };

    serde_json::from_str(&stripped).map_err(LlmError::Parse)
}
