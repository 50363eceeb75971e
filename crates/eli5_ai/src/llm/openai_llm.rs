use eli5_core::error::AppError;
use serde::{Deserialize, Serialize};

use super::Llm;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";

/// Blocking client for an OpenAI-compatible chat completions endpoint.
///
/// One request per call, no streaming, no retries. A transport failure is
/// fatal to the run (flagged retryable for callers that choose otherwise).
#[derive(Debug, Clone)]
pub struct OpenAiLlm {
    base_url: String,
    api_key: String,
}

impl OpenAiLlm {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, AppError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::new(
                "LLM_BASE_URL_INVALID",
                "Model API base URL must be http(s)",
            )
            .with_details(format!("base_url={base_url}")));
        }
        if api_key.trim().is_empty() {
            return Err(AppError::new(
                "LLM_API_KEY_MISSING",
                "Model API key must be non-empty",
            ));
        }
        Ok(Self {
            base_url,
            api_key: api_key.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl Llm for OpenAiLlm {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
        };

        let resp = ureq::post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .timeout(std::time::Duration::from_secs(60))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new("LLM_REQUEST_FAILED", "Failed to encode completion request")
                    .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) => {
                let v: ChatResponse = r.into_json().map_err(|e| {
                    AppError::new("LLM_REQUEST_FAILED", "Failed to decode completion response")
                        .with_details(e.to_string())
                })?;
                let content = v
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .unwrap_or_default();
                if content.trim().is_empty() {
                    return Err(AppError::new(
                        "LLM_REQUEST_FAILED",
                        "Completion response was empty",
                    ));
                }
                Ok(content)
            }
            Err(ureq::Error::Status(code, _)) => Err(AppError::new(
                "LLM_REQUEST_FAILED",
                "Completion request failed",
            )
            .with_details(format!("status={code}"))),
            Err(e) => Err(
                AppError::new("LLM_REQUEST_FAILED", "Failed to call completion endpoint")
                    .with_details(e.to_string())
                    .with_retryable(true),
            ),
        }
    }
}
