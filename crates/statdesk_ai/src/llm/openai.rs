use serde::{Deserialize, Serialize};
use statdesk_core::error::AppError;

use super::CompletionClient;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the API endpoint, e.g. for a proxy or a test double.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: 1000,
            temperature: 0.3,
        };

        let resp = ureq::post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .timeout(std::time::Duration::from_secs(60))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new(
                    "ANSWER_COMPLETION_FAILED",
                    "Failed to encode completion request",
                )
                .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: ChatResponse = r.into_json().map_err(|e| {
                    AppError::new(
                        "ANSWER_COMPLETION_FAILED",
                        "Failed to decode completion response",
                    )
                    .with_details(e.to_string())
                })?;
                let content = v
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.message.content)
                    .unwrap_or_default();
                if content.trim().is_empty() {
                    return Err(AppError::new(
                        "ANSWER_COMPLETION_FAILED",
                        "Completion response was empty",
                    ));
                }
                Ok(content)
            }
            Ok(r) => Err(
                AppError::new("ANSWER_COMPLETION_FAILED", "Completion request failed")
                    .with_details(format!("status={}", r.status())),
            ),
            Err(e) => Err(AppError::new(
                "ANSWER_COMPLETION_FAILED",
                "Failed to call completion endpoint",
            )
            .with_details(e.to_string())
            .with_retryable(true)),
        }
    }
}
