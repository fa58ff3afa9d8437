/// OpenRouter chat-completions client
///
/// Sends a single user message and returns the first choice's content.
/// OpenRouter reports some failures as an `error` object in an otherwise
/// successful response, so the body is inspected before the status.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    services::providers::TextGenerator,
};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenRouterClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl TextGenerator for OpenRouterClient {
    async fn complete(&self, prompt: &str, model: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);
        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let parsed: Option<ChatResponse> = serde_json::from_str(&body).ok();

        if let Some(error) = parsed.as_ref().and_then(|r| r.error.as_ref()) {
            tracing::error!(model = %model, error = %error, "OpenRouter returned an error payload");
            return Err(AppError::ExternalApi(format!("OpenRouter error: {}", error)));
        }

        if !status.is_success() {
            return Err(AppError::ExternalApi(format!(
                "OpenRouter API returned status {}: {}",
                status, body
            )));
        }

        let content = parsed
            .and_then(|r| r.choices.into_iter().next())
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::ExternalApi("OpenRouter response contained no choices".to_string())
            })?;

        tracing::debug!(
            model = %model,
            chars = content.len(),
            provider = "openrouter",
            "Completion received"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "openrouter"
    }
}
