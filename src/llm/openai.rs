use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::error::{Error, Result};
use crate::llm::provider::LLMProvider;

/// Longest slice of an error response body kept in the error message.
const MAX_ERROR_BODY_CHARS: usize = 2_000;

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

impl OpenAIProvider {
    pub fn new(api_key: String, model: Option<String>) -> Result<Self> {
        Self::builder(api_key, model, DEFAULT_BASE_URL.to_string(), 120)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder(
            config.api_key()?.to_string(),
            Some(config.model.clone()),
            config.base_url.clone(),
            config.request_timeout_secs,
        )
    }

    fn builder(
        api_key: String,
        model: Option<String>,
        base_url: String,
        timeout_secs: u64,
    ) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(Error::MissingCredential);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        tracing::debug!("Sending {} chars to {}", prompt.len(), self.model);

        let request_body = ChatRequest {
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
            temperature: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::LLMApi(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::LLMApi(format!(
                "OpenAI API error ({}): {}",
                status,
                truncate_body(&body)
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::LLMApi(format!("Failed to read OpenAI response: {}", e)))?;

        extract_content(decode_response(&body)?)
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}

fn decode_response(body: &str) -> Result<ChatResponse> {
    serde_json::from_str(body)
        .map_err(|e| Error::ParseError(format!("Failed to parse OpenAI response: {}", e)))
}

fn extract_content(response: ChatResponse) -> Result<String> {
    if let Some(error) = response.error {
        return Err(Error::LLMApi(error.message));
    }

    // An empty string is a valid (if useless) reply; only a missing one is an error.
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| Error::LLMApi("Empty response from OpenAI".to_string()))
}

fn truncate_body(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
