use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http_client::HttpClientTrait;
use crate::domain::{AttemptError, Message, MessageRole, Prompt, TextProvider};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Connection settings for one chat-completions model
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    /// Short vendor name used as the provider id prefix
    pub vendor: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub extra_headers: Vec<(String, String)>,
}

impl ChatCompletionsConfig {
    pub fn new(
        vendor: impl Into<String>,
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            base_url: Into::<String>::into(base_url).trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            extra_headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }
}

/// Provider speaking the OpenAI chat-completions wire format.
///
/// Used for OpenAI itself and for OpenRouter, one instance per model.
#[derive(Debug)]
pub struct ChatCompletionsProvider<C: HttpClientTrait> {
    client: C,
    id: String,
    auth_header: Option<String>,
    config: ChatCompletionsConfig,
}

impl<C: HttpClientTrait> ChatCompletionsProvider<C> {
    pub fn new(client: C, config: ChatCompletionsConfig) -> Self {
        let id = format!("{}:{}", config.vendor, config.model);
        let auth_header = config.api_key.as_ref().map(|key| format!("Bearer {}", key));

        Self {
            client,
            id,
            auth_header,
            config,
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn build_request(&self, prompt: &Prompt) -> serde_json::Value {
        let messages: Vec<ChatMessage> = prompt
            .messages()
            .iter()
            .map(ChatMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "stream": false,
        });

        if let Some(temp) = prompt.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        body
    }

    fn headers<'a>(&'a self, auth_header: &'a str) -> Vec<(&'a str, &'a str)> {
        let mut headers = vec![
            ("Authorization", auth_header),
            ("Content-Type", "application/json"),
        ];

        for (name, value) in &self.config.extra_headers {
            headers.push((name.as_str(), value.as_str()));
        }

        headers
    }

    fn extract_text(&self, json: serde_json::Value) -> Result<String, AttemptError> {
        let response: ChatCompletionResponse = serde_json::from_value(json).map_err(|e| {
            AttemptError::extraction(format!("Unexpected response shape: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AttemptError::extraction("No choices in response"))?;

        choice
            .message
            .and_then(|m| m.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| AttemptError::extraction("No message content in response"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> TextProvider for ChatCompletionsProvider<C> {
    fn id(&self) -> &str {
        &self.id
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }

    fn check_ready(&self) -> Result<(), AttemptError> {
        match self.auth_header {
            Some(_) => Ok(()),
            None => Err(AttemptError::configuration(format!(
                "No API key configured for {}",
                self.config.vendor
            ))),
        }
    }

    async fn attempt(&self, prompt: &Prompt) -> Result<String, AttemptError> {
        self.check_ready()?;
        let auth_header = self.auth_header.as_deref().unwrap_or_default();

        let url = self.chat_completions_url();
        let body = self.build_request(prompt);
        let response = self
            .client
            .post_json(&url, self.headers(auth_header), &body)
            .await?;

        self.extract_text(response)
    }
}

// Chat-completions wire types

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

impl ChatMessage {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };

        Self {
            role,
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
