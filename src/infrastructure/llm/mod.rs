//! Text provider implementations

mod chat_completions;
mod factory;
mod http_client;

pub use chat_completions::{
    ChatCompletionsConfig, ChatCompletionsProvider, OPENAI_BASE_URL, OPENROUTER_BASE_URL,
};
pub use factory::{LlmProviderFactory, ProviderChains};
pub use http_client::{snippet, HttpClient, HttpClientTrait};

#[cfg(test)]
pub use http_client::mock;
