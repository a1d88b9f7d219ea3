use std::sync::Arc;

use super::chat_completions::{ChatCompletionsConfig, ChatCompletionsProvider};
use super::http_client::HttpClientTrait;
use crate::config::{AppConfig, OpenRouterConfig};
use crate::domain::TextProvider;

/// Fallback chains built from configuration
#[derive(Debug, Clone)]
pub struct ProviderChains {
    pub recipe: Vec<Arc<dyn TextProvider>>,
    pub diet_plan: Vec<Arc<dyn TextProvider>>,
}

/// Factory for the text provider chains
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Build both chains, sharing one HTTP client
    pub fn create_chains<C>(config: &AppConfig, client: C) -> ProviderChains
    where
        C: HttpClientTrait + Clone + 'static,
    {
        ProviderChains {
            recipe: Self::recipe_chain(config, client.clone()),
            diet_plan: Self::diet_plan_chain(config, client),
        }
    }

    /// Recipe generation goes through OpenRouter only
    pub fn recipe_chain<C>(config: &AppConfig, client: C) -> Vec<Arc<dyn TextProvider>>
    where
        C: HttpClientTrait + 'static,
    {
        let model = &config.generation.recipe_model;
        vec![Self::create_openrouter(
            client,
            &config.providers.openrouter,
            model,
        )]
    }

    /// Diet plans try OpenAI directly, then the preferred OpenRouter model,
    /// then the OpenRouter fallback models in order
    pub fn diet_plan_chain<C>(config: &AppConfig, client: C) -> Vec<Arc<dyn TextProvider>>
    where
        C: HttpClientTrait + Clone + 'static,
    {
        let generation = &config.generation;
        let openai = &config.providers.openai;
        let mut chain: Vec<Arc<dyn TextProvider>> = Vec::new();

        chain.push(Arc::new(ChatCompletionsProvider::new(
            client.clone(),
            ChatCompletionsConfig::new(
                "openai",
                &openai.base_url,
                openai.api_key.clone(),
                &generation.diet_openai_model,
            ),
        )));

        let models = generation
            .diet_model
            .iter()
            .chain(generation.diet_fallback_models.iter());

        for model in models {
            chain.push(Self::create_openrouter(
                client.clone(),
                &config.providers.openrouter,
                model,
            ));
        }

        chain
    }

    /// Create an OpenRouter provider for a single model
    pub fn create_openrouter<C>(
        client: C,
        openrouter: &OpenRouterConfig,
        model: &str,
    ) -> Arc<dyn TextProvider>
    where
        C: HttpClientTrait + 'static,
    {
        let config = ChatCompletionsConfig::new(
            "openrouter",
            &openrouter.base_url,
            openrouter.api_key.clone(),
            model,
        )
        .with_header("HTTP-Referer", &openrouter.referer)
        .with_header("X-Title", &openrouter.title);

        Arc::new(ChatCompletionsProvider::new(client, config))
    }
}
