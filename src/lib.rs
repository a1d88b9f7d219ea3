//! SmartChef Relay
//!
//! Backend relay for the SmartChef front-end:
//! - Recipe and diet plan generation over ordered provider fallback chains
//! - Dish image generation through Eden AI
//! - OpenAI and OpenRouter chat-completions providers

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::{AppState, ServiceInfo};
use infrastructure::image::{EdenAiConfig, EdenAiImageProvider};
use infrastructure::llm::{HttpClient, HttpClientTrait, LlmProviderFactory};
use infrastructure::services::GenerationService;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let http_client = HttpClient::with_timeout(config.provider_timeout())?;

    log_missing_credential("OpenAI", config.providers.openai.api_key.is_none());
    log_missing_credential("OpenRouter", config.providers.openrouter.api_key.is_none());
    log_missing_credential("Eden AI", config.providers.eden_ai.api_key.is_none());

    let service = build_generation_service(config, http_client);

    let info = ServiceInfo {
        diet_provider: config.generation.diet_provider.clone(),
        port: config.server.port,
    };

    Ok(AppState::new(service, info))
}

/// Wire the provider chains and the image provider over one HTTP client
pub fn build_generation_service<C>(config: &AppConfig, http_client: C) -> GenerationService
where
    C: HttpClientTrait + Clone + 'static,
{
    let chains = LlmProviderFactory::create_chains(config, http_client.clone());
    info!(
        recipe_providers = chains.recipe.len(),
        diet_plan_providers = chains.diet_plan.len(),
        "Provider chains configured"
    );

    let eden_ai = &config.providers.eden_ai;
    let image_provider = EdenAiImageProvider::new(
        http_client,
        EdenAiConfig::new(&eden_ai.base_url, eden_ai.api_key.clone()),
    );

    GenerationService::new(
        chains,
        config.generation.diet_temperature,
        Arc::new(image_provider),
    )
}

fn log_missing_credential(provider: &str, missing: bool) {
    if missing {
        tracing::warn!(provider, "API key not configured; provider will be skipped");
    }
}
