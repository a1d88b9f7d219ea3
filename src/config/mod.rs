//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, EdenAiEndpointConfig, GenerationConfig, LogFormat, LoggingConfig,
    OpenAiEndpointConfig, OpenRouterConfig, ProvidersConfig, ServerConfig,
};
