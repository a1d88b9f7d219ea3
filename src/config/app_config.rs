use serde::Deserialize;

use crate::infrastructure::image::EDEN_AI_BASE_URL;
use crate::infrastructure::llm::{OPENAI_BASE_URL, OPENROUTER_BASE_URL};

/// Flat environment variables honoured on top of the layered configuration
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "providers.openai.api_key"),
    ("OPENROUTER_API_KEY", "providers.openrouter.api_key"),
    ("OPENROUTER_REFERER", "providers.openrouter.referer"),
    ("OPENROUTER_TITLE", "providers.openrouter.title"),
    ("EDENAI_API_KEY", "providers.eden_ai.api_key"),
    ("DIET_MODEL", "generation.diet_model"),
    ("DIET_PROVIDER", "generation.diet_provider"),
];

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub providers: ProvidersConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Credentials and endpoints for the external AI services
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Per-call timeout for outbound provider requests
    pub timeout_secs: u64,
    pub openai: OpenAiEndpointConfig,
    pub openrouter: OpenRouterConfig,
    pub eden_ai: EdenAiEndpointConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiEndpointConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EdenAiEndpointConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub referer: String,
    pub title: String,
}

/// Models and sampling settings for the fallback chains
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub recipe_model: String,
    pub diet_openai_model: String,
    /// Preferred OpenRouter model tried before the fallback list
    pub diet_model: Option<String>,
    pub diet_fallback_models: Vec<String>,
    pub diet_temperature: f32,
    /// Label reported by the health endpoint
    pub diet_provider: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            openai: OpenAiEndpointConfig::default(),
            openrouter: OpenRouterConfig::default(),
            eden_ai: EdenAiEndpointConfig::default(),
        }
    }
}

impl Default for OpenAiEndpointConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENAI_BASE_URL.to_string(),
        }
    }
}

impl Default for EdenAiEndpointConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: EDEN_AI_BASE_URL.to_string(),
        }
    }
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: OPENROUTER_BASE_URL.to_string(),
            referer: "http://localhost:3000".to_string(),
            title: "SmartChef".to_string(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            recipe_model: "gpt-3.5-turbo".to_string(),
            diet_openai_model: "gpt-4o-mini".to_string(),
            diet_model: None,
            diet_fallback_models: vec![
                "openai/gpt-4o-mini".to_string(),
                "openai/gpt-3.5-turbo".to_string(),
                "mistralai/mistral-7b-instruct".to_string(),
                "meta-llama/llama-3.1-8b-instruct".to_string(),
            ],
            diet_temperature: 0.7,
            diet_provider: "auto".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files, `APP__*` variables and the flat
    /// provider variables of the process environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::load`] with a custom lookup for the flat variables
    pub fn load_with<F>(lookup: F) -> Result<Self, config::ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        for &(var, key) in LEGACY_ENV_OVERRIDES {
            let value = lookup(var).filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        let port = lookup("PORT")
            .map(|raw| {
                raw.trim().parse::<u16>().map_err(|_| {
                    config::ConfigError::Message(format!(
                        "PORT must be a valid port, got '{}'",
                        raw
                    ))
                })
            })
            .transpose()?;
        builder = builder.set_override_option("server.port", port.map(i64::from))?;

        builder.build()?.try_deserialize()
    }

    /// Outbound request timeout
    pub fn provider_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.providers.timeout_secs)
    }
}
