use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{DomainError, GeneratedImage, ImageProvider, ImageResult};
use crate::infrastructure::llm::{snippet, HttpClientTrait};

pub const EDEN_AI_BASE_URL: &str = "https://api.edenai.run/v2";

const PROVIDER_NAME: &str = "eden_ai";
const STYLE_SUFFIX: &str = "Photorealistic food photography, soft natural lighting, shallow depth of field, professional plating, high detail, no text, no watermark, centered composition.";

/// Eden AI image generation settings
#[derive(Debug, Clone)]
pub struct EdenAiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Sub-providers Eden AI should run, most preferred first
    pub providers: Vec<String>,
    pub resolution: String,
}

impl EdenAiConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: Into::<String>::into(base_url).trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            providers: vec!["openai".to_string(), "stabilityai".to_string()],
            resolution: "1024x1024".to_string(),
        }
    }
}

/// Image provider backed by the Eden AI aggregation API
#[derive(Debug)]
pub struct EdenAiImageProvider<C: HttpClientTrait> {
    client: C,
    config: EdenAiConfig,
}

impl<C: HttpClientTrait> EdenAiImageProvider<C> {
    pub fn new(client: C, config: EdenAiConfig) -> Self {
        Self { client, config }
    }

    fn generation_url(&self) -> String {
        format!("{}/image/generation", self.config.base_url)
    }

    fn build_request(&self, prompt: &str) -> Value {
        serde_json::json!({
            "providers": self.config.providers.join(","),
            "text": format!("{}. {}", prompt.trim(), STYLE_SUFFIX),
            "resolution": self.config.resolution,
            "fallback_providers": "",
        })
    }

    /// Pick the first successful sub-provider result carrying an image.
    ///
    /// Requested sub-providers are checked in preference order, then any
    /// other keys the response contains.
    fn extract_image(&self, response: &Value) -> Option<ImageResult> {
        let entries = response.as_object()?;

        let preferred = self.config.providers.iter().map(String::as_str);
        let others = entries
            .keys()
            .map(String::as_str)
            .filter(|key| !self.config.providers.iter().any(|p| p == key));

        preferred.chain(others).find_map(|name| {
            let entry = entries.get(name)?;

            if entry.get("status").and_then(Value::as_str) != Some("success") {
                debug!(sub_provider = %name, "Skipping unsuccessful sub-provider");
                return None;
            }

            let item = entry
                .get("items")
                .and_then(Value::as_array)
                .and_then(|items| items.first());

            let raw = item
                .and_then(|i| i.get("image").and_then(Value::as_str))
                .or_else(|| item.and_then(|i| i.get("b64_json").and_then(Value::as_str)))
                .or_else(|| entry.get("image").and_then(Value::as_str))?;

            GeneratedImage::from_provider_field(raw).map(|image| ImageResult {
                image,
                provider: format!("{}:{}", PROVIDER_NAME, name),
            })
        })
    }
}

#[async_trait]
impl<C: HttpClientTrait> ImageProvider for EdenAiImageProvider<C> {
    async fn generate(&self, prompt: &str) -> Result<ImageResult, DomainError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::configuration("Eden AI API key not configured."))?;
        let auth_header = format!("Bearer {}", api_key);

        let headers = vec![
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];
        let body = self.build_request(prompt);

        let response = self
            .client
            .post_json(&self.generation_url(), headers, &body)
            .await
            .map_err(|e| DomainError::image(PROVIDER_NAME, e.to_string()))?;

        self.extract_image(&response).ok_or_else(|| {
            warn!(
                response = %snippet(&response.to_string()),
                "No valid image found in provider response"
            );
            DomainError::image(
                PROVIDER_NAME,
                "No valid image found in provider response.",
            )
        })
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AttemptError;
    use crate::infrastructure::llm::mock::MockHttpClient;
    use std::sync::Arc;

    const TEST_URL: &str = "https://api.edenai.run/v2/image/generation";

    fn provider(client: Arc<MockHttpClient>) -> EdenAiImageProvider<Arc<MockHttpClient>> {
        EdenAiImageProvider::new(
            client,
            EdenAiConfig::new(EDEN_AI_BASE_URL, Some("eden-key".to_string())),
        )
    }

    #[tokio::test]
    async fn test_generate_returns_url_image() {
        let client = Arc::new(MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({
                "openai": {
                    "status": "success",
                    "items": [{
                        "image_resource_url": "x",
                        "image": "https://cdn.example.com/dish.png"
                    }]
                }
            }),
        ));

        let result = provider(client.clone())
            .generate("Pasta with basil")
            .await
            .unwrap();

        assert_eq!(
            result.image,
            GeneratedImage::Url {
                url: "https://cdn.example.com/dish.png".to_string()
            }
        );
        assert_eq!(result.provider, "eden_ai:openai");

        let request = &client.requests()[0];
        assert_eq!(request.header("Authorization"), Some("Bearer eden-key"));
        assert_eq!(request.body["providers"], "openai,stabilityai");
        assert_eq!(request.body["resolution"], "1024x1024");
        assert_eq!(request.body["fallback_providers"], "");
        let text = request.body["text"].as_str().unwrap();
        assert!(text.starts_with("Pasta with basil. Photorealistic food photography"));
    }

    #[tokio::test]
    async fn test_failed_sub_provider_falls_back_to_next() {
        let client = Arc::new(MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({
                "openai": { "status": "fail", "error": { "message": "quota" } },
                "stabilityai": {
                    "status": "success",
                    "items": [{ "b64_json": "iVBORw0KGgo=" }]
                }
            }),
        ));

        let result = provider(client).generate("Salad").await.unwrap();

        assert_eq!(result.provider, "eden_ai:stabilityai");
        assert_eq!(result.image.kind(), "inline");
        assert_eq!(result.image.to_src(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[tokio::test]
    async fn test_entry_level_image_field() {
        let client = Arc::new(MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({
                "replicate": { "status": "success", "image": "data:image/webp;base64,UklGR" }
            }),
        ));

        let result = provider(client).generate("Soup").await.unwrap();

        assert_eq!(
            result.image,
            GeneratedImage::Inline {
                media_type: "image/webp".to_string(),
                data: "UklGR".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_no_image_is_error() {
        let client = Arc::new(MockHttpClient::new().with_response(
            TEST_URL,
            serde_json::json!({ "openai": { "status": "success", "items": [] } }),
        ));

        let error = provider(client).generate("Soup").await.unwrap_err();
        assert!(matches!(error, DomainError::Image { .. }));
    }

    #[tokio::test]
    async fn test_http_error_is_image_error() {
        let client = Arc::new(
            MockHttpClient::new().with_error(TEST_URL, AttemptError::status(402, "no credits")),
        );

        let error = provider(client).generate("Soup").await.unwrap_err();
        assert!(error.to_string().contains("HTTP 402: no credits"));
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_call() {
        let client = Arc::new(MockHttpClient::new());
        let provider =
            EdenAiImageProvider::new(client.clone(), EdenAiConfig::new(EDEN_AI_BASE_URL, None));

        let error = provider.generate("Soup").await.unwrap_err();

        assert!(matches!(error, DomainError::Configuration { .. }));
        assert!(client.requests().is_empty());
    }
}
