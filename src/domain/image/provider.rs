use async_trait::async_trait;
use std::fmt::Debug;

use super::GeneratedImage;
use crate::domain::DomainError;

/// Image produced for a prompt, with provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    pub image: GeneratedImage,
    pub provider: String,
}

/// Trait for image generation providers (Eden AI, etc.)
#[async_trait]
pub trait ImageProvider: Send + Sync + Debug {
    async fn generate(&self, prompt: &str) -> Result<ImageResult, DomainError>;

    fn provider_name(&self) -> &'static str;
}
