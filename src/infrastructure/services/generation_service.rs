//! Generation service - runs the configured fallback chains

use std::sync::Arc;

use tracing::info;

use super::prompts::{diet_plan_prompt, recipe_prompt};
use crate::domain::{
    dispatch, DomainError, GenerationRequest, GenerationResult, ImageProvider, ImageResult,
    Prompt, TextProvider,
};
use crate::infrastructure::llm::ProviderChains;

/// Text produced by one of the fallback chains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
    pub provider_id: String,
    pub model: Option<String>,
}

/// Service for recipe, diet plan and dish image generation
#[derive(Debug, Clone)]
pub struct GenerationService {
    chains: ProviderChains,
    diet_temperature: f32,
    image_provider: Arc<dyn ImageProvider>,
}

impl GenerationService {
    pub fn new(
        chains: ProviderChains,
        diet_temperature: f32,
        image_provider: Arc<dyn ImageProvider>,
    ) -> Self {
        Self {
            chains,
            diet_temperature,
            image_provider,
        }
    }

    /// Generate a recipe from a free-text ingredient list
    pub async fn generate_recipe(&self, ingredients: &str) -> Result<GeneratedText, DomainError> {
        info!(ingredients = %ingredients, "Generating recipe");
        self.run_chain(&self.chains.recipe, recipe_prompt(ingredients), "recipe")
            .await
    }

    /// Generate a one-day diet plan from a free-text ingredient list
    pub async fn generate_diet_plan(
        &self,
        ingredients: &str,
    ) -> Result<GeneratedText, DomainError> {
        info!(ingredients = %ingredients, "Generating diet plan");
        let prompt = diet_plan_prompt(ingredients, self.diet_temperature);
        self.run_chain(&self.chains.diet_plan, prompt, "diet plan")
            .await
    }

    /// Generate an illustrative dish image
    pub async fn generate_image(&self, prompt: &str) -> Result<ImageResult, DomainError> {
        info!(
            provider = self.image_provider.provider_name(),
            "Generating image"
        );
        self.image_provider.generate(prompt).await
    }

    async fn run_chain(
        &self,
        providers: &[Arc<dyn TextProvider>],
        prompt: Prompt,
        what: &str,
    ) -> Result<GeneratedText, DomainError> {
        let request = GenerationRequest::new(prompt, providers.to_vec());

        match dispatch(&request).await? {
            GenerationResult::Success {
                text,
                provider_id,
                model,
                ..
            } => Ok(GeneratedText {
                text,
                provider_id,
                model,
            }),
            GenerationResult::Failure { attempts } => Err(DomainError::generation(
                format!("Failed to generate {} after trying all providers.", what),
                attempts,
            )),
        }
    }
}
