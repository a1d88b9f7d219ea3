//! Request and response bodies of the generation endpoints

use serde::{Deserialize, Serialize};

use crate::infrastructure::services::GeneratedText;

/// Body of `/api/recipe` and `/api/healthy-diet`
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientsRequest {
    #[serde(default)]
    pub ingredients: Option<String>,
}

/// Body of `/api/generate-image`
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePromptRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub success: bool,
    pub recipe: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
}

impl From<GeneratedText> for RecipeResponse {
    fn from(generated: GeneratedText) -> Self {
        Self {
            success: true,
            recipe: generated.text,
            provider: generated.provider_id,
            model_used: generated.model,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanResponse {
    pub success: bool,
    pub ingredients: String,
    pub diet_plan: String,
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
}

impl DietPlanResponse {
    pub fn new(ingredients: String, generated: GeneratedText) -> Self {
        Self {
            success: true,
            ingredients,
            diet_plan: generated.text,
            provider: generated.provider_id,
            model_used: generated.model,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub success: bool,
    /// URL or `data:` URL, usable as an `<img src>`
    pub image: String,
    /// `url` or `inline`
    pub image_kind: &'static str,
    pub provider: String,
}

/// Trimmed, non-empty text field
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
