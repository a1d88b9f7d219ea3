//! Recipe endpoint handler

use axum::extract::State;
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::{non_blank, ApiError, IngredientsRequest, Json, RecipeResponse};
use crate::domain::DomainError;

/// POST /api/recipe
pub async fn generate_recipe(
    State(state): State<AppState>,
    Json(request): Json<IngredientsRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let ingredients = non_blank(request.ingredients.as_deref())
        .ok_or_else(|| DomainError::validation("Please provide ingredients."))?;

    let generated = state
        .generation_service
        .generate_recipe(ingredients)
        .await
        .map_err(|e| {
            error!(error = %e, "Recipe generation failed");
            ApiError::from(e)
        })?;

    Ok(Json(RecipeResponse::from(generated)))
}
