//! Healthy diet plan endpoint handler

use axum::extract::State;
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::{non_blank, ApiError, DietPlanResponse, IngredientsRequest, Json};
use crate::domain::DomainError;

/// POST /api/healthy-diet
pub async fn generate_diet_plan(
    State(state): State<AppState>,
    Json(request): Json<IngredientsRequest>,
) -> Result<Json<DietPlanResponse>, ApiError> {
    let ingredients = non_blank(request.ingredients.as_deref())
        .ok_or_else(|| DomainError::validation("Please provide ingredients."))?;

    let generated = state
        .generation_service
        .generate_diet_plan(ingredients)
        .await
        .map_err(|e| {
            error!(error = %e, "Diet plan generation failed");
            ApiError::from(e)
        })?;

    Ok(Json(DietPlanResponse::new(ingredients.to_string(), generated)))
}
