//! Dish image endpoint handler

use axum::extract::State;
use tracing::error;

use crate::api::state::AppState;
use crate::api::types::{non_blank, ApiError, ImagePromptRequest, ImageResponse, Json};
use crate::domain::DomainError;

/// POST /api/generate-image
pub async fn generate_image(
    State(state): State<AppState>,
    Json(request): Json<ImagePromptRequest>,
) -> Result<Json<ImageResponse>, ApiError> {
    let prompt = non_blank(request.prompt.as_deref())
        .ok_or_else(|| DomainError::validation("Please provide an image prompt."))?;

    let result = state
        .generation_service
        .generate_image(prompt)
        .await
        .map_err(|e| {
            error!(error = %e, "Image generation failed");
            ApiError::from(e)
        })?;

    Ok(Json(ImageResponse {
        success: true,
        image: result.image.to_src(),
        image_kind: result.image.kind(),
        provider: result.provider,
    }))
}
