//! Recipe, diet plan and image generation endpoints

pub mod diet_plan;
pub mod image;
pub mod recipe;

use axum::{routing::post, Router};

use super::state::AppState;

/// Create the generation router, mounted under `/api`
pub fn create_generate_router() -> Router<AppState> {
    Router::new()
        .route("/recipe", post(recipe::generate_recipe))
        .route("/healthy-diet", post(diet_plan::generate_diet_plan))
        .route("/generate-image", post(image::generate_image))
}
