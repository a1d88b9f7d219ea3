//! API request, response and error types

pub mod error;
pub mod generation;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use generation::{
    non_blank, DietPlanResponse, ImagePromptRequest, ImageResponse, IngredientsRequest,
    RecipeResponse,
};
pub use json::Json;
