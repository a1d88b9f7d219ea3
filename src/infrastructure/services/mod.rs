//! Application services

mod generation_service;
mod prompts;

pub use generation_service::{GeneratedText, GenerationService};
pub use prompts::{diet_plan_prompt, recipe_prompt};
