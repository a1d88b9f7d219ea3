//! Domain layer - generation requests, providers and the fallback dispatcher

pub mod error;
pub mod image;
pub mod llm;

pub use error::{AttemptError, DomainError};
pub use image::{GeneratedImage, ImageProvider, ImageResult};
pub use llm::{
    dispatch, AttemptFailure, GenerationRequest, GenerationResult, Message, MessageRole, Prompt,
    TextProvider,
};
