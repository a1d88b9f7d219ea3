//! Infrastructure layer - external service implementations

pub mod image;
pub mod llm;
pub mod logging;
pub mod services;
