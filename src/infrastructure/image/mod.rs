//! Image provider implementations

mod eden_ai;

pub use eden_ai::{EdenAiConfig, EdenAiImageProvider, EDEN_AI_BASE_URL};
