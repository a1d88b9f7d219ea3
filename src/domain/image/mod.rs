//! Dish image generation domain

mod generated;
mod provider;

pub use generated::GeneratedImage;
pub use provider::{ImageProvider, ImageResult};

#[cfg(test)]
pub use provider::mock;
