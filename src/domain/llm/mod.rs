//! Text generation domain models and the provider fallback dispatcher

mod dispatcher;
mod message;
mod provider;
mod request;
mod response;

pub use dispatcher::dispatch;
pub use message::{Message, MessageRole};
pub use provider::TextProvider;
pub use request::{GenerationRequest, Prompt};
pub use response::{AttemptFailure, GenerationResult};

#[cfg(test)]
pub use provider::mock;
