use serde::Serialize;
use thiserror::Error;

use super::llm::AttemptFailure;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Generation failed after {} attempt(s): {message}", .attempts.len())]
    Generation {
        message: String,
        attempts: Vec<AttemptFailure>,
    },

    #[error("Image error: {provider} - {message}")]
    Image { provider: String, message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>, attempts: Vec<AttemptFailure>) -> Self {
        Self::Generation {
            message: message.into(),
            attempts,
        }
    }

    pub fn image(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Image {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

/// Why a single provider attempt did not produce text.
///
/// The dispatcher treats every variant the same way: record it and move on
/// to the next provider.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttemptError {
    /// Network, DNS or timeout failure before a response arrived
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Provider answered with a non-success HTTP status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Successful response without usable text
    #[error("Extraction error: {message}")]
    Extraction { message: String },

    /// Provider skipped before any call, e.g. missing credential
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AttemptError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the provider was skipped without a network call
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
