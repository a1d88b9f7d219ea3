use serde::Serialize;

use crate::domain::AttemptError;

/// A failed attempt against one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptFailure {
    pub provider_id: String,
    pub error: AttemptError,
}

impl AttemptFailure {
    pub fn new(provider_id: impl Into<String>, error: AttemptError) -> Self {
        Self {
            provider_id: provider_id.into(),
            error,
        }
    }
}

/// Outcome of a dispatch over a fallback chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GenerationResult {
    Success {
        text: String,
        provider_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        model: Option<String>,
        /// Attempts that failed before the winning provider
        #[serde(skip_serializing_if = "Vec::is_empty")]
        failed_attempts: Vec<AttemptFailure>,
    },
    Failure {
        attempts: Vec<AttemptFailure>,
    },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Generated text, if any provider succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Success { text, .. } => Some(text),
            Self::Failure { .. } => None,
        }
    }

    /// Id of the provider that produced the text
    pub fn provider_id(&self) -> Option<&str> {
        match self {
            Self::Success { provider_id, .. } => Some(provider_id),
            Self::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let result = GenerationResult::Success {
            text: "Recipe X".to_string(),
            provider_id: "C".to_string(),
            model: None,
            failed_attempts: vec![],
        };

        assert!(result.is_success());
        assert_eq!(result.text(), Some("Recipe X"));
        assert_eq!(result.provider_id(), Some("C"));
    }

    #[test]
    fn test_failure_serialization() {
        let result = GenerationResult::Failure {
            attempts: vec![AttemptFailure::new(
                "openai:gpt-4o-mini",
                AttemptError::status(500, "oops"),
            )],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"], "failure");
        assert_eq!(json["attempts"][0]["provider_id"], "openai:gpt-4o-mini");
        assert_eq!(json["attempts"][0]["error"]["status"], 500);
        assert!(result.text().is_none());
    }
}
