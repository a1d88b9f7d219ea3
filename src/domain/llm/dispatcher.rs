//! Ordered fallback over text providers

use tracing::{debug, info, warn};

use super::{AttemptFailure, GenerationRequest, GenerationResult};
use crate::domain::{AttemptError, DomainError};

/// Try each provider of the request in order until one yields text.
///
/// The first non-empty text wins and no further provider is contacted.
/// Every failed attempt is kept, in order, so callers can report them.
/// An empty provider list is a configuration error.
pub async fn dispatch(request: &GenerationRequest) -> Result<GenerationResult, DomainError> {
    if request.providers.is_empty() {
        return Err(DomainError::configuration(
            "No providers configured for generation request",
        ));
    }

    let mut attempts = Vec::with_capacity(request.providers.len());

    for provider in &request.providers {
        let provider_id = provider.id();

        if let Err(error) = provider.check_ready() {
            debug!(provider = %provider_id, error = %error, "Skipping provider");
            attempts.push(AttemptFailure::new(provider_id, error));
            continue;
        }

        debug!(provider = %provider_id, "Attempting provider");

        match provider.attempt(&request.prompt).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(
                    provider = %provider_id,
                    failed_attempts = attempts.len(),
                    "Generation succeeded"
                );
                return Ok(GenerationResult::Success {
                    text,
                    provider_id: provider_id.to_string(),
                    model: provider.model().map(str::to_string),
                    failed_attempts: attempts,
                });
            }
            Ok(_) => {
                warn!(provider = %provider_id, "Provider returned empty text");
                attempts.push(AttemptFailure::new(
                    provider_id,
                    AttemptError::extraction("empty text in response"),
                ));
            }
            Err(error) => {
                warn!(provider = %provider_id, error = %error, "Provider attempt failed");
                attempts.push(AttemptFailure::new(provider_id, error));
            }
        }
    }

    warn!(attempts = attempts.len(), "All providers failed");
    Ok(GenerationResult::Failure { attempts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::mock::MockTextProvider;
    use crate::domain::llm::{Prompt, TextProvider};
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    fn prompt() -> Prompt {
        Prompt::new("You are a chef", "eggs, tomato")
    }

    fn request(providers: Vec<Arc<dyn TextProvider>>) -> GenerationRequest {
        GenerationRequest::new(prompt(), providers)
    }

    #[tokio::test]
    async fn test_falls_through_to_first_success() {
        let a = MockTextProvider::failing("A", AttemptError::status(401, "unauthorized"));
        let b = MockTextProvider::failing("B", AttemptError::status(500, "server error"));
        let c = MockTextProvider::succeeding("C", "Recipe X");
        let d = MockTextProvider::succeeding("D", "never used");
        let counters = [a.calls(), b.calls(), c.calls(), d.calls()];

        let result = dispatch(&request(vec![
            Arc::new(a),
            Arc::new(b),
            Arc::new(c),
            Arc::new(d),
        ]))
        .await
        .unwrap();

        match result {
            GenerationResult::Success {
                text,
                provider_id,
                failed_attempts,
                ..
            } => {
                assert_eq!(text, "Recipe X");
                assert_eq!(provider_id, "C");
                assert_eq!(failed_attempts.len(), 2);
                assert_eq!(failed_attempts[0].provider_id, "A");
                assert_eq!(failed_attempts[0].error, AttemptError::status(401, "unauthorized"));
                assert_eq!(failed_attempts[1].provider_id, "B");
            }
            other => panic!("expected success, got {:?}", other),
        }

        let calls: Vec<usize> = counters.iter().map(|c| c.load(Ordering::SeqCst)).collect();
        assert_eq!(calls, vec![1, 1, 1, 0]);
    }

    #[tokio::test]
    async fn test_first_provider_success_makes_one_call() {
        let a = MockTextProvider::succeeding("A", "Soup");
        let b = MockTextProvider::succeeding("B", "Salad");
        let b_calls = b.calls();

        let result = dispatch(&request(vec![Arc::new(a), Arc::new(b)]))
            .await
            .unwrap();

        assert_eq!(result.provider_id(), Some("A"));
        assert_eq!(b_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_failures_preserved_in_order() {
        let a = MockTextProvider::failing("A", AttemptError::transport("dns failure"));
        let b = MockTextProvider::failing("B", AttemptError::extraction("no choices"));

        let result = dispatch(&request(vec![Arc::new(a), Arc::new(b)]))
            .await
            .unwrap();

        match result {
            GenerationResult::Failure { attempts } => {
                assert_eq!(attempts.len(), 2);
                assert_eq!(attempts[0].provider_id, "A");
                assert_eq!(attempts[0].error, AttemptError::transport("dns failure"));
                assert_eq!(attempts[1].provider_id, "B");
                assert_eq!(attempts[1].error, AttemptError::extraction("no choices"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_provider_list_is_configuration_error() {
        let result = dispatch(&request(vec![])).await;
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_skipped_without_call() {
        let a = MockTextProvider::unconfigured("A");
        let a_calls = a.calls();
        let b = MockTextProvider::succeeding("B", "Omelette");

        let result = dispatch(&request(vec![Arc::new(a), Arc::new(b)]))
            .await
            .unwrap();

        assert_eq!(a_calls.load(Ordering::SeqCst), 0);
        match result {
            GenerationResult::Success {
                provider_id,
                failed_attempts,
                ..
            } => {
                assert_eq!(provider_id, "B");
                assert_eq!(failed_attempts.len(), 1);
                assert!(failed_attempts[0].error.is_configuration());
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_text_counts_as_extraction_failure() {
        let a = MockTextProvider::succeeding("A", "   \n");
        let b = MockTextProvider::succeeding("B", "Pasta");

        let result = dispatch(&request(vec![Arc::new(a), Arc::new(b)]))
            .await
            .unwrap();

        match result {
            GenerationResult::Success {
                provider_id,
                failed_attempts,
                ..
            } => {
                assert_eq!(provider_id, "B");
                assert!(matches!(
                    failed_attempts[0].error,
                    AttemptError::Extraction { .. }
                ));
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dispatch_is_repeatable() {
        let providers: Vec<Arc<dyn TextProvider>> = vec![
            Arc::new(MockTextProvider::failing("A", AttemptError::status(503, "busy"))),
            Arc::new(MockTextProvider::succeeding("B", "Stew")),
        ];
        let request = request(providers);

        let first = dispatch(&request).await.unwrap();
        let second = dispatch(&request).await.unwrap();

        assert_eq!(first.provider_id(), Some("B"));
        assert_eq!(first, second);
    }
}
