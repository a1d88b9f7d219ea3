use async_trait::async_trait;
use std::fmt::Debug;

use super::Prompt;
use crate::domain::AttemptError;

/// A text-generation provider that can be placed in a fallback chain.
///
/// Implementations own the provider-specific wire shape: they build the
/// request body from the shared [`Prompt`] and extract plain text from the
/// provider's response.
#[async_trait]
pub trait TextProvider: Send + Sync + Debug {
    /// Stable identifier reported back to callers as provenance
    fn id(&self) -> &str;

    /// Model name sent to the provider, if the provider has one
    fn model(&self) -> Option<&str> {
        None
    }

    /// Check that the provider can be attempted at all.
    ///
    /// Returning an error skips the provider without a network call.
    fn check_ready(&self) -> Result<(), AttemptError> {
        Ok(())
    }

    /// Issue exactly one request and return the generated text
    async fn attempt(&self, prompt: &Prompt) -> Result<String, AttemptError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted provider that counts how often it was attempted
    #[derive(Debug)]
    pub struct MockTextProvider {
        id: String,
        outcome: Result<String, AttemptError>,
        ready: Result<(), AttemptError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockTextProvider {
        pub fn succeeding(id: impl Into<String>, text: impl Into<String>) -> Self {
            Self {
                id: id.into(),
                outcome: Ok(text.into()),
                ready: Ok(()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn failing(id: impl Into<String>, error: AttemptError) -> Self {
            Self {
                id: id.into(),
                outcome: Err(error),
                ready: Ok(()),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn unconfigured(id: impl Into<String>) -> Self {
            let id = id.into();
            let message = format!("no credential configured for {}", id);
            Self {
                id,
                outcome: Err(AttemptError::configuration(message.clone())),
                ready: Err(AttemptError::configuration(message)),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        /// Shared handle to the call counter
        pub fn calls(&self) -> Arc<AtomicUsize> {
            self.calls.clone()
        }
    }

    #[async_trait]
    impl TextProvider for MockTextProvider {
        fn id(&self) -> &str {
            &self.id
        }

        fn check_ready(&self) -> Result<(), AttemptError> {
            self.ready.clone()
        }

        async fn attempt(&self, _prompt: &Prompt) -> Result<String, AttemptError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }
}
