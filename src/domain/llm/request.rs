use std::sync::Arc;

use super::{Message, TextProvider};

/// Shared prompt handed to every provider in a fallback chain
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub temperature: Option<f32>,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// System and user turns in chat-completions order
    pub fn messages(&self) -> Vec<Message> {
        vec![Message::system(&self.system), Message::user(&self.user)]
    }
}

/// One dispatch call: a prompt and the providers to try, in order
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: Prompt,
    pub providers: Vec<Arc<dyn TextProvider>>,
}

impl GenerationRequest {
    pub fn new(prompt: Prompt, providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self { prompt, providers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MessageRole;

    #[test]
    fn test_prompt_messages_order() {
        let prompt = Prompt::new("You are a chef", "Cook with eggs").with_temperature(0.7);
        let messages = prompt.messages();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "Cook with eggs");
        assert_eq!(prompt.temperature, Some(0.7));
    }

    #[test]
    fn test_prompt_without_temperature() {
        let prompt = Prompt::new("sys", "user");
        assert!(prompt.temperature.is_none());
    }
}
