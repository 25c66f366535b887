//! GenerateSuggestionsHandler - post text in, three suggestions out.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::suggestions::{
    normalize, suggestion_user_prompt, SuggestionList, SUGGESTION_SYSTEM_PROMPT,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, MessageRole};

/// Command to generate reply suggestions for one post.
#[derive(Debug, Clone)]
pub struct GenerateSuggestionsCommand {
    pub post_content: String,
}

/// Error type for suggestion generation.
///
/// The provider call is the only hard failure point in the pipeline:
/// malformed completions are absorbed by the normalizer, never surfaced.
#[derive(Debug, thiserror::Error)]
pub enum GenerateSuggestionsError {
    /// Upstream completion call failed or is unconfigured.
    #[error("AI provider error: {0}")]
    Provider(#[from] AIError),
}

/// Handler for generating reply suggestions.
pub struct GenerateSuggestionsHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    max_tokens: u32,
    temperature: f32,
}

impl<P: ?Sized + AIProvider> GenerateSuggestionsHandler<P> {
    pub fn new(ai_provider: Arc<P>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            ai_provider,
            max_tokens,
            temperature,
        }
    }

    /// Issues one completion call and normalizes its output.
    ///
    /// Always yields exactly three suggestions on success; the completion's
    /// shape (numbered, bulleted, prose, empty) never causes a failure.
    pub async fn handle(
        &self,
        cmd: GenerateSuggestionsCommand,
    ) -> Result<SuggestionList, GenerateSuggestionsError> {
        let request = CompletionRequest::new()
            .with_system_prompt(SUGGESTION_SYSTEM_PROMPT)
            .with_message(MessageRole::User, suggestion_user_prompt(&cmd.post_content))
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature);

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            warn!(error = %e, "completion call failed");
            e
        })?;

        debug!(
            model = %response.model,
            raw_len = response.content.len(),
            "completion received"
        );

        Ok(normalize(&response.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::suggestions::GENERIC_SUGGESTIONS;

    fn handler(provider: MockAIProvider) -> GenerateSuggestionsHandler<MockAIProvider> {
        GenerateSuggestionsHandler::new(Arc::new(provider), 200, 0.8)
    }

    fn command() -> GenerateSuggestionsCommand {
        GenerateSuggestionsCommand {
            post_content: "We just launched our developer platform.".to_string(),
        }
    }

    #[tokio::test]
    async fn numbered_completion_becomes_three_suggestions() {
        let provider = MockAIProvider::new()
            .with_response("1. Congratulations on the launch!\n2. Excited to try this out.\n3. Well deserved milestone.");
        let handler = handler(provider);

        let list = handler.handle(command()).await.unwrap();

        assert_eq!(list[0], "Congratulations on the launch!");
        assert_eq!(list[2], "Well deserved milestone.");
    }

    #[tokio::test]
    async fn malformed_completion_is_absorbed() {
        let provider = MockAIProvider::new().with_response("ok");
        let handler = handler(provider);

        let list = handler.handle(command()).await.unwrap();

        assert_eq!(list.as_slice(), &GENERIC_SUGGESTIONS);
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "service down".to_string(),
        });
        let handler = handler(provider);

        let result = handler.handle(command()).await;

        assert!(matches!(
            result,
            Err(GenerateSuggestionsError::Provider(AIError::Unavailable { .. }))
        ));
    }

    #[tokio::test]
    async fn request_carries_prompt_and_tuning() {
        let provider = MockAIProvider::new().with_response("1. A\n2. B\n3. C");
        let handler = GenerateSuggestionsHandler::new(Arc::new(provider.clone()), 123, 0.3);

        handler.handle(command()).await.unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].max_tokens, Some(123));
        assert_eq!(calls[0].temperature, Some(0.3));
        assert!(calls[0]
            .system_prompt
            .as_deref()
            .unwrap()
            .contains("exactly 3"));
        assert!(calls[0].messages[0]
            .content
            .contains("We just launched our developer platform."));
    }
}
