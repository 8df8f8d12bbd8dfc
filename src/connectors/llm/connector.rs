use crate::connectors::errors::ConnectorError;
use crate::forms::ChatMessage;

/// Trait for the language-model collaborator behind both flows.
/// Allows mocking in tests and swapping implementations.
#[async_trait::async_trait]
pub trait LlmConnector: Send + Sync {
    /// Pick one category name for the question out of `category_names`,
    /// or the uncategorized sentinel. The reply is raw text; callers
    /// validate it against the active set themselves.
    async fn classify(
        &self,
        question: &str,
        history: &[ChatMessage],
        category_names: &[String],
    ) -> Result<String, ConnectorError>;

    /// Produce answer text for the question given the prior turns.
    async fn answer(
        &self,
        question: &str,
        history: &[ChatMessage],
    ) -> Result<String, ConnectorError>;
}
