use crate::connectors::errors::ConnectorError;
use crate::forms::ChatMessage;
use crate::models::UNCATEGORIZED;

use super::connector::LlmConnector;

/// Mock language model for testing and disabled configurations.
/// Classifies into the first active category (or the sentinel when
/// there is none) and answers with a canned line.
pub struct MockLlmConnector;

#[async_trait::async_trait]
impl LlmConnector for MockLlmConnector {
    async fn classify(
        &self,
        _question: &str,
        _history: &[ChatMessage],
        category_names: &[String],
    ) -> Result<String, ConnectorError> {
        Ok(category_names
            .first()
            .cloned()
            .unwrap_or_else(|| UNCATEGORIZED.to_string()))
    }

    async fn answer(
        &self,
        question: &str,
        _history: &[ChatMessage],
    ) -> Result<String, ConnectorError> {
        Ok(format!("Mock answer to: {}", question))
    }
}
