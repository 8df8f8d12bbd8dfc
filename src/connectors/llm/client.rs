use crate::connectors::config::LlmConfig;
use crate::connectors::errors::ConnectorError;
use crate::forms::ChatMessage;
use tracing::Instrument;

use super::connector::LlmConnector;
use super::types::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatRequestMessage,
};
use crate::models::UNCATEGORIZED;

/// HTTP client for an OpenAI-compatible Chat Completions API
pub struct OpenAiClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_key: Option<String>,
    pub(crate) classifier_model: String,
    pub(crate) answerer_model: String,
    pub(crate) retry_attempts: usize,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            api_key: config.api_key,
            classifier_model: config.classifier_model,
            answerer_model: config.answerer_model,
            retry_attempts: config.retry_attempts,
        }
    }

    /// Retry helper with exponential backoff
    pub(crate) async fn retry_request<F, T>(&self, mut f: F) -> Result<T, ConnectorError>
    where
        F: FnMut() -> futures::future::BoxFuture<'static, Result<T, ConnectorError>>,
    {
        let mut attempt = 0;
        loop {
            match f().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    attempt += 1;
                    if attempt >= self.retry_attempts {
                        return Err(err);
                    }
                    // Exponential backoff: 100ms, 200ms, 400ms, etc.
                    let backoff = std::time::Duration::from_millis(100 * 2_u64.pow(attempt as u32));
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    async fn complete(
        &self,
        model: &str,
        messages: Vec<ChatRequestMessage>,
    ) -> Result<String, ConnectorError> {
        let request = ChatCompletionRequest {
            model: model.to_string(),
            messages,
        };
        let url = format!("{}/v1/chat/completions", self.base_url);
        let http_client = self.http_client.clone();
        let api_key = self.api_key.clone();

        self.retry_request(move || {
            let http_client = http_client.clone();
            let url = url.clone();
            let api_key = api_key.clone();
            let request = request.clone();
            Box::pin(async move { send_once(http_client, url, api_key, request).await })
        })
        .await
    }

    fn classifier_prompt(category_names: &[String]) -> String {
        format!(
            "Classify the following question into one of the following categories:\n\n\
             {}\n\n\
             You may also optionally decline to classify the question, in which case\n\
             you should respond with {}. Respond with the category name only.",
            category_names.join("\n"),
            UNCATEGORIZED
        )
    }

    fn conversation(history: &[ChatMessage], question: &str) -> Vec<ChatRequestMessage> {
        history
            .iter()
            .map(|turn| ChatRequestMessage {
                role: turn.role.clone(),
                content: turn.content.clone(),
            })
            .chain(std::iter::once(ChatRequestMessage::user(question)))
            .collect()
    }
}

async fn send_once(
    http_client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    request: ChatCompletionRequest,
) -> Result<String, ConnectorError> {
    let mut req = http_client.post(&url).json(&request);
    if let Some(key) = api_key.as_ref() {
        req = req.header("Authorization", format!("Bearer {}", key));
    }

    let response = req.send().await.map_err(ConnectorError::from)?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .map(|parsed| parsed.error.message)
            .unwrap_or(body);
        return Err(match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                ConnectorError::Unauthorized(message)
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => ConnectorError::RateLimited(message),
            _ => ConnectorError::HttpError(format!("{}: {}", status, message)),
        });
    }

    let completion: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|err| ConnectorError::InvalidResponse(format!("Failed to parse response: {}", err)))?;

    completion
        .first_content()
        .map(|content| content.to_string())
        .ok_or_else(|| {
            ConnectorError::InvalidResponse("Did not receive a completion from the API".to_string())
        })
}

#[async_trait::async_trait]
impl LlmConnector for OpenAiClient {
    async fn classify(
        &self,
        question: &str,
        history: &[ChatMessage],
        category_names: &[String],
    ) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("llm_classify", model = %self.classifier_model);

        let mut messages = vec![ChatRequestMessage::system(Self::classifier_prompt(
            category_names,
        ))];
        messages.extend(Self::conversation(history, question));

        self.complete(&self.classifier_model, messages)
            .instrument(span)
            .await
    }

    async fn answer(
        &self,
        question: &str,
        history: &[ChatMessage],
    ) -> Result<String, ConnectorError> {
        let span = tracing::info_span!("llm_answer", model = %self.answerer_model);

        let messages = Self::conversation(history, question);

        self.complete(&self.answerer_model, messages)
            .instrument(span)
            .await
    }
}
