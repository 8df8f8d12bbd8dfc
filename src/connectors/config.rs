use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub llm: Option<LlmConfig>,
}

/// Language-model connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Enable/disable the live API; disabled falls back to the mock
    pub enabled: bool,
    /// Base URL of an OpenAI-compatible API (e.g. https://api.openai.com)
    pub base_url: String,
    /// Model used for question classification
    pub classifier_model: String,
    /// Model used for answer generation
    pub answerer_model: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Number of retry attempts for failed requests
    pub retry_attempts: usize,
    /// API key (from env: OPENAI_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://api.openai.com".to_string(),
            classifier_model: "gpt-4o-mini-2024-07-18".to_string(),
            answerer_model: "gpt-3.5-turbo".to_string(),
            timeout_secs: 30,
            retry_attempts: 3,
            api_key: None,
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            llm: Some(LlmConfig::default()),
        }
    }
}
