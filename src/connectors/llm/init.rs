use actix_web::web;
use std::sync::Arc;

use crate::connectors::config::ConnectorConfig;

use super::client::OpenAiClient;
use super::connector::LlmConnector;
use super::mock::MockLlmConnector;

/// Initialize the language-model connector from Settings.
///
/// Returns the configured connector wrapped in web::Data for injection
/// into the Actix app. A disabled (or missing) config falls back to the
/// mock so the app still serves requests in development.
pub fn init(connector_config: &ConnectorConfig) -> web::Data<Arc<dyn LlmConnector>> {
    let connector: Arc<dyn LlmConnector> =
        if let Some(llm_config) = connector_config.llm.as_ref().filter(|c| c.enabled) {
            let mut config = llm_config.clone();
            if config.api_key.is_none() {
                config.api_key = std::env::var("OPENAI_API_KEY").ok();
            }
            tracing::info!("Initializing LLM connector: {}", config.base_url);
            Arc::new(OpenAiClient::new(config))
        } else {
            tracing::warn!("LLM connector disabled - using mock");
            Arc::new(MockLlmConnector)
        };

    web::Data::new(connector)
}
