//! External service connectors.
//!
//! The language-model API is the only external service this app talks
//! to, and all calls to it go through a connector so request handlers
//! stay independent and testable.
//!
//! ## Architecture Pattern
//!
//! 1. Define a trait → allows mocking in tests
//! 2. Implement the HTTP client next to it
//! 3. Configuration in `config.rs` → enable/disable per environment
//! 4. Inject the trait object into routes → routes never depend on the
//!    HTTP implementation
//!
//! ## Usage in Routes
//!
//! ```ignore
//! pub async fn ads_handler(
//!     llm: web::Data<Arc<dyn LlmConnector>>,
//! ) -> Result<impl Responder> {
//!     let category = llm.classify(&question, &history, &names).await?;
//!     // ...
//! }
//! ```

pub mod config;
pub mod errors;
pub mod llm;

pub use config::{ConnectorConfig, LlmConfig};
pub use errors::ConnectorError;
pub use llm::{LlmConnector, MockLlmConnector, OpenAiClient};

// Re-export the init function for convenient access
pub use llm::init as init_llm;
