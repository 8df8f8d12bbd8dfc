mod client;
mod connector;
mod init;
mod mock;
mod types;

pub use client::OpenAiClient;
pub use connector::LlmConnector;
pub use init::init;
pub use mock::MockLlmConnector;
pub use types::{ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatRequestMessage};
