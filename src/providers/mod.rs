use crate::error::ChatError;
use async_trait::async_trait;

pub mod base_client;
pub mod openai;
pub mod types;

pub use base_client::HttpClient;
pub use openai::{CompletionAccessor, DEFAULT_MODEL};
pub use types::{ChatCompletionMessage, ChatCompletionRequest};

/// Carries one serialized completion request to the endpoint and hands back
/// the raw response body.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn send(&self, request: &ChatCompletionRequest) -> Result<String, ChatError>;
}
