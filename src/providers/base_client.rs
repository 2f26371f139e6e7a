use super::{ChatCompletionRequest, CompletionTransport};
use crate::error::ChatError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const COMPLETIONS_PATH: &str = "chat/completions";

/// Longest slice of an error body quoted back in a transport error.
const ERROR_BODY_LIMIT: usize = 512;

/// reqwest-backed transport posting to `{endpoint}/chat/completions`.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpClient {
    /// A missing key is not an error here; the endpoint rejects the request later.
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self, ChatError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, endpoint, api_key))
    }

    /// Uses a preconfigured reqwest client, e.g. one with proxy or timeout settings.
    pub fn with_client(client: Client, endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.unwrap_or_default(),
        }
    }

    /// Reads the credential once from the named environment variable.
    pub fn from_env(endpoint: impl Into<String>, var_name: &str) -> Result<Self, ChatError> {
        let api_key = std::env::var(var_name).ok();
        if api_key.is_none() {
            debug!("{} is not set, requests will be sent without a credential", var_name);
        }
        Self::new(endpoint, api_key)
    }

    pub fn url(&self) -> String {
        format!("{}/{}", self.endpoint, COMPLETIONS_PATH)
    }
}

#[async_trait]
impl CompletionTransport for HttpClient {
    async fn send(&self, request: &ChatCompletionRequest) -> Result<String, ChatError> {
        let response = self
            .client
            .post(self.url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "completion endpoint responded");

        if !status.is_success() {
            let excerpt: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(ChatError::Transport(format!(
                "API returned {}: {}",
                status, excerpt
            )));
        }

        Ok(body)
    }
}
