use super::CompletionTransport;
use super::types::{ChatCompletionMessage, ChatCompletionRequest, ChatCompletionResponse};
use crate::error::ChatError;
use crate::message::{Message, Role};
use crate::sampling::{SamplingParameters, validate_choice_count};
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Validates sampling knobs, sends the whole conversation to a chat-completion
/// endpoint and decodes every returned choice.
///
/// Nothing is cached between calls and failures are never retried.
pub struct CompletionAccessor {
    transport: Box<dyn CompletionTransport>,
    model: String,
}

impl CompletionAccessor {
    pub fn new(transport: Box<dyn CompletionTransport>, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Runs one completion round-trip.
    ///
    /// Parameters are checked in the order temperature, top probability,
    /// presence penalty, frequency penalty, choice count. An empty conversation
    /// is rejected after validation and before any request is sent.
    pub async fn query(
        &self,
        messages: &[Message],
        params: &SamplingParameters,
        choice_count: u32,
    ) -> Result<Vec<Message>, ChatError> {
        params.validate()?;
        let n = validate_choice_count(choice_count)?;

        let input_messages: Vec<ChatCompletionMessage> =
            messages.iter().map(ChatCompletionMessage::from).collect();
        if input_messages.is_empty() {
            return Err(ChatError::EmptyConversation);
        }

        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages: input_messages,
            temperature: params.temperature,
            top_p: params.top_probability,
            n,
            stream: false,
            presence_penalty: params.presence_penalty,
            frequency_penalty: params.frequency_penalty,
        };
        debug!(
            model = %payload.model,
            messages = payload.messages.len(),
            n,
            "sending completion request"
        );

        let body = self.transport.send(&payload).await?;
        parse_choices(&body)
    }
}

/// Decodes `choices[*].message` in order. Unknown roles are fatal.
fn parse_choices(body: &str) -> Result<Vec<Message>, ChatError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)?;

    parsed
        .choices
        .into_iter()
        .map(|choice| {
            let role: Role = choice.message.role.parse()?;
            Ok(Message::new(role, choice.message.content.unwrap_or_default()))
        })
        .collect()
}
