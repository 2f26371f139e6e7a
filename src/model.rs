use crate::error::ChatError;
use crate::message::Message;
use crate::providers::CompletionAccessor;
use crate::sampling::SamplingParameters;
use async_trait::async_trait;
use tracing::info;

/// Owner of the conversation history.
#[async_trait]
pub trait Model: Send {
    /// Messages in insertion order.
    fn history(&self) -> &[Message];

    /// Appends `message`, asks for a reply to the whole history and appends the reply.
    async fn handle_prompt(
        &mut self,
        message: Message,
        params: SamplingParameters,
    ) -> Result<(), ChatError>;

    fn clear_history(&mut self);
}

pub struct ChatBotModel {
    history: Vec<Message>,
    accessor: CompletionAccessor,
}

impl ChatBotModel {
    pub fn new(accessor: CompletionAccessor) -> Self {
        Self {
            history: Vec::new(),
            accessor,
        }
    }

    pub fn accessor(&self) -> &CompletionAccessor {
        &self.accessor
    }
}

#[async_trait]
impl Model for ChatBotModel {
    fn history(&self) -> &[Message] {
        &self.history
    }

    /// A failed query leaves the prompt in history without a reply.
    async fn handle_prompt(
        &mut self,
        message: Message,
        params: SamplingParameters,
    ) -> Result<(), ChatError> {
        self.history.push(message);

        let replies = self.accessor.query(&self.history, &params, 1).await?;
        let reply = replies
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::Transport("no choices in completion response".to_string()))?;

        info!(
            role = %reply.role(),
            turns = self.history.len() + 1,
            "received completion"
        );
        self.history.push(reply);
        Ok(())
    }

    fn clear_history(&mut self) {
        self.history.clear();
    }
}
