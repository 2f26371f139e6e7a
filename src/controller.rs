use crate::error::ChatError;
use crate::message::{Message, Role};
use crate::model::Model;
use crate::sampling::SamplingParameters;
use crate::view::View;
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait Controller: Send {
    /// Submits a prompt typed into the view under the given role.
    async fn handle_prompt_message(&mut self, role: &str, content: &str) -> Result<(), ChatError>;

    fn clear_history(&mut self);
}

/// Mediates between a [`Model`] and a [`View`]. Holds no state of its own.
pub struct ChatBotController<M, V> {
    model: M,
    view: V,
}

impl<M: Model, V: View> ChatBotController<M, V> {
    pub fn new(model: M, view: V) -> Self {
        Self { model, view }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Clears the rendered transcript and redraws the whole history.
    pub fn update_history(&mut self) {
        self.view.clear_transcript();
        for message in self.model.history() {
            self.view.render_message(message.role(), message.content());
        }
    }

    fn current_parameters(&self) -> SamplingParameters {
        SamplingParameters {
            temperature: self.view.temperature(),
            top_probability: self.view.top_probability(),
            presence_penalty: self.view.presence_penalty(),
            frequency_penalty: self.view.frequency_penalty(),
        }
    }
}

#[async_trait]
impl<M: Model, V: View> Controller for ChatBotController<M, V> {
    async fn handle_prompt_message(&mut self, role: &str, content: &str) -> Result<(), ChatError> {
        let role: Role = role.parse()?;
        let message = Message::new(role, content);
        if message.role() == Role::Assistant {
            return Err(ChatError::InvalidSubmission(
                "prompt message cannot have the assistant as the sender".to_string(),
            ));
        }

        let params = self.current_parameters();
        debug!(role = %message.role(), ?params, "submitting prompt");
        self.model.handle_prompt(message, params).await?;
        self.update_history();
        Ok(())
    }

    fn clear_history(&mut self) {
        self.model.clear_history();
        self.view.clear_transcript();
    }
}
