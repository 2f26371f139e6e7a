use crate::message::Message;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub n: u32,
    pub stream: bool,
    pub presence_penalty: f64,
    pub frequency_penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for ChatCompletionMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role().as_str().to_string(),
            content: message.content().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseMessage {
    pub role: String,
    pub content: Option<String>,
}
