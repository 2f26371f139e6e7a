//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use gptchat::providers::ChatCompletionRequest;
use gptchat::{
    ChatBotController, ChatBotModel, ChatError, CompletionAccessor, CompletionTransport, Role,
    SamplingParameters, View,
};
use std::sync::{Arc, Mutex};

pub type RequestLog = Arc<Mutex<Vec<ChatCompletionRequest>>>;

/// Transport that records every request and answers with a canned body.
pub struct MockTransport {
    reply: Result<String, String>,
    requests: RequestLog,
}

impl MockTransport {
    pub fn replying(body: impl Into<String>) -> Self {
        Self {
            reply: Ok(body.into()),
            requests: Arc::default(),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            reply: Err(reason.into()),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> RequestLog {
        self.requests.clone()
    }
}

#[async_trait]
impl CompletionTransport for MockTransport {
    async fn send(&self, request: &ChatCompletionRequest) -> Result<String, ChatError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(ChatError::Transport)
    }
}

/// Response body with one choice per `(role, content)` pair.
pub fn completion_body(choices: &[(&str, &str)]) -> String {
    let choices: Vec<serde_json::Value> = choices
        .iter()
        .enumerate()
        .map(|(index, (role, content))| {
            serde_json::json!({
                "index": index,
                "message": {"role": role, "content": content},
                "finish_reason": "stop"
            })
        })
        .collect();
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": choices
    })
    .to_string()
}

pub fn model_with(transport: MockTransport) -> ChatBotModel {
    ChatBotModel::new(CompletionAccessor::new(Box::new(transport), "gpt-3.5-turbo"))
}

/// View that keeps the rendered transcript in memory.
#[derive(Default)]
pub struct RecordingView {
    pub params: SamplingParameters,
    pub transcript: Vec<(Role, String)>,
    pub clears: usize,
}

impl View for RecordingView {
    fn temperature(&self) -> f64 {
        self.params.temperature
    }

    fn top_probability(&self) -> f64 {
        self.params.top_probability
    }

    fn presence_penalty(&self) -> f64 {
        self.params.presence_penalty
    }

    fn frequency_penalty(&self) -> f64 {
        self.params.frequency_penalty
    }

    fn render_message(&mut self, role: Role, content: &str) {
        self.transcript.push((role, content.to_string()));
    }

    fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.clears += 1;
    }
}

pub fn controller_with(
    transport: MockTransport,
) -> (ChatBotController<ChatBotModel, RecordingView>, RequestLog) {
    let log = transport.requests();
    let controller = ChatBotController::new(model_with(transport), RecordingView::default());
    (controller, log)
}
